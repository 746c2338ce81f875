use super::char_table::{CharTable, IrCharTable};
use super::cursor::Cursor;
use crate::common::location::TextLocation;
use crate::common::token::{Token, TokenKind};
use std::marker::PhantomData;

/// Pull-based lexer over a fixed text buffer. Tokens borrow their text from
/// the buffer, and can be handed back with `return_token` to be replayed.
pub struct Lexer<'src, T: CharTable = IrCharTable> {
    cursor: Cursor<'src>,
    // The character just before the cursor's position.
    current: u8,
    line: usize,
    line_start: usize,
    // Tokens handed back to the lexer, most recent last.
    returned: Vec<Token<'src>>,
    table: PhantomData<T>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer for the given text, using the default IR character
    /// classes.
    pub fn new(text: &'src str) -> Self {
        Self::with_char_table(text)
    }
}

impl<'src, T: CharTable> Lexer<'src, T> {
    /// Creates a lexer for the given text, classifying characters with `T`.
    pub fn with_char_table(text: &'src str) -> Self {
        let mut cursor = Cursor::new(text);
        let current = cursor.next_char();

        Lexer {
            cursor,
            current,
            line: 0,
            line_start: 0,
            returned: Vec::with_capacity(2),
            table: PhantomData,
        }
    }

    /// Starts over on a new text, dropping any returned tokens.
    pub fn reset(&mut self, text: &'src str) {
        self.cursor = Cursor::new(text);
        self.current = self.cursor.next_char();
        self.line = 0;
        self.line_start = 0;
        self.returned.clear();
    }

    pub fn source(&self) -> &'src str {
        self.cursor.text()
    }

    /// The line the scanner is currently on. Returned tokens don't affect it.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the next token, either one that was returned to the lexer or
    /// a freshly scanned one. Repeats `EndOfInput` once the text is exhausted.
    pub fn next_token(&mut self) -> Token<'src> {
        if let Some(token) = self.returned.pop() {
            return token;
        }

        let token = self.scan_token();

        #[cfg(feature = "trace-tokens")]
        tracing::trace!(%token, "scanned");

        token
    }

    /// Hands a token back; the next call to `next_token` yields it again.
    pub fn return_token(&mut self, token: Token<'src>) {
        self.returned.push(token);
    }

    /// Returns the next token without consuming it.
    pub fn peek_token(&mut self) -> Token<'src> {
        let token = self.next_token();
        self.return_token(token);
        token
    }

    /// Returns the token after the next one, without consuming either. If the
    /// next token is already `EndOfInput`, that's what you get.
    pub fn peek_token2(&mut self) -> Token<'src> {
        let token = self.next_token();

        if !token.is_eof() {
            let token2 = self.next_token();
            self.return_token(token2);
            self.return_token(token);
            return token2;
        }

        self.return_token(token);
        token
    }

    /// Returns the `position`-th upcoming token (starting at 1) without
    /// consuming anything. Stops early at `EndOfInput`.
    pub fn peek_token_at(&mut self, position: usize) -> Token<'src> {
        let mut skipped = vec![];
        let mut token = self.next_token();
        skipped.push(token);

        while !token.is_eof() && skipped.len() < position {
            token = self.next_token();
            skipped.push(token);
        }

        self.return_all(skipped);
        token
    }

    /// Feeds upcoming tokens to `action` until it returns false, `EndOfInput`
    /// is reached, or `max_lookup` tokens have been looked at. Nothing is
    /// consumed. Returns how many tokens `action` accepted.
    pub fn peek_token_while<F>(&mut self, mut action: F, max_lookup: usize) -> usize
    where
        F: FnMut(&Token<'src>) -> bool,
    {
        let mut seen = vec![];
        let mut accepted = 0;

        while seen.len() < max_lookup {
            let token = self.next_token();
            seen.push(token);

            if token.is_eof() || !action(&token) {
                break;
            }
            accepted += 1;
        }

        self.return_all(seen);
        accepted
    }

    /// Returns an iterator over all tokens before `EndOfInput`.
    pub fn iter(self) -> LexerIterator<'src, T> {
        LexerIterator { lexer: self }
    }

    // ---- helpers ----

    /// Returns tokens in reverse so they come back out in their original order.
    fn return_all(&mut self, tokens: Vec<Token<'src>>) {
        for token in tokens.into_iter().rev() {
            self.return_token(token);
        }
    }

    fn advance(&mut self) {
        self.current = self.cursor.next_char();
    }

    /// Offset of `current` in the text.
    fn offset(&self) -> usize {
        self.cursor.position() - 1
    }

    fn at_end(&self) -> bool {
        self.offset() >= self.cursor.len()
    }

    fn location(&self, offset: usize) -> TextLocation {
        TextLocation::new(offset, self.line, offset - self.line_start)
    }

    /// Builds a token for the `length` characters just consumed.
    fn make_token(&self, kind: TokenKind, length: usize) -> Token<'src> {
        let offset = self.offset() - length;
        Token::new(kind, self.location(offset), length)
    }

    fn make_data_token(&self, kind: TokenKind, start: usize, length: usize) -> Token<'src> {
        let data = self.cursor.extract(start, length);
        Token::with_data(kind, self.location(start), length, data)
    }

    // ---- scanners ----

    fn scan_token(&mut self) -> Token<'src> {
        loop {
            if self.at_end() {
                return self.make_token(TokenKind::EndOfInput, 0);
            }

            let start = self.offset();

            match self.current {
                // Whitespace
                b' ' | b'\t' | b'\r' | b'\x0B' | b'\x0C' => self.advance(),
                b'\n' => {
                    self.advance();
                    let token = self.make_token(TokenKind::LineEnd, 1);
                    self.line += 1;
                    self.line_start = self.offset();
                    return token;
                }
                b'0'..=b'9' => return self.scan_number(start),
                // '?' is also a punctuator, but as a sigil it wins.
                b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'@' | b'$' | b'?' => {
                    return self.scan_identifier(start)
                }
                b'"' => return self.scan_string(start, b'"'),
                ch => {
                    if let Some(kind) = TokenKind::from_punctuation(ch) {
                        self.advance();
                        return self.make_token(kind, 1);
                    }

                    return self.scan_unknown(start);
                }
            }
        }
    }

    fn scan_number(&mut self, start: usize) -> Token<'src> {
        let mut before_previous = self.current;
        let mut previous = self.current;
        self.advance(); // first digit

        while T::is_number_char(self.current) {
            before_previous = previous;
            previous = self.current;
            self.advance();
        }

        let is_sign = self.current == b'+' || self.current == b'-';
        if is_sign && (previous == b'e' || previous == b'E') {
            self.advance();
            while T::is_digit(self.current) {
                self.advance();
            }
        }

        if previous == b'.' {
            // A dot with no digits after it isn't part of the number:
            // un-read it so it's scanned as a Dot next time.
            self.cursor.go_back(2);
            self.advance();
        } else if (previous == b'x' || previous == b'X') && before_previous == b'.' {
            // Same for the ".x" of "123.x"; that x doesn't start a hex number.
            self.cursor.go_back(3);
            self.advance();
        }

        let length = self.offset() - start;
        self.make_data_token(TokenKind::Number, start, length)
    }

    /// Scans up to the closing delimiter. `start` is the position of the
    /// opening one; neither delimiter ends up in the token's data.
    fn scan_string(&mut self, start: usize, delimiter: u8) -> Token<'src> {
        self.advance(); // opening delimiter

        while self.current != delimiter {
            if self.at_end() || self.current == b'\n' {
                // Unterminated. Leave the cursor on the newline/end.
                return self.make_token(TokenKind::Invalid, 0);
            }
            self.advance();
        }

        self.advance(); // closing delimiter
        let length = self.offset() - start - 2;
        self.make_data_token(TokenKind::String, start + 1, length)
    }

    fn scan_identifier(&mut self, start: usize) -> Token<'src> {
        self.advance();

        while T::is_identifier_char(self.current) {
            self.advance();
        }

        let length = self.offset() - start;
        self.make_data_token(TokenKind::Identifier, start, length)
    }

    /// Consumes one character nothing else claims, multi-byte ones whole.
    fn scan_unknown(&mut self, start: usize) -> Token<'src> {
        let width = self
            .source()
            .get(start..)
            .and_then(|rest| rest.chars().next())
            .map_or(1, char::len_utf8);

        self.cursor.skip(width - 1);
        self.advance();
        self.make_token(TokenKind::Invalid, width)
    }
}

pub struct LexerIterator<'src, T: CharTable = IrCharTable> {
    lexer: Lexer<'src, T>,
}

impl<'src, T: CharTable> Iterator for LexerIterator<'src, T> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next_token();

        if token.is_eof() {
            return None;
        }

        Some(token)
    }
}
