use super::location::TextLocation;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::fmt;
use std::ops::Range;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u16)]
pub enum TokenKind {
    // Tokens that carry text
    Identifier,
    Number,
    String,
    Char,

    // Single-character operators
    Plus,
    Minus,
    Star,
    Tilde,
    Equal,
    Exclamation,
    Percent,
    And,
    Or,
    Xor,
    Less,
    Greater,
    Hash,
    Div,

    // Punctuation
    Colon,
    SemiColon,
    Comma,
    Apostrophe,
    Dot,
    Question,
    OpenSquare,
    CloseSquare,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Structure
    LineEnd,
    EndOfInput,
    Invalid,

    // Anything numbered above this belongs to a consumer's keyword table.
    Keyword,
}

/// Single-character kinds and the characters that produce them.
const PUNCTUATION: [(u8, TokenKind); 26] = [
    (b'+', TokenKind::Plus),
    (b'-', TokenKind::Minus),
    (b'*', TokenKind::Star),
    (b'~', TokenKind::Tilde),
    (b'=', TokenKind::Equal),
    (b'!', TokenKind::Exclamation),
    (b'%', TokenKind::Percent),
    (b'&', TokenKind::And),
    (b'|', TokenKind::Or),
    (b'^', TokenKind::Xor),
    (b'<', TokenKind::Less),
    (b'>', TokenKind::Greater),
    (b'#', TokenKind::Hash),
    (b'/', TokenKind::Div),
    (b':', TokenKind::Colon),
    (b';', TokenKind::SemiColon),
    (b',', TokenKind::Comma),
    (b'\'', TokenKind::Apostrophe),
    (b'.', TokenKind::Dot),
    (b'?', TokenKind::Question),
    (b'[', TokenKind::OpenSquare),
    (b']', TokenKind::CloseSquare),
    (b'(', TokenKind::OpenParen),
    (b')', TokenKind::CloseParen),
    (b'{', TokenKind::OpenCurly),
    (b'}', TokenKind::CloseCurly),
];

impl TokenKind {
    /// Looks up the kind for a single punctuation character.
    pub fn from_punctuation(ch: u8) -> Option<TokenKind> {
        PUNCTUATION
            .iter()
            .find(|(symbol, _)| *symbol == ch)
            .map(|(_, kind)| *kind)
    }

    /// The character that produces this kind, if it's a single-character kind.
    pub fn symbol(&self) -> Option<char> {
        PUNCTUATION
            .iter()
            .find(|(_, kind)| kind == self)
            .map(|(symbol, _)| *symbol as char)
    }

    /// Whether tokens of this kind come with a view of their text.
    pub fn carries_data(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::String
        )
    }

    /// Whether a raw kind value is past the `Keyword` marker, i.e. reserved
    /// for keywords layered on top of the base lexer.
    pub fn is_keyword_value(raw: u16) -> bool {
        raw > u16::from(TokenKind::Keyword)
    }
}

/// A lexeme produced by the lexer. `data` points back into the lexed text and
/// is only present for identifiers, numbers and strings.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub location: TextLocation,
    pub length: usize,
    pub data: Option<&'src str>,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, location: TextLocation, length: usize) -> Self {
        Token {
            kind,
            location,
            length,
            data: None,
        }
    }

    pub fn with_data(
        kind: TokenKind,
        location: TextLocation,
        length: usize,
        data: &'src str,
    ) -> Self {
        Token {
            kind,
            location,
            length,
            data: Some(data),
        }
    }

    /// The token's text, or the empty string for tokens without data.
    pub fn data(&self) -> &'src str {
        self.data.unwrap_or("")
    }

    pub fn end_offset(&self) -> usize {
        self.location.offset + self.length
    }

    pub fn range(&self) -> Range<usize> {
        self.location.offset..self.end_offset()
    }

    pub fn is_kind(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    pub fn is_line_end(&self) -> bool {
        self.kind == TokenKind::LineEnd
    }

    pub fn is_invalid(&self) -> bool {
        self.kind == TokenKind::Invalid
    }

    pub fn is_identifier(&self) -> bool {
        self.kind == TokenKind::Identifier
    }

    pub fn is_number(&self) -> bool {
        self.kind == TokenKind::Number
    }

    pub fn is_string(&self) -> bool {
        self.kind == TokenKind::String
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{:?} {}..{} @{}",
            self.kind,
            self.location.offset,
            self.end_offset(),
            self.location
        )?;

        if let Some(data) = self.data {
            write!(f, " \"{}\"", data)?;
        }

        Ok(())
    }
}
