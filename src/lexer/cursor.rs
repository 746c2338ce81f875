/// Returned by the cursor for every read at or past the end of the text.
pub const EOF: u8 = b'\0';

/// Byte-wise reader over the source text. Unlike an iterator it can be
/// rewound, which the number scanner relies on.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    text: &'src str,
    position: usize,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor at the start of the given text
    pub fn new(text: &'src str) -> Self {
        Cursor { text, position: 0 }
    }

    /// Returns the position of the next character to be read. This may be
    /// past the end of the text after over-reads.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn text(&self) -> &'src str {
        self.text
    }

    /// Consumes the character at the position. Reads past the end return
    /// `EOF` and still advance, so they keep returning `EOF`.
    pub fn next_char(&mut self) -> u8 {
        let ch = self.peek_char();
        self.position += 1;
        ch
    }

    /// Looks at the character at the position without consuming it.
    pub fn peek_char(&self) -> u8 {
        match self.text.as_bytes().get(self.position) {
            Some(&ch) => ch,
            None => EOF,
        }
    }

    /// Advances by `count` and returns the character now under the cursor.
    pub fn skip(&mut self, count: usize) -> u8 {
        self.position += count;
        self.peek_char()
    }

    /// Rewinds by `count` and returns the character now under the cursor.
    /// Rewinding past the start is a bug in the caller.
    pub fn go_back(&mut self, count: usize) -> u8 {
        debug_assert!(count <= self.position, "rewound past start of text");
        self.position = self.position.saturating_sub(count);
        self.peek_char()
    }

    /// Borrows `length` bytes of the text starting at `position`.
    ///
    /// Panics if the range is out of bounds or splits a UTF-8 sequence.
    pub fn extract(&self, position: usize, length: usize) -> &'src str {
        &self.text[position..position + length]
    }
}
