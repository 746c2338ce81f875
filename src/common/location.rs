use std::fmt;

/// Position of a character in the text being lexed. Note that:
/// a) offset, line and column are all 0-indexed, in UTF-8 code units
/// b) the derived Ord traits order by offset first, which is what you expect
///    for locations taken from the same text
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub struct TextLocation {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl TextLocation {
    pub fn new(offset: usize, line: usize, column: usize) -> Self {
        TextLocation {
            offset,
            line,
            column,
        }
    }

    /// Recomputes the location of `offset` by walking the text from the
    /// start. The lexer never does this; it's for diagnostics and for
    /// checking the lexer's own bookkeeping.
    pub fn from_offset(source: &str, offset: usize) -> Option<Self> {
        let prefix = source.as_bytes().get(..offset)?;
        let line_start = match prefix.iter().rposition(|&b| b == b'\n') {
            Some(idx) => idx + 1,
            None => 0,
        };
        let line = prefix.iter().filter(|&&b| b == b'\n').count();

        Some(TextLocation {
            offset,
            line,
            column: offset - line_start,
        })
    }
}

impl fmt::Display for TextLocation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::more_asserts::*;

    const SAMPLE_TEXT: &str = "r1 = MOV 42\nr2 = ADD r1, 1\n  RET r2";

    #[test]
    fn line_and_column() {
        let a = TextLocation::from_offset(SAMPLE_TEXT, 0).unwrap();
        assert_eq!(a, TextLocation::new(0, 0, 0));

        let a = TextLocation::from_offset(SAMPLE_TEXT, 5).unwrap();
        assert_eq!(a, TextLocation::new(5, 0, 5));

        // The newline itself still belongs to the first line.
        let a = TextLocation::from_offset(SAMPLE_TEXT, 11).unwrap();
        assert_eq!(a, TextLocation::new(11, 0, 11));

        let a = TextLocation::from_offset(SAMPLE_TEXT, 12).unwrap();
        assert_eq!(a, TextLocation::new(12, 1, 0));

        let a = TextLocation::from_offset(SAMPLE_TEXT, 29).unwrap();
        assert_eq!(a, TextLocation::new(29, 2, 2));
    }

    #[test]
    fn end_of_text_and_beyond() {
        let len = SAMPLE_TEXT.len();
        let a = TextLocation::from_offset(SAMPLE_TEXT, len).unwrap();
        assert_eq!(a, TextLocation::new(len, 2, len - 27));

        assert_eq!(TextLocation::from_offset(SAMPLE_TEXT, len + 1), None);
    }

    #[test]
    fn location_ordering() {
        let a = TextLocation::new(12, 1, 0);
        let b = TextLocation::new(14, 1, 2);
        let c = TextLocation::new(27, 2, 0);
        assert_le!(a, a);
        assert_ge!(a, a);
        assert_lt!(a, b);
        assert_lt!(b, c);
    }

    #[test]
    fn display() {
        assert_eq!(TextLocation::new(14, 1, 2).to_string(), "1:2");
    }
}
