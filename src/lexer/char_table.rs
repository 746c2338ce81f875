/// Character classes the lexer asks about while scanning numbers and
/// identifiers. All functions work on single UTF-8 code units and must be
/// pure.
///
/// `EOF` must not be a number or identifier character, and a table that
/// accepts non-ASCII bytes as identifier characters must accept all of them,
/// so identifiers never end in the middle of an encoded character.
pub trait CharTable {
    fn is_digit(ch: u8) -> bool {
        ch.is_ascii_digit()
    }

    fn is_number_char(ch: u8) -> bool;

    fn is_identifier_char(ch: u8) -> bool;
}

/// Default classes for compiler IR listings. Identifiers may carry the `$`,
/// `@` and `?` sigils anywhere, so MSVC decorated names such as
/// `?foo@@YAXXZ` stay in one piece.
#[derive(Debug, Clone, Copy, Default)]
pub struct IrCharTable;

impl CharTable for IrCharTable {
    fn is_number_char(ch: u8) -> bool {
        matches!(ch, b'0'..=b'9' | b'.' | b'e' | b'E')
    }

    fn is_identifier_char(ch: u8) -> bool {
        ch.is_ascii_alphanumeric() || matches!(ch, b'_' | b'$' | b'@' | b'?')
    }
}

/// Like `IrCharTable`, but numbers may be written in hex (`0x1F`, `0FF`), as
/// in assembly listings.
#[derive(Debug, Clone, Copy, Default)]
pub struct HexCharTable;

impl CharTable for HexCharTable {
    fn is_number_char(ch: u8) -> bool {
        ch.is_ascii_hexdigit() || matches!(ch, b'.' | b'x' | b'X')
    }

    fn is_identifier_char(ch: u8) -> bool {
        IrCharTable::is_identifier_char(ch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::cursor::EOF;

    #[test]
    fn ir_numbers() {
        for ch in b"0123456789.eE".iter() {
            assert!(IrCharTable::is_number_char(*ch), "{}", *ch as char);
        }
        for ch in b"xXaf+-_ ".iter() {
            assert!(!IrCharTable::is_number_char(*ch), "{}", *ch as char);
        }
        assert!(IrCharTable::is_digit(b'7'));
        assert!(!IrCharTable::is_digit(b'e'));
    }

    #[test]
    fn hex_numbers() {
        for ch in b"0123456789abcdefABCDEF.xX".iter() {
            assert!(HexCharTable::is_number_char(*ch), "{}", *ch as char);
        }
        for ch in b"gGhz+-_".iter() {
            assert!(!HexCharTable::is_number_char(*ch), "{}", *ch as char);
        }
        assert!(!HexCharTable::is_digit(b'a'));
    }

    #[test]
    fn identifiers() {
        for ch in b"azAZ09_$@?".iter() {
            assert!(IrCharTable::is_identifier_char(*ch), "{}", *ch as char);
            assert!(HexCharTable::is_identifier_char(*ch), "{}", *ch as char);
        }
        for ch in b".,;:()[]{}#\"' \t\n".iter() {
            assert!(!IrCharTable::is_identifier_char(*ch), "{}", *ch as char);
        }
    }

    #[test]
    fn eof_is_never_part_of_a_lexeme() {
        assert!(!IrCharTable::is_number_char(EOF));
        assert!(!IrCharTable::is_identifier_char(EOF));
        assert!(!HexCharTable::is_number_char(EOF));
        assert!(!HexCharTable::is_identifier_char(EOF));
        assert!(!IrCharTable::is_digit(EOF));
    }
}
