mod char_table;
mod cursor;
mod lexer;

pub use char_table::{CharTable, HexCharTable, IrCharTable};
pub use cursor::{Cursor, EOF};
pub use lexer::{Lexer, LexerIterator};
