//! Single-pass lexer for compiler IR and assembly listings.
//!
//! ```
//! use ir_lexer::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("t1 = ADD t2, 42\n");
//! assert_eq!(lexer.peek_token2().kind, TokenKind::Equal);
//! assert_eq!(lexer.next_token().data, Some("t1"));
//! ```

pub mod common;
pub mod lexer;

pub use common::location::TextLocation;
pub use common::token::{Token, TokenKind};
pub use lexer::{CharTable, HexCharTable, IrCharTable, Lexer, LexerIterator};
