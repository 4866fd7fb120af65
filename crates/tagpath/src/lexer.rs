//! Lexer module: cursor, token model, and the markup tokenizer

pub mod cursor;
pub mod markup;
pub mod token;

pub use cursor::Cursor;
pub use markup::{tokenize, Lexer};
pub use token::Token;
