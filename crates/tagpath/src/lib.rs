//! tagpath - bracket-tag markup parsing with dotted-path attribute queries
//!
//! Parses a small markup language of bracket-delimited tags with quoted
//! attributes into an in-memory tree, then answers path queries like
//! `tag1.tag2~v1` against it.
//!
//! # Quick Start
//!
//! ```
//! use tagpath::{parse_str, resolve, Outcome};
//! # fn main() -> Result<(), tagpath::Error> {
//! let doc = parse_str(r#"<tag1 v1="123" v2="43.4"><tag2 name="x"></tag2></tag1>"#)?;
//! assert_eq!(resolve(&doc, "tag1~v2"), Outcome::Value("43.4".to_string()));
//! assert_eq!(resolve(&doc, "tag1.tag2~name"), Outcome::Value("x".to_string()));
//! assert_eq!(resolve(&doc, "tag1.missing~v"), Outcome::NotFound);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, ErrorKind, Result};

pub mod lexer;
pub use lexer::{tokenize, Cursor, Lexer, Token};

pub mod model;
pub use model::{Attribute, Document, Tag, TagId};

pub mod parser;
pub use parser::{Config, Parser};

pub mod query;
pub use query::{resolve, Outcome};

/// Parse markup into a tag tree with the default tolerant configuration
pub fn parse_str(s: &str) -> Result<Document> {
    Parser::new(&tokenize(s)).build()
}

/// Parse markup with a custom tree-builder configuration
pub fn parse_str_with_config(s: &str, config: Config) -> Result<Document> {
    Parser::with_config(&tokenize(s), config).build()
}
