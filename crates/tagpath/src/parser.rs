//! Tree builder: token stream to tag tree

use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::lexer::Token;
use crate::model::Document;

/// Tree builder configuration
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Reject close tags that do not match the open tag, close tags at
    /// the root, and documents left open at end of stream. The default
    /// preserves the silent tolerance of the tolerant mode: nothing is
    /// validated and the tree is whatever the tokens produced.
    pub strict: bool,
    /// Maximum nesting depth. Enforced in both modes; this is a
    /// resource guard, not markup validation.
    pub max_depth: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 128,
        }
    }
}

/// Builder that folds a token stream into a [`Document`].
///
/// Keeps a single "current tag" handle: opens descend, closes ascend
/// via the parent back-reference, attributes attach to the current tag.
#[derive(Clone, Debug)]
pub struct Parser<'a> {
    tokens: &'a [Token],
    config: Config,
}

impl<'a> Parser<'a> {
    /// Create a tree builder with default (tolerant) configuration
    pub fn new(tokens: &'a [Token]) -> Self {
        Self::with_config(tokens, Config::default())
    }

    /// Create a tree builder with explicit configuration
    pub const fn with_config(tokens: &'a [Token], config: Config) -> Self {
        Self { tokens, config }
    }

    /// Build the tag tree, returning the document rooted at the
    /// synthetic root regardless of where the walk ended.
    pub fn build(self) -> Result<Document> {
        let mut doc = Document::new();
        let mut current = doc.root();
        let mut depth: u16 = 0;

        for (index, token) in self.tokens.iter().enumerate() {
            match token {
                Token::TagOpen { name } => {
                    depth = depth.saturating_add(1);
                    if depth > self.config.max_depth {
                        return Err(Error::at(
                            ErrorKind::MaxDepthExceeded {
                                max: self.config.max_depth,
                            },
                            index,
                        ));
                    }
                    current = doc.add_child(current, name.clone());
                }
                Token::TagClose { name } => match doc.parent(current) {
                    Some(parent) => {
                        if self.config.strict {
                            let open_name = doc.tag(current).map_or("", |t| t.name());
                            if open_name != name {
                                return Err(Error::at(
                                    ErrorKind::MismatchedCloseTag {
                                        expected: open_name.to_string(),
                                        found: name.clone(),
                                    },
                                    index,
                                ));
                            }
                        }
                        current = parent;
                        depth = depth.saturating_sub(1);
                    }
                    // close with nothing open: stay clamped at the root
                    None => {
                        if self.config.strict {
                            return Err(Error::at(ErrorKind::UnbalancedDocument, index));
                        }
                    }
                },
                Token::Attribute { name, value } => {
                    doc.add_attribute(current, name.clone(), value.clone());
                }
            }
        }

        if self.config.strict && current != doc.root() {
            return Err(Error::new(ErrorKind::UnbalancedDocument));
        }

        debug!(tags = doc.len(), "built tag tree");
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn test_build_simple_tree() -> Result<()> {
        let tokens = tokenize("<tag1 v1=\"123\"><tag2></tag2></tag1>");
        let doc = Parser::new(&tokens).build()?;

        let tag1 = doc.child_by_name(doc.root(), "tag1");
        assert!(tag1.is_some());
        let tag1 = tag1.unwrap_or(doc.root());
        assert_eq!(doc.attribute_value(tag1, "v1"), Some("123"));
        assert!(doc.child_by_name(tag1, "tag2").is_some());
        Ok(())
    }

    #[test]
    fn test_build_empty_document() -> Result<()> {
        let doc = Parser::new(&[]).build()?;
        assert!(doc.is_empty());
        Ok(())
    }

    #[test]
    fn test_tolerant_mode_ignores_mismatched_close() -> Result<()> {
        let tokens = tokenize("<a><b></wrong></a>");
        let doc = Parser::new(&tokens).build()?;

        // shape survives: b still sits under a
        let a = doc.child_by_name(doc.root(), "a");
        assert!(a.is_some());
        assert!(doc.child_by_name(a.unwrap_or(doc.root()), "b").is_some());
        Ok(())
    }

    #[test]
    fn test_tolerant_mode_clamps_close_at_root() -> Result<()> {
        let tokens = tokenize("</stray><a></a>");
        let doc = Parser::new(&tokens).build()?;
        assert!(doc.child_by_name(doc.root(), "a").is_some());
        Ok(())
    }

    #[test]
    fn test_strict_mode_rejects_mismatched_close() {
        let tokens = tokenize("<a></b>");
        let config = Config {
            strict: true,
            ..Config::default()
        };
        let result = Parser::with_config(&tokens, config).build();
        assert!(matches!(
            result,
            Err(err) if matches!(err.kind(), ErrorKind::MismatchedCloseTag { .. })
        ));
    }

    #[test]
    fn test_strict_mode_rejects_close_at_root() {
        let tokens = tokenize("</a>");
        let config = Config {
            strict: true,
            ..Config::default()
        };
        let result = Parser::with_config(&tokens, config).build();
        assert!(matches!(
            result,
            Err(err) if *err.kind() == ErrorKind::UnbalancedDocument
        ));
    }

    #[test]
    fn test_strict_mode_rejects_unclosed_document() {
        let tokens = tokenize("<a><b></b>");
        let config = Config {
            strict: true,
            ..Config::default()
        };
        let result = Parser::with_config(&tokens, config).build();
        assert!(matches!(
            result,
            Err(err) if *err.kind() == ErrorKind::UnbalancedDocument
        ));
    }

    #[test]
    fn test_max_depth_guard() {
        let mut markup = String::new();
        for _ in 0..5 {
            markup.push_str("<a>");
        }
        let tokens = tokenize(&markup);
        let config = Config {
            strict: false,
            max_depth: 3,
        };
        let result = Parser::with_config(&tokens, config).build();
        assert!(matches!(
            result,
            Err(err) if *err.kind() == (ErrorKind::MaxDepthExceeded { max: 3 })
        ));
    }

    #[test]
    fn test_duplicate_siblings_preserve_document_order() -> Result<()> {
        let tokens = tokenize("<x n=\"1\"></x><x n=\"2\"></x>");
        let doc = Parser::new(&tokens).build()?;

        let first = doc.child_by_name(doc.root(), "x");
        assert!(first.is_some());
        assert_eq!(
            doc.attribute_value(first.unwrap_or(doc.root()), "n"),
            Some("1")
        );
        assert_eq!(doc.len(), 2);
        Ok(())
    }
}
