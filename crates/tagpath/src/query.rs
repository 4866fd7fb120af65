//! Path query resolver
//!
//! Queries are dotted paths over the tag tree. Every segment names a
//! child tag to descend into; a segment of the form `tag~attr` descends
//! into `tag` and returns the value of its attribute `attr`. Resolution
//! stops at the first `~` segment even when it is not the last one,
//! matching the observed behavior of the original harness.

use crate::model::Document;

/// Result of resolving one query against a document
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// An attribute lookup succeeded
    Value(String),
    /// A descent or attribute lookup step failed
    NotFound,
    /// The path had no `~` segment, so there is nothing to report
    NoValue,
}

impl Outcome {
    /// Render as an output line: the value, the `Not Found!` sentinel,
    /// or `None` for a query that produces no output.
    pub fn into_line(self) -> Option<String> {
        match self {
            Self::Value(value) => Some(value),
            Self::NotFound => Some("Not Found!".to_string()),
            Self::NoValue => None,
        }
    }

    /// Check if the query failed to resolve
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Resolve a dotted/tilde path query against a parsed document.
///
/// Child and attribute lookups are first-match-wins under duplicate
/// names. Resolution is read-only and idempotent.
pub fn resolve(doc: &Document, query: &str) -> Outcome {
    let mut current = doc.root();

    for segment in query.split('.') {
        if let Some((tag_part, attr_part)) = segment.split_once('~') {
            let Some(child) = doc.child_by_name(current, tag_part) else {
                return Outcome::NotFound;
            };
            return match doc.attribute_value(child, attr_part) {
                Some(value) => Outcome::Value(value.to_string()),
                None => Outcome::NotFound,
            };
        }

        match doc.child_by_name(current, segment) {
            Some(child) => current = child,
            None => return Outcome::NotFound,
        }
    }

    Outcome::NoValue
}
