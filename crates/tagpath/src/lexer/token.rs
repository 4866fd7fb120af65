//! Token types for the markup lexer

/// A lexical unit of the markup language, in document order.
///
/// Close tags carry the name that appeared in the source, but nothing
/// validates it against the matching open tag at this stage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Token {
    /// `<name ...>`
    TagOpen { name: String },
    /// `name="value"` inside a tag header
    Attribute { name: String, value: String },
    /// `</name>`
    TagClose { name: String },
}

impl Token {
    /// Get the token's name (tag or attribute name)
    pub fn name(&self) -> &str {
        match self {
            Self::TagOpen { name } | Self::Attribute { name, .. } | Self::TagClose { name } => {
                name
            }
        }
    }

    /// Check if this token opens a tag
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::TagOpen { .. })
    }

    /// Check if this token closes a tag
    pub const fn is_close(&self) -> bool {
        matches!(self, Self::TagClose { .. })
    }
}
