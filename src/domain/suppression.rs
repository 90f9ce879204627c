//! Suppression directives
//!
//! A readme may carry a `Suppression` section instructing downstream
//! validation tooling to ignore a rule at specific document locations. The
//! section's code block holds a mapping with a `directive` list of items.

use serde::{Deserialize, Serialize};

/// A field that accepts either a bare string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StringOrSeq {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for StringOrSeq {
    fn from(value: &str) -> Self {
        StringOrSeq::One(value.to_string())
    }
}

impl From<Vec<String>> for StringOrSeq {
    fn from(values: Vec<String>) -> Self {
        StringOrSeq::Many(values)
    }
}

/// One suppression directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionItem {
    /// Rule being suppressed.
    pub suppress: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Document locations the suppression applies to.
    pub r#where: StringOrSeq,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<StringOrSeq>,
    #[serde(
        rename = "text-matches",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub text_matches: Option<String>,
}

/// Payload of the code block under the `Suppression` heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suppression {
    pub directive: Vec<SuppressionItem>,
}
