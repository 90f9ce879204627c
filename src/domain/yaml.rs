//! YAML payload codec for code block nodes
//!
//! Callers only invoke [`read_yaml`] on blocks they already know to be
//! parseable; a failure here propagates instead of being absorbed.
//! `serde_yaml`'s emitter never soft-wraps scalars, so long file paths and
//! URLs written back by [`write_yaml`] stay on one line.

use crate::domain::markdown::{MarkdownDocument, NodeId};
use crate::error::Result;
use serde_yaml::Value;

/// Decode a code block's literal as YAML.
pub fn read_yaml(doc: &MarkdownDocument, block: NodeId) -> Result<Value> {
    let literal = doc.literal(block).unwrap_or_default();
    Ok(serde_yaml::from_str(literal)?)
}

/// Re-encode `value` and assign it into the block's literal in place.
/// Node identity and tree position are untouched.
pub fn write_yaml(doc: &mut MarkdownDocument, block: NodeId, value: &Value) -> Result<()> {
    let literal = serde_yaml::to_string(value)?;
    doc.set_code_literal(block, literal)
}
