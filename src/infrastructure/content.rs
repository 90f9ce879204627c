//! Content transport helpers
//!
//! Repository content APIs deliver file bodies base64-encoded; these
//! helpers decode them into text or straight into a parsed document.

use crate::domain::markdown::MarkdownDocument;
use crate::error::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Decode a base64 payload into UTF-8 text.
pub fn base64_to_string(encoded: &str) -> Result<String> {
    Ok(String::from_utf8(STANDARD.decode(encoded)?)?)
}

/// Encode text as base64.
pub fn string_to_base64(text: &str) -> String {
    STANDARD.encode(text)
}

/// Decode a base64 payload and parse it as a markdown document.
pub fn document_from_base64(encoded: &str) -> Result<MarkdownDocument> {
    Ok(MarkdownDocument::parse(&base64_to_string(encoded)?))
}
