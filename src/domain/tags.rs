//! Tag settings extraction
//!
//! A readme defines one configuration variant per tag, as a fenced YAML
//! block whose fence annotation carries a `$(tag) == '<name>'` marker. The
//! block's payload holds the settings, most importantly `input-file`.

use crate::domain::markdown::MarkdownDocument;
use indexmap::IndexMap;
use regex::Regex;
use serde_yaml::Value;
use std::sync::OnceLock;

/// Matches the tag-conditional marker: `$(tag)` followed by the first
/// quoted token. A token opened by one quote character is closed only by
/// the same character; unterminated quotes never match.
fn tag_marker_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r#"\$\(tag\)[^'"]*(?:'([^']*)'|"([^"]*)")"#).unwrap())
}

/// Tag name carried by a fence annotation, if any.
pub fn tag_name_from_annotation(annotation: &str) -> Option<String> {
    let captures = tag_marker_regex().captures(annotation)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str().to_string())
}

/// Map each tag name to its parsed settings, in document order.
///
/// A block qualifies only when its literal and annotation are both
/// non-empty, the literal parses as YAML (failures are skipped, never
/// reported: free-form documents legitimately carry non-YAML blocks), the
/// annotation carries a tag marker, and the parsed value is a mapping with
/// an `input-file` key. Duplicate tags: last write wins.
pub fn tag_settings(doc: &MarkdownDocument) -> IndexMap<String, Value> {
    let mut settings = IndexMap::new();
    for block in doc.code_blocks() {
        let Some(literal) = doc.literal(block) else {
            continue;
        };
        let Some(annotation) = doc.info(block) else {
            continue;
        };
        if literal.is_empty() || annotation.is_empty() {
            continue;
        }
        let Ok(value) = serde_yaml::from_str::<Value>(literal) else {
            continue;
        };
        let Some(tag) = tag_name_from_annotation(annotation) else {
            continue;
        };
        if value.get("input-file").is_none() {
            continue;
        }
        settings.insert(tag, value);
    }
    settings
}

/// Normalized `input-file` list: a bare string becomes a one-element list,
/// a sequence passes through with non-string entries dropped.
pub fn input_files(settings: &Value) -> Vec<String> {
    match settings.get("input-file") {
        Some(Value::String(file)) => vec![file.clone()],
        Some(Value::Sequence(files)) => files
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}

/// Every input file of every tag, flattened in document order.
///
/// The settings map is rebuilt on each call, so the iterator always
/// reflects the current tree state.
pub fn all_input_files(doc: &MarkdownDocument) -> impl Iterator<Item = String> {
    tag_settings(doc)
        .into_values()
        .flat_map(|settings| input_files(&settings))
}

/// Input files of one tag; `None` when the tag does not exist, which is
/// distinct from a tag with an empty file list.
pub fn input_files_for_tag(doc: &MarkdownDocument, tag: &str) -> Option<Vec<String>> {
    tag_settings(doc).get(tag).map(input_files)
}
