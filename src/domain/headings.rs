//! Heading to code block index
//!
//! Every fenced or indented code block is keyed by the text of the nearest
//! heading above it. Scratch blocks with no governing heading are simply
//! left out.

use crate::domain::markdown::{MarkdownDocument, NodeId, NodeKind};
use indexmap::IndexMap;

/// Map each code block to the label of its governing heading.
///
/// Blocks are visited in document order; when two headings carry the same
/// label the later block wins. Blocks without a heading, or under a heading
/// with no text, are skipped.
pub fn code_block_index(doc: &MarkdownDocument) -> IndexMap<String, NodeId> {
    let mut index = IndexMap::new();
    for block in doc.code_blocks() {
        let Some(heading) = governing_heading(doc, block) else {
            continue;
        };
        let Some(label) = heading_label(doc, heading) else {
            continue;
        };
        index.insert(label, block);
    }
    index
}

/// Nearest heading at or before `start`: walk previous siblings, then climb
/// to the parent and keep walking, until a heading or the root.
fn governing_heading(doc: &MarkdownDocument, start: NodeId) -> Option<NodeId> {
    let mut current = Some(start);
    while let Some(id) = current {
        if matches!(doc.kind(id), NodeKind::Heading { .. }) {
            return Some(id);
        }
        current = doc.prev_sibling(id).or_else(|| doc.parent(id));
    }
    None
}

/// Label of a heading: the literal of its first text descendant.
/// Headings without text (or with an empty literal) have no label.
pub fn heading_label(doc: &MarkdownDocument, heading: NodeId) -> Option<String> {
    let text = first_text_descendant(doc, heading)?;
    let literal = doc.literal(text)?;
    if literal.is_empty() {
        None
    } else {
        Some(literal.to_string())
    }
}

fn first_text_descendant(doc: &MarkdownDocument, id: NodeId) -> Option<NodeId> {
    for &child in doc.children(id) {
        if matches!(doc.kind(child), NodeKind::Text) {
            return Some(child);
        }
        if let Some(found) = first_text_descendant(doc, child) {
            return Some(found);
        }
    }
    None
}
