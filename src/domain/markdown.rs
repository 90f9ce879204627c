//! Arena-based markdown document
//!
//! Parses a readme into a tree of nodes addressed by index, keeping the
//! original text alongside. Rendering emits the original bytes untouched
//! except for the payload spans of code blocks that were explicitly
//! rewritten, so an unmodified document round-trips exactly.

use crate::error::{Result, TagmarkError};
use pulldown_cmark::{CodeBlockKind, Event, Parser as MdParser, Tag};
use std::ops::Range;

/// Index of a node in a [`MarkdownDocument`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Node type, mirroring the block/inline structure a readme needs:
/// headings, code blocks and the text inside headings. Everything else is
/// `Other` and only matters for navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Document,
    Heading {
        level: u8,
    },
    Paragraph,
    CodeBlock {
        /// Fence info string ("yaml $(tag) == 'x'"); empty for indented blocks.
        info: String,
        /// Byte range of the payload in the source; fenced blocks only.
        payload: Option<Range<usize>>,
    },
    Text,
    /// Inline code span; distinct from `Text` so heading labels skip it.
    Code,
    Other,
}

#[derive(Debug)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    prev_sibling: Option<NodeId>,
    children: Vec<NodeId>,
    literal: Option<String>,
    /// Set when the literal no longer matches the source payload.
    dirty: bool,
}

/// A parsed markdown document plus its original text.
#[derive(Debug)]
pub struct MarkdownDocument {
    source: String,
    nodes: Vec<NodeData>,
}

impl MarkdownDocument {
    /// Parse markdown text into a document tree.
    pub fn parse(source: &str) -> Self {
        let mut doc = MarkdownDocument {
            source: source.to_string(),
            nodes: Vec::new(),
        };
        let root = doc.push_node(NodeKind::Document, None);
        let mut stack = vec![root];

        for (event, range) in MdParser::new(source).into_offset_iter() {
            let top = *stack.last().expect("document root never popped");
            match event {
                Event::Start(tag) => {
                    let mut literal = None;
                    let kind = match tag {
                        Tag::Heading { level, .. } => NodeKind::Heading { level: level as u8 },
                        Tag::Paragraph => NodeKind::Paragraph,
                        Tag::CodeBlock(CodeBlockKind::Fenced(info)) => {
                            let payload = fenced_payload_range(source, &range);
                            // the payload span is the exact literal
                            literal = Some(source[payload.clone()].to_string());
                            NodeKind::CodeBlock {
                                info: info.to_string(),
                                payload: Some(payload),
                            }
                        }
                        Tag::CodeBlock(CodeBlockKind::Indented) => NodeKind::CodeBlock {
                            info: String::new(),
                            payload: None,
                        },
                        _ => NodeKind::Other,
                    };
                    let id = doc.push_node(kind, Some(top));
                    doc.nodes[id.0].literal = literal;
                    stack.push(id);
                }
                Event::End(_) => {
                    stack.pop();
                }
                Event::Text(text) => match doc.nodes[top.0].kind {
                    NodeKind::CodeBlock { payload: Some(_), .. } => {
                        // fenced blocks already took their raw payload span
                    }
                    NodeKind::CodeBlock { payload: None, .. } => {
                        // indented blocks have no payload span; accumulate
                        // their dedented text so read queries still work
                        doc.nodes[top.0]
                            .literal
                            .get_or_insert_with(String::new)
                            .push_str(&text);
                    }
                    _ => {
                        let id = doc.push_node(NodeKind::Text, Some(top));
                        doc.nodes[id.0].literal = Some(text.to_string());
                    }
                },
                Event::Code(text) => {
                    let id = doc.push_node(NodeKind::Code, Some(top));
                    doc.nodes[id.0].literal = Some(text.to_string());
                }
                _ => {
                    // breaks, rules, html and the rest only matter as siblings
                    doc.push_node(NodeKind::Other, Some(top));
                }
            }
        }

        doc
    }

    fn push_node(&mut self, kind: NodeKind, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        let prev_sibling = parent.and_then(|p| self.nodes[p.0].children.last().copied());
        self.nodes.push(NodeData {
            kind,
            parent,
            prev_sibling,
            children: Vec::new(),
            literal: None,
            dirty: false,
        });
        if let Some(p) = parent {
            self.nodes[p.0].children.push(id);
        }
        id
    }

    /// The root document node.
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// The original text this document was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.0].kind
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    pub fn prev_sibling(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].prev_sibling
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Literal text payload (text, inline code and code block nodes).
    pub fn literal(&self, id: NodeId) -> Option<&str> {
        self.nodes[id.0].literal.as_deref()
    }

    /// Fence info string; `Some` only for code blocks.
    pub fn info(&self, id: NodeId) -> Option<&str> {
        match &self.nodes[id.0].kind {
            NodeKind::CodeBlock { info, .. } => Some(info),
            _ => None,
        }
    }

    /// Depth-first walk in document order.
    ///
    /// Nodes are allocated in pre-order during parsing, so arena order is
    /// document order.
    pub fn walk(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.nodes.len()).map(NodeId)
    }

    /// Every code block in document order.
    pub fn code_blocks(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.walk()
            .filter(|&id| matches!(self.kind(id), NodeKind::CodeBlock { .. }))
    }

    /// Replace a fenced code block's payload in place. The node keeps its
    /// identity and tree position; only [`render`](Self::render) output
    /// changes. Indented blocks have no fence to splice into and are
    /// rejected.
    pub fn set_code_literal(&mut self, id: NodeId, text: impl Into<String>) -> Result<()> {
        if !matches!(
            self.nodes[id.0].kind,
            NodeKind::CodeBlock {
                payload: Some(_),
                ..
            }
        ) {
            return Err(TagmarkError::NotFenced);
        }
        self.nodes[id.0].literal = Some(text.into());
        self.nodes[id.0].dirty = true;
        Ok(())
    }

    /// Serialize back to text. Unmodified content is emitted byte-for-byte
    /// from the original source; rewritten code block payloads are spliced
    /// into their fence spans.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for node in &self.nodes {
            if !node.dirty {
                continue;
            }
            if let NodeKind::CodeBlock {
                payload: Some(payload),
                ..
            } = &node.kind
            {
                out.push_str(&self.source[cursor..payload.start]);
                if let Some(literal) = &node.literal {
                    out.push_str(literal);
                }
                cursor = payload.end;
            }
        }
        out.push_str(&self.source[cursor..]);
        out
    }
}

/// Byte range of a fenced block's payload: everything after the opening
/// fence line, up to the start of the closing fence line (or the end of the
/// span when the fence is unclosed at EOF).
fn fenced_payload_range(source: &str, span: &Range<usize>) -> Range<usize> {
    let text = &source[span.clone()];
    let Some(newline) = text.find('\n') else {
        // opening fence with no line break; nothing inside
        return span.end..span.end;
    };
    let body_start = span.start + newline + 1;
    let body = &text[newline + 1..];

    let opener = text.trim_start();
    let fence_char = opener.chars().next().unwrap_or('`');
    let fence_len = opener.chars().take_while(|&c| c == fence_char).count();

    // the closing fence, when present, is the final line of the span
    let trimmed = body.trim_end_matches(['\n', '\r']);
    let last_line_start = trimmed.rfind('\n').map_or(0, |i| i + 1);
    let last_line = trimmed[last_line_start..].trim_start();
    let closes = last_line.chars().take_while(|&c| c == fence_char).count() >= fence_len
        && last_line
            .chars()
            .skip_while(|&c| c == fence_char)
            .all(|c| c == ' ' || c == '\t');

    if closes && fence_len > 0 {
        body_start..body_start + last_line_start
    } else {
        body_start..span.end
    }
}
