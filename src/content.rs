//! Article content blocks and text flattening.
//!
//! Each article is stored as a static JSON array of content blocks — a
//! closed, tagged schema discriminated by a `type` field:
//!
//! ```json
//! [
//!   { "type": "heading", "content": "On Error Handling", "level": 2 },
//!   { "type": "paragraph", "content": "Errors are values." },
//!   { "type": "list", "items": ["thiserror for libraries", "anyhow for apps"] },
//!   { "type": "code", "code": "fn main() {}", "language": "rust" },
//!   { "type": "divider" },
//!   { "type": "link", "title": "Further reading", "href": "/notes" }
//! ]
//! ```
//!
//! Documents are read-only at runtime: loaded once, never mutated. Kinds this
//! binary doesn't know about (the site's renderer evolves faster than its
//! tooling) deserialize into [`ContentBlock::Unknown`] and are skipped by the
//! flattener rather than rejected.
//!
//! [`flatten_text`] is the reading-time input: it walks the blocks in order
//! and joins every human-readable piece with single spaces.

use serde::{Deserialize, Serialize};

/// One structured unit of an article document.
///
/// Fields are optional where the authoring format leaves them optional; the
/// flattener treats a missing field the same as a blank one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentBlock {
    Heading {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        level: Option<u8>,
    },
    Paragraph {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
    },
    List {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        items: Vec<String>,
    },
    ComplexList {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        items: Vec<ComplexItem>,
    },
    Code {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        code: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
    },
    Divider,
    Link {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        href: Option<String>,
    },
    /// Any kind this version doesn't know. Carried through deserialization
    /// so old binaries tolerate new article schemas.
    #[serde(other)]
    Unknown,
}

/// An entry in a `complexList` block: a primary line with optional
/// secondary text and an optional link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplexItem {
    pub primary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<ItemLink>,
}

/// Link attached to a complex-list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemLink {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

/// Flatten an article's blocks into a single whitespace-joined string of all
/// human-readable text, in document order.
///
/// Per-kind extraction:
/// - `heading`, `paragraph`: the `content` field
/// - `list`: each item string
/// - `complexList`: each entry's `primary`, then `secondary`, then `link.title`
/// - `code`: the `code` field
/// - `link`: `title`, falling back to `content`
/// - `divider`, unknown kinds: nothing
///
/// Every piece is trimmed and blank pieces are dropped, so the result never
/// contains doubled spaces.
pub fn flatten_text(blocks: &[ContentBlock]) -> String {
    let mut pieces: Vec<&str> = Vec::new();

    for block in blocks {
        match block {
            ContentBlock::Heading { content, .. } | ContentBlock::Paragraph { content } => {
                push_piece(&mut pieces, content.as_deref());
            }
            ContentBlock::List { items } => {
                for item in items {
                    push_piece(&mut pieces, Some(item.as_str()));
                }
            }
            ContentBlock::ComplexList { items } => {
                for item in items {
                    push_piece(&mut pieces, Some(item.primary.as_str()));
                    push_piece(&mut pieces, item.secondary.as_deref());
                    if let Some(link) = &item.link {
                        push_piece(&mut pieces, link.title.as_deref());
                    }
                }
            }
            ContentBlock::Code { code, .. } => push_piece(&mut pieces, code.as_deref()),
            ContentBlock::Link { title, content, .. } => {
                push_piece(&mut pieces, title.as_deref().or(content.as_deref()));
            }
            ContentBlock::Divider | ContentBlock::Unknown => {}
        }
    }

    pieces.join(" ")
}

fn push_piece<'a>(pieces: &mut Vec<&'a str>, piece: Option<&'a str>) {
    if let Some(text) = piece {
        let trimmed = text.trim();
        if !trimmed.is_empty() {
            pieces.push(trimmed);
        }
    }
}
