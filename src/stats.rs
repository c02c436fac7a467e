//! Article inspection: word counts, reading times, link counts.
//!
//! Walks a directory of article documents (one `.json` file of content
//! blocks per article, as published by the site), flattens each one, and
//! produces per-article stats. This is the build-time "does the content
//! look right" companion to the site's renderer: the same numbers the
//! reading-time badge and table of contents are derived from, inspectable
//! from the terminal.

use crate::content::{self, ContentBlock};
use crate::links::{self, Segment};
use crate::reading_time;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid article document {path}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Per-article numbers derived from its content blocks.
#[derive(Debug)]
pub struct ArticleStats {
    /// Article identifier: the file stem (`rust-error-handling.json` →
    /// `rust-error-handling`).
    pub slug: String,
    /// Source filename, for the `Source:` context line.
    pub filename: String,
    pub blocks: usize,
    pub words: usize,
    /// Estimated reading time in minutes (floored at 1).
    pub minutes: usize,
    /// Inline `[label](href)` links in text fields plus standalone link blocks.
    pub links: usize,
}

/// Analyze every `.json` article in a directory, sorted by filename.
pub fn analyze_dir(dir: &Path) -> Result<Vec<ArticleStats>, StatsError> {
    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();
    paths.sort();

    paths.iter().map(|path| analyze_article(path)).collect()
}

/// Analyze a single article document.
pub fn analyze_article(path: &Path) -> Result<ArticleStats, StatsError> {
    let raw = fs::read_to_string(path)?;
    let blocks: Vec<ContentBlock> =
        serde_json::from_str(&raw).map_err(|source| StatsError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    let text = content::flatten_text(&blocks);
    let words = text.split_whitespace().count();

    Ok(ArticleStats {
        slug: path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string(),
        filename: path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string(),
        blocks: blocks.len(),
        words,
        minutes: reading_time::estimate(&text),
        links: count_links(&blocks),
    })
}

/// Count the links a rendered article would carry: inline `[label](href)`
/// tokens inside heading/paragraph text, plus standalone link blocks.
fn count_links(blocks: &[ContentBlock]) -> usize {
    let mut total = 0;
    for block in blocks {
        match block {
            ContentBlock::Heading { content, .. } | ContentBlock::Paragraph { content } => {
                if let Some(text) = content {
                    total += links::parse_markdown_links(text)
                        .iter()
                        .filter(|segment| matches!(segment, Segment::Link { .. }))
                        .count();
                }
            }
            ContentBlock::Link { .. } => total += 1,
            _ => {}
        }
    }
    total
}
