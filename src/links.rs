//! Inline markdown-link tokenizer.
//!
//! Article text fields (paragraphs, headings) may embed links using the
//! `[label](href)` shorthand. This module splits such a string into an
//! ordered sequence of [`Segment`]s so callers can render plain text
//! interspersed with hyperlinks — it is *not* a markdown parser, just a
//! single-pass tokenizer for this one construct.
//!
//! ## Matching rules
//!
//! A link token requires a complete `[...]` immediately followed by a
//! complete `(...)`. The label may contain anything except `]` (a stray `[`
//! is captured literally — there is no recursive bracket matching), and the
//! href anything except `)`. Unbalanced brackets are never treated as a
//! link; the remainder stays literal text.
//!
//! A consequence of the href rule: a URL containing a literal `)` is
//! truncated at that `)`, with the rest re-entering as plain text. This is
//! long-standing behavior that downstream rendering relies on for
//! segmentation — keep it, don't "fix" it.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// One unit of display text: either plain text or a hyperlink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Segment {
    /// Literal text, rendered as-is.
    Text { content: String },
    /// A hyperlink: `content` is the display label, `href` the target.
    Link { content: String, href: String },
}

impl Segment {
    fn text(content: &str) -> Self {
        Segment::Text {
            content: content.to_string(),
        }
    }
}

/// `[label](href)` — label excludes `]`, href excludes `)`.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("link pattern is valid"));

/// Split a string into text and link segments.
///
/// Text between link tokens becomes [`Segment::Text`]; empty interstitials
/// are skipped. An input with no link tokens — including the empty string —
/// always yields exactly one text segment carrying the whole input, so
/// callers can assume a non-empty result.
///
/// ```
/// use simple_blog::links::{parse_markdown_links, Segment};
///
/// let segments = parse_markdown_links("see [the docs](https://example.com) for more");
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Text { content: "see ".into() },
///         Segment::Link { content: "the docs".into(), href: "https://example.com".into() },
///         Segment::Text { content: " for more".into() },
///     ]
/// );
/// ```
pub fn parse_markdown_links(input: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last_end = 0;

    for caps in LINK_RE.captures_iter(input) {
        let whole = caps.get(0).expect("capture 0 always present");
        if whole.start() > last_end {
            segments.push(Segment::text(&input[last_end..whole.start()]));
        }
        segments.push(Segment::Link {
            content: caps[1].to_string(),
            href: caps[2].to_string(),
        });
        last_end = whole.end();
    }

    if last_end < input.len() {
        segments.push(Segment::text(&input[last_end..]));
    }

    // Zero matches: the whole input is one text segment, even when empty.
    if segments.is_empty() {
        segments.push(Segment::text(input));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text {
            content: s.to_string(),
        }
    }

    fn link(label: &str, href: &str) -> Segment {
        Segment::Link {
            content: label.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn plain_text_is_single_segment() {
        assert_eq!(
            parse_markdown_links("no links here"),
            vec![text("no links here")]
        );
    }

    #[test]
    fn empty_input_is_single_empty_segment() {
        assert_eq!(parse_markdown_links(""), vec![text("")]);
    }

    #[test]
    fn single_link_with_surrounding_text() {
        assert_eq!(
            parse_markdown_links("see [docs](https://example.com) now"),
            vec![
                text("see "),
                link("docs", "https://example.com"),
                text(" now"),
            ]
        );
    }

    #[test]
    fn link_only_input_has_no_empty_text_segments() {
        assert_eq!(
            parse_markdown_links("[home](/)"),
            vec![link("home", "/")]
        );
    }

    #[test]
    fn multiple_links_interleave_with_text() {
        let segments = parse_markdown_links("[a](/a) and [b](/b)");
        assert_eq!(
            segments,
            vec![link("a", "/a"), text(" and "), link("b", "/b")]
        );
    }

    #[test]
    fn adjacent_links_have_no_separator_segment() {
        assert_eq!(
            parse_markdown_links("[a](/a)[b](/b)"),
            vec![link("a", "/a"), link("b", "/b")]
        );
    }

    #[test]
    fn unclosed_bracket_stays_literal() {
        assert_eq!(
            parse_markdown_links("broken [label(href)"),
            vec![text("broken [label(href)")]
        );
    }

    #[test]
    fn unclosed_paren_stays_literal() {
        assert_eq!(
            parse_markdown_links("broken [label](href"),
            vec![text("broken [label](href")]
        );
    }

    #[test]
    fn bracket_without_following_paren_stays_literal() {
        assert_eq!(
            parse_markdown_links("just [a note] in brackets"),
            vec![text("just [a note] in brackets")]
        );
    }

    #[test]
    fn stray_open_bracket_inside_label_is_captured() {
        assert_eq!(
            parse_markdown_links("[a [nested label](/x)"),
            vec![link("a [nested label", "/x")]
        );
    }

    #[test]
    fn paren_in_href_truncates_at_first_close() {
        // Deliberate simplification: href ends at the first `)`, remainder
        // re-enters as plain text.
        assert_eq!(
            parse_markdown_links("[w](https://en.wikipedia.org/wiki/Rust_(language))"),
            vec![
                link("w", "https://en.wikipedia.org/wiki/Rust_(language"),
                text(")"),
            ]
        );
    }

    #[test]
    fn label_text_survives_in_order() {
        // Concatenating text content and link labels reproduces all display
        // text in the original order.
        let input = "intro [one](/1) middle [two](/2) outro";
        let display: String = parse_markdown_links(input)
            .iter()
            .map(|s| match s {
                Segment::Text { content } => content.as_str(),
                Segment::Link { content, .. } => content.as_str(),
            })
            .collect();
        assert_eq!(display, "intro one middle two outro");
    }

    #[test]
    fn segments_serialize_with_kind_tag() {
        let json = serde_json::to_string(&link("docs", "/docs")).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"link","content":"docs","href":"/docs"}"#
        );
    }
}
