//! CLI output formatting.
//!
//! Output is information-centric, not file-centric: the primary display for
//! every article is its semantic identity — positional index, slug, word
//! count — with the filename shown as secondary context via an indented
//! `Source:` line.
//!
//! ```text
//! Articles
//! 001 error-handling (1,234 words)
//!     Source: error-handling.json
//!     Reading time: 7 min read
//!     Blocks: 12, links: 3
//! ```
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::changelog::Report;
use crate::reading_time;
use crate::stats::ArticleStats;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format a count with thousands separators: `1234` → `1,234`.
fn format_count(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Format the article inventory for `stats` and `check`.
pub fn format_stats(articles: &[ArticleStats]) -> Vec<String> {
    let mut lines = vec!["Articles".to_string()];

    if articles.is_empty() {
        lines.push("    (none found)".to_string());
        return lines;
    }

    for (pos, article) in articles.iter().enumerate() {
        lines.push(format!(
            "{} {} ({} words)",
            format_index(pos + 1),
            article.slug,
            format_count(article.words)
        ));
        lines.push(format!("    Source: {}", article.filename));
        lines.push(format!(
            "    Reading time: {}",
            reading_time::format_reading_time(article.minutes)
        ));
        lines.push(format!(
            "    Blocks: {}, links: {}",
            article.blocks, article.links
        ));
    }

    let total_words: usize = articles.iter().map(|a| a.words).sum();
    lines.push(String::new());
    lines.push(format!(
        "{} articles, {} words total",
        articles.len(),
        format_count(total_words)
    ));
    lines
}

pub fn print_stats(articles: &[ArticleStats]) {
    for line in format_stats(articles) {
        println!("{}", line);
    }
}

/// Format the changelog summary shown after (or instead of) writing.
pub fn format_changelog_report(report: &Report) -> Vec<String> {
    let since = match &report.since_tag {
        Some(tag) => format!("since {}", tag),
        None => "full history (no tags found)".to_string(),
    };
    vec![
        "Changelog".to_string(),
        format!("    Version: {}", report.version),
        format!(
            "    Commits: {} conventional, {} skipped ({})",
            report.commits, report.skipped, since
        ),
        format!(
            "    Sections: {} breaking, {} features, {} fixes, {} other",
            report.breaking, report.features, report.fixes, report.other
        ),
    ]
}

pub fn print_changelog_report(report: &Report) {
    for line in format_changelog_report(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::Report;
    use crate::stats::ArticleStats;

    fn article(slug: &str, words: usize, minutes: usize) -> ArticleStats {
        ArticleStats {
            slug: slug.to_string(),
            filename: format!("{slug}.json"),
            blocks: 4,
            words,
            minutes,
            links: 2,
        }
    }

    #[test]
    fn stats_lists_articles_with_context_lines() {
        let lines = format_stats(&[article("error-handling", 1400, 7)]);
        assert_eq!(lines[0], "Articles");
        assert_eq!(lines[1], "001 error-handling (1,400 words)");
        assert_eq!(lines[2], "    Source: error-handling.json");
        assert_eq!(lines[3], "    Reading time: 7 min read");
        assert_eq!(lines[4], "    Blocks: 4, links: 2");
    }

    #[test]
    fn stats_footer_totals_words() {
        let lines = format_stats(&[article("a", 1000, 5), article("b", 234, 2)]);
        assert_eq!(lines.last().unwrap(), "2 articles, 1,234 words total");
    }

    #[test]
    fn empty_inventory_says_so() {
        let lines = format_stats(&[]);
        assert_eq!(lines, vec!["Articles", "    (none found)"]);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn changelog_report_names_the_tag() {
        let report = Report {
            version: "0.3.0".to_string(),
            since_tag: Some("v0.2.0".to_string()),
            commits: 5,
            skipped: 1,
            breaking: 1,
            features: 2,
            fixes: 1,
            other: 1,
            entry: String::new(),
        };
        let lines = format_changelog_report(&report);
        assert_eq!(lines[1], "    Version: 0.3.0");
        assert_eq!(
            lines[2],
            "    Commits: 5 conventional, 1 skipped (since v0.2.0)"
        );
        assert_eq!(
            lines[3],
            "    Sections: 1 breaking, 2 features, 1 fixes, 1 other"
        );
    }

    #[test]
    fn changelog_report_without_tags_mentions_full_history() {
        let report = Report {
            version: "Unreleased".to_string(),
            since_tag: None,
            commits: 1,
            skipped: 0,
            breaking: 0,
            features: 0,
            fixes: 0,
            other: 1,
            entry: String::new(),
        };
        let lines = format_changelog_report(&report);
        assert!(lines[2].contains("full history (no tags found)"));
    }
}
