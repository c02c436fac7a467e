//! Conventional-commit parsing and CHANGELOG.md entry generation.
//!
//! The release flow is one-shot: read commits since the last tag, parse the
//! conventional ones, group them into sections, and splice a new entry into
//! the changelog. Parsing and formatting are pure; all I/O goes through two
//! injected collaborators so the logic is testable without subprocesses:
//!
//! - [`CommitHistory`] — where commits come from (real impl: `git`, see
//!   [`crate::history::GitHistory`])
//! - [`ChangelogStore`] — where the changelog lives (real impl: a file, see
//!   [`crate::history::FileStore`])
//!
//! ## Commit grammar
//!
//! ```text
//! <type>(<scope>)?: <subject>
//!
//! <body>
//! ```
//!
//! `<type>` is one of the fixed [`CommitKind`] set. A commit is "breaking"
//! when its first line contains a literal `!` or its body contains
//! `BREAKING CHANGE:` / `BREAKING-CHANGE:`. Messages that don't match the
//! grammar parse to `None` — an expected condition (merge commits, quick
//! fixups), not a fault.
//!
//! ## Entry layout
//!
//! ```text
//! ## [0.3.0] - 2026-08-29
//!
//! ### BREAKING CHANGES
//!
//! - **api:** drop the v1 feed
//!
//! ### Features
//!
//! - **theme:** add dark mode toggle
//!
//! ### Bug Fixes
//!
//! - handle empty article lists
//!
//! ### Other Changes
//!
//! - docs: update deployment notes
//! ```
//!
//! Section order is fixed; empty sections are omitted. Breaking commits go
//! to the breaking section regardless of type, and never repeat elsewhere.

use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("git log failed: {0}")]
    GitLog(String),
}

/// The closed conventional-commit type set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitKind {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Test,
    Chore,
    Perf,
    Ci,
    Build,
    Revert,
}

impl CommitKind {
    fn parse(s: &str) -> Option<Self> {
        match s {
            "feat" => Some(Self::Feat),
            "fix" => Some(Self::Fix),
            "docs" => Some(Self::Docs),
            "style" => Some(Self::Style),
            "refactor" => Some(Self::Refactor),
            "test" => Some(Self::Test),
            "chore" => Some(Self::Chore),
            "perf" => Some(Self::Perf),
            "ci" => Some(Self::Ci),
            "build" => Some(Self::Build),
            "revert" => Some(Self::Revert),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Refactor => "refactor",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Perf => "perf",
            Self::Ci => "ci",
            Self::Build => "build",
            Self::Revert => "revert",
        }
    }
}

impl fmt::Display for CommitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed conventional commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Version-control hash. [`parse_commit`] leaves this empty; the caller
    /// fills it in from history metadata.
    pub hash: String,
    pub kind: CommitKind,
    /// Scope captured verbatim from the parentheses, when present.
    pub scope: Option<String>,
    pub subject: String,
    /// Message body after the first line, trimmed. `None` when empty.
    pub body: Option<String>,
    pub breaking: bool,
}

/// A raw commit as delivered by a [`CommitHistory`] source.
#[derive(Debug, Clone)]
pub struct RawCommit {
    pub hash: String,
    pub message: String,
}

/// Source of raw commits, injected so entry generation doesn't hard-wire a
/// `git` subprocess.
pub trait CommitHistory {
    /// Most recent release tag, or `None` when there are no tags yet (first
    /// release — the whole history counts as "since last release").
    fn latest_tag(&self) -> Option<String>;

    /// Commits after `tag` (all commits when `tag` is `None`), newest first.
    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>, ChangelogError>;
}

/// Destination for the rendered changelog, injected for the same reason.
pub trait ChangelogStore {
    /// Current changelog contents. Implementations substitute a default
    /// skeleton when nothing exists yet, so this cannot fail.
    fn read(&self) -> String;

    fn write(&self, contents: &str) -> Result<(), ChangelogError>;
}

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(feat|fix|docs|style|refactor|test|chore|perf|ci|build|revert)(?:\(([^)]*)\))?!?: (.+)$")
        .expect("commit header pattern is valid")
});

const BREAKING_MARKERS: [&str; 2] = ["BREAKING CHANGE:", "BREAKING-CHANGE:"];

/// Parse one raw commit message.
///
/// Returns `None` when the first line doesn't match the conventional-commit
/// grammar — there is no partial parse. The returned `hash` is empty.
pub fn parse_commit(message: &str) -> Option<CommitInfo> {
    let mut lines = message.lines();
    let first = lines.next().unwrap_or("");
    let caps = HEADER_RE.captures(first)?;

    let kind = CommitKind::parse(&caps[1])?;
    let scope = caps.get(2).map(|m| m.as_str().to_string());
    let subject = caps[3].trim().to_string();

    let rest = lines.collect::<Vec<_>>().join("\n");
    let body = {
        let trimmed = rest.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };

    let breaking = first.contains('!')
        || body
            .as_deref()
            .is_some_and(|b| BREAKING_MARKERS.iter().any(|m| b.contains(m)));

    Some(CommitInfo {
        hash: String::new(),
        kind,
        scope,
        subject,
        body,
        breaking,
    })
}

/// The four changelog buckets, disjoint by construction: breaking commits
/// claim their commit regardless of type.
struct Buckets<'a> {
    breaking: Vec<&'a CommitInfo>,
    features: Vec<&'a CommitInfo>,
    fixes: Vec<&'a CommitInfo>,
    other: Vec<&'a CommitInfo>,
}

fn partition(commits: &[CommitInfo]) -> Buckets<'_> {
    let mut buckets = Buckets {
        breaking: Vec::new(),
        features: Vec::new(),
        fixes: Vec::new(),
        other: Vec::new(),
    };
    for commit in commits {
        if commit.breaking {
            buckets.breaking.push(commit);
        } else {
            match commit.kind {
                CommitKind::Feat => buckets.features.push(commit),
                CommitKind::Fix => buckets.fixes.push(commit),
                _ => buckets.other.push(commit),
            }
        }
    }
    buckets
}

fn bullet(commit: &CommitInfo, with_kind: bool) -> String {
    let subject = if with_kind {
        format!("{}: {}", commit.kind, commit.subject)
    } else {
        commit.subject.clone()
    };
    match &commit.scope {
        Some(scope) => format!("- **{scope}:** {subject}"),
        None => format!("- {subject}"),
    }
}

fn section(out: &mut String, heading: &str, commits: &[&CommitInfo], with_kind: bool) {
    if commits.is_empty() {
        return;
    }
    out.push_str("\n### ");
    out.push_str(heading);
    out.push_str("\n\n");
    for commit in commits {
        out.push_str(&bullet(commit, with_kind));
        out.push('\n');
    }
}

/// Render one changelog entry: `## [version] - date` header plus the
/// non-empty sections in fixed order.
pub fn format_entry(version: &str, date: NaiveDate, commits: &[CommitInfo]) -> String {
    let buckets = partition(commits);
    let mut out = format!("## [{}] - {}\n", version, date.format("%Y-%m-%d"));
    section(&mut out, "BREAKING CHANGES", &buckets.breaking, false);
    section(&mut out, "Features", &buckets.features, false);
    section(&mut out, "Bug Fixes", &buckets.fixes, false);
    section(&mut out, "Other Changes", &buckets.other, true);
    out
}

/// Splice an entry into an existing changelog, immediately after the first
/// top-level `# ` heading line. With no such heading the entry goes at the
/// very top, above whatever is there.
pub fn insert_entry(changelog: &str, entry: &str) -> String {
    let entry = entry.trim_end();
    let lines: Vec<&str> = changelog.lines().collect();

    match lines.iter().position(|line| line.starts_with("# ")) {
        Some(at) => {
            let mut out: Vec<&str> = Vec::with_capacity(lines.len() + 2);
            out.extend_from_slice(&lines[..=at]);
            out.push("");
            out.push(entry);
            out.extend_from_slice(&lines[at + 1..]);
            let mut joined = out.join("\n");
            joined.push('\n');
            joined
        }
        None => format!("{entry}\n\n{changelog}"),
    }
}

/// Summary of an assembled entry, for CLI display.
#[derive(Debug)]
pub struct Report {
    pub version: String,
    /// Tag the entry covers changes since; `None` on first release.
    pub since_tag: Option<String>,
    /// Conventional commits included in the entry.
    pub commits: usize,
    /// Commits that didn't match the grammar and were left out.
    pub skipped: usize,
    pub breaking: usize,
    pub features: usize,
    pub fixes: usize,
    pub other: usize,
    /// The rendered entry, ready for [`insert_entry`].
    pub entry: String,
}

/// Collect commits since the last release, parse the conventional ones, and
/// render the entry. Pure apart from the injected history source; writing is
/// the caller's decision (it may be a dry run).
pub fn assemble<H: CommitHistory>(
    history: &H,
    version: &str,
    date: NaiveDate,
) -> Result<Report, ChangelogError> {
    let since_tag = history.latest_tag();
    let raw = history.commits_since(since_tag.as_deref())?;

    let mut commits = Vec::new();
    let mut skipped = 0;
    for raw_commit in &raw {
        match parse_commit(&raw_commit.message) {
            Some(mut info) => {
                info.hash = raw_commit.hash.clone();
                commits.push(info);
            }
            None => skipped += 1,
        }
    }

    let buckets = partition(&commits);
    let (breaking, features, fixes, other) = (
        buckets.breaking.len(),
        buckets.features.len(),
        buckets.fixes.len(),
        buckets.other.len(),
    );
    let entry = format_entry(version, date, &commits);

    Ok(Report {
        version: version.to_string(),
        since_tag,
        commits: commits.len(),
        skipped,
        breaking,
        features,
        fixes,
        other,
        entry,
    })
}

/// Assemble and write in one step: read the stored changelog, splice the new
/// entry in, write it back.
pub fn generate<H: CommitHistory, S: ChangelogStore>(
    history: &H,
    store: &S,
    version: &str,
    date: NaiveDate,
) -> Result<Report, ChangelogError> {
    let report = assemble(history, version, date)?;
    let updated = insert_entry(&store.read(), &report.entry);
    store.write(&updated)?;
    Ok(report)
}
