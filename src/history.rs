//! Real collaborators for the changelog flow: `git` history and the
//! `CHANGELOG.md` file.
//!
//! Both are one-shot and blocking — this runs as a release chore, not a
//! service. No retries, no timeouts. A missing tag and a missing changelog
//! file are the two expected failures and both degrade to defaults (full
//! history, skeleton changelog); anything else propagates.

use crate::changelog::{ChangelogError, ChangelogStore, CommitHistory, RawCommit};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Record separator between commits in `git log` output. Commit messages
/// can contain blank lines, so a control byte is the only safe delimiter.
const COMMIT_SEP: char = '\x1e';

/// Commit history read from the `git` binary in a repository directory.
pub struct GitHistory {
    repo_dir: PathBuf,
}

impl GitHistory {
    pub fn new(repo_dir: impl Into<PathBuf>) -> Self {
        Self {
            repo_dir: repo_dir.into(),
        }
    }
}

impl CommitHistory for GitHistory {
    /// `git describe --tags --abbrev=0`. Any failure — no tags, not a
    /// repository, no git on PATH — means "no previous release".
    fn latest_tag(&self) -> Option<String> {
        Command::new("git")
            .args(["describe", "--tags", "--abbrev=0"])
            .current_dir(&self.repo_dir)
            .output()
            .ok()
            .filter(|out| out.status.success())
            .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
            .filter(|tag| !tag.is_empty())
    }

    fn commits_since(&self, tag: Option<&str>) -> Result<Vec<RawCommit>, ChangelogError> {
        let format = format!("--format=%H%n%B{COMMIT_SEP}");
        let mut cmd = Command::new("git");
        cmd.arg("log").arg(&format).current_dir(&self.repo_dir);
        if let Some(tag) = tag {
            cmd.arg(format!("{tag}..HEAD"));
        }

        let out = cmd.output()?;
        if !out.status.success() {
            return Err(ChangelogError::GitLog(
                String::from_utf8_lossy(&out.stderr).trim().to_string(),
            ));
        }

        Ok(parse_log(&String::from_utf8_lossy(&out.stdout)))
    }
}

/// Split `git log` output into raw commits: each record is a hash line
/// followed by the full message, terminated by [`COMMIT_SEP`].
fn parse_log(stdout: &str) -> Vec<RawCommit> {
    stdout
        .split(COMMIT_SEP)
        .filter_map(|record| {
            let record = record.trim_start_matches('\n');
            let (hash, message) = record.split_once('\n')?;
            let hash = hash.trim();
            if hash.is_empty() {
                return None;
            }
            Some(RawCommit {
                hash: hash.to_string(),
                message: message.trim_end().to_string(),
            })
        })
        .collect()
}

/// Skeleton used when the changelog doesn't exist yet.
const DEFAULT_HEADER: &str =
    "# Changelog\n\nAll notable changes to this project will be documented in this file.\n";

/// Changelog stored as a local markdown file (conventionally `CHANGELOG.md`
/// in the working directory).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ChangelogStore for FileStore {
    /// Read failure (typically: first release, no file yet) substitutes the
    /// default skeleton so the new entry still lands under a heading.
    fn read(&self) -> String {
        std::fs::read_to_string(&self.path).unwrap_or_else(|_| DEFAULT_HEADER.to_string())
    }

    fn write(&self, contents: &str) -> Result<(), ChangelogError> {
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // parse_log() tests
    // =========================================================================

    #[test]
    fn splits_records_on_separator() {
        let stdout = "abc1234\nfeat: one\x1e\ndef5678\nfix: two\n\nwith a body\x1e\n";
        let commits = parse_log(stdout);
        assert_eq!(commits.len(), 2);
        assert_eq!(commits[0].hash, "abc1234");
        assert_eq!(commits[0].message, "feat: one");
        assert_eq!(commits[1].hash, "def5678");
        assert_eq!(commits[1].message, "fix: two\n\nwith a body");
    }

    #[test]
    fn empty_log_yields_no_commits() {
        assert!(parse_log("").is_empty());
        assert!(parse_log("\n").is_empty());
    }

    #[test]
    fn message_blank_lines_survive() {
        let stdout = "abc1234\nfeat: x\n\nBREAKING CHANGE: renamed\x1e\n";
        let commits = parse_log(stdout);
        assert_eq!(commits[0].message, "feat: x\n\nBREAKING CHANGE: renamed");
    }

    // =========================================================================
    // FileStore tests
    // =========================================================================

    #[test]
    fn missing_file_reads_as_skeleton() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("CHANGELOG.md"));
        assert_eq!(store.read(), DEFAULT_HEADER);
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("CHANGELOG.md"));
        store.write("# Changelog\n\n## [0.1.0] - 2026-08-29\n").unwrap();
        assert_eq!(store.read(), "# Changelog\n\n## [0.1.0] - 2026-08-29\n");
    }

    #[test]
    fn git_history_outside_a_repo_has_no_tag() {
        let dir = TempDir::new().unwrap();
        let history = GitHistory::new(dir.path());
        assert_eq!(history.latest_tag(), None);
    }
}
