//! # Simple Blog
//!
//! Content tooling for a personal portfolio and blog site. The site itself
//! is statically generated; this crate is its companion binary for the
//! chores that shouldn't live in the page bundle: inspecting article
//! documents and maintaining the changelog from commit history.
//!
//! # What It Operates On
//!
//! Articles are stored as static JSON documents — one file per article, each
//! an ordered array of typed content blocks (heading, paragraph, list,
//! code, ...). The renderer consumes them at build time; this crate consumes
//! the same files to answer editorial questions (how long is this piece?
//! how many links does it carry?) and to keep `CHANGELOG.md` current at
//! release time.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`content`] | Article content-block schema and the text flattener |
//! | [`links`] | Inline `[label](href)` tokenizer for text fields |
//! | [`reading_time`] | Word-count → minutes estimation and display formatting |
//! | [`stats`] | Per-article stats: words, reading time, links, block counts |
//! | [`changelog`] | Conventional-commit parsing and changelog entry formatting |
//! | [`history`] | Real collaborators: `git` history source, changelog file store |
//! | [`output`] | CLI output formatting — information-first display of results |
//!
//! # Design Decisions
//!
//! ## Closed Sum Types Over Loose Objects
//!
//! The article schema and the link-tokenizer result are both proper tagged
//! enums ([`content::ContentBlock`], [`links::Segment`]). Unknown block
//! kinds still deserialize (into a catch-all variant) so an old binary
//! tolerates a newer article schema — they just contribute nothing to
//! flattened text.
//!
//! ## Degrade, Don't Reject
//!
//! The pure transforms have no error paths. Malformed link syntax stays
//! literal text, blank content is dropped, reading time floors at one
//! minute. The only hard failures are filesystem and subprocess ones, and
//! those carry typed errors ([`stats::StatsError`],
//! [`changelog::ChangelogError`]).
//!
//! ## Injected Collaborators for the Changelog
//!
//! Entry generation talks to a [`changelog::CommitHistory`] and a
//! [`changelog::ChangelogStore`] trait rather than to `git` and the
//! filesystem directly, so parsing and formatting are testable without
//! subprocesses. The real implementations live in [`history`].

pub mod changelog;
pub mod content;
pub mod history;
pub mod links;
pub mod output;
pub mod reading_time;
pub mod stats;
