//! linediff — a line-oriented resynchronizing diff engine
//!
//! Given an original file and a modified one, `linediff` locates the regions
//! where the two diverge and reports replacement blocks: the 1-based source
//! line a change anchors to, plus the literal lines from the modified file
//! that replace or insert content there. Lines are compared ignoring leading
//! and trailing whitespace, so indentation-only edits are not reported.
//!
//! This is not a general Myers/LCS diff. It is a single-pass algorithm with a
//! bounded lookahead, tuned for inputs where changes are small, localized
//! edits plus occasional insertions and a minimal edit script is not needed,
//! such as machine-patched build manifests.
//!
//! The [`engine`] module holds the algorithm, [`review`] maps its output onto
//! review-comment line ranges, and [`commands`] renders both for the CLI.

pub mod commands;
pub mod engine;
pub mod review;

/// Rendering format for command output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
