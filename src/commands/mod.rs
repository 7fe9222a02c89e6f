//! CLI command implementations
//!
//! - `compare`: run the diff engine and render the replacement blocks
//! - `annotate`: map the blocks to review-comment ranges, emitted as JSON
//! - `output`: writer plumbing (pager selection) shared by the commands
//!
//! Commands render to an injected `Write` handle so tests can capture their
//! output without touching the process's stdout.

pub mod annotate;
pub mod compare;
pub mod output;
