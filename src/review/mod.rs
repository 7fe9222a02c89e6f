//! Review-annotation mapping
//!
//! Replacement blocks feed a review system that wants suggested-fix comments
//! anchored at character-precise line ranges in the *original* file. This
//! module holds that mapping:
//!
//! - a block with exactly one replacement line annotates the full source
//!   line it replaces;
//! - a block with several lines is an insertion and anchors as a zero-width
//!   point just before the block's position.
//!
//! Everything here is pure data shaping; no I/O happens in this module.

pub mod comment;

pub use comment::{LineRange, ReviewComment};
