//! The resynchronizing diff engine
//!
//! This module implements the two-phase comparison:
//!
//! - `line_reader`: lazy, forward-only line access over files and buffers
//! - `comparator`: the trimmed-equality line predicate
//! - `anchor`: phase 1, finds the earliest alignment point of the two streams
//! - `walker`: phase 2, walks both streams collecting replacement blocks
//! - `block`: the replacement block data model and final assembly
//!
//! The engine is a pure function of its two inputs and `max_depth`. Each
//! phase opens fresh readers through [`LineInput`] and drops them when the
//! phase completes, so no handle outlives the phase that needed it.

pub mod anchor;
pub mod block;
pub mod comparator;
pub mod line_reader;
pub mod walker;

pub use anchor::{Anchor, AnchorScanner, DEFAULT_MAX_DEPTH};
pub use block::ReplacementBlock;
pub use line_reader::LineReader;

use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// Debug logging enabled with the `debug_walk` feature flag
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_walk")]
        {
            eprintln!($($arg)*);
        }
    };
}
pub(crate) use debug_log;

/// A line-oriented input the engine can open once per phase.
///
/// Implemented for file paths and for in-memory string buffers; each call to
/// `open_lines` yields a fresh reader positioned at line 1.
pub trait LineInput {
    type Reader: BufRead;

    fn open_lines(&self) -> anyhow::Result<LineReader<Self::Reader>>;
}

impl LineInput for Path {
    type Reader = BufReader<File>;

    fn open_lines(&self) -> anyhow::Result<LineReader<Self::Reader>> {
        LineReader::open(self)
    }
}

impl LineInput for str {
    type Reader = Cursor<Vec<u8>>;

    fn open_lines(&self) -> anyhow::Result<LineReader<Self::Reader>> {
        Ok(LineReader::new(Cursor::new(self.as_bytes().to_vec())))
    }
}

/// Compare two line-oriented inputs and return the replacement blocks that
/// turn `source` into `other`, in ascending position order.
///
/// `max_depth` bounds how far the anchor scanner looks into `other` for a
/// match to a candidate source line; [`DEFAULT_MAX_DEPTH`] is the usual
/// choice. Trailing source content with no counterpart in `other` produces
/// no block (the walk stops when `other` is exhausted).
pub fn compare<S, O>(source: &S, other: &O, max_depth: usize) -> anyhow::Result<Vec<ReplacementBlock>>
where
    S: LineInput + ?Sized,
    O: LineInput + ?Sized,
{
    let anchor = {
        let mut src = source.open_lines()?;
        let mut oth = other.open_lines()?;

        AnchorScanner::new(max_depth).scan(&mut src, &mut oth)?
    };

    let walked = {
        let mut src = source.open_lines()?;
        let mut oth = other.open_lines()?;

        walker::walk(&mut src, &mut oth, anchor.src_start, anchor.oth_start)?
    };

    Ok(block::assemble(anchor.leading, walked))
}

/// Path-holding front door to [`compare`]
#[derive(Debug, Clone)]
pub struct FileCompare {
    source: PathBuf,
    other: PathBuf,
    max_depth: usize,
}

impl FileCompare {
    pub fn new(source: impl Into<PathBuf>, other: impl Into<PathBuf>) -> Self {
        FileCompare {
            source: source.into(),
            other: other.into(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn compare(&self) -> anyhow::Result<Vec<ReplacementBlock>> {
        compare(self.source.as_path(), self.other.as_path(), self.max_depth)
    }
}
