//! Anchor scanning (phase 1)
//!
//! Before the line-by-line walk can start, the engine needs a point at which
//! the two streams can be considered aligned. Edits to the intended inputs
//! (machine-patched build manifests) cluster near the top of the file, so the
//! scanner looks for the earliest source line that reappears within the first
//! `max_depth` lines of the modified stream.
//!
//! For each candidate source line, the head of the "other" stream is scanned
//! with trimmed equality. The first hit fixes the anchor: the candidate's
//! index becomes `src_start`, the hit's index becomes `oth_start`, and any
//! "other" lines skipped during that successful scan become a leading
//! replacement block anchored at position 1. Candidates that find no match
//! within the window discard whatever they collected. If the source runs out
//! without any hit at all, the scan degenerates to `(1, 1)` and the walker
//! handles everything from the very beginning.
//!
//! `max_depth` keeps the worst case at O(source_length × max_depth).

use crate::engine::block::ReplacementBlock;
use crate::engine::comparator::trimmed_eq;
use crate::engine::debug_log;
use crate::engine::line_reader::LineReader;
use derive_new::new;
use std::io::BufRead;

/// Default bound on how many "other" lines are inspected per candidate
/// source line.
pub const DEFAULT_MAX_DEPTH: usize = 16;

/// Where the resynchronizing walk begins.
///
/// `src_start` and `oth_start` are 1-based line indices into the source and
/// "other" streams; `leading` carries the "other" lines that were skipped
/// before the anchor match, already shaped as a block at position 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    pub src_start: usize,
    pub oth_start: usize,
    pub leading: Option<ReplacementBlock>,
}

#[derive(Debug, Clone, Copy, new)]
pub struct AnchorScanner {
    max_depth: usize,
}

impl Default for AnchorScanner {
    fn default() -> Self {
        AnchorScanner::new(DEFAULT_MAX_DEPTH)
    }
}

impl AnchorScanner {
    pub fn scan<S: BufRead, O: BufRead>(
        &self,
        source: &mut LineReader<S>,
        other: &mut LineReader<O>,
    ) -> anyhow::Result<Anchor> {
        // The first max_depth other lines are all this phase ever looks at;
        // buffer them once instead of restarting the input per candidate.
        let mut head = Vec::with_capacity(self.max_depth);
        while head.len() < self.max_depth {
            match other.read_line()? {
                Some(line) => head.push(line),
                None => break,
            }
        }

        let mut src_index = 0;
        while let Some(src_line) = source.read_line()? {
            src_index += 1;

            let mut skipped = Vec::new();
            for (offset, oth_line) in head.iter().enumerate() {
                if trimmed_eq(Some(&src_line), Some(oth_line)) {
                    debug_log!(
                        "anchor: source line {src_index} matched other line {}",
                        offset + 1
                    );

                    let leading = (!skipped.is_empty()).then(|| ReplacementBlock::new(1, skipped));

                    return Ok(Anchor {
                        src_start: src_index,
                        oth_start: offset + 1,
                        leading,
                    });
                }

                skipped.push(oth_line.clone());
            }

            // No hit within the window for this candidate; its collected
            // lines are discarded and the next source line gets a fresh scan.
            debug_log!("anchor: no match for source line {src_index} within the window");
        }

        // Source exhausted without alignment: delegate fully to the walker.
        Ok(Anchor {
            src_start: 1,
            oth_start: 1,
            leading: None,
        })
    }
}
