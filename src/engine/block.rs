use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contiguous run of replacement lines anchored to a source line.
///
/// `position` is the 1-based source line the block applies to; `lines` holds
/// the replacement content verbatim from the modified input (no trimming).
/// Blocks come out of the engine in ascending, non-overlapping position
/// order, and a block is never emitted with an empty `lines` vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct ReplacementBlock {
    pub position: usize,
    pub lines: Vec<String>,
}

impl fmt::Display for ReplacementBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line={}, lines={:?}", self.position, self.lines)
    }
}

/// Final assembly of a comparison: the leading block from the anchor scan
/// (if any, always anchored at position 1) followed by the walker's blocks.
/// No merging or renumbering happens here.
pub fn assemble(
    leading: Option<ReplacementBlock>,
    walked: Vec<ReplacementBlock>,
) -> Vec<ReplacementBlock> {
    match leading {
        Some(first) => {
            let mut blocks = Vec::with_capacity(walked.len() + 1);
            blocks.push(first);
            blocks.extend(walked);
            blocks
        }
        None => walked,
    }
}
