use crate::engine::block::ReplacementBlock;
use serde::Serialize;

const ADVISORY_MESSAGE: &str = "Vulnerable library, please patch.";
const NEWLINE: &str = "\n";

/// A character-precise range in the original file. Zero-width ranges
/// (`start_character == end_character` on a single line) mean "insert here".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start_line: usize,
    pub start_character: usize,
    pub end_line: usize,
    pub end_character: usize,
}

/// A suggested-fix comment derived from one replacement block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewComment {
    pub line: usize,
    pub lines: Vec<String>,
    pub message: String,
}

impl ReviewComment {
    /// Single-line blocks annotate the replaced line itself; multi-line
    /// blocks are insertions anchored one line earlier.
    pub fn from_block(block: &ReplacementBlock) -> Self {
        let line = if block.lines.len() == 1 {
            block.position
        } else {
            block.position - 1
        };

        ReviewComment {
            line,
            lines: block.lines.clone(),
            message: ADVISORY_MESSAGE.to_string(),
        }
    }

    pub fn range(&self) -> LineRange {
        if self.lines.len() == 1 {
            // change of an existing line
            LineRange {
                start_line: self.line,
                start_character: 0,
                end_line: self.line,
                end_character: self.max_len(),
            }
        } else {
            // insertion of multiple lines
            LineRange {
                start_line: self.line,
                start_character: 0,
                end_line: self.line,
                end_character: 0,
            }
        }
    }

    pub fn replacement(&self) -> String {
        self.lines.join(NEWLINE)
    }

    fn max_len(&self) -> usize {
        self.lines.iter().map(|line| line.len()).max().unwrap_or(0)
    }
}
