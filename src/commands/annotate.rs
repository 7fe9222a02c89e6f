use crate::engine::FileCompare;
use crate::review::{LineRange, ReviewComment};
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// One review comment as the annotation consumer expects it: the anchor
/// line, the character range in the original file, the advisory message and
/// the joined replacement text.
#[derive(Debug, Serialize)]
struct Annotation {
    path: String,
    line: usize,
    range: LineRange,
    message: String,
    replacement: String,
}

impl Annotation {
    fn new(path: &Path, comment: ReviewComment) -> Self {
        Annotation {
            path: path.display().to_string(),
            line: comment.line,
            range: comment.range(),
            replacement: comment.replacement(),
            message: comment.message,
        }
    }
}

/// Compare `source` against `other` and emit the review annotations for the
/// resulting blocks as a JSON array.
pub fn run(
    source: &Path,
    other: &Path,
    max_depth: usize,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let blocks = FileCompare::new(source, other)
        .with_max_depth(max_depth)
        .compare()?;

    let annotations = blocks
        .iter()
        .map(ReviewComment::from_block)
        .map(|comment| Annotation::new(source, comment))
        .collect::<Vec<_>>();

    serde_json::to_writer_pretty(&mut *writer, &annotations)?;
    writeln!(writer)?;

    Ok(())
}
