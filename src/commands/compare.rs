use crate::OutputFormat;
use crate::engine::{DEFAULT_MAX_DEPTH, FileCompare};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct CompareOptions {
    pub max_depth: usize,
    pub format: OutputFormat,
}

impl Default for CompareOptions {
    fn default() -> Self {
        CompareOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            format: OutputFormat::Text,
        }
    }
}

/// Compare `source` against `other` and render the replacement blocks.
///
/// Text mode prints one `@@ line N @@` header per block followed by its
/// `+`-prefixed replacement lines; JSON mode serializes the block list as-is.
/// Identical inputs render nothing.
pub fn run(
    source: &Path,
    other: &Path,
    opts: &CompareOptions,
    writer: &mut dyn Write,
) -> anyhow::Result<()> {
    let blocks = FileCompare::new(source, other)
        .with_max_depth(opts.max_depth)
        .compare()?;

    match opts.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *writer, &blocks)?;
            writeln!(writer)?;
        }
        OutputFormat::Text => {
            for block in &blocks {
                writeln!(writer, "{}", format!("@@ line {} @@", block.position).cyan())?;
                for line in &block.lines {
                    writeln!(writer, "{}", format!("+{line}").green())?;
                }
            }
        }
    }

    Ok(())
}
