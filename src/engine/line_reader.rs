use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Lazy, forward-only access to the lines of a text input.
///
/// Lines are 1-indexed and handed out one at a time with their line
/// terminators stripped. There is no way back: callers that need to restart
/// drop the reader and open a fresh one.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: R,
}

impl LineReader<BufReader<File>> {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Failed to open input file {}", path.display()))?;

        Ok(LineReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        LineReader { inner }
    }

    /// The next line without its trailing `\n`/`\r\n`, or `None` at end of
    /// input. Read failures (including invalid UTF-8) propagate as-is.
    pub fn read_line(&mut self) -> anyhow::Result<Option<String>> {
        let mut buf = String::new();
        let read = self.inner.read_line(&mut buf)?;

        if read == 0 {
            return Ok(None);
        }

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }

        Ok(Some(buf))
    }

    /// Consume lines so the next `read_line` call returns line `start_line`
    /// (1-based). Running off the end of the input is not an error; the next
    /// read simply returns `None`.
    pub fn skip_to_line(&mut self, start_line: usize) -> anyhow::Result<()> {
        let mut lineno = 1;
        while lineno < start_line {
            self.read_line()?;
            lineno += 1;
        }

        Ok(())
    }
}
