use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Wrapper that implements `Write` for the minus pager
///
/// The pager only accepts pushed strings, so this adapter lets the commands
/// keep writing through a plain `Write` handle whether the output ends up
/// paged or not.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(text).map_err(io::Error::other)?;

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Render through the pager when stdout is an interactive terminal, and
/// straight to stdout otherwise (pipes, redirects, test harnesses).
pub fn paged<F>(render: F) -> anyhow::Result<()>
where
    F: FnOnce(&mut dyn Write) -> anyhow::Result<()>,
{
    if io::stdout().is_terminal() {
        let pager = Pager::new();
        let mut writer = PagerWriter::new(pager.clone());

        render(&mut writer)?;
        minus::page_all(pager)?;
    } else {
        let mut stdout = io::stdout();

        render(&mut stdout)?;
        stdout.flush()?;
    }

    Ok(())
}
