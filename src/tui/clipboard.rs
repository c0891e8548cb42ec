//! # Clipboard Boundary
//!
//! Code blocks copy through the [`Clipboard`] trait. The terminal
//! implementation asks the terminal emulator to set the system clipboard
//! with an OSC 52 escape sequence, which also works over SSH. Terminals
//! that ignore OSC 52 simply drop it; there is no acknowledgement.

use std::io::{self, Write, stdout};

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;

/// Write-text capability. Fallible; callers must tolerate errors.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> io::Result<()>;
}

/// Sets the clipboard via OSC 52 on stdout.
pub struct TerminalClipboard;

impl Clipboard for TerminalClipboard {
    fn write_text(&self, text: &str) -> io::Result<()> {
        let mut out = stdout();
        execute!(out, CopyToClipboard::to_clipboard_from(text))?;
        out.flush()
    }
}

/// Used when copying is disabled in config.
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn write_text(&self, _text: &str) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "clipboard disabled",
        ))
    }
}

pub fn build_clipboard(enabled: bool) -> Box<dyn Clipboard> {
    if enabled {
        Box::new(TerminalClipboard)
    } else {
        Box::new(NoClipboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_clipboard_always_fails() {
        let clipboard = build_clipboard(false);
        let err = clipboard.write_text("/pay Steve 100").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }
}
