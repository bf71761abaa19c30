//! TerminalRenderer: writes rendered generations to stdout.
//!
//! Two modes are supported. `Terminal` takes over the screen (raw mode,
//! alternate screen, hidden cursor) and redraws each frame from the top-left
//! corner. `Plain` emits a form feed before every frame and leaves the
//! terminal alone, which also works when stdout is a pipe.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, SetAttribute},
    terminal, QueueableCommand,
};

use crate::types::{FORM_FEED, ROW_TERMINATOR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Terminal,
    Plain,
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    mode: OutputMode,
    entered: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            stdout: io::stdout(),
            mode,
            entered: false,
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Whether key events can be read between frames.
    pub fn is_interactive(&self) -> bool {
        self.mode == OutputMode::Terminal
    }

    pub fn enter(&mut self) -> Result<()> {
        if self.mode == OutputMode::Plain {
            return Ok(());
        }
        terminal::enable_raw_mode()?;
        self.entered = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if !self.entered {
            return Ok(());
        }
        self.entered = false;
        self.buf.clear();
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame: the rendered grid and an optional status line.
    pub fn draw(&mut self, frame: &str, status: Option<&str>) -> Result<()> {
        self.buf.clear();
        match self.mode {
            OutputMode::Terminal => encode_frame_into(frame, status, &mut self.buf)?,
            OutputMode::Plain => encode_plain_into(frame, status, &mut self.buf),
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for TerminalRenderer {
    fn drop(&mut self) {
        let _ = self.exit();
    }
}

/// Encode a full-screen redraw into `out`.
///
/// Raw mode does not translate `\n`, so rows are re-terminated with `\r\n`.
pub fn encode_frame_into(frame: &str, status: Option<&str>, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;

    for row in frame.split_terminator(ROW_TERMINATOR) {
        out.queue(Print(row))?;
        out.queue(Print("\r\n"))?;
    }
    if let Some(status) = status {
        out.queue(Print(status))?;
        out.queue(Print("\r\n"))?;
    }
    Ok(())
}

/// Encode a plain frame: form feed, then the text exactly as rendered.
pub fn encode_plain_into(frame: &str, status: Option<&str>, out: &mut Vec<u8>) {
    let mut ff = [0u8; 4];
    out.extend_from_slice(FORM_FEED.encode_utf8(&mut ff).as_bytes());
    out.extend_from_slice(frame.as_bytes());
    if let Some(status) = status {
        out.extend_from_slice(status.as_bytes());
        out.push(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_clears_and_homes_before_rows() {
        let mut out = Vec::new();
        encode_frame_into("* \n *\n", None, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let clear = text.find("\x1b[2J").expect("clear sequence");
        let home = text.find("\x1b[1;1H").expect("cursor home");
        let rows = text.find("* \r\n *\r\n").expect("rows with CRLF");
        assert!(clear < home && home < rows);
    }

    #[test]
    fn frame_appends_status_line() {
        let mut out = Vec::new();
        encode_frame_into("**\n", Some("generation 1"), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("**\r\ngeneration 1\r\n"));
    }

    #[test]
    fn plain_frame_is_form_feed_then_text() {
        let mut out = Vec::new();
        encode_plain_into(" *\n* \n", None, &mut out);
        assert_eq!(out, b"\x0c *\n* \n");

        out.clear();
        encode_plain_into("*\n", Some("population 1"), &mut out);
        assert_eq!(out, b"\x0c*\npopulation 1\n");
    }

    #[test]
    fn plain_renderer_is_not_interactive() {
        let r = TerminalRenderer::new(OutputMode::Plain);
        assert!(!r.is_interactive());
        assert_eq!(r.mode(), OutputMode::Plain);
    }
}
