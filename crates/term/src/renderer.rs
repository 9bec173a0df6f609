//! TerminalRenderer: flushes rendered lines to a real terminal.
//!
//! Frames are diffed line by line against the previous one, so a tick that
//! only changes the clock rewrites a single row.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Vec<String>>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(8 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    pub fn draw(&mut self, lines: Vec<String>) -> Result<()> {
        self.buf.clear();
        match self.last.as_deref() {
            Some(prev) => encode_diff_into(prev, &lines, &mut self.buf)?,
            None => encode_full_into(&lines, &mut self.buf)?,
        }
        if !self.buf.is_empty() {
            self.flush_buf()?;
        }
        self.last = Some(lines);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(lines: &[String], out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    for (y, line) in lines.iter().enumerate() {
        out.queue(cursor::MoveTo(0, row(y)))?;
        out.queue(Print(line))?;
    }
    Ok(())
}

/// Encode only the rows that differ from `prev` into `out`.
///
/// Leaves `out` untouched when nothing changed.
pub fn encode_diff_into(prev: &[String], next: &[String], out: &mut Vec<u8>) -> Result<()> {
    let height = prev.len().max(next.len());
    for y in 0..height {
        let before = prev.get(y).map(String::as_str);
        let after = next.get(y).map(String::as_str);
        if before == after {
            continue;
        }
        out.queue(cursor::MoveTo(0, row(y)))?;
        out.queue(terminal::Clear(terminal::ClearType::CurrentLine))?;
        if let Some(line) = after {
            out.queue(Print(line))?;
        }
    }
    Ok(())
}

fn row(y: usize) -> u16 {
    u16::try_from(y).unwrap_or(u16::MAX)
}
