//! Character-grid render surface over crossterm.
//!
//! Writes are positioned (row, column, text, style) and bounded by the
//! grid: out-of-bounds rows and columns are dropped silently, and text
//! is clipped to `width - column - 1` characters. Overflow is therefore
//! never an error, matching the formatter's own clipping rule.

use std::io::{self, Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;

use super::color::color_for;
use crate::error::SessionError;
use crate::format::{clip_columns, DisplayLine, StyleTag};

pub struct Screen {
    out: Stdout,
    height: u16,
    width: u16,
}

impl Screen {
    /// Wrap stdout and capture the current terminal size.
    pub fn new() -> Result<Self, SessionError> {
        let (width, height) = terminal::size()?;
        Ok(Self {
            out: io::stdout(),
            height,
            width,
        })
    }

    /// (height, width) of the grid.
    pub fn size(&self) -> (u16, u16) {
        (self.height, self.width)
    }

    /// Queue a full-grid clear.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.out.queue(Clear(ClearType::All))?;
        Ok(())
    }

    /// Queue one positioned write. Out-of-bounds writes are dropped and
    /// text is clipped to the columns remaining on the row.
    pub fn put(&mut self, row: u16, col: u16, text: &str, style: StyleTag) -> Result<(), SessionError> {
        if row >= self.height || col >= self.width {
            return Ok(());
        }
        let budget = (self.width - col).saturating_sub(1) as usize;
        let clipped = clip_columns(text, budget);
        if clipped.is_empty() {
            return Ok(());
        }
        self.out.queue(MoveTo(col, row))?;
        self.out.queue(SetForegroundColor(color_for(style)))?;
        self.out.queue(Print(clipped))?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    /// Queue a batch of formatter output.
    pub fn draw(&mut self, lines: &[DisplayLine]) -> Result<(), SessionError> {
        for line in lines {
            self.put(line.row, line.col, &line.text, line.style)?;
        }
        Ok(())
    }

    /// Flush everything queued since the last flush.
    pub fn flush(&mut self) -> Result<(), SessionError> {
        self.out.flush()?;
        Ok(())
    }
}
