//! Terminal UI: grid rendering, key/line input, and the menu session.
//!
//! Thin crossterm wrappers around the pure pipeline. [`run`] owns the
//! terminal lifecycle: raw mode and the alternate screen are entered on
//! the way in and restored on every way out, including panics.

pub mod color;
pub mod input;
pub mod screen;
pub mod session;

use std::io::{self, Write};

use crossterm::cursor;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::QueueableCommand;

use self::screen::Screen;
use self::session::Session;
use crate::error::SessionError;

/// Restores the terminal when dropped, so an early `?` return or a
/// panic inside the session never leaves the terminal in raw mode.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Run the interactive session to completion.
pub fn run() -> Result<(), SessionError> {
    setup_terminal()?;
    let _guard = TerminalGuard;
    Session::new(Screen::new()?).run()
}

fn setup_terminal() -> Result<(), SessionError> {
    terminal::enable_raw_mode()?;
    let mut out = io::stdout();
    out.queue(EnterAlternateScreen)?;
    out.queue(cursor::Hide)?;
    out.flush()?;
    Ok(())
}

/// Best-effort teardown; failures here have nowhere useful to go.
fn restore_terminal() {
    let mut out = io::stdout();
    let _ = out.queue(cursor::Show);
    let _ = out.queue(LeaveAlternateScreen);
    let _ = out.flush();
    let _ = terminal::disable_raw_mode();
}
