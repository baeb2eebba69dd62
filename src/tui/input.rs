//! Blocking key and numeric-line input.
//!
//! The numeric prompt is the only place user input is validated: it
//! echoes typed characters, accepts at most [`INPUT_MAX_LEN`] of them,
//! and loops until the entry parses as a positive integer. Rejected
//! entries flash an error below the prompt for about a second, then the
//! prompt resets; retries are unlimited.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use super::screen::Screen;
use crate::constants::{ERROR_DISPLAY_MS, INPUT_MAX_LEN};
use crate::error::SessionError;
use crate::format::StyleTag;

const INVALID_INPUT: &str = "Invalid input. Please enter a positive integer.";

/// Block until a key press and return its code.
pub fn read_key() -> Result<KeyCode, SessionError> {
    loop {
        if let Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) = event::read()?
        {
            return Ok(code);
        }
    }
}

/// Block until any key is pressed.
pub fn wait_for_key() -> Result<(), SessionError> {
    read_key().map(|_| ())
}

/// Prompt at (row, col) until the user enters a positive integer.
pub fn prompt_positive_int(
    screen: &mut Screen,
    row: u16,
    col: u16,
    prompt: &str,
) -> Result<u32, SessionError> {
    let entry_col = col + prompt.chars().count() as u16;
    loop {
        screen.put(row, col, prompt, StyleTag::Prompt)?;
        screen.flush()?;
        let entry = read_line(screen, row, entry_col)?;
        if let Some(value) = parse_positive(&entry) {
            return Ok(value);
        }
        screen.put(row + 1, col, INVALID_INPUT, StyleTag::Alert)?;
        screen.flush()?;
        std::thread::sleep(Duration::from_millis(ERROR_DISPLAY_MS));
        // Wipe the error and the rejected entry before re-prompting.
        screen.put(row + 1, col, &" ".repeat(INVALID_INPUT.len() + 1), StyleTag::Alert)?;
        screen.put(row, entry_col, &" ".repeat(INPUT_MAX_LEN), StyleTag::Prompt)?;
        screen.flush()?;
    }
}

/// Echoing bounded line read: characters accumulate until Enter.
fn read_line(screen: &mut Screen, row: u16, col: u16) -> Result<String, SessionError> {
    let mut entry = String::new();
    loop {
        match read_key()? {
            KeyCode::Enter => return Ok(entry),
            KeyCode::Backspace => {
                if entry.pop().is_some() {
                    let x = col + entry.chars().count() as u16;
                    screen.put(row, x, " ", StyleTag::Prompt)?;
                    screen.flush()?;
                }
            }
            KeyCode::Char(c) => {
                if entry.chars().count() < INPUT_MAX_LEN {
                    let x = col + entry.chars().count() as u16;
                    entry.push(c);
                    screen.put(row, x, &c.to_string(), StyleTag::Prompt)?;
                    screen.flush()?;
                }
            }
            _ => {}
        }
    }
}

/// Parse a prompt entry as a positive integer.
fn parse_positive(entry: &str) -> Option<u32> {
    match entry.trim().parse::<u32>() {
        Ok(n) if n > 0 => Some(n),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::parse_positive;

    #[test]
    fn test_parse_positive_accepts_integers() {
        assert_eq!(parse_positive("42"), Some(42));
        assert_eq!(parse_positive(" 7 "), Some(7));
    }

    #[test]
    fn test_parse_positive_rejects_bad_entries() {
        assert_eq!(parse_positive(""), None);
        assert_eq!(parse_positive("0"), None);
        assert_eq!(parse_positive("-3"), None);
        assert_eq!(parse_positive("2.5"), None);
        assert_eq!(parse_positive("ten"), None);
    }
}
