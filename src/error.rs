//! Session-level error type.
//!
//! Invalid numeric input is recovered locally by re-prompting and render
//! overflow by clipping; neither reaches this type. What remains is
//! terminal I/O failure, which aborts the session and is reported once
//! at the top level.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Raw-mode toggle, cursor movement, write, or event read failed.
    #[error("terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}
