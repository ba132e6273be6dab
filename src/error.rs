//! Error type for the terminal-facing layers.
//!
//! The engine itself never fails: missing geometry skips a cycle and
//! dismissal of a closed panel is a no-op. Errors only exist where the
//! adapter touches the terminal.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PanelError {
    #[error("terminal io: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, PanelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let err: PanelError = io::Error::other("boom").into();
        assert!(err.to_string().contains("boom"));
    }
}
