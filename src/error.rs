use std::path::PathBuf;

use thiserror::Error;

/// Smallest terminal the game will draw into.
pub const MIN_COLS: u16 = 40;
pub const MIN_ROWS: u16 = 12;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal is {cols}x{rows}, need at least {}x{}", MIN_COLS, MIN_ROWS)]
    TerminalTooSmall { cols: u16, rows: u16 },

    #[error("cannot open log file {}: {source}", .path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Reject terminals too small to show the play area.
pub fn check_terminal_size(cols: u16, rows: u16) -> Result<(), GameError> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(GameError::TerminalTooSmall { cols, rows });
    }
    Ok(())
}
