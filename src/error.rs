use thiserror::Error;

use crate::TermInt;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("board {width}x{height} has no playable cell")]
    InvalidBoard { width: TermInt, height: TermInt },

    #[error("starting snake does not fit on a {width}x{height} board")]
    SnakeOutOfBounds { width: TermInt, height: TermInt },

    #[error("no free cell left to place an apple")]
    BoardFull,

    #[error("input thread panicked")]
    InputPanicked,

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
