use thiserror::Error;

use crate::types::Color;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChessError {
    /// Board invariant violation: every legal position has one king per side.
    #[error("no {0:?} king on the board")]
    NoKingFound(Color),

    /// A move string that cannot be reconstructed against the current board.
    #[error("cannot parse move notation `{0}`")]
    Notation(String),

    #[error("invalid FEN: {0}")]
    Fen(String),
}
