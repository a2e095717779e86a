//! Coordinate-pair move notation ("e2e4") at the protocol boundary.
//!
//! Parsing reconstructs a fully-typed [`Move`] by matching the coordinates
//! against the legal moves of the current board, so capture, promotion and
//! castling flags always come out right. Rendering is the exact inverse:
//! a castle renders as its king's from/to squares.

use crate::board::Board;
use crate::error::ChessError;
use crate::moves::{castle_squares, Move};
use crate::rules::possible_moves;
use crate::types::{Color, Pos};

/// Split a move string into its from/to coordinates, without consulting
/// any board. Fails only on malformed input.
pub fn parse_coords(txt: &str) -> Result<(Pos, Pos), ChessError> {
    let bad = || ChessError::Notation(txt.to_string());
    if txt.len() < 4 || !txt.is_char_boundary(2) || !txt.is_char_boundary(4) {
        return Err(bad());
    }
    let from = Pos::from_coord(&txt[0..2]).ok_or_else(bad)?;
    let to = Pos::from_coord(&txt[2..4]).ok_or_else(bad)?;
    // A trailing promotion letter is tolerated; promotion is always to a
    // queen in this move model.
    if txt.len() > 5 || (txt.len() == 5 && !matches!(txt.as_bytes()[4], b'q' | b'Q')) {
        return Err(bad());
    }
    Ok((from, to))
}

/// Parse a move string against the current board. Fails if the string is
/// malformed or names no legal move for `color`.
pub fn parse_move(board: &Board, color: Color, txt: &str) -> Result<Move, ChessError> {
    let (from, to) = parse_coords(txt)?;
    possible_moves(board, color)
        .into_iter()
        .find(|mv| move_coords(mv) == (from, to))
        .ok_or_else(|| ChessError::Notation(txt.to_string()))
}

/// Render a move back to coordinate notation.
pub fn render_move(mv: &Move) -> String {
    let (from, to) = move_coords(mv);
    format!("{}{}", from.coord(), to.coord())
}

/// The from/to square pair a move renders to (a castle uses its king's
/// squares).
pub fn move_coords(mv: &Move) -> (Pos, Pos) {
    match *mv {
        Move::Quiet { from, to, .. } => (from, to),
        Move::KingsideCastle(_) | Move::QueensideCastle(_) => {
            let (kf, kt, _, _) =
                castle_squares(mv).expect("castle_squares covers both castle variants");
            (kf, kt)
        }
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
