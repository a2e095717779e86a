pub mod board;
pub mod error;
pub mod events;
pub mod moves;
pub mod notation;
pub mod rules;
pub mod types;

// Re-export core game logic (not engine-specific)
pub use board::{Board, Square};
pub use error::ChessError;
pub use events::{events_for_move, EventSink, GameEvent};
pub use moves::{castle_squares, Move};
pub use notation::{move_coords, parse_coords, parse_move, render_move};
pub use rules::{
    is_check, is_checkmate, is_move_legal, is_move_valid, is_stalemate, possible_moves,
    three_fold_repetition,
};
pub use types::{Color, Piece, PieceKind, Pos};
