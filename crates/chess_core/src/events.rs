//! Game-event reporting toward external observers.
//!
//! The core does not implement listeners; it derives an ordered batch of
//! typed events per committed move and hands them to whatever
//! [`EventSink`]s the embedding registers. Event order within a batch is
//! fixed: piece-moved, piece-taken (if capture), castling, then exactly
//! one of checkmate / check / stalemate+draw when one applies.

use crate::board::Board;
use crate::moves::{castle_squares, Move};
use crate::rules::{is_check, is_checkmate, is_stalemate};
use crate::types::{Color, PieceKind, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    PieceMoved {
        kind: PieceKind,
        from: Pos,
        to: Pos,
    },
    PieceTaken {
        kind: PieceKind,
        at: Pos,
    },
    KingsideCastling(Color),
    QueensideCastling(Color),
    Check(Color),
    Checkmate(Color),
    Stalemate(Color),
    Draw,
    Disqualified(Color),
}

/// Capability interface the core notifies; implemented by the embedding.
pub trait EventSink {
    fn on_event(&mut self, event: &GameEvent);
}

/// The ordered event batch for one committed, validated move.
/// `before` is the board the move was played on, `after` the result.
pub fn events_for_move(before: &Board, after: &Board, mv: &Move) -> Vec<GameEvent> {
    let mut events = Vec::with_capacity(4);
    let color = mv.color();

    match *mv {
        Move::Quiet {
            from, to, kind, is_capture, ..
        } => {
            events.push(GameEvent::PieceMoved { kind, from, to });
            if is_capture {
                if let Some(taken) = before.piece_at(to) {
                    events.push(GameEvent::PieceTaken {
                        kind: taken.kind,
                        at: to,
                    });
                }
            }
        }
        Move::KingsideCastle(_) | Move::QueensideCastle(_) => {
            // The rook's move is implied by the castling event and is
            // deliberately not reported on its own.
            let (kf, kt, _, _) =
                castle_squares(mv).expect("castle_squares covers both castle variants");
            events.push(GameEvent::PieceMoved {
                kind: PieceKind::King,
                from: kf,
                to: kt,
            });
            events.push(match mv {
                Move::KingsideCastle(c) => GameEvent::KingsideCastling(*c),
                _ => GameEvent::QueensideCastling(color),
            });
        }
    }

    let opponent = color.other();
    if let Ok(king) = after.king_position(opponent) {
        if is_checkmate(after, king) {
            events.push(GameEvent::Checkmate(opponent));
        } else if is_check(after, king) {
            events.push(GameEvent::Check(opponent));
        } else if is_stalemate(after, opponent) {
            events.push(GameEvent::Stalemate(opponent));
            events.push(GameEvent::Draw);
        }
    }

    events
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
