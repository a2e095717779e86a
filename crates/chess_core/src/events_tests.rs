use super::*;
use crate::notation::parse_move;

fn pos(c: &str) -> Pos {
    Pos::from_coord(c).unwrap()
}

fn events_after(fen: &str, color: Color, notation: &str) -> Vec<GameEvent> {
    let before = Board::from_fen(fen).unwrap();
    let mv = parse_move(&before, color, notation).unwrap();
    let after = before.apply(&mv);
    events_for_move(&before, &after, &mv)
}

#[test]
fn test_quiet_move_emits_piece_moved_only() {
    let before = Board::startpos();
    let mv = parse_move(&before, Color::White, "e2e4").unwrap();
    let after = before.apply(&mv);
    assert_eq!(
        events_for_move(&before, &after, &mv),
        vec![GameEvent::PieceMoved {
            kind: PieceKind::Pawn,
            from: pos("e2"),
            to: pos("e4"),
        }]
    );
}

#[test]
fn test_capture_emits_piece_taken_after_piece_moved() {
    let events = events_after("7k/8/8/3p4/8/8/8/3RK3 w", Color::White, "d1d5");
    assert_eq!(
        events,
        vec![
            GameEvent::PieceMoved {
                kind: PieceKind::Rook,
                from: pos("d1"),
                to: pos("d5"),
            },
            GameEvent::PieceTaken {
                kind: PieceKind::Pawn,
                at: pos("d5"),
            },
        ]
    );
}

#[test]
fn test_castle_emits_king_move_then_castling_event() {
    let events = events_after("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Color::White, "e1g1");
    assert_eq!(
        events,
        vec![
            GameEvent::PieceMoved {
                kind: PieceKind::King,
                from: pos("e1"),
                to: pos("g1"),
            },
            GameEvent::KingsideCastling(Color::White),
        ]
    );
}

#[test]
fn test_checking_move_ends_with_check_event() {
    // Ra8+ with an escape square left for the black king.
    let events = events_after("7k/8/8/8/8/8/8/R5K1 w - - 0 1", Color::White, "a1a8");
    assert_eq!(events.last(), Some(&GameEvent::Check(Color::Black)));
}

#[test]
fn test_mating_move_ends_with_checkmate_event() {
    let events = events_after("7k/8/6K1/8/8/8/8/R7 w - - 0 1", Color::White, "a1a8");
    assert_eq!(events.last(), Some(&GameEvent::Checkmate(Color::Black)));
    assert!(!events.contains(&GameEvent::Check(Color::Black)));
}

#[test]
fn test_stalemating_move_emits_stalemate_then_draw() {
    let events = events_after("k7/2K5/8/1Q6/8/8/8/8 w - - 0 1", Color::White, "b5b6");
    assert_eq!(
        &events[1..],
        &[GameEvent::Stalemate(Color::Black), GameEvent::Draw]
    );
}

#[test]
fn test_castle_keeps_rook_move_unreported() {
    let events = events_after("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Color::Black, "e8c8");
    assert!(events.iter().all(|e| !matches!(
        e,
        GameEvent::PieceMoved {
            kind: PieceKind::Rook,
            ..
        }
    )));
    assert!(events.contains(&GameEvent::QueensideCastling(Color::Black)));
}
