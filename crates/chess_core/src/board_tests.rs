use super::*;
use crate::error::ChessError;
use crate::moves::Move;
use crate::types::{Color, Piece, PieceKind, Pos};

fn pos(c: &str) -> Pos {
    Pos::from_coord(c).unwrap()
}

#[test]
fn test_startpos_layout() {
    let b = Board::startpos();
    assert_eq!(
        b.piece_at(pos("e1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        b.piece_at(pos("d8")),
        Some(Piece::new(Color::Black, PieceKind::Queen))
    );
    assert_eq!(
        b.piece_at(pos("a2")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert_eq!(b.piece_at(pos("e4")), None);
    assert_eq!(b.color_at(pos("g8")), Some(Color::Black));
    assert!(!b.has_moved(pos("e1")));
}

#[test]
fn test_from_fen_startpos_matches_builder() {
    let fen = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    let b = Board::from_fen(fen).unwrap();
    assert_eq!(b, Board::startpos());
}

#[test]
fn test_from_fen_castling_rights_map_to_moved_flags() {
    let b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
    // White kingside right present: king and h1 rook unmoved.
    assert!(!b.has_moved(pos("e1")));
    assert!(!b.has_moved(pos("h1")));
    // White queenside right absent: a1 rook counts as moved.
    assert!(b.has_moved(pos("a1")));
    // Black has only the queenside right.
    assert!(!b.has_moved(pos("e8")));
    assert!(!b.has_moved(pos("a8")));
    assert!(b.has_moved(pos("h8")));
}

#[test]
fn test_from_fen_rejects_garbage() {
    assert!(Board::from_fen("").is_err());
    assert!(Board::from_fen("8/8/8/8/8/8/8 w - - 0 1").is_err());
    assert!(Board::from_fen("9/8/8/8/8/8/8/8 w - - 0 1").is_err());
    assert!(Board::from_fen("xnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w").is_err());
}

#[test]
fn test_apply_quiet_move_updates_squares() {
    let b = Board::startpos();
    let mv = Move::Quiet {
        color: Color::White,
        from: pos("e2"),
        to: pos("e4"),
        kind: PieceKind::Pawn,
        is_capture: false,
        is_promotion: false,
    };
    let after = b.apply(&mv);
    assert_eq!(after.piece_at(pos("e2")), None);
    assert_eq!(
        after.piece_at(pos("e4")),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert!(after.has_moved(pos("e4")));
    // The original board is untouched.
    assert!(b.piece_at(pos("e2")).is_some());
}

#[test]
fn test_apply_promotion_queens_the_pawn() {
    let b = Board::from_fen("7k/P7/8/8/8/8/8/7K w - - 0 1").unwrap();
    let mv = Move::Quiet {
        color: Color::White,
        from: pos("a7"),
        to: pos("a8"),
        kind: PieceKind::Pawn,
        is_capture: false,
        is_promotion: true,
    };
    let after = b.apply(&mv);
    assert_eq!(
        after.piece_at(pos("a8")),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
}

#[test]
fn test_apply_kingside_castle_moves_both_pieces() {
    let b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
    let after = b.apply(&Move::KingsideCastle(Color::White));
    assert_eq!(
        after.piece_at(pos("g1")),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        after.piece_at(pos("f1")),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert_eq!(after.piece_at(pos("e1")), None);
    assert_eq!(after.piece_at(pos("h1")), None);
    assert!(after.square(pos("g1")).castled);
}

#[test]
fn test_apply_queenside_castle_black() {
    let b = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
    let after = b.apply(&Move::QueensideCastle(Color::Black));
    assert_eq!(
        after.piece_at(pos("c8")),
        Some(Piece::new(Color::Black, PieceKind::King))
    );
    assert_eq!(
        after.piece_at(pos("d8")),
        Some(Piece::new(Color::Black, PieceKind::Rook))
    );
    assert_eq!(after.piece_at(pos("a8")), None);
}

#[test]
fn test_king_position() {
    let b = Board::startpos();
    assert_eq!(b.king_position(Color::White).unwrap(), pos("e1"));
    assert_eq!(b.king_position(Color::Black).unwrap(), pos("e8"));

    let empty = Board::empty();
    assert_eq!(
        empty.king_position(Color::White),
        Err(ChessError::NoKingFound(Color::White))
    );
}

#[test]
fn test_pawns_attack_diagonally_not_forward() {
    let b = Board::from_fen("7k/8/8/8/8/8/4P3/7K w - - 0 1").unwrap();
    assert!(b.is_attacked(Color::White, pos("d3")));
    assert!(b.is_attacked(Color::White, pos("f3")));
    assert!(!b.is_attacked(Color::White, pos("e3")));
}

#[test]
fn test_is_attacked_through_blockers() {
    // Rook a1 sees along the first rank until the king on e1.
    let b = Board::from_fen("7k/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(b.is_attacked(Color::White, pos("c1")));
    assert!(!b.is_attacked(Color::White, pos("g1")));
}
