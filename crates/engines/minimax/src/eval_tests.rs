use super::*;
use chess_core::Board;

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 100);
    assert_eq!(piece_value(PieceKind::Knight), 300);
    assert_eq!(piece_value(PieceKind::Bishop), 300);
    assert_eq!(piece_value(PieceKind::Rook), 500);
    assert_eq!(piece_value(PieceKind::Queen), 900);
    assert_eq!(piece_value(PieceKind::King), 0);
}

#[test]
fn test_startpos_is_balanced() {
    let b = Board::startpos();
    assert_eq!(evaluate(&b, Color::White), 0);
    assert_eq!(evaluate(&b, Color::Black), 0);
}

#[test]
fn test_evaluation_is_antisymmetric() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "4k3/8/8/8/8/8/8/R3K3 w - - 0 1",
        "r3k2r/p1ppqpb1/bn2pnp1/3P4/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1",
        "k7/2K5/1Q6/8/8/8/8/8 b - - 0 1",
    ];
    for fen in fens {
        let b = Board::from_fen(fen).unwrap();
        assert_eq!(
            evaluate(&b, Color::White),
            -evaluate(&b, Color::Black),
            "antisymmetry broken for {fen}"
        );
    }
}

#[test]
fn test_extra_material_scores_positive() {
    let b = Board::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(evaluate(&b, Color::White) > 0);
    assert!(evaluate(&b, Color::Black) < 0);
}

#[test]
fn test_queen_outweighs_rook() {
    let b = Board::from_fen("3qk3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
    assert!(evaluate(&b, Color::White) < 0);
}

#[test]
fn test_pawn_shield_needs_two_pawns() {
    let shielded = Board::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1").unwrap();
    let king = shielded.king_position(Color::White).unwrap();
    assert_eq!(pawn_shield(&shielded, Color::White, king), PAWN_SHIELD_BONUS);

    let bare = Board::from_fen("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1").unwrap();
    let king = bare.king_position(Color::White).unwrap();
    assert_eq!(pawn_shield(&bare, Color::White, king), 0);
}

#[test]
fn test_open_files_near_king_scaling() {
    let closed = Board::from_fen("4k3/8/8/8/8/8/3P1P2/4K3 w - - 0 1").unwrap();
    let king = closed.king_position(Color::White).unwrap();
    assert_eq!(open_files_near_king(&closed, king), 0);

    let half = Board::from_fen("4k3/8/8/8/8/8/3P4/4K3 w - - 0 1").unwrap();
    let king = half.king_position(Color::White).unwrap();
    assert_eq!(open_files_near_king(&half, king), OPEN_FILE_MALUS_ONE);

    let open = Board::from_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let king = open.king_position(Color::White).unwrap();
    assert_eq!(open_files_near_king(&open, king), OPEN_FILE_MALUS_BOTH);
}

#[test]
fn test_isolated_pawn_streaks_counts_ended_runs() {
    // Pawns on a2, a3 and a5: the a2-a3 run ends at rank 4, the a5 run
    // ends above it.
    let b = Board::from_fen("4k3/8/8/P7/8/P7/P7/4K3 w - - 0 1").unwrap();
    assert_eq!(isolated_pawn_streaks(&b, Color::White), 2);
    assert_eq!(isolated_pawn_streaks(&b, Color::Black), 0);

    // A single contiguous run counts once.
    let single = Board::from_fen("4k3/8/8/8/8/P7/P7/4K3 w - - 0 1").unwrap();
    assert_eq!(isolated_pawn_streaks(&single, Color::White), 1);
}

#[test]
fn test_doubled_pawns_penalized() {
    // Same material, but one side stacks its pawns.
    let doubled = Board::from_fen("4k3/8/8/8/8/4P3/4P3/4K3 w - - 0 1").unwrap();
    let spread = Board::from_fen("4k3/8/8/8/8/8/3PP3/4K3 w - - 0 1").unwrap();
    assert!(side_score(&doubled, Color::White) < side_score(&spread, Color::White));
}

#[test]
fn test_square_bonus_mirrors_for_black() {
    let e4 = Pos::from_coord("e4").unwrap();
    let e5 = Pos::from_coord("e5").unwrap();
    assert_eq!(
        square_bonus(PieceKind::Pawn, Color::White, e4),
        square_bonus(PieceKind::Pawn, Color::Black, e5)
    );
    let g1 = Pos::from_coord("g1").unwrap();
    let g8 = Pos::from_coord("g8").unwrap();
    assert_eq!(
        square_bonus(PieceKind::King, Color::White, g1),
        square_bonus(PieceKind::King, Color::Black, g8)
    );
}
