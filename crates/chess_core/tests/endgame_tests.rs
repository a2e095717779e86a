//! End-of-game detection through the public API: checkmate, stalemate and
//! threefold repetition over committed game history.

use chess_core::{
    is_checkmate, is_stalemate, parse_move, possible_moves, three_fold_repetition, Board, Color,
};

#[test]
fn test_rook_back_rank_mate_is_detected() {
    let board = Board::from_fen("R6k/8/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let king = board.king_position(Color::Black).unwrap();
    assert!(is_checkmate(&board, king));
    assert!(possible_moves(&board, Color::Black).is_empty());
}

#[test]
fn test_queen_stalemate_is_detected() {
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(is_stalemate(&board, Color::Black));
    let king = board.king_position(Color::Black).unwrap();
    assert!(!is_checkmate(&board, king));
}

#[test]
fn test_knight_shuffle_reaches_threefold_repetition() {
    // Both sides bounce a knight out and back. Each four-ply cycle
    // reproduces the same position (the startpos itself never repeats:
    // its knights still carry unset moved-flags).
    let cycle = ["g1f3", "g8f6", "f3g1", "f6g8"];

    let mut board = Board::startpos();
    let mut history: Vec<Board> = Vec::new();
    let mut seen_threefold_at = None;

    for lap in 0..3 {
        for (i, notation) in cycle.iter().enumerate() {
            let color = if i % 2 == 0 { Color::White } else { Color::Black };
            let mv = parse_move(&board, color, notation).unwrap();
            board = board.apply(&mv);
            history.push(board.clone());
            if three_fold_repetition(&history, &[]) && seen_threefold_at.is_none() {
                seen_threefold_at = Some(lap);
            }
        }
        match lap {
            0 | 1 => assert_eq!(seen_threefold_at, None, "repetition reported too early"),
            _ => {}
        }
    }

    // The post-cycle position occurs after laps 0, 1 and 2: the third
    // occurrence triggers the detection.
    assert_eq!(seen_threefold_at, Some(2));
}

#[test]
fn test_repetition_spans_permanent_and_search_history() {
    let cycle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let mut board = Board::startpos();
    let mut permanent: Vec<Board> = Vec::new();
    for lap in 0..3 {
        for (i, notation) in cycle.iter().enumerate() {
            let color = if i % 2 == 0 { Color::White } else { Color::Black };
            let mv = parse_move(&board, color, notation).unwrap();
            board = board.apply(&mv);
            if lap == 2 && i == cycle.len() - 1 {
                // The final recurrence happens inside a search stack.
                let search = vec![board.clone()];
                assert!(three_fold_repetition(&permanent, &search));
                return;
            }
            permanent.push(board.clone());
        }
    }
    unreachable!("loop must hand the last position to the search stack");
}
