//! Negamax search with alpha-beta pruning over cloned boards.
//!
//! Each explored move clones the parent board, applies the move and pushes
//! the result onto a transient search-history stack; the stack plus the
//! committed game history feeds threefold-repetition pruning. Ties between
//! equally scored moves are broken by a weighted coin flip so the engine
//! does not become deterministically exploitable; the random source is
//! injected so tests can seed it.

use chess_core::{possible_moves, three_fold_repetition, Board, Color, Move};
use rand::Rng;
use tracing::error;

use crate::eval::evaluate;

/// Mate scores are scaled by remaining depth so faster mates win.
const MATE_SCORE: i32 = 100_000;
const INFINITY: i32 = 10_000_000;

/// Search never goes shallower than this.
pub const MIN_DEPTH: u8 = 2;

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best move found (None only when the position has no legal moves).
    pub best_move: Option<Move>,
    /// Score of the best line, from the root mover's perspective.
    pub score: i32,
    /// Depth the tree was explored to.
    pub depth: u8,
    /// Number of positions visited.
    pub nodes: u64,
}

/// Pick the depth for the next search from the root branching factor and
/// the running calibration constant, aiming at a roughly constant
/// thinking-time budget.
pub fn select_depth(branching: usize, calibration: f64) -> u8 {
    if branching == 0 {
        return MIN_DEPTH;
    }
    let raw = (3.5 / (calibration * branching as f64)).log2() / 20f64.log2() + 1.0;
    if !raw.is_finite() || raw < MIN_DEPTH as f64 {
        MIN_DEPTH
    } else {
        raw as u8
    }
}

/// Updated calibration constant after a search that took `elapsed`
/// seconds over `branching` root moves at `depth`.
pub fn recalibrate(elapsed: f64, branching: usize, depth: u8) -> f64 {
    elapsed / (branching.max(1) as f64 * 20f64.powi(depth as i32 - 1))
}

/// Search `board` for the best move for `color`.
///
/// `permanent` is the committed game history; branches reproducing a
/// position three times across it and the search stack score as draws.
/// `tie_break_percent` is the probability (0-100) of adopting a move that
/// exactly ties the current best.
pub fn pick_best_move<R: Rng>(
    board: &Board,
    color: Color,
    permanent: &[Board],
    max_depth: u8,
    tie_break_percent: u8,
    rng: &mut R,
) -> SearchOutcome {
    let mut searcher = Searcher {
        root_color: color,
        max_depth,
        tie_break_percent,
        permanent,
        stack: vec![board.clone()],
        rng,
        nodes: 0,
        best_move: None,
    };
    let score = searcher.negamax(0, color, -INFINITY, INFINITY);

    let best_move = searcher.best_move.or_else(|| {
        // Should not normally happen; fall back to the first legal move
        // rather than failing to answer.
        let mut moves = possible_moves(board, color);
        moves.sort();
        moves.first().copied()
    });

    SearchOutcome {
        best_move,
        score,
        depth: max_depth,
        nodes: searcher.nodes,
    }
}

struct Searcher<'a, R: Rng> {
    root_color: Color,
    max_depth: u8,
    tie_break_percent: u8,
    permanent: &'a [Board],
    stack: Vec<Board>,
    rng: &'a mut R,
    nodes: u64,
    best_move: Option<Move>,
}

impl<R: Rng> Searcher<'_, R> {
    fn negamax(&mut self, depth: u8, color: Color, mut alpha: i32, beta: i32) -> i32 {
        let board = self.stack[self.stack.len() - 1].clone();
        self.nodes += 1;

        let mut moves = possible_moves(&board, color);
        moves.sort();

        if moves.is_empty() {
            let king = match board.king_position(color) {
                Ok(p) => p,
                Err(e) => {
                    // Corrupted board state; abandon the branch.
                    error!(%e, "search reached a board without a king");
                    return 0;
                }
            };
            if board.is_attacked(color.other(), king) {
                // Scaled so that nearer mates outscore distant ones.
                return -MATE_SCORE * (self.max_depth as i32 - depth as i32 + 1);
            }
            return 0; // stalemate
        }

        if depth >= self.max_depth {
            let score = evaluate(&board, self.root_color);
            // Negamax convention: the caller negates on the way up, so
            // odd plies report the sign-flipped static score.
            return if depth % 2 == 1 { -score } else { score };
        }

        let mut best = -INFINITY;
        for mv in moves {
            let next = board.apply(&mv);
            self.stack.push(next);
            let value = if three_fold_repetition(self.permanent, &self.stack) {
                // Forced-draw pruning: this branch is a repetition draw,
                // no need to descend.
                0
            } else {
                -self.negamax(depth + 1, color.other(), -beta, -alpha)
            };
            self.stack.pop();

            if value == best {
                // Weighted coin flip between equally good moves.
                if self.rng.gen_range(0..100) < self.tie_break_percent {
                    if depth == 0 {
                        self.best_move = Some(mv);
                    }
                }
            } else if value > best {
                best = value;
                if depth == 0 {
                    self.best_move = Some(mv);
                }
                if best > alpha {
                    alpha = best;
                }
                if alpha >= beta {
                    break;
                }
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
