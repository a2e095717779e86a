//! Pure rule checking over a [`Board`]: pseudo-legality, legality under
//! check constraints, legal-move enumeration, attack/check/mate/stalemate
//! detection and threefold repetition.

use crate::board::Board;
use crate::moves::{castle_squares, Move};
use crate::types::{Color, Piece, PieceKind, Pos};

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

const DIAG_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
const ORTHO_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// True if any piece of `by` has a pseudo-legal move landing on `target`.
/// Scans outward from the target square, which is equivalent to scanning
/// every attacker and much cheaper.
pub fn square_attacked(board: &Board, by: Color, target: Pos) -> bool {
    // Pawns capture diagonally toward their forward direction, so an
    // attacking pawn sits one rank behind the target in that direction.
    for df in [-1, 1] {
        if let Some(s) = target.offset(df, -by.forward()) {
            if board.piece_at(s) == Some(Piece::new(by, PieceKind::Pawn)) {
                return true;
            }
        }
    }

    for (df, dr) in KNIGHT_DELTAS {
        if let Some(s) = target.offset(df, dr) {
            if board.piece_at(s) == Some(Piece::new(by, PieceKind::Knight)) {
                return true;
            }
        }
    }

    for (df, dr) in KING_DELTAS {
        if let Some(s) = target.offset(df, dr) {
            if board.piece_at(s) == Some(Piece::new(by, PieceKind::King)) {
                return true;
            }
        }
    }

    for (df, dr) in DIAG_DIRS {
        if let Some(kind) = first_piece_along(board, target, df, dr, by) {
            if kind == PieceKind::Bishop || kind == PieceKind::Queen {
                return true;
            }
        }
    }
    for (df, dr) in ORTHO_DIRS {
        if let Some(kind) = first_piece_along(board, target, df, dr, by) {
            if kind == PieceKind::Rook || kind == PieceKind::Queen {
                return true;
            }
        }
    }

    false
}

/// Kind of the first piece met walking from `start` in a direction,
/// `None` if the ray is empty or the first piece is not of `color`.
fn first_piece_along(board: &Board, start: Pos, df: i8, dr: i8, color: Color) -> Option<PieceKind> {
    let mut cur = start.offset(df, dr);
    while let Some(pos) = cur {
        if let Some(pc) = board.piece_at(pos) {
            if pc.color == color {
                return Some(pc.kind);
            }
            return None;
        }
        cur = pos.offset(df, dr);
    }
    None
}

/// All squares strictly between `from` and `to` (aligned on a rank, file
/// or diagonal) are empty.
fn path_clear(board: &Board, from: Pos, to: Pos) -> bool {
    let df = (to.file as i8 - from.file as i8).signum();
    let dr = (to.rank as i8 - from.rank as i8).signum();
    let mut cur = from.offset(df, dr);
    while let Some(pos) = cur {
        if pos == to {
            return true;
        }
        if board.piece_at(pos).is_some() {
            return false;
        }
        cur = pos.offset(df, dr);
    }
    false
}

/// Pseudo-legality: the move obeys its piece's movement pattern and the
/// occupancy rules, ignoring whether it exposes the mover's own king.
pub fn is_move_valid(board: &Board, mv: &Move) -> bool {
    match *mv {
        Move::Quiet {
            color,
            from,
            to,
            kind,
            is_capture,
            is_promotion,
        } => {
            if from == to {
                return false;
            }
            if board.piece_at(from) != Some(Piece::new(color, kind)) {
                return false;
            }
            match board.piece_at(to) {
                Some(pc) => {
                    if !is_capture || pc.color == color {
                        return false;
                    }
                }
                None => {
                    if is_capture {
                        return false;
                    }
                }
            }
            // The promotion flag is part of the move's identity: it must
            // be set exactly when a pawn reaches its promotion rank.
            let promotes = kind == PieceKind::Pawn && to.rank == color.promotion_rank();
            if is_promotion != promotes {
                return false;
            }

            let df = to.file as i8 - from.file as i8;
            let dr = to.rank as i8 - from.rank as i8;
            match kind {
                PieceKind::Pawn => {
                    let fwd = color.forward();
                    if is_capture {
                        df.abs() == 1 && dr == fwd
                    } else if df != 0 {
                        false
                    } else if dr == fwd {
                        true
                    } else if dr == 2 * fwd {
                        from.rank == color.pawn_rank()
                            && !board.has_moved(from)
                            && path_clear(board, from, to)
                    } else {
                        false
                    }
                }
                PieceKind::Knight => {
                    (df.abs() == 1 && dr.abs() == 2) || (df.abs() == 2 && dr.abs() == 1)
                }
                PieceKind::Bishop => df.abs() == dr.abs() && path_clear(board, from, to),
                PieceKind::Rook => (df == 0) != (dr == 0) && path_clear(board, from, to),
                PieceKind::Queen => {
                    (df.abs() == dr.abs() || (df == 0) != (dr == 0))
                        && path_clear(board, from, to)
                }
                PieceKind::King => df.abs().max(dr.abs()) == 1,
            }
        }
        Move::KingsideCastle(color) | Move::QueensideCastle(color) => {
            let (kf, kt, rf, _) =
                castle_squares(mv).expect("castle_squares covers both castle variants");
            if board.piece_at(kf) != Some(Piece::new(color, PieceKind::King))
                || board.has_moved(kf)
                || board.piece_at(rf) != Some(Piece::new(color, PieceKind::Rook))
                || board.has_moved(rf)
            {
                return false;
            }
            // Every square between king and rook must be empty.
            let (lo, hi) = (kf.file.min(rf.file) + 1, kf.file.max(rf.file));
            for file in lo..hi {
                if board.piece_at(Pos::new(file, kf.rank)).is_some() {
                    return false;
                }
            }
            // The king may not castle out of, through, or into check.
            let enemy = color.other();
            let step = if kt.file > kf.file { 1i8 } else { -1 };
            let mut cur = kf;
            loop {
                if board.is_attacked(enemy, cur) {
                    return false;
                }
                if cur == kt {
                    break;
                }
                cur = match cur.offset(step, 0) {
                    Some(p) => p,
                    None => return false,
                };
            }
            true
        }
    }
}

/// Legality: pseudo-legal and the resulting position does not leave the
/// mover's own king attacked.
pub fn is_move_legal(board: &Board, mv: &Move) -> bool {
    if !is_move_valid(board, mv) {
        return false;
    }
    let after = board.apply(mv);
    match after.king_position(mv.color()) {
        Ok(king) => !after.is_attacked(mv.color().other(), king),
        // No king afterwards means the board was corrupt to begin with;
        // such a move is never legal.
        Err(_) => false,
    }
}

/// Enumerate all legal moves for `color` in a deterministic order
/// (rank-major square scan, fixed delta tables). The search relies on
/// this determinism for reproducibility.
pub fn possible_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(64);
    for (from, pc) in board.pieces() {
        if pc.color != color {
            continue;
        }
        match pc.kind {
            PieceKind::Pawn => gen_pawn(board, from, color, &mut out),
            PieceKind::Knight => gen_steps(board, from, color, PieceKind::Knight, &KNIGHT_DELTAS, &mut out),
            PieceKind::Bishop => gen_slider(board, from, color, PieceKind::Bishop, &DIAG_DIRS, &mut out),
            PieceKind::Rook => gen_slider(board, from, color, PieceKind::Rook, &ORTHO_DIRS, &mut out),
            PieceKind::Queen => {
                gen_slider(board, from, color, PieceKind::Queen, &DIAG_DIRS, &mut out);
                gen_slider(board, from, color, PieceKind::Queen, &ORTHO_DIRS, &mut out);
            }
            PieceKind::King => gen_steps(board, from, color, PieceKind::King, &KING_DELTAS, &mut out),
        }
    }
    out.push(Move::KingsideCastle(color));
    out.push(Move::QueensideCastle(color));
    out.retain(|mv| is_move_legal(board, mv));
    out
}

fn quiet(color: Color, from: Pos, to: Pos, kind: PieceKind, is_capture: bool) -> Move {
    let is_promotion = kind == PieceKind::Pawn && to.rank == color.promotion_rank();
    Move::Quiet {
        color,
        from,
        to,
        kind,
        is_capture,
        is_promotion,
    }
}

fn gen_pawn(board: &Board, from: Pos, color: Color, out: &mut Vec<Move>) {
    let fwd = color.forward();
    if let Some(to) = from.offset(0, fwd) {
        if board.piece_at(to).is_none() {
            out.push(quiet(color, from, to, PieceKind::Pawn, false));
            if from.rank == color.pawn_rank() && !board.has_moved(from) {
                if let Some(to2) = from.offset(0, 2 * fwd) {
                    if board.piece_at(to2).is_none() {
                        out.push(quiet(color, from, to2, PieceKind::Pawn, false));
                    }
                }
            }
        }
    }
    for df in [-1, 1] {
        if let Some(to) = from.offset(df, fwd) {
            if let Some(pc) = board.piece_at(to) {
                if pc.color != color {
                    out.push(quiet(color, from, to, PieceKind::Pawn, true));
                }
            }
        }
    }
}

fn gen_steps(
    board: &Board,
    from: Pos,
    color: Color,
    kind: PieceKind,
    deltas: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in deltas {
        if let Some(to) = from.offset(df, dr) {
            match board.piece_at(to) {
                None => out.push(quiet(color, from, to, kind, false)),
                Some(pc) if pc.color != color => {
                    out.push(quiet(color, from, to, kind, true))
                }
                _ => {}
            }
        }
    }
}

fn gen_slider(
    board: &Board,
    from: Pos,
    color: Color,
    kind: PieceKind,
    dirs: &[(i8, i8)],
    out: &mut Vec<Move>,
) {
    for &(df, dr) in dirs {
        let mut cur = from.offset(df, dr);
        while let Some(to) = cur {
            match board.piece_at(to) {
                None => out.push(quiet(color, from, to, kind, false)),
                Some(pc) => {
                    if pc.color != color {
                        out.push(quiet(color, from, to, kind, true));
                    }
                    break;
                }
            }
            cur = to.offset(df, dr);
        }
    }
}

/// The king on `king_pos` is attacked by the opposing color. Returns false
/// for an empty square.
pub fn is_check(board: &Board, king_pos: Pos) -> bool {
    match board.color_at(king_pos) {
        Some(color) => board.is_attacked(color.other(), king_pos),
        None => false,
    }
}

/// Checked and no legal move exists for the defending color.
pub fn is_checkmate(board: &Board, king_pos: Pos) -> bool {
    let color = match board.color_at(king_pos) {
        Some(c) => c,
        None => return false,
    };
    is_check(board, king_pos) && possible_moves(board, color).is_empty()
}

/// Not in check yet no legal move exists. Mutually exclusive with
/// checkmate for any (board, color).
pub fn is_stalemate(board: &Board, color: Color) -> bool {
    let king = match board.king_position(color) {
        Ok(p) => p,
        Err(_) => return false,
    };
    !is_check(board, king) && possible_moves(board, color).is_empty()
}

/// True if the current (last) board state appears at least three times
/// across the committed game history and the in-progress search history.
/// Equality is exact, including the moved/castled flags, so positions
/// differing only in castling rights never count as repetitions.
pub fn three_fold_repetition(permanent: &[Board], search: &[Board]) -> bool {
    let current = match search.last().or_else(|| permanent.last()) {
        Some(b) => b,
        None => return false,
    };
    permanent
        .iter()
        .chain(search.iter())
        .filter(|b| *b == current)
        .count()
        >= 3
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
