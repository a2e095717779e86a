//! Static position evaluation.
//!
//! `evaluate` is antisymmetric by construction: it scores each side with
//! the same `side_score` function and reports the difference, so
//! `evaluate(b, White) == -evaluate(b, Black)` for any board.

use chess_core::{Board, Color, PieceKind, Pos};

/// Raw scores are reported divided by this normalization constant.
const SCALE: i32 = 50;

const BISHOP_PAIR_BONUS: i32 = 50;
const NO_PAWNS_MALUS: i32 = 10;
const PAWN_SHIELD_BONUS: i32 = 50;
const OPEN_FILE_MALUS_BOTH: i32 = 60;
const OPEN_FILE_MALUS_ONE: i32 = 20;
const PAWN_STRUCTURE_MALUS: i32 = 50;

pub fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 100,
        PieceKind::Knight => 300,
        PieceKind::Bishop => 300,
        PieceKind::Rook => 500,
        PieceKind::Queen => 900,
        PieceKind::King => 0,
    }
}

/// Evaluate `board` from `color`'s perspective; positive favors `color`.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    (side_score(board, color) - side_score(board, color.other())) / SCALE
}

fn side_score(board: &Board, color: Color) -> i32 {
    let king = board.king_position(color).ok();

    let mut material = 0;
    let mut pst = 0;
    let mut tropism = 0;
    let mut bishops = 0;
    let mut pawns = 0;
    let mut pawns_per_file = [0i32; 8];

    for (pos, pc) in board.pieces() {
        // Distance of every piece to our king, doubled for our queens and
        // halved for our rooks and bishops.
        if let Some(king) = king {
            let mut dist = pos.distance(king);
            if pc.color == color {
                match pc.kind {
                    PieceKind::Queen => dist *= 2,
                    PieceKind::Rook | PieceKind::Bishop => dist /= 2,
                    _ => {}
                }
            }
            tropism += dist;
        }

        if pc.color != color {
            continue;
        }
        material += piece_value(pc.kind);
        pst += square_bonus(pc.kind, color, pos);
        match pc.kind {
            PieceKind::Bishop => bishops += 1,
            PieceKind::Pawn => {
                pawns += 1;
                pawns_per_file[pos.file as usize] += 1;
            }
            _ => {}
        }
    }

    let mut adjustment = 0;
    if bishops >= 2 {
        adjustment += BISHOP_PAIR_BONUS;
    }
    if pawns == 0 {
        adjustment -= NO_PAWNS_MALUS;
    }
    if let Some(king) = king {
        adjustment += pawn_shield(board, color, king);
        adjustment -= open_files_near_king(board, king);
    }

    let doubled = pawns_per_file.iter().filter(|&&n| n >= 2).count() as i32;
    let structure = doubled + isolated_pawn_streaks(board, color);

    material + pst / 2 + adjustment - PAWN_STRUCTURE_MALUS * structure + tropism
}

/// Bonus for >= 2 own pawns on the three files in front of the king.
fn pawn_shield(board: &Board, color: Color, king: Pos) -> i32 {
    let mut count = 0;
    for df in -1..=1 {
        if let Some(pos) = king.offset(df, color.forward()) {
            if let Some(pc) = board.piece_at(pos) {
                if pc.color == color && pc.kind == PieceKind::Pawn {
                    count += 1;
                }
            }
        }
    }
    if count >= 2 {
        PAWN_SHIELD_BONUS
    } else {
        0
    }
}

/// Penalty scaled by how many of the files adjacent to the king carry no
/// pawns of either color.
fn open_files_near_king(board: &Board, king: Pos) -> i32 {
    let mut open = 0;
    for df in [-1i8, 1] {
        let file = king.file as i8 + df;
        if !(0..8).contains(&file) {
            continue;
        }
        let has_pawn = (0..8u8).any(|rank| {
            board
                .piece_at(Pos::new(file as u8, rank))
                .is_some_and(|pc| pc.kind == PieceKind::Pawn)
        });
        if !has_pawn {
            open += 1;
        }
    }
    match open {
        2 => OPEN_FILE_MALUS_BOTH,
        1 => OPEN_FILE_MALUS_ONE,
        _ => 0,
    }
}

/// Counts pawn streaks rank by rank: a run of consecutive ranks holding at
/// least one own pawn that ends with a fully vacated rank counts one
/// penalty unit.
fn isolated_pawn_streaks(board: &Board, color: Color) -> i32 {
    let mut streaks = 0;
    let mut present = false;
    for rank in 0..8u8 {
        let mut met = 0;
        for file in 0..8u8 {
            if let Some(pc) = board.piece_at(Pos::new(file, rank)) {
                if pc.color == color && pc.kind == PieceKind::Pawn {
                    present = true;
                    met += 1;
                }
            }
        }
        if present && met == 0 {
            present = false;
            streaks += 1;
        }
    }
    streaks
}

/// Piece-square bonus, mirrored across the rank axis for Black.
fn square_bonus(kind: PieceKind, color: Color, pos: Pos) -> i32 {
    let rank = match color {
        Color::White => pos.rank,
        Color::Black => 7 - pos.rank,
    } as usize;
    let file = pos.file as usize;
    match kind {
        PieceKind::Pawn => PAWN_TABLE[rank][file],
        PieceKind::Knight => KNIGHT_TABLE[rank][file],
        PieceKind::Bishop => BISHOP_TABLE[rank][file],
        PieceKind::Rook => ROOK_TABLE[rank][file],
        PieceKind::Queen => QUEEN_TABLE[rank][file],
        PieceKind::King => KING_TABLE[rank][file],
    }
}

// Piece-square tables indexed [rank][file] with rank 0 = own back rank.

const PAWN_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 0, 0, 0, 0, 0],
    [5, 10, 10, -20, -20, 10, 10, 5],
    [5, -5, -10, 0, 0, -10, -5, 5],
    [0, 0, 0, 20, 20, 0, 0, 0],
    [5, 5, 10, 25, 25, 10, 5, 5],
    [10, 10, 20, 30, 30, 20, 10, 10],
    [50, 50, 50, 50, 50, 50, 50, 50],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const KNIGHT_TABLE: [[i32; 8]; 8] = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20, 0, 5, 5, 0, -20, -40],
    [-30, 5, 10, 15, 15, 10, 5, -30],
    [-30, 0, 15, 20, 20, 15, 0, -30],
    [-30, 5, 15, 20, 20, 15, 5, -30],
    [-30, 0, 10, 15, 15, 10, 0, -30],
    [-40, -20, 0, 0, 0, 0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

const BISHOP_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10, 5, 0, 0, 0, 0, 5, -10],
    [-10, 10, 10, 10, 10, 10, 10, -10],
    [-10, 0, 10, 10, 10, 10, 0, -10],
    [-10, 5, 5, 10, 10, 5, 5, -10],
    [-10, 0, 5, 10, 10, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

const ROOK_TABLE: [[i32; 8]; 8] = [
    [0, 0, 0, 5, 5, 0, 0, 0],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [-5, 0, 0, 0, 0, 0, 0, -5],
    [5, 10, 10, 10, 10, 10, 10, 5],
    [0, 0, 0, 0, 0, 0, 0, 0],
];

const QUEEN_TABLE: [[i32; 8]; 8] = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10, 0, 5, 0, 0, 0, 0, -10],
    [-10, 5, 5, 5, 5, 5, 0, -10],
    [0, 0, 5, 5, 5, 5, 0, -5],
    [-5, 0, 5, 5, 5, 5, 0, -5],
    [-10, 0, 5, 5, 5, 5, 0, -10],
    [-10, 0, 0, 0, 0, 0, 0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

const KING_TABLE: [[i32; 8]; 8] = [
    [20, 30, 10, 0, 0, 10, 30, 20],
    [20, 20, 0, 0, 0, 0, 20, 20],
    [-10, -20, -20, -20, -20, -20, -20, -10],
    [-20, -30, -30, -40, -40, -30, -30, -20],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
    [-30, -40, -40, -50, -50, -40, -40, -30],
];

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
