use crate::types::{Color, PieceKind, Pos};

/// A move is purely a transition descriptor; it never carries board state.
///
/// The derived `Ord` (variant order, then field-lexicographic within
/// `Quiet`) is the stable total order used for search move ordering and
/// must not change: reproducible search depends on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Move {
    Quiet {
        color: Color,
        from: Pos,
        to: Pos,
        kind: PieceKind,
        is_capture: bool,
        is_promotion: bool,
    },
    KingsideCastle(Color),
    QueensideCastle(Color),
}

impl Move {
    pub fn color(&self) -> Color {
        match *self {
            Move::Quiet { color, .. } => color,
            Move::KingsideCastle(color) => color,
            Move::QueensideCastle(color) => color,
        }
    }

    pub fn is_capture(&self) -> bool {
        matches!(*self, Move::Quiet { is_capture: true, .. })
    }
}

/// Fixed destination squares for castling, per color and side:
/// (king_from, king_to, rook_from, rook_to).
pub fn castle_squares(mv: &Move) -> Option<(Pos, Pos, Pos, Pos)> {
    match *mv {
        Move::KingsideCastle(color) => {
            let r = color.back_rank();
            Some((Pos::new(4, r), Pos::new(6, r), Pos::new(7, r), Pos::new(5, r)))
        }
        Move::QueensideCastle(color) => {
            let r = color.back_rank();
            Some((Pos::new(4, r), Pos::new(2, r), Pos::new(0, r), Pos::new(3, r)))
        }
        Move::Quiet { .. } => None,
    }
}
