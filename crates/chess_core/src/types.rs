#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank direction pawns of this color advance in.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Rank holding this color's king and rooks at game start.
    pub fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Rank pawns of this color start on.
    pub fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank a pawn of this color promotes on.
    pub fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A board coordinate. Rank 0 is White's back rank; this orientation is
/// absolute and used uniformly everywhere (never side-relative).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub file: u8, // 0..8, file 0 = 'a'
    pub rank: u8, // 0..8, rank 0 = '1'
}

impl Pos {
    pub fn new(file: u8, rank: u8) -> Self {
        debug_assert!(file < 8 && rank < 8);
        Self { file, rank }
    }

    /// Build a position from signed coordinates, `None` if off the board.
    pub fn checked(file: i8, rank: i8) -> Option<Pos> {
        if (0..8).contains(&file) && (0..8).contains(&rank) {
            Some(Pos::new(file as u8, rank as u8))
        } else {
            None
        }
    }

    /// Offset by a (file, rank) delta, `None` if the result leaves the board.
    pub fn offset(self, df: i8, dr: i8) -> Option<Pos> {
        Pos::checked(self.file as i8 + df, self.rank as i8 + dr)
    }

    /// Chebyshev distance (king moves) between two squares.
    pub fn distance(self, other: Pos) -> i32 {
        let df = (self.file as i32 - other.file as i32).abs();
        let dr = (self.rank as i32 - other.rank as i32).abs();
        df.max(dr)
    }

    /// Render as an algebraic coordinate such as "e2".
    pub fn coord(self) -> String {
        let f = (b'a' + self.file) as char;
        let r = (b'1' + self.rank) as char;
        format!("{f}{r}")
    }

    /// Parse an algebraic coordinate such as "e2".
    pub fn from_coord(c: &str) -> Option<Pos> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        if !(b'a'..=b'h').contains(&b[0]) || !(b'1'..=b'8').contains(&b[1]) {
            return None;
        }
        Some(Pos::new(b[0] - b'a', b[1] - b'1'))
    }
}
