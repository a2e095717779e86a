use crate::error::ChessError;
use crate::moves::{castle_squares, Move};
use crate::rules;
use crate::types::{Color, Piece, PieceKind, Pos};

/// One board cell. An empty square carries no piece, and therefore no kind
/// or color. `has_moved` feeds castling and pawn double-step eligibility;
/// `castled` is castling bookkeeping set on the king's square after a
/// castle. Both flags participate in board equality so that repetition
/// detection distinguishes positions with different castling rights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Square {
    pub piece: Option<Piece>,
    pub has_moved: bool,
    pub castled: bool,
}

impl Square {
    pub fn occupied(piece: Piece) -> Self {
        Square {
            piece: Some(piece),
            has_moved: false,
            castled: false,
        }
    }
}

/// An 8x8 grid of squares, indexed `[rank][file]` with rank 0 = White's
/// back rank. Boards are cheap-to-clone value objects: the search clones a
/// board per explored move instead of mutating and undoing in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Board {
    /// An empty board, useful for building test positions.
    pub fn empty() -> Self {
        Board {
            squares: [[Square::default(); 8]; 8],
        }
    }

    /// The standard chess starting position.
    pub fn startpos() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            let f = f as u8;
            b.set(Pos::new(f, 0), Square::occupied(Piece::new(Color::White, kind)));
            b.set(Pos::new(f, 7), Square::occupied(Piece::new(Color::Black, kind)));
            b.set(
                Pos::new(f, 1),
                Square::occupied(Piece::new(Color::White, PieceKind::Pawn)),
            );
            b.set(
                Pos::new(f, 6),
                Square::occupied(Piece::new(Color::Black, PieceKind::Pawn)),
            );
        }
        b
    }

    /// Forsyth-Edwards Notation parser used by tests and position setup.
    ///
    /// Only the piece-placement and castling fields affect the board: the
    /// castling field maps onto the king/rook `has_moved` flags. Side to
    /// move, en-passant and the clocks are accepted and ignored (the board
    /// does not carry them; callers track the side to move).
    pub fn from_fen(fen: &str) -> Result<Board, ChessError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ChessError::Fen("empty string".into()));
        }

        let mut b = Board::empty();
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(ChessError::Fen("expected 8 ranks".into()));
        }

        for (i, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - i as u8; // FEN lists rank 8 .. 1
            let mut file: u8 = 0;
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    file += d as u8;
                } else {
                    if file >= 8 {
                        return Err(ChessError::Fen(format!("rank {rank_str} overflows")));
                    }
                    let color = if ch.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let kind = match ch.to_ascii_lowercase() {
                        'p' => PieceKind::Pawn,
                        'n' => PieceKind::Knight,
                        'b' => PieceKind::Bishop,
                        'r' => PieceKind::Rook,
                        'q' => PieceKind::Queen,
                        'k' => PieceKind::King,
                        _ => return Err(ChessError::Fen(format!("bad piece char `{ch}`"))),
                    };
                    b.set(
                        Pos::new(file, rank),
                        Square::occupied(Piece::new(color, kind)),
                    );
                    file += 1;
                }
                if file > 8 {
                    return Err(ChessError::Fen(format!("rank {rank_str} overflows")));
                }
            }
            if file != 8 {
                return Err(ChessError::Fen(format!("rank {rank_str} too short")));
            }
        }

        // The castling field decides which kings/rooks still count as
        // unmoved; pawns off their start rank have necessarily moved.
        let castle_part = parts.get(2).copied().unwrap_or("-");
        b.apply_castling_rights(castle_part)?;
        Ok(b)
    }

    fn apply_castling_rights(&mut self, field: &str) -> Result<(), ChessError> {
        let mut mark_moved = |pos: Pos, color: Color, kind: PieceKind| {
            if self.piece_at(pos) == Some(Piece::new(color, kind)) {
                self.squares[pos.rank as usize][pos.file as usize].has_moved = true;
            }
        };

        if field != "-" {
            for c in field.chars() {
                if !"KQkq".contains(c) {
                    return Err(ChessError::Fen(format!("bad castling char `{c}`")));
                }
            }
        }
        if !field.contains('K') {
            mark_moved(Pos::new(7, 0), Color::White, PieceKind::Rook);
        }
        if !field.contains('Q') {
            mark_moved(Pos::new(0, 0), Color::White, PieceKind::Rook);
        }
        if !field.contains('k') {
            mark_moved(Pos::new(7, 7), Color::Black, PieceKind::Rook);
        }
        if !field.contains('q') {
            mark_moved(Pos::new(0, 7), Color::Black, PieceKind::Rook);
        }
        if !field.contains('K') && !field.contains('Q') {
            mark_moved(Pos::new(4, 0), Color::White, PieceKind::King);
        }
        if !field.contains('k') && !field.contains('q') {
            mark_moved(Pos::new(4, 7), Color::Black, PieceKind::King);
        }

        // A pawn away from its start rank has moved by definition.
        for rank in 0..8u8 {
            for file in 0..8u8 {
                let pos = Pos::new(file, rank);
                if let Some(pc) = self.piece_at(pos) {
                    if pc.kind == PieceKind::Pawn && rank != pc.color.pawn_rank() {
                        self.squares[rank as usize][file as usize].has_moved = true;
                    }
                }
            }
        }
        Ok(())
    }

    pub fn square(&self, pos: Pos) -> Square {
        self.squares[pos.rank as usize][pos.file as usize]
    }

    pub fn set(&mut self, pos: Pos, sq: Square) {
        self.squares[pos.rank as usize][pos.file as usize] = sq;
    }

    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.square(pos).piece
    }

    pub fn color_at(&self, pos: Pos) -> Option<Color> {
        self.piece_at(pos).map(|p| p.color)
    }

    pub fn has_moved(&self, pos: Pos) -> bool {
        self.square(pos).has_moved
    }

    /// Iterate all occupied squares in a fixed rank-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        (0..8u8).flat_map(move |rank| {
            (0..8u8).filter_map(move |file| {
                let pos = Pos::new(file, rank);
                self.piece_at(pos).map(|p| (pos, p))
            })
        })
    }

    /// The king square for `color`. A board without a king is a corrupted
    /// state the caller must never produce; the error is fatal.
    pub fn king_position(&self, color: Color) -> Result<Pos, ChessError> {
        self.pieces()
            .find(|&(_, p)| p == Piece::new(color, PieceKind::King))
            .map(|(pos, _)| pos)
            .ok_or(ChessError::NoKingFound(color))
    }

    /// True if any piece of `by` has a pseudo-legal move landing on `pos`.
    pub fn is_attacked(&self, by: Color, pos: Pos) -> bool {
        rules::square_attacked(self, by, pos)
    }

    /// Apply a move, returning the resulting board. The move is assumed
    /// validated; `apply` itself enforces nothing beyond moving squares.
    pub fn apply(&self, mv: &Move) -> Board {
        let mut next = self.clone();
        match *mv {
            Move::Quiet {
                color,
                from,
                to,
                kind,
                is_promotion,
                ..
            } => {
                let kind = if is_promotion { PieceKind::Queen } else { kind };
                next.set(from, Square::default());
                next.set(
                    to,
                    Square {
                        piece: Some(Piece::new(color, kind)),
                        has_moved: true,
                        castled: false,
                    },
                );
            }
            Move::KingsideCastle(color) | Move::QueensideCastle(color) => {
                let (kf, kt, rf, rt) =
                    castle_squares(mv).expect("castle_squares covers both castle variants");
                next.set(kf, Square::default());
                next.set(rf, Square::default());
                next.set(
                    kt,
                    Square {
                        piece: Some(Piece::new(color, PieceKind::King)),
                        has_moved: true,
                        castled: true,
                    },
                );
                next.set(
                    rt,
                    Square {
                        piece: Some(Piece::new(color, PieceKind::Rook)),
                        has_moved: true,
                        castled: false,
                    },
                );
            }
        }
        next
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
