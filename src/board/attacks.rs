use super::movegen::{KNIGHT_OFFSETS, QUEEN_DIRECTIONS};
use super::{Color, Piece, Position, Square};

impl Position {
    /// Determine whether `square` is attacked by any piece of
    /// `attacker`.
    ///
    /// Pure and side-effect free; safe to call on hypothetical
    /// positions that temporarily violate normal invariants.
    #[must_use]
    pub fn is_square_attacked(&self, square: Square, attacker: Color) -> bool {
        // 1) Pawn attacks: the two squares a pawn of the attacking
        // color would capture this square from.
        let dir = attacker.pawn_direction();
        for df in [-1, 1] {
            if let Some(origin) = square.offset(-dir, df) {
                if self.piece_at(origin) == Some((attacker, Piece::Pawn)) {
                    return true;
                }
            }
        }

        // 2) Knight attacks
        for (dr, df) in KNIGHT_OFFSETS {
            if let Some(origin) = square.offset(dr, df) {
                if self.piece_at(origin) == Some((attacker, Piece::Knight)) {
                    return true;
                }
            }
        }

        // 3) Sliding attacks: first occupied square on each ray, with
        // the piece type matched against the ray class.
        for (i, &(dr, df)) in QUEEN_DIRECTIONS.iter().enumerate() {
            let rook_ray = i < 4;
            let mut current = square;
            while let Some(next) = current.offset(dr, df) {
                if let Some((color, piece)) = self.piece_at(next) {
                    if color == attacker {
                        match piece {
                            Piece::Queen => return true,
                            Piece::Rook if rook_ray => return true,
                            Piece::Bishop if !rook_ray => return true,
                            _ => {}
                        }
                    }
                    break;
                }
                current = next;
            }
        }

        // 4) King attacks
        for dr in -1..=1_isize {
            for df in -1..=1_isize {
                if dr == 0 && df == 0 {
                    continue;
                }
                if let Some(origin) = square.offset(dr, df) {
                    if self.piece_at(origin) == Some((attacker, Piece::King)) {
                        return true;
                    }
                }
            }
        }

        false
    }

    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            if self.piece_at(sq) == Some((color, Piece::King)) {
                return Some(sq);
            }
        }
        None
    }

    /// Whether the given side's king is currently attacked.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        if let Some(king_sq) = self.find_king(color) {
            self.is_square_attacked(king_sq, color.opponent())
        } else {
            false
        }
    }
}
