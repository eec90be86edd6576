//! Game status classification.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Piece, Position, Square};

/// Game-theoretic verdict for a position. Derived, never stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
    DrawByFiftyMoves,
    DrawByRepetition,
    DrawByInsufficientMaterial,
}

impl GameStatus {
    /// Returns true for any of the draw verdicts
    #[inline]
    #[must_use]
    pub const fn is_draw(self) -> bool {
        matches!(
            self,
            GameStatus::DrawByFiftyMoves
                | GameStatus::DrawByRepetition
                | GameStatus::DrawByInsufficientMaterial
                | GameStatus::Stalemate
        )
    }

    /// Returns true when the game is over
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate => write!(f, "checkmate"),
            GameStatus::Stalemate => write!(f, "stalemate"),
            GameStatus::DrawByFiftyMoves => write!(f, "draw by fifty-move rule"),
            GameStatus::DrawByRepetition => write!(f, "draw by threefold repetition"),
            GameStatus::DrawByInsufficientMaterial => {
                write!(f, "draw by insufficient material")
            }
        }
    }
}

impl Position {
    /// Classify the position for `side`.
    ///
    /// `repetition_count` is how often this position has occurred over
    /// the game; history tracking is the caller's responsibility (see
    /// [`RepetitionTable`](super::RepetitionTable)).
    #[must_use]
    pub fn status(&self, side: Color, repetition_count: u32) -> GameStatus {
        let legal = self.legal_moves_for(side);

        let verdict = if legal.is_empty() {
            if self.is_in_check(side) {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            }
        } else if repetition_count >= 3 {
            GameStatus::DrawByRepetition
        } else if self.halfmove_clock >= 50 {
            GameStatus::DrawByFiftyMoves
        } else if self.insufficient_material() {
            GameStatus::DrawByInsufficientMaterial
        } else {
            GameStatus::Ongoing
        };

        #[cfg(feature = "logging")]
        log::trace!("position classified as {verdict} for {side}");

        verdict
    }

    /// Whether the side to move is checkmated.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    /// Whether the side to move is stalemated.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check(self.side_to_move) && self.legal_moves().is_empty()
    }

    fn insufficient_material(&self) -> bool {
        let mut knights = [0u32; 2];
        let mut bishops = [0u32; 2];
        let mut bishops_share_parity = true;
        let mut first_bishop_parity = None;

        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let Some((color, piece)) = self.piece_at(sq) else {
                continue;
            };
            match piece {
                // Any pawn, rook or queen is mating material.
                Piece::Pawn | Piece::Rook | Piece::Queen => return false,
                Piece::Knight => knights[color.index()] += 1,
                Piece::Bishop => {
                    bishops[color.index()] += 1;
                    let parity = (sq.rank() + sq.file()) % 2;
                    match first_bishop_parity {
                        None => first_bishop_parity = Some(parity),
                        Some(first) if first != parity => bishops_share_parity = false,
                        Some(_) => {}
                    }
                }
                Piece::King => {}
            }
        }

        let minors = [knights[0] + bishops[0], knights[1] + bishops[1]];
        let total_minors = minors[0] + minors[1];

        // King vs king, or a lone minor against a bare king.
        if total_minors <= 1 {
            return true;
        }

        // Two knights cannot force mate against a bare king.
        if (minors[0] == 0 && knights[1] == 2 && minors[1] == 2)
            || (minors[1] == 0 && knights[0] == 2 && minors[0] == 2)
        {
            return true;
        }

        // Bishops only, all on one square color, at most two of them.
        if knights[0] == 0 && knights[1] == 0 && total_minors <= 2 && bishops_share_parity {
            return true;
        }

        false
    }
}
