//! Error types for position operations.

use std::fmt;

use super::types::Square;

/// Error type for move application failures.
///
/// `Position::make_move` reports these without mutating the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the origin square
    EmptyOrigin { square: Square },
    /// The piece on the origin square does not belong to the side to move
    WrongColor { square: Square },
    /// A castling move was applied to a piece other than the king
    CastlingWithoutKing { square: Square },
    /// Castling with no rook on its original square
    CastlingWithoutRook { square: Square },
    /// An en passant move was applied to a piece other than a pawn
    EnPassantWithoutPawn { square: Square },
    /// The en passant capture square does not hold an enemy pawn
    EnPassantWithoutVictim { square: Square },
    /// A promotion move was applied to a piece other than a pawn
    PromotionWithoutPawn { square: Square },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptyOrigin { square } => {
                write!(f, "No piece on origin square {square}")
            }
            MoveError::WrongColor { square } => {
                write!(f, "Piece on {square} does not belong to the side to move")
            }
            MoveError::CastlingWithoutKing { square } => {
                write!(f, "Castling move but no king on {square}")
            }
            MoveError::CastlingWithoutRook { square } => {
                write!(f, "Castling move but no rook on {square}")
            }
            MoveError::EnPassantWithoutPawn { square } => {
                write!(f, "En passant move but no pawn on {square}")
            }
            MoveError::EnPassantWithoutVictim { square } => {
                write!(f, "En passant capture but no enemy pawn on {square}")
            }
            MoveError::PromotionWithoutPawn { square } => {
                write!(f, "Promotion move but no pawn on {square}")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
