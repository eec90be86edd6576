//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    CastlingRights, Color, GameStatus, Move, MoveError, MoveKind, MoveList, Piece, Position,
    PositionBuilder, RepetitionTable, Square, SquareError,
};
