pub mod board;
mod zobrist;

pub use board::{
    Color, GameStatus, Move, MoveKind, MoveList, Piece, Position, PositionBuilder,
    RepetitionTable, Square,
};
