//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal generation per piece type
//! - `legality.rs` - Legal filtering (pins, castling safety, en passant)
//! - `apply.rs` - Move application and its failure modes
//! - `status.rs` - Game status classification and draws
//! - `perft.rs` - Node-count validation of the full generator
//! - `proptest.rs` - Property-based tests


use std::str::FromStr;

use crate::board::{Move, Piece, Position, Square};

/// Find a legal move by endpoints and promotion piece.
pub(crate) fn find_move(
    pos: &Position,
    from: Square,
    to: Square,
    promotion: Option<Piece>,
) -> Move {
    for &m in pos.legal_moves().iter() {
        if m.from() == from && m.to() == to && m.promotion() == promotion {
            return m;
        }
    }
    panic!("Expected move {from}{to} not found");
}

/// Apply a move given as a 4-5 character token such as "e2e4" or "a7a8q".
pub(crate) fn play(pos: &mut Position, token: &str) {
    let from = Square::from_str(&token[0..2]).expect("bad from square");
    let to = Square::from_str(&token[2..4]).expect("bad to square");
    let promotion = token.chars().nth(4).and_then(Piece::from_char);
    let mv = find_move(pos, from, to, promotion);
    pos.make_move(mv).expect("legal move failed to apply");
}
