use super::super::{Move, MoveList, Position, Square};
use super::KNIGHT_OFFSETS;

impl Position {
    pub(crate) fn knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;

        for (dr, df) in KNIGHT_OFFSETS {
            let Some(to) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(to) {
                None => moves.push(Move::normal(from, to)),
                Some((target_color, _)) if target_color != color => {
                    moves.push(Move::capture(from, to));
                }
                Some(_) => {}
            }
        }
    }
}
