use super::super::{Move, MoveList, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let start_rank = color.pawn_start_rank();
        let promotion_rank = color.pawn_promotion_rank();

        // Forward moves
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_square(forward) {
                if forward.rank() == promotion_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::new_promotion(from, forward, promo));
                    }
                } else {
                    moves.push(Move::normal(from, forward));
                    if from.rank() == start_rank {
                        if let Some(double) = from.offset(2 * dir, 0) {
                            if self.is_empty_square(double) {
                                moves.push(Move::normal(from, double));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures
        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };
            if let Some((target_color, _)) = self.piece_at(target) {
                if target_color != color {
                    if target.rank() == promotion_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::new_promotion(from, target, promo));
                        }
                    } else {
                        moves.push(Move::capture(from, target));
                    }
                }
            }
        }

        // En passant: the target square sits one rank ahead of the pawn
        // on an adjacent file.
        if let Some(ep_target) = self.en_passant_target {
            let ahead = from.rank() as isize + dir;
            let file_gap = ep_target.file() as isize - from.file() as isize;
            if ep_target.rank() as isize == ahead && file_gap.abs() == 1 {
                moves.push(Move::en_passant(from, ep_target));
            }
        }
    }
}
