use super::error::MoveError;
use super::{Color, Move, MoveKind, Piece, Position, Square};

fn castle_rook_squares(color: Color, kingside: bool) -> (Square, Square) {
    let rank = color.back_rank();
    if kingside {
        (Square(rank, 7), Square(rank, 5))
    } else {
        (Square(rank, 0), Square(rank, 3))
    }
}

impl Position {
    /// Apply a move in place.
    ///
    /// Legality is not checked here; that is the legal filter's job.
    /// Move-internal consistency is: the origin square must hold a piece
    /// of the side to move, and special kinds must match the moving
    /// piece. On any error the position is left untouched.
    pub fn make_move(&mut self, m: Move) -> Result<(), MoveError> {
        let from = m.from();
        let to = m.to();
        let us = self.side_to_move;

        let (moving_color, moving_piece) = self
            .piece_at(from)
            .ok_or(MoveError::EmptyOrigin { square: from })?;
        if moving_color != us {
            return Err(MoveError::WrongColor { square: from });
        }

        // Validate special kinds up front so failure never mutates.
        let mut ep_victim = None;
        match m.kind() {
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                if moving_piece != Piece::King {
                    return Err(MoveError::CastlingWithoutKing { square: from });
                }
                let kingside = matches!(m.kind(), MoveKind::CastleKingside);
                let (rook_from, _) = castle_rook_squares(us, kingside);
                if self.piece_at(rook_from) != Some((us, Piece::Rook)) {
                    return Err(MoveError::CastlingWithoutRook { square: rook_from });
                }
            }
            MoveKind::EnPassant => {
                if moving_piece != Piece::Pawn {
                    return Err(MoveError::EnPassantWithoutPawn { square: from });
                }
                let victim_sq = to
                    .offset(-us.pawn_direction(), 0)
                    .ok_or(MoveError::EnPassantWithoutVictim { square: to })?;
                if self.piece_at(victim_sq) != Some((us.opponent(), Piece::Pawn)) {
                    return Err(MoveError::EnPassantWithoutVictim { square: victim_sq });
                }
                ep_victim = Some(victim_sq);
            }
            MoveKind::Promotion(_) => {
                if moving_piece != Piece::Pawn {
                    return Err(MoveError::PromotionWithoutPawn { square: from });
                }
            }
            MoveKind::Normal | MoveKind::Capture => {}
        }

        // The en passant window closes after every move; a double push
        // below reopens it.
        self.en_passant_target = None;
        self.halfmove_clock = self.halfmove_clock.saturating_add(1);

        let mut captured: Option<(Color, Piece)> = None;
        let mut captured_sq = to;

        match m.kind() {
            MoveKind::CastleKingside | MoveKind::CastleQueenside => {
                let kingside = matches!(m.kind(), MoveKind::CastleKingside);
                let (rook_from, rook_to) = castle_rook_squares(us, kingside);

                self.remove_piece(from);
                self.set_piece(to, us, Piece::King);
                self.remove_piece(rook_from);
                self.set_piece(rook_to, us, Piece::Rook);

                self.castling_rights.remove_both(us);
            }
            MoveKind::EnPassant => {
                if let Some(victim_sq) = ep_victim {
                    captured = self.piece_at(victim_sq);
                    captured_sq = victim_sq;
                    self.remove_piece(victim_sq);
                }
                self.remove_piece(from);
                self.set_piece(to, us, Piece::Pawn);
                self.halfmove_clock = 0;
            }
            MoveKind::Promotion(promo) => {
                captured = self.piece_at(to);
                self.remove_piece(from);
                self.set_piece(to, us, promo);
                self.halfmove_clock = 0;
            }
            MoveKind::Normal | MoveKind::Capture => {
                captured = self.piece_at(to);
                self.remove_piece(from);
                self.set_piece(to, us, moving_piece);

                if moving_piece == Piece::Pawn || captured.is_some() {
                    self.halfmove_clock = 0;
                }
                if moving_piece == Piece::Pawn {
                    let dr = to.rank() as isize - from.rank() as isize;
                    if dr.abs() == 2 {
                        let skipped = Square(usize::midpoint(from.rank(), to.rank()), from.file());
                        self.en_passant_target = Some(skipped);
                    }
                }
            }
        }

        // A king move loses both rights; a rook moving off its original
        // square, or captured on it, loses the matching one.
        if moving_piece == Piece::King {
            self.castling_rights.remove_both(us);
        } else if moving_piece == Piece::Rook {
            if from == Square(us.back_rank(), 0) {
                self.castling_rights.remove(us, false);
            } else if from == Square(us.back_rank(), 7) {
                self.castling_rights.remove(us, true);
            }
        }

        if let Some((cap_color, Piece::Rook)) = captured {
            if captured_sq == Square(cap_color.back_rank(), 0) {
                self.castling_rights.remove(cap_color, false);
            } else if captured_sq == Square(cap_color.back_rank(), 7) {
                self.castling_rights.remove(cap_color, true);
            }
        }

        self.side_to_move = us.opponent();
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        Ok(())
    }
}
