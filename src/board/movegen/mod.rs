mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Color, MoveList, Piece, Position, Square};

// Rook directions first, bishop directions second; the attack detector
// relies on this split to match ray classes.
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

impl Position {
    /// Generate every move for the side to move that is geometrically
    /// valid for its piece type, without checking king safety.
    ///
    /// The list is rebuilt from scratch on every call: a sweep over
    /// squares 0..63 with per-square piece dispatch, castling candidates
    /// appended last. Deterministic for a fixed position.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let us = self.side_to_move;

        for idx in 0..64 {
            let from = Square::from_index(idx);
            if let Some((color, piece)) = self.piece_at(from) {
                if color == us {
                    self.piece_moves(from, piece, &mut moves);
                }
            }
        }
        self.castling_moves(&mut moves);

        moves
    }

    fn piece_moves(&self, from: Square, piece: Piece, moves: &mut MoveList) {
        match piece {
            Piece::Pawn => self.pawn_moves(from, moves),
            Piece::Knight => self.knight_moves(from, moves),
            Piece::Bishop => self.slider_moves(from, &BISHOP_DIRECTIONS, moves),
            Piece::Rook => self.slider_moves(from, &ROOK_DIRECTIONS, moves),
            Piece::Queen => self.slider_moves(from, &QUEEN_DIRECTIONS, moves),
            Piece::King => self.king_moves(from, moves),
        }
    }

    /// Generate the legal moves for the side to move.
    ///
    /// Each pseudo-legal candidate is applied to a scratch copy and
    /// rejected if the mover's king ends up attacked. Castling is also
    /// rejected when the king's origin, transit or destination square is
    /// attacked in the current position. Generation order is preserved.
    pub fn legal_moves(&self) -> MoveList {
        let us = self.side_to_move;
        let them = us.opponent();
        let pseudo = self.pseudo_legal_moves();
        let mut legal = MoveList::new();

        for &m in pseudo.iter() {
            if m.is_castling() {
                let from = m.from();
                let to = m.to();
                let transit = Square(from.rank(), (from.file() + to.file()) / 2);

                if self.is_square_attacked(from, them)
                    || self.is_square_attacked(transit, them)
                    || self.is_square_attacked(to, them)
                {
                    continue;
                }
            }

            let mut scratch = *self;
            if scratch.make_move(m).is_err() {
                continue;
            }
            if !scratch.is_in_check(us) {
                legal.push(m);
            }
        }

        #[cfg(feature = "logging")]
        log::trace!("{} legal moves for {}", legal.len(), us);

        legal
    }

    /// Legal moves for an arbitrary side.
    ///
    /// When `side` is not the mover, the list is built from a scratch
    /// copy with the turn overridden; the en passant window never
    /// belongs to the side that just pushed, so it is cleared.
    pub(crate) fn legal_moves_for(&self, side: Color) -> MoveList {
        if side == self.side_to_move {
            return self.legal_moves();
        }
        let mut flipped = *self;
        flipped.side_to_move = side;
        flipped.en_passant_target = None;
        flipped.legal_moves()
    }

    /// Count leaf nodes of the legal move tree to the given depth.
    #[must_use]
    pub fn perft(&self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for &m in moves.iter() {
            let mut next = *self;
            if next.make_move(m).is_ok() {
                nodes += next.perft(depth - 1);
            }
        }

        nodes
    }
}
