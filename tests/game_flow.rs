//! Full-game integration tests driving the public API the way a host
//! application would: parse tokens, match them against the legal list,
//! apply, and keep the repetition history up to date.

use std::str::FromStr;

use chess_rules::{
    Color, GameStatus, Move, Piece, Position, RepetitionTable, Square,
};

/// Match a 4-5 character token against the current legal list.
fn resolve(pos: &Position, token: &str) -> Option<Move> {
    if token.len() < 4 || token.len() > 5 {
        return None;
    }
    let from = Square::from_str(&token[0..2]).ok()?;
    let to = Square::from_str(&token[2..4]).ok()?;
    let promotion = match token.chars().nth(4) {
        Some(c) => Some(Piece::from_char(c)?),
        None => None,
    };

    pos.legal_moves()
        .iter()
        .copied()
        .find(|m| m.from() == from && m.to() == to && m.promotion() == promotion)
}

#[test]
fn scholars_mate_ends_in_checkmate() {
    let mut pos = Position::new();
    let mut history = RepetitionTable::new();
    history.record(&pos);

    for token in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        let mv = resolve(&pos, token).expect("scripted move must be legal");
        pos.make_move(mv).expect("legal move must apply");
        history.record(&pos);
    }

    let verdict = pos.status(Color::Black, history.count(&pos));
    assert_eq!(verdict, GameStatus::Checkmate);
    assert!(pos.legal_moves().is_empty());
    assert!(pos.is_in_check(Color::Black));
}

#[test]
fn knight_shuffle_reaches_threefold_repetition() {
    let mut pos = Position::new();
    let mut history = RepetitionTable::new();
    history.record(&pos);

    let shuffle = ["g1f3", "g8f6", "f3g1", "f6g8"];
    let mut verdict = GameStatus::Ongoing;
    for _ in 0..3 {
        for token in shuffle {
            let mv = resolve(&pos, token).expect("shuffle move must be legal");
            pos.make_move(mv).unwrap();
            history.record(&pos);
            verdict = pos.status(pos.side_to_move(), history.count(&pos));
            if verdict.is_terminal() {
                break;
            }
        }
        if verdict.is_terminal() {
            break;
        }
    }

    assert_eq!(verdict, GameStatus::DrawByRepetition);
}

#[test]
fn malformed_and_illegal_tokens_are_rejected() {
    let pos = Position::new();

    assert!(resolve(&pos, "e2").is_none(), "short token");
    assert!(resolve(&pos, "e2e4q7").is_none(), "long token");
    assert!(resolve(&pos, "z9e4").is_none(), "bad square letters");
    assert!(resolve(&pos, "e2e5").is_none(), "pawn cannot triple-push");
    assert!(resolve(&pos, "e7e5").is_none(), "not that side's piece");
    assert!(
        resolve(&pos, "e2e4q").is_none(),
        "promotion token against a non-promoting move"
    );
}

#[test]
fn en_passant_round_trip_through_the_api() {
    let mut pos = Position::new();
    for token in ["e2e4", "a7a6", "e4e5", "d7d5"] {
        let mv = resolve(&pos, token).unwrap();
        pos.make_move(mv).unwrap();
    }

    let ep = resolve(&pos, "e5d6").expect("en passant must be offered");
    assert!(ep.is_en_passant());
    pos.make_move(ep).unwrap();

    assert_eq!(pos.piece_on(Square(5, 3)), Some(Piece::Pawn));
    assert_eq!(pos.piece_on(Square(4, 3)), None);
    assert_eq!(pos.status(Color::Black, 1), GameStatus::Ongoing);
}

#[test]
fn promotion_tokens_select_the_promoted_piece() {
    let mut pos = Position::new();
    for token in [
        "h2h4", "g7g5", "h4g5", "g8f6", "g5g6", "f6e4", "g6g7", "e4c5",
    ] {
        let mv = resolve(&pos, token).expect("scripted move must be legal");
        pos.make_move(mv).unwrap();
    }

    // A bare "g7g8" token must not match any of the promotion moves.
    assert!(resolve(&pos, "g7g8").is_none());

    let promo = resolve(&pos, "g7g8n").expect("knight promotion must be offered");
    pos.make_move(promo).unwrap();
    assert_eq!(pos.piece_on(Square(7, 6)), Some(Piece::Knight));
}
