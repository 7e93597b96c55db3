//! Coordinate token parsing and formatting.
//!
//! Converts between the human-readable two-character tokens typed at the
//! prompt (`"a2"` or, equivalently, `"2a"`) and grid positions. Rank digits
//! count from 1 at the bottom row; file letters run from `a` at the left.

use crate::errors::GameError;
use crate::game_state::game_rules::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::game_state::game_types::Position;

/// Parse a coordinate token for a `size` board, accepting both
/// `[rank][file]` and `[file][rank]` orders, case-insensitively.
///
/// Malformed and out-of-range tokens are reported as
/// `GameError::InvalidCoordinate`; no input can make this panic.
pub fn parse_coordinate(token: &str, size: usize) -> Result<Position, GameError> {
    // No token can name a square of an unplayable board.
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(GameError::InvalidCoordinate(token.to_owned()));
    }

    let lowered = token.trim().to_ascii_lowercase();
    let bytes = lowered.as_bytes();
    if bytes.len() != 2 {
        return Err(GameError::InvalidCoordinate(token.to_owned()));
    }

    let max_digit = b'0' + size as u8;
    let is_rank = |b: u8| (b'1'..=max_digit).contains(&b);
    let is_file = |b: u8| (b'a'..b'a' + size as u8).contains(&b);

    // [rank][file], e.g. "2a".
    if is_rank(bytes[0]) && is_file(bytes[1]) {
        return Ok(((max_digit - bytes[0]) as i8, (bytes[1] - b'a') as i8));
    }
    // [file][rank], e.g. "a2".
    if is_file(bytes[0]) && is_rank(bytes[1]) {
        return Ok(((max_digit - bytes[1]) as i8, (bytes[0] - b'a') as i8));
    }

    Err(GameError::InvalidCoordinate(token.to_owned()))
}

/// Display form of a position: file letter then rank digit, e.g. `"a2"`.
pub fn coordinate_string(pos: Position, size: usize) -> String {
    let file = char::from(b'a' + pos.1 as u8);
    let rank = size - pos.0 as usize;
    format!("{file}{rank}")
}

#[cfg(test)]
mod tests {
    use super::{coordinate_string, parse_coordinate};
    use crate::errors::GameError;

    #[test]
    fn both_token_orders_name_the_same_cell() {
        let a2 = parse_coordinate("a2", 8).expect("a2 should parse");
        let two_a = parse_coordinate("2a", 8).expect("2a should parse");
        assert_eq!(a2, two_a);
        assert_eq!(a2, (6, 0));
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(parse_coordinate("H8", 8), parse_coordinate("h8", 8));
        assert_eq!(parse_coordinate(" c5 ", 8), parse_coordinate("c5", 8));
    }

    #[test]
    fn rank_one_is_the_bottom_row() {
        assert_eq!(parse_coordinate("a1", 8).expect("a1 should parse"), (7, 0));
        assert_eq!(parse_coordinate("h8", 8).expect("h8 should parse"), (0, 7));
    }

    #[test]
    fn out_of_range_tokens_are_invalid() {
        for token in ["z9", "i1", "a9", "a0", "j3"] {
            assert_eq!(
                parse_coordinate(token, 8),
                Err(GameError::InvalidCoordinate(token.to_owned())),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn malformed_tokens_are_invalid_not_panics() {
        for token in ["", "a", "a22", "22", "ab", "--", "é", "a\u{e9}"] {
            assert!(
                parse_coordinate(token, 8).is_err(),
                "token {token:?} should be rejected"
            );
        }
    }

    #[test]
    fn smaller_boards_shrink_both_ranges() {
        assert!(parse_coordinate("d4", 4).is_ok());
        assert!(parse_coordinate("e4", 4).is_err());
        assert!(parse_coordinate("a5", 4).is_err());
    }

    #[test]
    fn formatting_round_trips_through_parsing() {
        for pos in [(0i8, 0i8), (6, 0), (7, 7), (3, 4)] {
            let text = coordinate_string(pos, 8);
            assert_eq!(parse_coordinate(&text, 8).expect("should parse"), pos);
        }
        assert_eq!(coordinate_string((6, 0), 8), "a2");
    }
}
