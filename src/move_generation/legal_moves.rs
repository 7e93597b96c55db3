//! Legal move enumeration for one side.
//!
//! Produces a fresh `MoveSet` per query: every piece of the side that has
//! not yet moved this turn, mapped to its legal destinations with their
//! kind, plus the flag telling whether any capture exists anywhere in the
//! set. The flag drives the mandatory-capture rule during selection.

use std::collections::{BTreeMap, BTreeSet};

use crate::game_state::board::Board;
use crate::game_state::game_types::{MoveKind, Position, Side, SquareState};

/// All legal moves for one side at one sub-step.
///
/// Origins with no legal move are absent from the map. Never persisted
/// across mutations; callers query again after every applied move.
#[derive(Debug, Clone, Default)]
pub struct MoveSet {
    options: BTreeMap<Position, BTreeMap<Position, MoveKind>>,
    has_capture: bool,
}

impl MoveSet {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Whether any capture exists in the whole set, making captures
    /// mandatory for this sub-step.
    #[inline]
    pub fn has_capture(&self) -> bool {
        self.has_capture
    }

    #[inline]
    pub fn origins(&self) -> impl Iterator<Item = Position> + '_ {
        self.options.keys().copied()
    }

    #[inline]
    pub fn options_for(&self, origin: Position) -> Option<&BTreeMap<Position, MoveKind>> {
        self.options.get(&origin)
    }

    /// Kind of the `origin -> destination` move, if it is legal.
    pub fn kind_of(&self, origin: Position, destination: Position) -> Option<MoveKind> {
        self.options
            .get(&origin)
            .and_then(|dests| dests.get(&destination))
            .copied()
    }

    pub fn origin_can_capture(&self, origin: Position) -> bool {
        self.options
            .get(&origin)
            .is_some_and(|dests| dests.values().any(|kind| *kind == MoveKind::Capture))
    }

    /// Destinations to offer for `origin`, restricted to captures while a
    /// capture is mandatory.
    pub fn suggested_destinations(&self, origin: Position) -> Vec<Position> {
        match self.options.get(&origin) {
            None => Vec::new(),
            Some(dests) => dests
                .iter()
                .filter(|(_, kind)| !self.has_capture || **kind == MoveKind::Capture)
                .map(|(dest, _)| *dest)
                .collect(),
        }
    }
}

/// Enumerate legal moves for `side`, skipping pieces in `moved`.
///
/// A step goes one row forward onto an empty square; a capture goes one row
/// forward and one column sideways onto an opposing piece. Targets off the
/// grid are skipped, so a pawn standing on its goal edge reports no step.
pub fn generate_moves(board: &Board, side: Side, moved: &BTreeSet<Position>) -> MoveSet {
    let mut set = MoveSet::default();
    let direction = side.direction();

    for &piece in board.pieces(side) {
        if moved.contains(&piece) {
            continue;
        }

        let forward = (piece.0 + direction, piece.1);
        if board.in_bounds(forward) && board.square(forward) == SquareState::Empty {
            set.options
                .entry(piece)
                .or_default()
                .insert(forward, MoveKind::Step);
        }

        for col_delta in [-1i8, 1] {
            let target = (piece.0 + direction, piece.1 + col_delta);
            if !board.in_bounds(target) {
                continue;
            }
            if board.square(target) == SquareState::Occupied(side.opposite()) {
                set.has_capture = true;
                set.options
                    .entry(piece)
                    .or_default()
                    .insert(target, MoveKind::Capture);
            }
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{generate_moves, MoveSet};
    use crate::game_state::board::Board;
    use crate::game_state::game_types::{MoveKind, Side};

    fn no_moved() -> BTreeSet<(i8, i8)> {
        BTreeSet::new()
    }

    #[test]
    fn opening_position_gives_every_white_pawn_one_step() {
        let board = Board::standard();
        let moves = generate_moves(&board, Side::White, &no_moved());

        assert!(!moves.has_capture());
        for col in 0..8 {
            assert_eq!(
                moves.kind_of((6, col), (5, col)),
                Some(MoveKind::Step),
                "pawn at column {col} should step forward"
            );
        }
        assert_eq!(moves.origins().count(), 8);
    }

    #[test]
    fn blocked_pawn_is_omitted_from_the_set() {
        let board = Board::from_diagram(
            "....\n\
             .B..\n\
             .W..\n\
             ....",
        )
        .expect("diagram should parse");
        // Black sits directly ahead of White, and no diagonal capture exists
        // for White because the Black piece is straight ahead.
        let moves = generate_moves(&board, Side::White, &no_moved());
        assert!(moves.options_for((2, 1)).is_none());
        assert!(moves.is_empty());
    }

    #[test]
    fn diagonal_opponent_raises_the_capture_flag() {
        let board = Board::from_diagram(
            "....\n\
             ..B.\n\
             .W..\n\
             ....",
        )
        .expect("diagram should parse");
        let moves = generate_moves(&board, Side::White, &no_moved());

        assert!(moves.has_capture());
        assert_eq!(moves.kind_of((2, 1), (1, 2)), Some(MoveKind::Capture));
        assert_eq!(moves.kind_of((2, 1), (1, 1)), Some(MoveKind::Step));
        assert!(moves.origin_can_capture((2, 1)));
    }

    #[test]
    fn step_only_origins_stay_reported_under_capture_duty() {
        let board = Board::from_diagram(
            "....\n\
             ..B.\n\
             .W.W\n\
             ....",
        )
        .expect("diagram should parse");
        let moves = generate_moves(&board, Side::White, &no_moved());

        assert!(moves.has_capture());
        // The pawn at (2,3) can only step, but its options are still listed
        // so origin validation can name the rejection.
        assert!(moves.options_for((2, 3)).is_some());
        assert!(!moves.origin_can_capture((2, 3)));
        // Both White pawns see the same Black target.
        assert!(moves.origin_can_capture((2, 1)));
        assert_eq!(moves.kind_of((2, 3), (1, 2)), Some(MoveKind::Capture));
    }

    #[test]
    fn pawn_on_its_goal_edge_reports_no_step() {
        let board = Board::from_diagram(
            "W...\n\
             ....\n\
             ....\n\
             ...B",
        )
        .expect("diagram should parse");
        assert!(generate_moves(&board, Side::White, &no_moved()).is_empty());
        assert!(generate_moves(&board, Side::Black, &no_moved()).is_empty());
    }

    #[test]
    fn captures_respect_the_column_edges() {
        let board = Board::from_diagram(
            "....\n\
             B..B\n\
             W..W\n\
             ....",
        )
        .expect("diagram should parse");
        // Pieces straight ahead block the steps; the only diagonals pointing
        // off the grid must be skipped, not wrap or panic.
        let moves = generate_moves(&board, Side::White, &no_moved());
        assert!(moves.is_empty());
        assert!(!moves.has_capture());
    }

    #[test]
    fn moved_pieces_are_excluded_from_the_next_query() {
        let board = Board::standard();
        let mut moved = BTreeSet::new();
        moved.insert((6i8, 3i8));
        let moves = generate_moves(&board, Side::White, &moved);

        assert!(moves.options_for((6, 3)).is_none());
        assert_eq!(moves.origins().count(), 7);
    }

    #[test]
    fn suggestions_filter_to_captures_when_mandatory() {
        let board = Board::from_diagram(
            "....\n\
             ..B.\n\
             .W..\n\
             ....",
        )
        .expect("diagram should parse");
        let moves = generate_moves(&board, Side::White, &no_moved());
        assert_eq!(moves.suggested_destinations((2, 1)), vec![(1, 2)]);

        let quiet = Board::standard();
        let quiet_moves = generate_moves(&quiet, Side::White, &BTreeSet::new());
        assert_eq!(quiet_moves.suggested_destinations((6, 0)), vec![(5, 0)]);
    }

    #[test]
    fn empty_set_reports_empty() {
        let set = MoveSet::default();
        assert!(set.is_empty());
        assert!(!set.has_capture());
        assert_eq!(set.kind_of((0, 0), (1, 1)), None);
    }
}
