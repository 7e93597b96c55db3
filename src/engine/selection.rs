//! Selection validation for one sub-step.
//!
//! Result-typed so the calling loop decides how to re-prompt; the checks run
//! in the order the prompts report them, so a square that is both unowned
//! and unlisted is rejected as "not your piece" first.

use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::game_types::{MoveKind, Position, Side};
use crate::move_generation::legal_moves::MoveSet;

/// Check an origin selection: ownership, availability, then capture duty.
pub fn validate_origin(
    board: &Board,
    side: Side,
    moves: &MoveSet,
    origin: Position,
) -> Result<(), GameError> {
    if !board.occupied_by(side, origin) {
        return Err(GameError::NotYourPiece(origin));
    }
    if moves.options_for(origin).is_none() {
        return Err(GameError::PieceUnavailable(origin));
    }
    if moves.has_capture() && !moves.origin_can_capture(origin) {
        return Err(GameError::MustMoveCapturingPiece(origin));
    }
    Ok(())
}

/// Check a destination selection and return the move kind it names.
pub fn validate_destination(
    moves: &MoveSet,
    origin: Position,
    destination: Position,
) -> Result<MoveKind, GameError> {
    let Some(kind) = moves.kind_of(origin, destination) else {
        return Err(GameError::IllegalDestination {
            origin,
            destination,
        });
    };
    if moves.has_capture() && kind != MoveKind::Capture {
        return Err(GameError::MustCaptureAtDestination {
            origin,
            destination,
        });
    }
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::{validate_destination, validate_origin};
    use crate::errors::GameError;
    use crate::game_state::board::Board;
    use crate::game_state::game_types::{MoveKind, Side};
    use crate::move_generation::legal_moves::generate_moves;

    #[test]
    fn ownership_is_checked_before_availability() {
        let board = Board::standard();
        let moves = generate_moves(&board, Side::White, &BTreeSet::new());

        // An empty square is "not your piece", not "unavailable".
        assert_eq!(
            validate_origin(&board, Side::White, &moves, (4, 4)),
            Err(GameError::NotYourPiece((4, 4)))
        );
        // An opposing piece too.
        assert_eq!(
            validate_origin(&board, Side::White, &moves, (1, 0)),
            Err(GameError::NotYourPiece((1, 0)))
        );
        assert_eq!(validate_origin(&board, Side::White, &moves, (6, 0)), Ok(()));
    }

    #[test]
    fn pieces_absent_from_the_set_are_unavailable() {
        let board = Board::standard();
        let mut moved = BTreeSet::new();
        moved.insert((6i8, 5i8));
        let moves = generate_moves(&board, Side::White, &moved);

        assert_eq!(
            validate_origin(&board, Side::White, &moves, (6, 5)),
            Err(GameError::PieceUnavailable((6, 5)))
        );
    }

    #[test]
    fn capture_duty_rejects_step_only_origins_and_step_destinations() {
        let board = Board::from_diagram(
            "....\n\
             ..B.\n\
             .W.W\n\
             ....",
        )
        .expect("diagram should parse");
        let moves = generate_moves(&board, Side::White, &BTreeSet::new());
        assert!(moves.has_capture());

        assert_eq!(
            validate_origin(&board, Side::White, &moves, (2, 3)),
            Err(GameError::MustMoveCapturingPiece((2, 3)))
        );
        assert_eq!(validate_origin(&board, Side::White, &moves, (2, 1)), Ok(()));

        // The capturing pawn also has a legal step; under capture duty the
        // step destination is rejected while the capture passes.
        assert_eq!(
            validate_destination(&moves, (2, 1), (1, 1)),
            Err(GameError::MustCaptureAtDestination {
                origin: (2, 1),
                destination: (1, 1),
            })
        );
        assert_eq!(
            validate_destination(&moves, (2, 1), (1, 2)),
            Ok(MoveKind::Capture)
        );
    }

    #[test]
    fn unlisted_destinations_are_illegal() {
        let board = Board::standard();
        let moves = generate_moves(&board, Side::White, &BTreeSet::new());

        assert!(matches!(
            validate_destination(&moves, (6, 0), (4, 0)),
            Err(GameError::IllegalDestination { .. })
        ));
        assert_eq!(
            validate_destination(&moves, (6, 0), (5, 0)),
            Ok(MoveKind::Step)
        );
    }
}
