//! Move selection seam between the engine and its players.
//!
//! A selector answers the two questions of one sub-step: which piece moves,
//! and where. Implementations are expected to return selections that pass
//! `engine::selection`; the engine re-validates at the seam regardless.

use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::game_types::{Position, Side};
use crate::move_generation::legal_moves::MoveSet;

/// Destination-stage answer: a target square, or a request to go back and
/// reselect the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationChoice {
    Target(Position),
    ChangeOrigin,
}

/// A source of move selections for one side.
pub trait MoveSelector {
    /// Name shown in announcements and transcripts.
    fn name(&self) -> &str;

    fn select_origin(
        &mut self,
        board: &Board,
        side: Side,
        moves: &MoveSet,
    ) -> Result<Position, GameError>;

    fn select_destination(
        &mut self,
        board: &Board,
        side: Side,
        origin: Position,
        moves: &MoveSet,
    ) -> Result<DestinationChoice, GameError>;
}
