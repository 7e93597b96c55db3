//! Uniformly random legal move selection.
//!
//! The computer opponent: selects uniformly among origins and destinations
//! that pass selection validation, so mandatory captures are respected by
//! construction. Primarily used for casual play and as a legality fuzzer in
//! tests.

use rand::prelude::IndexedRandom;

use crate::engine::selection::{validate_destination, validate_origin};
use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::game_types::{Position, Side};
use crate::move_generation::legal_moves::MoveSet;
use crate::players::selector::{DestinationChoice, MoveSelector};

pub struct RandomSelector;

impl RandomSelector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveSelector for RandomSelector {
    fn name(&self) -> &str {
        "Computer"
    }

    fn select_origin(
        &mut self,
        board: &Board,
        side: Side,
        moves: &MoveSet,
    ) -> Result<Position, GameError> {
        let candidates: Vec<Position> = moves
            .origins()
            .filter(|&origin| validate_origin(board, side, moves, origin).is_ok())
            .collect();

        let mut rng = rand::rng();
        candidates
            .as_slice()
            .choose(&mut rng)
            .copied()
            .ok_or(GameError::NoLegalSelection)
    }

    fn select_destination(
        &mut self,
        _board: &Board,
        _side: Side,
        origin: Position,
        moves: &MoveSet,
    ) -> Result<DestinationChoice, GameError> {
        let candidates: Vec<Position> = moves
            .options_for(origin)
            .map(|dests| {
                dests
                    .keys()
                    .copied()
                    .filter(|&dest| validate_destination(moves, origin, dest).is_ok())
                    .collect()
            })
            .unwrap_or_default();

        let mut rng = rand::rng();
        candidates
            .as_slice()
            .choose(&mut rng)
            .copied()
            .map(DestinationChoice::Target)
            .ok_or(GameError::NoLegalSelection)
    }
}
