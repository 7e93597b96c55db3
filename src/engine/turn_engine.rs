//! Turn orchestration for the pawn duel.
//!
//! `TurnEngine` owns the board, the side to move, and the set of pieces
//! already moved this turn. It resolves exactly one sub-move per
//! `begin_step`/`apply_step` cycle: after a capture the turn does not pass
//! and the caller re-invokes the cycle for the same side, observing
//! `pending_chain`. The engine never loops internally, never performs I/O,
//! and signals every invalid selection as an `Err` for the caller to
//! re-request.

use std::collections::BTreeSet;

use log::debug;

use crate::engine::selection::{validate_destination, validate_origin};
use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::game_rules::goal_row;
use crate::game_state::game_types::{MoveKind, Position, Side};
use crate::move_generation::apply_move::{apply_move, AppliedMove};
use crate::move_generation::legal_moves::{generate_moves, MoveSet};

/// Why the finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinReason {
    /// The winner's pawn reached the far edge.
    ReachedEnd,
    /// The loser had no legal move at the start of a sub-step.
    OpponentBlocked,
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub winner: Side,
    pub reason: WinReason,
}

/// What starting a sub-step found.
#[derive(Debug, Clone)]
pub enum StepStart {
    /// The side to move has options; select among them and `apply_step`.
    Turn(MoveSet),
    /// The side to move was out of moves; the game just ended.
    Finished(GameOutcome),
}

/// What applying one sub-move led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Non-capture: the turn passed to the opponent.
    TurnPassed,
    /// Capture: the same side continues; the capturer is frozen for the
    /// rest of the turn.
    ChainContinues,
    /// The move ended the game.
    Finished(GameOutcome),
}

#[derive(Debug, Clone)]
pub struct TurnEngine {
    board: Board,
    turn: Side,
    moved_this_turn: BTreeSet<Position>,
    pending_chain: bool,
    outcome: Option<GameOutcome>,
    history: Vec<AppliedMove>,
}

impl TurnEngine {
    /// Fresh game on a `size` board. White always starts.
    pub fn new(size: usize) -> Result<Self, GameError> {
        Ok(Self::from_position(Board::new(size)?, Side::White))
    }

    /// Fresh game on the console board.
    pub fn standard() -> Self {
        Self::from_position(Board::standard(), Side::White)
    }

    /// Start from an arbitrary position with `turn` to move.
    pub fn from_position(board: Board, turn: Side) -> Self {
        Self {
            board,
            turn,
            moved_this_turn: BTreeSet::new(),
            pending_chain: false,
            outcome: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Side {
        self.turn
    }

    #[inline]
    pub fn moved_this_turn(&self) -> &BTreeSet<Position> {
        &self.moved_this_turn
    }

    /// True between a capture and the moment the turn passes: the same side
    /// is still to move.
    #[inline]
    pub fn pending_chain(&self) -> bool {
        self.pending_chain
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Every applied sub-move, in order.
    #[inline]
    pub fn history(&self) -> &[AppliedMove] {
        &self.history
    }

    /// Start a sub-step: enumerate moves for the side to move, or end the
    /// game if it has none. Runs before any selection, so a side left
    /// without options mid-chain loses on the spot.
    pub fn begin_step(&mut self) -> Result<StepStart, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        let moves = generate_moves(&self.board, self.turn, &self.moved_this_turn);
        if moves.is_empty() {
            let outcome = GameOutcome {
                winner: self.turn.opposite(),
                reason: WinReason::OpponentBlocked,
            };
            self.outcome = Some(outcome);
            debug!(
                "{} has no legal move; {} wins",
                self.turn.label(),
                outcome.winner.label()
            );
            return Ok(StepStart::Finished(outcome));
        }

        debug!(
            "{} to move: {} selectable pieces, capture duty {}",
            self.turn.label(),
            moves.origins().count(),
            moves.has_capture()
        );
        Ok(StepStart::Turn(moves))
    }

    /// Apply one selected sub-move from the `MoveSet` the current
    /// `begin_step` produced. Re-validates both selections, so an invalid
    /// pair is reported, not applied.
    pub fn apply_step(
        &mut self,
        moves: &MoveSet,
        origin: Position,
        destination: Position,
    ) -> Result<StepOutcome, GameError> {
        if self.is_over() {
            return Err(GameError::GameAlreadyOver);
        }

        validate_origin(&self.board, self.turn, moves, origin)?;
        let kind = validate_destination(moves, origin, destination)?;
        let applied = apply_move(&mut self.board, self.turn, origin, destination, kind)?;
        self.history.push(applied);

        if kind == MoveKind::Capture {
            // The capturer may not move again this turn; the turn itself
            // stays with the same side.
            self.moved_this_turn.insert(destination);
            self.pending_chain = true;
        }

        if destination.0 as usize == goal_row(self.turn, self.board.size()) {
            let outcome = GameOutcome {
                winner: self.turn,
                reason: WinReason::ReachedEnd,
            };
            self.outcome = Some(outcome);
            debug!("{} reached the far edge", self.turn.label());
            return Ok(StepOutcome::Finished(outcome));
        }

        if kind == MoveKind::Capture {
            Ok(StepOutcome::ChainContinues)
        } else {
            self.moved_this_turn.clear();
            self.pending_chain = false;
            self.turn = self.turn.opposite();
            debug!("turn passes to {}", self.turn.label());
            Ok(StepOutcome::TurnPassed)
        }
    }
}
