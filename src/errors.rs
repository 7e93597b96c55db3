//! Errors used throughout the rules engine.
//!
//! `GameError` is the single error type returned by parsing, selection
//! validation, and move application. Selection and parsing variants are
//! recoverable: the calling loop interprets them as "re-request input" and
//! their `Display` text is the message shown to the player. Setup variants
//! (`InvalidBoardSize`, `InvalidDiagram`) indicate a bad position build and
//! are not produced during play.

use std::fmt;

use crate::game_state::game_types::Position;

/// Unified error type for the game engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Requested board size is outside the playable range.
    InvalidBoardSize(usize),

    /// A board diagram could not be interpreted.
    ///
    /// Payload: a short description of what was wrong with the text.
    InvalidDiagram(String),

    /// A coordinate token could not be parsed.
    ///
    /// Payload: the original token for diagnostics.
    InvalidCoordinate(String),

    /// The selected origin square holds no piece of the selecting side.
    NotYourPiece(Position),

    /// The selected piece already moved this turn or has no legal move.
    PieceUnavailable(Position),

    /// A capture is available, so a piece able to capture must be chosen.
    MustMoveCapturingPiece(Position),

    /// The selected destination is not among the origin's legal options.
    IllegalDestination {
        origin: Position,
        destination: Position,
    },

    /// A capture is available, so the chosen move must be a capture.
    MustCaptureAtDestination {
        origin: Position,
        destination: Position,
    },

    /// A selector was asked to choose from a set with no valid selection.
    NoLegalSelection,

    /// The game already reached a terminal state; no further moves accepted.
    GameAlreadyOver,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidBoardSize(size) => {
                write!(f, "Board size {size} is outside the playable range")
            }
            GameError::InvalidDiagram(reason) => write!(f, "Invalid board diagram: {reason}"),
            GameError::InvalidCoordinate(_) => write!(f, "Invalid input. Try again"),
            GameError::NotYourPiece(_) => write!(f, "You don't have a pawn there. Try again"),
            GameError::PieceUnavailable(_) => write!(
                f,
                "This pawn already moved this turn or has no possible moves. Try another pawn"
            ),
            GameError::MustMoveCapturingPiece(_) => write!(
                f,
                "You must make a capture move. Choose a pawn that can capture"
            ),
            GameError::IllegalDestination { .. } => write!(f, "Can't move there. Try again"),
            GameError::MustCaptureAtDestination { .. } => {
                write!(f, "You need to make a capture move. Try again")
            }
            GameError::NoLegalSelection => write!(f, "No legal selection is available"),
            GameError::GameAlreadyOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
