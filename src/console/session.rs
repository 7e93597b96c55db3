//! Interactive console front end.
//!
//! Owns the input and output handles and drives the engine one sub-move at
//! a time: render, announce the turn, collect a validated selection (from
//! the prompt loops or the computer selector), apply, and repeat until a
//! terminal state. All invalid input is answered with the engine's
//! rejection message and a re-prompt; nothing here can panic on user input.
//!
//! Generic over `BufRead`/`Write` so tests can script a whole sitting.

use std::io::{self, BufRead, Write};

use log::info;

use crate::engine::selection::{validate_destination, validate_origin};
use crate::engine::turn_engine::{
    GameOutcome, StepOutcome, StepStart, TurnEngine, WinReason,
};
use crate::errors::GameError;
use crate::game_state::board::Board;
use crate::game_state::game_types::{Position, Side};
use crate::move_generation::legal_moves::MoveSet;
use crate::players::random_selector::RandomSelector;
use crate::players::selector::{DestinationChoice, MoveSelector};
use crate::utils::coords::{coordinate_string, parse_coordinate};
use crate::utils::render_board::render_board;
use crate::utils::transcript::{move_text, write_transcript};

pub struct GameSession<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> GameSession<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    /// Top-level driver: welcome banner and the play-again loop.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Welcome to Pawn Duel!")?;
        writeln!(self.out)?;

        loop {
            let Some(answer) = self.prompt("Press enter to play or any other key to quit: ")?
            else {
                break;
            };
            if !answer.is_empty() {
                break;
            }
            let Some(mode) = self.prompt("Play against a second (p)layer or the (c)omputer? ")?
            else {
                break;
            };
            let vs_computer = mode.eq_ignore_ascii_case("c") || mode.eq_ignore_ascii_case("computer");
            self.play_game(vs_computer)?;
        }

        writeln!(self.out, "Thanks for playing!")?;
        Ok(())
    }

    /// One full game. Returns early without announcement if input runs out.
    fn play_game(&mut self, vs_computer: bool) -> io::Result<()> {
        let mut engine = TurnEngine::standard();
        // The computer always takes Black; White goes to the seat that
        // started the game.
        let mut computer = if vs_computer {
            Some(RandomSelector::new())
        } else {
            None
        };
        info!(
            "starting a new game ({})",
            if vs_computer {
                "human vs computer"
            } else {
                "human vs human"
            }
        );

        let size = engine.board().size();
        let outcome: Option<GameOutcome> = loop {
            writeln!(self.out)?;
            writeln!(self.out, "{}", render_board(engine.board()))?;
            writeln!(self.out)?;
            writeln!(self.out, "{}'s turn", engine.turn().label())?;
            writeln!(self.out)?;

            let moves = match engine.begin_step() {
                Ok(StepStart::Turn(moves)) => moves,
                Ok(StepStart::Finished(outcome)) => break Some(outcome),
                Err(err) => {
                    writeln!(self.out, "{err}")?;
                    return Ok(());
                }
            };

            let side = engine.turn();
            let computer_turn = computer.is_some() && side == Side::Black;
            let pair = match computer.as_mut() {
                Some(selector) if side == Side::Black => {
                    match computer_selection(selector, engine.board(), side, &moves) {
                        Ok(pair) => Some(pair),
                        Err(err) => {
                            writeln!(self.out, "{err}")?;
                            return Ok(());
                        }
                    }
                }
                _ => self.prompt_selection(&engine, &moves)?,
            };
            let Some((origin, destination)) = pair else {
                return Ok(());
            };

            match engine.apply_step(&moves, origin, destination) {
                Ok(step) => {
                    if computer_turn {
                        if let Some(last) = engine.history().last() {
                            writeln!(self.out, "Computer plays {}", move_text(last, size))?;
                        }
                    }
                    if let StepOutcome::Finished(outcome) = step {
                        break Some(outcome);
                    }
                }
                Err(err) => writeln!(self.out, "{err}")?,
            }
        };

        if let Some(outcome) = outcome {
            writeln!(self.out)?;
            writeln!(self.out, "{}", render_board(engine.board()))?;
            writeln!(self.out)?;
            writeln!(self.out, "Game over! {}", outcome_message(outcome))?;
            writeln!(self.out)?;

            let (white_name, black_name) = if vs_computer {
                ("Human", "Computer")
            } else {
                ("White", "Black")
            };
            writeln!(
                self.out,
                "{}",
                write_transcript(engine.history(), size, white_name, black_name, Some(outcome))
            )?;
            info!("game over: {} wins", outcome.winner.label());
        }
        Ok(())
    }

    /// Prompt loop for one full human selection, with the `change`
    /// affordance returning from the destination stage to origin selection.
    /// `None` means the input source is exhausted.
    fn prompt_selection(
        &mut self,
        engine: &TurnEngine,
        moves: &MoveSet,
    ) -> io::Result<Option<(Position, Position)>> {
        let board = engine.board();
        let side = engine.turn();
        let size = board.size();

        let Some(mut origin) = self.prompt_origin(board, side, moves)? else {
            return Ok(None);
        };
        loop {
            let suggested = moves
                .suggested_destinations(origin)
                .iter()
                .map(|&dest| coordinate_string(dest, size))
                .collect::<Vec<_>>()
                .join(" ");
            let Some(answer) = self.prompt(&format!(
                "Choose from possible moves [ {suggested} ] or 'change' to reselect pawn: "
            ))?
            else {
                return Ok(None);
            };

            if answer == "change" || answer == "'change'" {
                let Some(next) = self.prompt_origin(board, side, moves)? else {
                    return Ok(None);
                };
                origin = next;
                continue;
            }

            let destination = match parse_coordinate(&answer, size) {
                Ok(pos) => pos,
                Err(err) => {
                    writeln!(self.out, "{err}")?;
                    continue;
                }
            };
            match validate_destination(moves, origin, destination) {
                Ok(_) => return Ok(Some((origin, destination))),
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
    }

    fn prompt_origin(
        &mut self,
        board: &Board,
        side: Side,
        moves: &MoveSet,
    ) -> io::Result<Option<Position>> {
        loop {
            let Some(answer) = self.prompt("Choose pawn to move (ex: a2): ")? else {
                return Ok(None);
            };
            let origin = match parse_coordinate(&answer, board.size()) {
                Ok(pos) => pos,
                Err(err) => {
                    writeln!(self.out, "{err}")?;
                    continue;
                }
            };
            match validate_origin(board, side, moves, origin) {
                Ok(()) => return Ok(Some(origin)),
                Err(err) => writeln!(self.out, "{err}")?,
            }
        }
    }

    /// Write a prompt and read one trimmed line. `None` at end of input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

fn computer_selection(
    selector: &mut dyn MoveSelector,
    board: &Board,
    side: Side,
    moves: &MoveSet,
) -> Result<(Position, Position), GameError> {
    let origin = selector.select_origin(board, side, moves)?;
    match selector.select_destination(board, side, origin, moves)? {
        DestinationChoice::Target(destination) => Ok((origin, destination)),
        DestinationChoice::ChangeOrigin => Err(GameError::NoLegalSelection),
    }
}

fn outcome_message(outcome: GameOutcome) -> String {
    match outcome.reason {
        WinReason::ReachedEnd => format!(
            "{} reached the end. {} wins!",
            outcome.winner.label(),
            outcome.winner.label()
        ),
        WinReason::OpponentBlocked => format!(
            "{} has nowhere to move. {} wins!",
            outcome.winner.opposite().label(),
            outcome.winner.label()
        ),
    }
}
