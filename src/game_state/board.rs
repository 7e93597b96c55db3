//! Owned board state: the grid and the per-side piece sets.
//!
//! `Board` is the central model for the rules engine. It stores the square
//! grid and one ordered position set per side, kept bijective with the grid
//! by the mutation primitives here. Rule queries live in
//! `move_generation`; the board itself only answers state questions and
//! performs invariant-preserving placement and removal.

use std::collections::BTreeSet;

use crate::errors::GameError;
use crate::game_state::game_rules::{
    formation_row, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};
use crate::game_state::game_types::{in_bounds, Position, Side, SquareState};

#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    grid: Vec<Vec<SquareState>>,
    white: BTreeSet<Position>,
    black: BTreeSet<Position>,
}

impl Board {
    /// Empty grid of `size` with Black's formation on row 1 and White's on
    /// row `size - 2`.
    pub fn new(size: usize) -> Result<Self, GameError> {
        let mut board = Self::empty(size)?;
        for col in 0..size as i8 {
            board.place(Side::Black, (formation_row(Side::Black, size) as i8, col));
            board.place(Side::White, (formation_row(Side::White, size) as i8, col));
        }
        Ok(board)
    }

    /// The console game's board.
    pub fn standard() -> Self {
        Self::new(DEFAULT_BOARD_SIZE).expect("default board size should always be accepted")
    }

    /// Board with no pieces, for position building.
    pub fn empty(size: usize) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::InvalidBoardSize(size));
        }
        Ok(Self {
            size,
            grid: vec![vec![SquareState::Empty; size]; size],
            white: BTreeSet::new(),
            black: BTreeSet::new(),
        })
    }

    /// Build a position from a text diagram: one line per row (top first),
    /// `W` / `B` for pieces and `.` for empty squares.
    pub fn from_diagram(diagram: &str) -> Result<Self, GameError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let size = rows.len();
        let mut board = Self::empty(size)?;

        for (row, text) in rows.iter().enumerate() {
            if text.len() != size {
                return Err(GameError::InvalidDiagram(format!(
                    "row {} has {} squares, expected {}",
                    row + 1,
                    text.len(),
                    size
                )));
            }
            for (col, ch) in text.chars().enumerate() {
                let pos = (row as i8, col as i8);
                match ch {
                    '.' => {}
                    'W' => board.place(Side::White, pos),
                    'B' => board.place(Side::Black, pos),
                    other => {
                        return Err(GameError::InvalidDiagram(format!(
                            "unexpected square mark '{other}'"
                        )))
                    }
                }
            }
        }

        Ok(board)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        in_bounds(pos, self.size)
    }

    /// State of one square. Callers pass in-bounds positions.
    #[inline]
    pub fn square(&self, pos: Position) -> SquareState {
        debug_assert!(self.in_bounds(pos));
        self.grid[pos.0 as usize][pos.1 as usize]
    }

    /// Positions currently occupied by `side`.
    #[inline]
    pub fn pieces(&self, side: Side) -> &BTreeSet<Position> {
        match side {
            Side::White => &self.white,
            Side::Black => &self.black,
        }
    }

    #[inline]
    pub fn piece_count(&self, side: Side) -> usize {
        self.pieces(side).len()
    }

    #[inline]
    pub fn occupied_by(&self, side: Side, pos: Position) -> bool {
        self.pieces(side).contains(&pos)
    }

    /// Whether the grid and the side sets still describe the same position:
    /// every occupied square in exactly one set, every set entry on the grid.
    pub fn is_consistent(&self) -> bool {
        if !self.white.is_disjoint(&self.black) {
            return false;
        }
        let mut occupied = 0usize;
        for row in 0..self.size as i8 {
            for col in 0..self.size as i8 {
                match self.square((row, col)) {
                    SquareState::Empty => {}
                    SquareState::Occupied(side) => {
                        occupied += 1;
                        if !self.occupied_by(side, (row, col)) {
                            return false;
                        }
                    }
                }
            }
        }
        occupied == self.white.len() + self.black.len()
    }

    /// Put a `side` piece on an empty in-bounds square.
    pub(crate) fn place(&mut self, side: Side, pos: Position) {
        debug_assert!(self.in_bounds(pos));
        debug_assert_eq!(self.square(pos), SquareState::Empty);
        self.grid[pos.0 as usize][pos.1 as usize] = SquareState::Occupied(side);
        self.pieces_mut(side).insert(pos);
    }

    /// Take a `side` piece off the board.
    pub(crate) fn remove(&mut self, side: Side, pos: Position) {
        debug_assert!(self.occupied_by(side, pos));
        self.grid[pos.0 as usize][pos.1 as usize] = SquareState::Empty;
        self.pieces_mut(side).remove(&pos);
    }

    #[inline]
    fn pieces_mut(&mut self, side: Side) -> &mut BTreeSet<Position> {
        match side {
            Side::White => &mut self.white,
            Side::Black => &mut self.black,
        }
    }
}
