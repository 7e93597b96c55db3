//! Crate root module declarations for the Pawn Duel game.
//!
//! This file exposes all top-level subsystems (board state, move
//! generation, turn orchestration, player selection, the console front
//! end, and utility helpers) so the binary, tests, and benchmarks can
//! import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod game_rules;
    pub mod game_types;
}

pub mod move_generation {
    pub mod apply_move;
    pub mod legal_moves;
}

pub mod engine {
    pub mod selection;
    pub mod turn_engine;
}

pub mod players {
    pub mod random_selector;
    pub mod selector;
}

pub mod console {
    pub mod session;
}

pub mod utils {
    pub mod coords;
    pub mod render_board;
    pub mod transcript;
}

pub mod errors;
