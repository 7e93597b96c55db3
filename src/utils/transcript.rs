//! Tagged game-record output.
//!
//! Serializes a finished game's sub-move history into a bracket-tagged text
//! block: header tags first, then numbered move text grouped by turn. A
//! turn may span several sub-moves when captures chain, so grouping follows
//! the mover rather than a fixed two-ply rhythm. Write-only; nothing in the
//! crate parses these records back.

use std::collections::BTreeMap;

use chrono::Local;

use crate::engine::turn_engine::GameOutcome;
use crate::game_state::game_types::{MoveKind, Side};
use crate::move_generation::apply_move::AppliedMove;
use crate::utils::coords::coordinate_string;

/// Text form of one sub-move: `a2-a3` for a step, `b3xa4` for a capture.
pub fn move_text(mv: &AppliedMove, size: usize) -> String {
    let separator = match mv.kind {
        MoveKind::Step => '-',
        MoveKind::Capture => 'x',
    };
    format!(
        "{}{}{}",
        coordinate_string(mv.origin, size),
        separator,
        coordinate_string(mv.destination, size)
    )
}

/// Result tag for a game state: `1-0`, `0-1`, or `*` while unfinished.
pub fn result_tag(outcome: Option<GameOutcome>) -> &'static str {
    match outcome {
        Some(outcome) if outcome.winner == Side::White => "1-0",
        Some(_) => "0-1",
        None => "*",
    }
}

/// Write the full game record: header tags, then the move text.
pub fn write_transcript(
    history: &[AppliedMove],
    size: usize,
    white_name: &str,
    black_name: &str,
    outcome: Option<GameOutcome>,
) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Pawn Duel Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert(
        "Date".to_owned(),
        Local::now().format("%Y.%m.%d").to_string(),
    );
    headers.insert("White".to_owned(), white_name.to_owned());
    headers.insert("Black".to_owned(), black_name.to_owned());
    headers.insert("Result".to_owned(), result_tag(outcome).to_owned());

    let mut out = String::new();
    for (key, value) in &headers {
        out.push_str(&format!("[{key} \"{value}\"]\n"));
    }
    out.push('\n');

    let mut parts = Vec::<String>::new();
    let mut turn_number = 0usize;
    let mut index = 0usize;
    while index < history.len() {
        let mover = history[index].mover;
        let mut group = Vec::<String>::new();
        while index < history.len() && history[index].mover == mover {
            group.push(move_text(&history[index], size));
            index += 1;
        }
        let joined = group.join(" ");
        if mover == Side::White {
            turn_number += 1;
            parts.push(format!("{turn_number}. {joined}"));
        } else if turn_number == 0 {
            // Black moved first (a custom position); open the count anyway.
            turn_number = 1;
            parts.push(format!("1... {joined}"));
        } else {
            parts.push(joined);
        }
    }
    parts.push(result_tag(outcome).to_owned());

    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}
