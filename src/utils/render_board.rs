//! Terminal board renderer.
//!
//! Builds the human-readable grid view printed before every sub-step: one
//! rank-labeled row per grid row, top rank first, and a file-letter footer.

use crate::game_state::board::Board;
use crate::game_state::game_types::SquareState;

/// Render the board to a string for terminal output.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    let mut footer = String::from("   ");

    for row in 0..size {
        out.push_str(&(size - row).to_string());
        out.push_str(" |");
        for col in 0..size {
            match board.square((row as i8, col as i8)) {
                SquareState::Occupied(side) => out.push(side.mark()),
                SquareState::Empty => out.push(' '),
            }
            out.push('|');
        }
        out.push('\n');

        footer.push(char::from(b'a' + row as u8));
        footer.push(' ');
    }

    out.push_str(&footer);
    out
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use crate::game_state::board::Board;

    #[test]
    fn standard_board_renders_ranks_and_footer() {
        let rendered = render_board(&Board::standard());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 | | | | | | | | |");
        assert_eq!(lines[1], "7 |B|B|B|B|B|B|B|B|");
        assert_eq!(lines[6], "2 |W|W|W|W|W|W|W|W|");
        assert_eq!(lines[7], "1 | | | | | | | | |");
        assert_eq!(lines[8], "   a b c d e f g h ");
    }

    #[test]
    fn small_board_shrinks_labels_with_the_grid() {
        let board = Board::from_diagram(
            "....\n\
             .B..\n\
             ..W.\n\
             ....",
        )
        .expect("diagram should parse");
        let rendered = render_board(&board);
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "4 | | | | |");
        assert_eq!(lines[1], "3 | |B| | |");
        assert_eq!(lines[2], "2 | | |W| |");
        assert_eq!(lines[4], "   a b c d ");
    }
}
