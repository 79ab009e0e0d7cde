//! Plain-text rendering of the board and turn prompts.

use quarto_core::{Board, GamePhase, GameState, Pos};

/// Placeholder for an empty cell, same width as a piece code.
const EMPTY_CELL: &str = "____";

/// Render the grid with row and column headers.
///
/// ```text
///  : 0    1    2    3
/// 0: SDRS ____ ____ ____
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::from(" : 0    1    2    3   \n");
    for (i, row) in board.rows().iter().enumerate() {
        out.push_str(&format!("{}:", i));
        for cell in row {
            match cell {
                Some(piece) => out.push_str(&format!(" {}", piece)),
                None => out.push_str(&format!(" {}", EMPTY_CELL)),
            }
        }
        out.push('\n');
    }
    out
}

/// Render what the current player has to do.
pub fn render_turn(state: &GameState) -> String {
    let mut out = String::new();
    match state.current_phase {
        GamePhase::SelectPiece => {
            out.push_str("Remaining: ");
            for piece in state.legal_piece_selections() {
                out.push_str(&format!("{} ", piece));
            }
            out.push_str(&format!(
                "\n\n{}: choose a piece to give.\n",
                state.current_player
            ));
        }
        GamePhase::PlacePiece => {
            let code = state
                .selected_piece
                .map(|p| p.to_string())
                .unwrap_or_else(|| "????".to_string());
            out.push_str(&format!(
                "\n{}: choose where to place [{}].\n",
                state.current_player, code
            ));
        }
    }
    out
}

/// Render a scoring line as space-separated `row,col` pairs.
pub fn render_line(line: &[Pos; 4]) -> String {
    line.iter()
        .map(|pos| pos.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
