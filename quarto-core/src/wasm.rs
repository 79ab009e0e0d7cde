//! WASM bindings for quarto-core
//!
//! Provides a JavaScript-friendly API for the game logic. Pieces cross the
//! boundary as 4-letter codes, positions as separate row/col numbers.

use wasm_bindgen::prelude::*;
use crate::{GamePhase, GameState, Move, Piece, Pos};

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a new game: empty board, all 16 pieces remaining
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame { inner: GameState::initial() }
    }

    /// Restore a game from the JSON produced by `toJson`
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str) -> Option<WasmGame> {
        let inner: GameState = serde_json::from_str(json).ok()?;
        inner.validate().ok()?;
        Some(WasmGame { inner })
    }

    /// Serialize the full state as JSON
    #[wasm_bindgen(js_name = toJson)]
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.inner).unwrap_or_default()
    }

    /// Current phase: "select_piece" or "place_piece"
    pub fn phase(&self) -> String {
        self.inner.current_phase.as_str().to_string()
    }

    /// Current player (0 or 1)
    #[wasm_bindgen(js_name = currentPlayer)]
    pub fn current_player(&self) -> u8 {
        self.inner.current_player.index()
    }

    /// Code of the piece waiting to be placed, or empty string
    #[wasm_bindgen(js_name = selectedPiece)]
    pub fn selected_piece(&self) -> String {
        self.inner
            .selected_piece
            .map(|p| p.to_string())
            .unwrap_or_default()
    }

    /// Codes of the pieces that can still be given
    #[wasm_bindgen(js_name = remainingPieces)]
    pub fn remaining_pieces(&self) -> Vec<String> {
        self.inner
            .legal_piece_selections()
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    /// Code of the piece at a cell, or empty string
    pub fn cell(&self, row: u8, col: u8) -> String {
        self.inner
            .board
            .get(Pos::new(row, col))
            .map(|p| p.to_string())
            .unwrap_or_default()
    }

    /// Get legal placements as JSON array of [row, col]
    #[wasm_bindgen(js_name = legalPlacements)]
    pub fn legal_placements(&self) -> JsValue {
        let cells: Vec<[u8; 2]> = self
            .inner
            .legal_placements()
            .into_iter()
            .map(|pos| [pos.row, pos.col])
            .collect();
        serde_wasm_bindgen::to_value(&cells).unwrap_or(JsValue::NULL)
    }

    /// Give a piece by code. Returns true if successful.
    #[wasm_bindgen(js_name = givePiece)]
    pub fn give_piece(&mut self, code: &str) -> bool {
        match code.parse::<Piece>() {
            Ok(piece) => self.inner.apply(Move::Give(piece)).is_ok(),
            Err(_) => false,
        }
    }

    /// Place the selected piece. Returns true if successful.
    #[wasm_bindgen(js_name = placePiece)]
    pub fn place_piece(&mut self, row: u8, col: u8) -> bool {
        self.inner.apply(Move::Place(Pos::new(row, col))).is_ok()
    }

    /// Check for winner. Returns -1 (none), 0 or 1
    #[wasm_bindgen(js_name = checkWinner)]
    pub fn check_winner(&self) -> i8 {
        match self.inner.check_winner() {
            None => -1,
            Some(player) => player.index() as i8,
        }
    }

    /// Get winning line as array of positions [row, col, row, col, ...]
    /// Returns empty array if no winner
    #[wasm_bindgen(js_name = winningLine)]
    pub fn winning_line(&self) -> Vec<u8> {
        match self.inner.winning_line() {
            Some(line) => line.iter().flat_map(|pos| [pos.row, pos.col]).collect(),
            None => vec![],
        }
    }

    /// True once no empty cell remains
    #[wasm_bindgen(js_name = isBoardFull)]
    pub fn is_board_full(&self) -> bool {
        self.inner.board.is_full()
    }

    /// Game result: "ongoing", "player_0_wins", "player_1_wins", or "draw"
    pub fn result(&self) -> String {
        if let Some(winner) = self.inner.check_winner() {
            format!("player_{}_wins", winner.index())
        } else if self.inner.current_phase == GamePhase::SelectPiece
            && self.inner.legal_placements().is_empty()
        {
            "draw".to_string()
        } else {
            "ongoing".to_string()
        }
    }

    /// Clone the game
    #[wasm_bindgen(js_name = clone)]
    pub fn clone_game(&self) -> WasmGame {
        WasmGame { inner: self.inner.clone() }
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
