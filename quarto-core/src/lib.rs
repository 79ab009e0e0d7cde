//! Quarto game logic: pieces, board, turn protocol and win detection.
//!
//! # Pieces
//!
//! Every piece carries four binary attributes. The 16 pieces are exactly the
//! 16 combinations, so a piece has no identity beyond its attribute vector.
//!
//! ```text
//! Code position   Attribute   true      false
//!   0             height      T tall    S short
//!   1             color       L light   D dark
//!   2             shape       S square  R round
//!   3             top         H hollow  S solid
//! ```
//!
//! # Piece Bits (4-bit)
//!
//! ```text
//! Bit 3: height
//! Bit 2: color
//! Bit 1: shape
//! Bit 0: top
//! ```
//!
//! # Turn Protocol
//!
//! ```text
//! SelectPiece --give(piece)--> PlacePiece   (current player toggles)
//! PlacePiece  --place(pos)---> SelectPiece  (current player unchanged)
//! ```
//!
//! # Scoring Lines (19)
//!
//! 4 rows, 4 columns, 2 diagonals and the 9 overlapping 2x2 squares.
//! A full line wins when all four pieces agree on at least one attribute.

#[cfg(feature = "wasm")]
pub mod wasm;

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Board side length.
pub const BOARD_SIZE: u8 = 4;

/// Number of cells (and of distinct pieces).
pub const CELL_COUNT: usize = 16;

// ============================================================================
// ERRORS
// ============================================================================

/// Reasons a move is rejected by [`GameState::apply_move`].
///
/// A rejected move never modifies the state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("must provide a piece to give during the select phase")]
    MissingPiece,

    #[error("must provide a placement during the place phase")]
    MissingPlacement,

    #[error("piece {0} is not available for selection")]
    IllegalSelection(Piece),

    #[error("position {0} is already occupied or out of bounds")]
    IllegalPlacement(Pos),

    #[error("no piece has been selected for placement")]
    NoSelectedPiece,
}

/// Coarse classification of [`MoveError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveErrorKind {
    /// The argument required by the current phase was not supplied.
    MissingArgument,
    IllegalSelection,
    IllegalPlacement,
    /// The state itself breaks the phase invariant.
    InvalidState,
}

impl MoveError {
    pub fn kind(&self) -> MoveErrorKind {
        match self {
            MoveError::MissingPiece | MoveError::MissingPlacement => MoveErrorKind::MissingArgument,
            MoveError::IllegalSelection(_) => MoveErrorKind::IllegalSelection,
            MoveError::IllegalPlacement(_) => MoveErrorKind::IllegalPlacement,
            MoveError::NoSelectedPiece => MoveErrorKind::InvalidState,
        }
    }
}

/// Invariant violations reported by [`GameState::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateError {
    #[error("piece {0} is in play more than once")]
    DuplicatePiece(Piece),

    #[error("piece {0} is neither on the board, remaining, nor selected")]
    MissingPiece(Piece),

    #[error("selected piece must be present exactly during the place phase (phase: {0})")]
    SelectionPhaseMismatch(GamePhase),

    #[error("player index {0} is out of range")]
    InvalidPlayer(u8),
}

/// Errors from parsing a 4-letter piece code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePieceError {
    #[error("piece code must be 4 characters, got {0}")]
    BadLength(usize),

    #[error("unexpected character {ch:?} at position {index}")]
    BadChar { index: usize, ch: char },
}

/// Errors from parsing a `row,col` coordinate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParsePosError {
    #[error("expected `row,col`")]
    BadFormat,

    #[error("invalid number: {0}")]
    BadInt(#[from] ParseIntError),

    #[error("position {row},{col} is off the board")]
    OutOfBounds { row: u8, col: u8 },
}

// ============================================================================
// PIECES
// ============================================================================

/// One of the four binary piece attributes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Height,
    Color,
    Shape,
    Top,
}

impl Attribute {
    /// All attributes in code order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Height,
        Attribute::Color,
        Attribute::Shape,
        Attribute::Top,
    ];

    /// Iterate over all attributes in code order.
    pub fn all() -> impl Iterator<Item = Attribute> {
        Self::ALL.into_iter()
    }

    /// Bit position in [`Piece::bits`].
    #[inline]
    pub const fn bit(self) -> u8 {
        match self {
            Attribute::Height => 3,
            Attribute::Color => 2,
            Attribute::Shape => 1,
            Attribute::Top => 0,
        }
    }

    /// Code letters as `(when true, when false)`.
    #[inline]
    pub const fn letters(self) -> (char, char) {
        match self {
            Attribute::Height => ('T', 'S'),
            Attribute::Color => ('L', 'D'),
            Attribute::Shape => ('S', 'R'),
            Attribute::Top => ('H', 'S'),
        }
    }
}

/// A Quarto piece. Equality is structural over all four attributes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Tall (`true`) or short.
    pub height: bool,
    /// Light (`true`) or dark.
    pub color: bool,
    /// Square (`true`) or round.
    pub shape: bool,
    /// Hollow (`true`) or solid.
    pub top: bool,
}

impl Piece {
    #[inline]
    pub const fn new(height: bool, color: bool, shape: bool, top: bool) -> Piece {
        Piece { height, color, shape, top }
    }

    /// Read one attribute.
    #[inline]
    pub const fn attribute(self, attr: Attribute) -> bool {
        match attr {
            Attribute::Height => self.height,
            Attribute::Color => self.color,
            Attribute::Shape => self.shape,
            Attribute::Top => self.top,
        }
    }

    /// Pack the attributes into 4 bits (see module docs).
    #[inline]
    pub fn bits(self) -> u8 {
        Attribute::all()
            .filter(|&attr| self.attribute(attr))
            .fold(0, |acc, attr| acc | (1 << attr.bit()))
    }

    /// Unpack 4 bits into a piece. Returns None for values >= 16.
    #[inline]
    pub fn from_bits(bits: u8) -> Option<Piece> {
        if bits as usize >= CELL_COUNT {
            return None;
        }
        let set = |attr: Attribute| bits & (1 << attr.bit()) != 0;
        Some(Piece {
            height: set(Attribute::Height),
            color: set(Attribute::Color),
            shape: set(Attribute::Shape),
            top: set(Attribute::Top),
        })
    }

    /// All 16 pieces, starting with the all-true piece and ending with the
    /// all-false piece.
    pub fn all() -> impl Iterator<Item = Piece> {
        (0..CELL_COUNT as u8).rev().filter_map(Piece::from_bits)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for attr in Attribute::all() {
            let (yes, no) = attr.letters();
            let ch = if self.attribute(attr) { yes } else { no };
            write!(f, "{}", ch)?;
        }
        Ok(())
    }
}

impl FromStr for Piece {
    type Err = ParsePieceError;

    /// Parse a 4-letter code such as `TLSH`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.trim().chars().collect();
        if chars.len() != Attribute::ALL.len() {
            return Err(ParsePieceError::BadLength(chars.len()));
        }

        let mut values = [false; 4];
        for (index, attr) in Attribute::all().enumerate() {
            let ch = chars[index];
            let (yes, no) = attr.letters();
            values[index] = match ch.to_ascii_uppercase() {
                c if c == yes => true,
                c if c == no => false,
                _ => return Err(ParsePieceError::BadChar { index, ch }),
            };
        }

        Ok(Piece::new(values[0], values[1], values[2], values[3]))
    }
}

/// Find the first attribute all four pieces agree on, if any.
///
/// Checks attributes in code order: height, color, shape, top.
pub fn shared_attribute(pieces: &[Piece; 4]) -> Option<Attribute> {
    Attribute::all().find(|&attr| {
        let first = pieces[0].attribute(attr);
        pieces[1..].iter().all(|p| p.attribute(attr) == first)
    })
}

// ============================================================================
// POSITIONS
// ============================================================================

/// A `(row, col)` cell coordinate.
///
/// Coordinates are not range-checked on construction so that callers can
/// hand arbitrary input to [`GameState::apply_move`] and get a rejection.
///
/// Layout:
/// ```text
///       col 0  1  2  3
///   row 0
///       1
///       2
///       3
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Pos {
        Pos { row, col }
    }

    /// Check if both coordinates are on the board (0-3).
    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major cell index (0-15). Only meaningful for valid positions.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Iterate over all 16 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..CELL_COUNT as u8).map(|i| Pos::new(i / BOARD_SIZE, i % BOARD_SIZE))
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Pos {
    type Err = ParsePosError;

    /// Parse `row,col` (0-3 each). Whitespace around either number is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split(',').map(str::trim).collect();
        if parts.len() != 2 {
            return Err(ParsePosError::BadFormat);
        }
        let row: u8 = parts[0].parse()?;
        let col: u8 = parts[1].parse()?;

        let pos = Pos::new(row, col);
        if !pos.is_valid() {
            return Err(ParsePosError::OutOfBounds { row, col });
        }
        Ok(pos)
    }
}

/// The 19 scoring lines in scan order.
pub const LINES: [[Pos; 4]; 19] = [
    // Rows
    [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)],
    [Pos::new(1, 0), Pos::new(1, 1), Pos::new(1, 2), Pos::new(1, 3)],
    [Pos::new(2, 0), Pos::new(2, 1), Pos::new(2, 2), Pos::new(2, 3)],
    [Pos::new(3, 0), Pos::new(3, 1), Pos::new(3, 2), Pos::new(3, 3)],
    // Columns
    [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)],
    [Pos::new(0, 1), Pos::new(1, 1), Pos::new(2, 1), Pos::new(3, 1)],
    [Pos::new(0, 2), Pos::new(1, 2), Pos::new(2, 2), Pos::new(3, 2)],
    [Pos::new(0, 3), Pos::new(1, 3), Pos::new(2, 3), Pos::new(3, 3)],
    // Main diagonal
    [Pos::new(0, 0), Pos::new(1, 1), Pos::new(2, 2), Pos::new(3, 3)],
    // Anti-diagonal
    [Pos::new(0, 3), Pos::new(1, 2), Pos::new(2, 1), Pos::new(3, 0)],
    // 2x2 squares, by top-left corner
    [Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 0), Pos::new(1, 1)],
    [Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 1), Pos::new(1, 2)],
    [Pos::new(0, 2), Pos::new(0, 3), Pos::new(1, 2), Pos::new(1, 3)],
    [Pos::new(1, 0), Pos::new(1, 1), Pos::new(2, 0), Pos::new(2, 1)],
    [Pos::new(1, 1), Pos::new(1, 2), Pos::new(2, 1), Pos::new(2, 2)],
    [Pos::new(1, 2), Pos::new(1, 3), Pos::new(2, 2), Pos::new(2, 3)],
    [Pos::new(2, 0), Pos::new(2, 1), Pos::new(3, 0), Pos::new(3, 1)],
    [Pos::new(2, 1), Pos::new(2, 2), Pos::new(3, 1), Pos::new(3, 2)],
    [Pos::new(2, 2), Pos::new(2, 3), Pos::new(3, 2), Pos::new(3, 3)],
];

// ============================================================================
// BOARD
// ============================================================================

/// 4x4 grid of optional pieces.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; 4]; 4],
}

impl Board {
    /// Create an all-empty board.
    #[inline]
    pub const fn empty() -> Board {
        Board { grid: [[None; 4]; 4] }
    }

    /// Create a board from a raw grid (row-major).
    ///
    /// The grid is taken as-is: no uniqueness check is made.
    pub const fn from_rows(grid: [[Option<Piece>; 4]; 4]) -> Board {
        Board { grid }
    }

    /// Raw grid access for renderers.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 4]; 4] {
        &self.grid
    }

    /// Piece at a position. Out-of-range positions read as empty.
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Check if a cell is on the board and unoccupied.
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        pos.is_valid() && self.grid[pos.row as usize][pos.col as usize].is_none()
    }

    // ========== Piece Operations ==========

    /// Write a piece into a cell, replacing whatever was there.
    /// Returns false and leaves the board untouched for off-board positions.
    #[inline]
    pub fn place(&mut self, pos: Pos, piece: Piece) -> bool {
        if !pos.is_valid() {
            return false;
        }
        self.grid[pos.row as usize][pos.col as usize] = Some(piece);
        true
    }

    /// Clear a cell, returning the piece that was there.
    pub fn remove(&mut self, pos: Pos) -> Option<Piece> {
        if !pos.is_valid() {
            return None;
        }
        self.grid[pos.row as usize][pos.col as usize].take()
    }

    /// Iterate over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }

    /// Iterate over occupied cells in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Pos::all().filter_map(move |pos| self.get(pos).map(|piece| (pos, piece)))
    }

    pub fn occupied_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == CELL_COUNT
    }

    pub fn contains(&self, piece: Piece) -> bool {
        self.grid.iter().flatten().any(|&cell| cell == Some(piece))
    }

    // ========== Win Detection ==========

    /// The four pieces on a line, or None if any cell is empty.
    #[inline]
    pub fn line_pieces(&self, line: &[Pos; 4]) -> Option<[Piece; 4]> {
        Some([
            self.get(line[0])?,
            self.get(line[1])?,
            self.get(line[2])?,
            self.get(line[3])?,
        ])
    }

    /// First full line whose pieces share an attribute, in [`LINES`] order.
    pub fn winning_line(&self) -> Option<[Pos; 4]> {
        LINES.iter().copied().find(|line| {
            self.line_pieces(line)
                .and_then(|pieces| shared_attribute(&pieces))
                .is_some()
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

// ============================================================================
// GAME STATE
// ============================================================================

/// Player index.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Player {
    First = 0,
    Second = 1,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Convert from 0 or 1 to Player.
    #[inline]
    pub fn from_index(index: u8) -> Option<Player> {
        match index {
            0 => Some(Player::First),
            1 => Some(Player::Second),
            _ => None,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = StateError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Player::from_index(index).ok_or(StateError::InvalidPlayer(index))
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player.index()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Which half of a turn the current player must perform.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    /// Choose a piece from the pool for the opponent.
    SelectPiece,
    /// Place the previously selected piece on an empty cell.
    PlacePiece,
}

impl GamePhase {
    pub fn as_str(self) -> &'static str {
        match self {
            GamePhase::SelectPiece => "select_piece",
            GamePhase::PlacePiece => "place_piece",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single action. See [`GameState::apply`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Move {
    /// Hand a piece to the opponent (select phase).
    Give(Piece),
    /// Put the selected piece on the board (place phase).
    Place(Pos),
}

/// Full game state.
///
/// Invariants (checked by [`GameState::validate`], preserved by
/// [`GameState::apply_move`]):
/// - remaining pieces, board pieces and the selected piece partition the
///   16-piece set
/// - `selected_piece` is present exactly in [`GamePhase::PlacePiece`]
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    /// Pieces not yet placed or selected. Order is not significant.
    pub remaining_pieces: Vec<Piece>,
    pub current_phase: GamePhase,
    pub selected_piece: Option<Piece>,
    pub current_player: Player,
}

impl GameState {
    /// Assemble a state from its parts without validation.
    pub fn new(
        board: Board,
        remaining_pieces: Vec<Piece>,
        current_phase: GamePhase,
        selected_piece: Option<Piece>,
        current_player: Player,
    ) -> GameState {
        GameState {
            board,
            remaining_pieces,
            current_phase,
            selected_piece,
            current_player,
        }
    }

    /// Empty board, full pool, first player to select.
    pub fn initial() -> GameState {
        GameState::new(
            Board::empty(),
            Piece::all().collect(),
            GamePhase::SelectPiece,
            None,
            Player::First,
        )
    }

    /// Check every state invariant.
    pub fn validate(&self) -> Result<(), StateError> {
        let phase_ok = matches!(
            (self.current_phase, self.selected_piece),
            (GamePhase::SelectPiece, None) | (GamePhase::PlacePiece, Some(_))
        );
        if !phase_ok {
            return Err(StateError::SelectionPhaseMismatch(self.current_phase));
        }

        let mut seen = [0u8; CELL_COUNT];
        let in_play = self
            .board
            .pieces()
            .map(|(_, piece)| piece)
            .chain(self.remaining_pieces.iter().copied())
            .chain(self.selected_piece);
        for piece in in_play {
            let count = &mut seen[piece.bits() as usize];
            if *count > 0 {
                return Err(StateError::DuplicatePiece(piece));
            }
            *count += 1;
        }

        match Piece::all().find(|piece| seen[piece.bits() as usize] == 0) {
            Some(missing) => Err(StateError::MissingPiece(missing)),
            None => Ok(()),
        }
    }

    // ========== Legality Queries ==========

    /// Every empty cell in row-major order.
    pub fn legal_placements(&self) -> Vec<Pos> {
        self.board.empty_cells().collect()
    }

    /// The pieces that may be handed to the opponent.
    #[inline]
    pub fn legal_piece_selections(&self) -> &[Piece] {
        &self.remaining_pieces
    }

    // ========== Move Application ==========

    /// Validate and apply one action for the current phase.
    ///
    /// - `SelectPiece` needs `piece_to_give`: it becomes the selected piece,
    ///   leaves the pool, the current player toggles and the phase becomes
    ///   `PlacePiece`.
    /// - `PlacePiece` needs `placement`: the selected piece is written there,
    ///   the selection clears and the phase becomes `SelectPiece`. The current
    ///   player does not change.
    ///
    /// The argument not used by the current phase is ignored. On error the
    /// state is left untouched.
    #[instrument(
        level = "debug",
        skip(self),
        fields(phase = %self.current_phase, player = %self.current_player)
    )]
    pub fn apply_move(
        &mut self,
        placement: Option<Pos>,
        piece_to_give: Option<Piece>,
    ) -> Result<&mut GameState, MoveError> {
        let result = match self.current_phase {
            GamePhase::SelectPiece => self.give(piece_to_give),
            GamePhase::PlacePiece => self.place(placement),
        };

        if let Err(err) = &result {
            debug!(%err, "move rejected");
        }
        result.map(|()| self)
    }

    /// Apply a [`Move`]; shorthand for [`GameState::apply_move`].
    pub fn apply(&mut self, mov: Move) -> Result<&mut GameState, MoveError> {
        match mov {
            Move::Give(piece) => self.apply_move(None, Some(piece)),
            Move::Place(pos) => self.apply_move(Some(pos), None),
        }
    }

    fn give(&mut self, piece_to_give: Option<Piece>) -> Result<(), MoveError> {
        let piece = piece_to_give.ok_or(MoveError::MissingPiece)?;
        let idx = self
            .legal_piece_selections()
            .iter()
            .position(|&p| p == piece)
            .ok_or(MoveError::IllegalSelection(piece))?;

        self.remaining_pieces.remove(idx);
        self.selected_piece = Some(piece);
        self.current_player = self.current_player.opponent();
        self.current_phase = GamePhase::PlacePiece;

        debug!(%piece, to = %self.current_player, "piece given");
        Ok(())
    }

    fn place(&mut self, placement: Option<Pos>) -> Result<(), MoveError> {
        let pos = placement.ok_or(MoveError::MissingPlacement)?;
        if !self.board.is_empty(pos) {
            return Err(MoveError::IllegalPlacement(pos));
        }
        let piece = self.selected_piece.ok_or(MoveError::NoSelectedPiece)?;

        self.board.place(pos, piece);
        self.selected_piece = None;
        self.current_phase = GamePhase::SelectPiece;

        debug!(%piece, %pos, "piece placed");
        Ok(())
    }

    // ========== Win Detection ==========

    /// First winning line on the board, in scan order.
    #[inline]
    pub fn winning_line(&self) -> Option<[Pos; 4]> {
        self.board.winning_line()
    }

    /// Report the current player if any line is won.
    ///
    /// The result is only meaningful right after a placement: whoever is
    /// recorded as current at call time is credited with the win.
    pub fn check_winner(&self) -> Option<Player> {
        let line = self.winning_line()?;
        trace!(?line, winner = %self.current_player, "winning line");
        Some(self.current_player)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
