//! Quarto console game
//!
//! Two players share one terminal. Each turn the current player hands a
//! piece to the opponent by its 4-letter code, then the opponent places it
//! with a `row, col` pair.

mod config;
mod input;
mod render;

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::Result;
use quarto_core::{Board, GamePhase, GameState, Move, Piece, Player, Pos};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let Some(config) = config::parse_args(&args)? else {
        println!("{}", config::USAGE);
        return Ok(());
    };

    init_logging(&config)?;

    let mut state = if config.demo {
        demo_state()?
    } else {
        GameState::initial()
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&mut state, &config, &mut stdin.lock(), &mut stdout.lock())
}

/// Log to stderr so prompts on stdout stay clean.
fn init_logging(config: &Config) -> Result<()> {
    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

/// Demo position: two corners taken, first player about to place.
fn demo_state() -> Result<GameState> {
    let mut remaining: Vec<Piece> = Piece::all().collect();
    let mut board = Board::empty();

    let seeded = [
        (Piece::new(true, true, true, true), Pos::new(3, 3)),
        (Piece::new(false, false, false, false), Pos::new(0, 0)),
    ];
    for (piece, pos) in seeded {
        remaining.retain(|&p| p != piece);
        board.place(pos, piece);
    }
    let selected = remaining.remove(0);

    let state = GameState::new(
        board,
        remaining,
        GamePhase::PlacePiece,
        Some(selected),
        Player::First,
    );
    state.validate()?;
    Ok(state)
}

/// Final message once the game is decided, if it is.
fn outcome_message(state: &GameState) -> Option<String> {
    if let Some(winner) = state.check_winner() {
        let line = state.winning_line().map(|l| render::render_line(&l)).unwrap_or_default();
        return Some(format!("{} wins! ({})", winner, line));
    }
    let stuck = match state.current_phase {
        GamePhase::SelectPiece => state.legal_piece_selections().is_empty(),
        GamePhase::PlacePiece => state.legal_placements().is_empty(),
    };
    if state.board.is_full() || stuck {
        return Some("Board full: draw.".to_string());
    }
    None
}

/// Prompt, parse, apply; until the game ends (or once, if configured).
fn run<R: BufRead, W: Write>(
    state: &mut GameState,
    config: &Config,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    info!(demo = config.demo, once = config.once, "game started");

    loop {
        if let Some(message) = outcome_message(state) {
            write!(out, "{}", render::render_board(&state.board))?;
            writeln!(out, "\n{}", message)?;
            info!(%message, "game over");
            return Ok(());
        }

        write!(out, "{}", render::render_board(&state.board))?;
        write!(out, "{}", render::render_turn(state))?;
        out.flush()?;

        let mov = match state.current_phase {
            GamePhase::SelectPiece => {
                Move::Give(input::read_piece(input, out, state.legal_piece_selections())?)
            }
            GamePhase::PlacePiece => {
                Move::Place(input::read_placement(input, out, &state.legal_placements())?)
            }
        };
        state.apply(mov)?;

        if config.once {
            write!(out, "{}", render::render_board(&state.board))?;
            if let Some(message) = outcome_message(state) {
                writeln!(out, "\n{}", message)?;
            }
            return Ok(());
        }
    }
}
