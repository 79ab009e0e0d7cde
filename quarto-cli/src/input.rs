//! Prompted input: read lines until one parses and is currently legal.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use quarto_core::{Piece, Pos};
use tracing::debug;

/// Read one line, failing on end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed");
    }
    Ok(line)
}

/// Read a 4-letter piece code that names one of `legal`.
pub fn read_piece<R: BufRead, W: Write>(input: &mut R, output: &mut W, legal: &[Piece]) -> Result<Piece> {
    loop {
        let line = read_line(input)?;
        let piece = match line.parse::<Piece>() {
            Ok(piece) => piece,
            Err(e) => {
                debug!(input = line.trim(), error = %e, "unparsable piece");
                writeln!(output, "Please choose a valid piece.")?;
                continue;
            }
        };
        if !legal.contains(&piece) {
            writeln!(output, "That piece is not available.")?;
            continue;
        }
        return Ok(piece);
    }
}

/// Read a `row, col` pair that names one of `legal`.
pub fn read_placement<R: BufRead, W: Write>(input: &mut R, output: &mut W, legal: &[Pos]) -> Result<Pos> {
    loop {
        let line = read_line(input)?;
        let pos = match line.parse::<Pos>() {
            Ok(pos) => pos,
            Err(e) => {
                debug!(input = line.trim(), error = %e, "unparsable placement");
                writeln!(output, "Please choose a valid placement in the format: row, col (0-3, 0-3)")?;
                continue;
            }
        };
        if !legal.contains(&pos) {
            writeln!(output, "That placement is not available.")?;
            continue;
        }
        return Ok(pos);
    }
}
