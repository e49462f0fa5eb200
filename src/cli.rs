#![cfg(feature = "std")]

//! Line-oriented terminal front end for a [`GameSession`].

use std::fmt::Write as _;
use std::io::{BufRead, Write};

use crate::{
    common::coord_to_index,
    config::BOARD_SIZE,
    session::{Command, GameSession, Snapshot},
};

pub const HELP: &str = "\
Commands:
  start        start a new game, or resume a paused one
  pause        pause the running game
  quit         abandon the game (asks for confirmation)
  1-9          mark a cell, numbered left to right, top to bottom
  A1..C3       mark a cell by column letter and row number
  help         show this message
  exit         leave the program";

/// Parse a user command. `quit` is returned unconfirmed; the caller asks.
///
/// Cell references that do not name a grid cell still parse, so the session
/// can report them as invalid moves.
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    match input.to_ascii_lowercase().as_str() {
        "start" | "s" => return Some(Command::Start),
        "pause" | "p" => return Some(Command::Pause),
        "quit" | "q" => return Some(Command::Quit { confirmed: false }),
        _ => {}
    }
    if let Ok(n) = input.parse::<usize>() {
        return Some(Command::CellClick(n.wrapping_sub(1)));
    }
    parse_coord(input).map(Command::CellClick)
}

fn parse_coord(input: &str) -> Option<usize> {
    if input.len() < 2 {
        return None;
    }
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str.parse().ok()?;
    Some(coord_to_index(row.wrapping_sub(1), col).unwrap_or(usize::MAX))
}

/// Render the grid, status line and lifecycle state.
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for (r, row) in snapshot.cells.chunks(BOARD_SIZE).enumerate() {
        let _ = write!(out, "{:2} ", r + 1);
        for cell in row {
            let _ = write!(out, " {}", cell.symbol());
        }
        out.push('\n');
    }
    let _ = write!(
        out,
        "{}\n[{:?}, {} to move]",
        snapshot.status, snapshot.state, snapshot.current_player
    );
    out
}

/// Drive `session` from `input` until EOF or `exit`, rendering to `output`.
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    writeln!(output, "{}", render(&session.snapshot()))?;
    let mut lines = input.lines();
    loop {
        write!(output, "> ")?;
        output.flush()?;
        let Some(line) = lines.next() else { break };
        let line = line?;
        let trimmed = line.trim();
        match trimmed {
            "" => continue,
            "exit" => break,
            "help" | "?" => {
                writeln!(output, "{}", HELP)?;
                continue;
            }
            _ => {}
        }
        let Some(mut command) = parse_command(trimmed) else {
            writeln!(output, "Unknown command: {} (type 'help')", trimmed)?;
            continue;
        };
        if let Command::Quit { .. } = command {
            write!(output, "Really quit? [y/N] ")?;
            output.flush()?;
            let answer = match lines.next() {
                Some(answer) => answer?,
                None => String::new(),
            };
            let confirmed = matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes");
            command = Command::Quit { confirmed };
        }
        let outcome = session.dispatch(command);
        log::debug!("{:?} -> {:?}", command, outcome);
        writeln!(output, "{}", render(&session.snapshot()))?;
    }
    Ok(())
}
