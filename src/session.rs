//! Line-oriented command loop for inspecting candidate moves.
//!
//! [`Session::run`] reads commands from the input stream, one per line, and
//! writes responses to the output stream:
//!
//! - `position startpos | empty | <placement>` replaces the board.
//! - `place <symbol> <square>` and `remove <square>` edit the board.
//! - `moves <square>` prints the candidates of the piece on the square.
//! - `all <w|b>` prints the candidates of every piece of the player.
//! - `d` dumps the board, `info` prints the build information.
//! - `quit` stops the loop.
//!
//! Malformed commands are reported with an `info string` line and skipped.

use std::io::{BufRead, Write};

use anyhow::Context;
use itertools::Itertools;

use crate::chess::board::{Board, Mailbox, STARTING_PLACEMENT};
use crate::chess::core::{Coord, Piece, Player};
use crate::chess::movegen::Rules;

const EMPTY_PLACEMENT: &str = "8/8/8/8/8/8/8/8";

/// Holds the board and the rules and handles commands sent through the
/// input stream.
pub struct Session<R: BufRead, W: Write> {
    board: Mailbox,
    rules: Rules,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over given board and I/O.
    #[must_use]
    pub const fn new(board: Mailbox, rules: Rules, input: R, output: W) -> Self {
        Self {
            board,
            rules,
            input,
            output,
        }
    }

    /// Continuously reads the input stream and executes commands until `quit`
    /// is sent or the input is exhausted.
    ///
    /// # Errors
    ///
    /// Fails only when reading the input or writing the output fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("reading command from input")?;
            if read == 0 {
                break;
            }
            if line.trim().is_empty() {
                continue;
            }
            match Command::parse(&line) {
                Command::SetPosition { placement } => self.handle_position(&placement)?,
                Command::Place { symbol, square } => self.handle_place(symbol, square)?,
                Command::Remove { square } => {
                    if self.board.remove(square).is_none() {
                        writeln!(self.output, "info string {square} is already empty")?;
                    }
                },
                Command::Moves { square } => self.handle_moves(square)?,
                Command::All { player } => self.handle_all(player)?,
                Command::Dump => {
                    writeln!(self.output, "{:?}", self.board)?;
                    writeln!(self.output, "Placement: {}", self.board)?;
                },
                Command::Info => crate::write_info(&mut self.output)?,
                Command::Quit => break,
                Command::Unknown(command) => {
                    writeln!(self.output, "info string Unsupported command: {command}")?;
                },
            }
            self.output.flush()?;
        }
        Ok(())
    }

    fn handle_position(&mut self, placement: &str) -> anyhow::Result<()> {
        match Mailbox::from_placement(placement) {
            Ok(board) => {
                log::debug!("Loaded board {board}");
                self.board = board;
            },
            Err(e) => writeln!(self.output, "info string Error reading the position: {e:#}")?,
        }
        Ok(())
    }

    fn handle_place(&mut self, symbol: char, square: Coord) -> anyhow::Result<()> {
        match Piece::from_symbol(symbol, square) {
            Ok(piece) => self.board.place(piece)?,
            Err(e) => writeln!(self.output, "info string {e}")?,
        }
        Ok(())
    }

    fn handle_moves(&mut self, square: Coord) -> anyhow::Result<()> {
        match self.board.piece_at(square) {
            Some(piece) => writeln!(
                self.output,
                "{}",
                piece.possible_moves_with(&self.board, &self.rules).iter().join(" ")
            )?,
            None => writeln!(self.output, "info string There is no piece on {square}")?,
        }
        Ok(())
    }

    fn handle_all(&mut self, player: Player) -> anyhow::Result<()> {
        for piece in self.board.pieces().filter(|piece| piece.owner == player) {
            writeln!(
                self.output,
                "{}: {}",
                piece.position,
                piece.possible_moves_with(&self.board, &self.rules).iter().join(" ")
            )?;
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq)]
enum Command {
    SetPosition { placement: String },
    Place { symbol: char, square: Coord },
    Remove { square: Coord },
    Moves { square: Coord },
    All { player: Player },
    Dump,
    Info,
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let parts = line.split_whitespace().collect::<Vec<_>>();
        let command = match parts.as_slice() {
            ["position", "startpos"] => Some(Self::SetPosition {
                placement: STARTING_PLACEMENT.to_string(),
            }),
            ["position", "empty"] => Some(Self::SetPosition {
                placement: EMPTY_PLACEMENT.to_string(),
            }),
            ["position", placement] => Some(Self::SetPosition {
                placement: (*placement).to_string(),
            }),
            ["place", symbol, square] => match symbol.chars().collect_tuple() {
                Some((symbol,)) => Coord::try_from(*square)
                    .ok()
                    .map(|square| Self::Place { symbol, square }),
                None => None,
            },
            ["remove", square] => Coord::try_from(*square)
                .ok()
                .map(|square| Self::Remove { square }),
            ["moves", square] => Coord::try_from(*square)
                .ok()
                .map(|square| Self::Moves { square }),
            ["all", player] => Player::try_from(*player)
                .ok()
                .map(|player| Self::All { player }),
            ["d"] => Some(Self::Dump),
            ["info"] => Some(Self::Info),
            ["quit"] => Some(Self::Quit),
            _ => None,
        };
        command.unwrap_or_else(|| Self::Unknown(parts.join(" ")))
    }
}
