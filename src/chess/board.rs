//! Board snapshots consumed by the move generator.
//!
//! [`Board`] is the read-only interface move generation relies on: bounds
//! checks and piece lookups. [`Mailbox`] is a square-centric implementation
//! storing an optional piece per square, which is enough for generating
//! candidates of individual pieces.

use std::fmt::{self, Write};

use anyhow::{bail, Context};

use crate::chess::core::{Coord, Piece, BOARD_SIZE};

/// Read-only view of the board.
///
/// The move generator always checks [`Board::in_bounds`] before calling
/// [`Board::piece_at`], so implementations are free to answer lookups outside
/// of the board in any way that does not panic.
pub trait Board {
    /// Checks whether the square exists on the board. Implementations can
    /// exclude squares, but anything outside of [`Coord::is_on_board`] is
    /// never considered by the move generator.
    fn in_bounds(&self, square: Coord) -> bool {
        square.is_on_board()
    }

    /// Returns the piece occupying the square or `None` if it is empty.
    fn piece_at(&self, square: Coord) -> Option<Piece>;
}

const SQUARES: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Square-centric board representation (also known as [Mailbox]).
///
/// [Mailbox]: https://www.chessprogramming.org/Mailbox
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Mailbox {
    squares: [Option<Piece>; SQUARES],
}

impl Mailbox {
    /// Creates the board without any pieces.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            squares: [None; SQUARES],
        }
    }

    /// Creates the starting position of the standard chess variant.
    ///
    /// ```
    /// use kibitz::chess::board::Mailbox;
    ///
    /// assert_eq!(
    ///     Mailbox::starting().to_string(),
    ///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"
    /// );
    /// ```
    #[must_use]
    pub fn starting() -> Self {
        match Self::from_placement(STARTING_PLACEMENT) {
            Ok(board) => board,
            Err(e) => unreachable!("starting placement is valid: {e}"),
        }
    }

    fn index(square: Coord) -> Option<usize> {
        if !square.is_on_board() {
            return None;
        }
        #[allow(clippy::cast_sign_loss)]
        let index = square.x as usize * BOARD_SIZE as usize + square.y as usize;
        Some(index)
    }

    /// Puts the piece on the square it claims to stand on, replacing the
    /// previous occupant (if any).
    ///
    /// # Errors
    ///
    /// If the piece's position is outside of the board.
    pub fn place(&mut self, piece: Piece) -> anyhow::Result<()> {
        match Self::index(piece.position) {
            Some(index) => {
                self.squares[index] = Some(piece);
                Ok(())
            },
            None => bail!("can not place {piece} on {}", piece.position),
        }
    }

    /// Clears the square and returns its previous occupant.
    pub fn remove(&mut self, square: Coord) -> Option<Piece> {
        Self::index(square).and_then(|index| self.squares[index].take())
    }

    /// Iterates over all pieces on the board, from `a1` to `h8`.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().filter_map(|square| *square)
    }

    /// Parses the piece placement field of [Forsyth-Edwards Notation]: ranks
    /// from 8 to 1 separated by '/', each listing files a to h with digits
    /// standing for runs of empty squares.
    ///
    /// # Errors
    ///
    /// If the placement does not have exactly 8 ranks of exactly 8 squares or
    /// contains unknown symbols.
    ///
    /// [Forsyth-Edwards Notation]: https://www.chessprogramming.org/Forsyth-Edwards_Notation
    pub fn from_placement(input: &str) -> anyhow::Result<Self> {
        let mut result = Self::empty();
        let mut x = BOARD_SIZE;
        for rank_fen in input.split('/') {
            if x == 0 {
                bail!("incorrect placement: expected 8 ranks, got {input}");
            }
            x -= 1;
            let mut y: i8 = 0;
            for symbol in rank_fen.chars() {
                if y >= BOARD_SIZE {
                    bail!("incorrect placement: rank {rank_fen} exceeds {BOARD_SIZE} files");
                }
                match symbol {
                    '0' => bail!("increment can not be 0"),
                    '1'..='8' => {
                        #[allow(clippy::cast_possible_wrap)]
                        let increment = (symbol as u8 - b'0') as i8;
                        y += increment;
                        continue;
                    },
                    _ => (),
                }
                let piece = Piece::from_symbol(symbol, Coord::new(x, y))
                    .with_context(|| format!("incorrect placement: rank {rank_fen}"))?;
                result.place(piece)?;
                y += 1;
            }
            if y != BOARD_SIZE {
                bail!("incorrect placement: rank size should be exactly {BOARD_SIZE}, got {rank_fen} of length {y}");
            }
        }
        if x != 0 {
            bail!("incorrect placement: there should be 8 ranks, got {input}");
        }
        Ok(result)
    }
}

impl Board for Mailbox {
    fn piece_at(&self, square: Coord) -> Option<Piece> {
        Self::index(square).and_then(|index| self.squares[index])
    }
}

impl Default for Mailbox {
    fn default() -> Self {
        Self::empty()
    }
}

impl TryFrom<&str> for Mailbox {
    type Error = anyhow::Error;

    /// Parses the placement after trimming surrounding whitespace.
    fn try_from(input: &str) -> anyhow::Result<Self> {
        Self::from_placement(input.trim())
    }
}

impl fmt::Display for Mailbox {
    /// Prints the board in FEN piece placement format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in (0..BOARD_SIZE).rev() {
            let mut empty_squares = 0i32;
            for y in 0..BOARD_SIZE {
                if let Some(piece) = self.piece_at(Coord::new(x, y)) {
                    if empty_squares != 0 {
                        write!(f, "{empty_squares}")?;
                        empty_squares = 0;
                    }
                    write!(f, "{piece}")?;
                } else {
                    empty_squares += 1;
                }
            }
            if empty_squares != 0 {
                write!(f, "{empty_squares}")?;
            }
            if x != 0 {
                const RANK_SEPARATOR: char = '/';
                f.write_char(RANK_SEPARATOR)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Mailbox {
    /// Dumps the board in a simple format ('.' for empty square, FEN algebraic
    /// symbol for piece) a-la Stockfish "debug" command in UCI mode.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in (0..BOARD_SIZE).rev() {
            for y in 0..BOARD_SIZE {
                match self.piece_at(Coord::new(x, y)) {
                    Some(piece) => write!(f, "{piece}"),
                    None => f.write_char('.'),
                }?;
                if y != BOARD_SIZE - 1 {
                    write!(f, "{SQUARE_SEPARATOR}")?;
                }
            }
            if x != 0 {
                write!(f, "{LINE_SEPARATOR}")?;
            }
        }
        Ok(())
    }
}

/// Piece placement of the standard chess starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const LINE_SEPARATOR: &str = "\n";
const SQUARE_SEPARATOR: &str = " ";
