//! Chess primitives commonly used within [`crate::chess`].

use std::fmt::{self, Write};

use anyhow::bail;
use itertools::Itertools;

/// Number of ranks and files of the board. The board is square, so a single
/// constant describes both dimensions.
pub const BOARD_SIZE: i8 = 8;

/// Location on the board or next to it.
///
/// `x` is the axis pawns advance along: White pawns move towards increasing
/// `x`, Black pawns towards decreasing `x`. In algebraic notation `x` is the
/// rank (`x = 0` is rank 1) and `y` is the file (`y = 0` is file a):
///
/// ```
/// use kibitz::chess::core::Coord;
///
/// assert_eq!(Coord::new(0, 0).to_string(), "a1");
/// assert_eq!(Coord::new(1, 4).to_string(), "e2");
/// assert_eq!(Coord::new(7, 7).to_string(), "h8");
/// assert_eq!(Coord::try_from("e2").unwrap(), Coord::new(1, 4));
/// ```
///
/// Coordinates produced by shifting a square can fall outside the board: they
/// are valid values, [`Coord::is_on_board`] tells them apart.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    #[allow(missing_docs)]
    pub x: i8,
    #[allow(missing_docs)]
    pub y: i8,
}

impl Coord {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate displaced by `(dx, dy)`. The result is not
    /// guaranteed to be on the board: components wrap around on overflow.
    #[must_use]
    pub const fn offset(self, dx: i8, dy: i8) -> Self {
        Self::new(self.x.wrapping_add(dx), self.y.wrapping_add(dy))
    }

    /// Moves `distance` steps towards `direction`.
    #[must_use]
    pub const fn shift(self, direction: Direction, distance: i8) -> Self {
        let (dx, dy) = direction.delta();
        self.offset(dx.wrapping_mul(distance), dy.wrapping_mul(distance))
    }

    /// Checks whether both components are within `0..BOARD_SIZE`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        0 <= self.x && self.x < BOARD_SIZE && 0 <= self.y && self.y < BOARD_SIZE
    }

    /// Iterates over all squares of the board: `a1`, `b1`, ..., `h1`, `a2`,
    /// ..., `h8`.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..BOARD_SIZE).cartesian_product(0..BOARD_SIZE).map(|(x, y)| Self::new(x, y))
    }
}

impl TryFrom<&str> for Coord {
    type Error = anyhow::Error;

    /// Parses the square name in algebraic notation (e.g. "e4").
    fn try_from(square: &str) -> anyhow::Result<Self> {
        let (file, rank) = match square.chars().collect_tuple() {
            Some((file, rank)) => (file, rank),
            None => bail!(
                "square should be two-char, got {square} with {} chars",
                square.chars().count()
            ),
        };
        let y = match file {
            'a'..='h' => file as u8 - b'a',
            _ => bail!("file should be within 'a'..='h', got '{file}'"),
        };
        let x = match rank {
            '1'..='8' => rank as u8 - b'1',
            _ => bail!("rank should be within '1'..='8', got '{rank}'"),
        };
        // Both values are below BOARD_SIZE.
        #[allow(clippy::cast_possible_wrap)]
        let square = Self::new(x as i8, y as i8);
        Ok(square)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "({}, {})", self.x, self.y);
        }
        #[allow(clippy::cast_sign_loss)]
        let (file, rank) = ((b'a' + self.y as u8) as char, (b'1' + self.x as u8) as char);
        f.write_char(file)?;
        f.write_char(rank)
    }
}

/// Represents a candidate move: the piece standing on `from` goes to `to`,
/// capturing whatever stands there.
///
/// Moves are plain values: two moves are equal if and only if both
/// coordinates are equal. They are printed in the long algebraic notation used
/// by UCI:
///
/// ```
/// use kibitz::chess::core::{Coord, Move};
///
/// let knight_jump = Move::new(Coord::new(0, 1), Coord::new(2, 2));
/// assert_eq!(knight_jump.to_string(), "b1c3");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    #[allow(missing_docs)]
    pub from: Coord,
    #[allow(missing_docs)]
    pub to: Coord,
}

impl Move {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// A standard game of chess is played between two players: White (having the
/// advantage of the first turn) and Black.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    White,
    Black,
}

impl Player {
    /// "Flips" the color.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black => Self::White,
        }
    }

    /// Direction of pawn pushes along the `x` axis.
    #[must_use]
    pub const fn push_direction(self) -> Direction {
        match self {
            Self::White => Direction::Up,
            Self::Black => Direction::Down,
        }
    }

    /// The `x` coordinate pawns of this player start the game on.
    #[must_use]
    pub const fn pawns_starting_rank(self) -> i8 {
        match self {
            Self::White => 1,
            Self::Black => BOARD_SIZE - 2,
        }
    }
}

impl TryFrom<&str> for Player {
    type Error = anyhow::Error;

    fn try_from(player: &str) -> anyhow::Result<Self> {
        match player {
            "w" => Ok(Self::White),
            "b" => Ok(Self::Black),
            _ => bail!("player should be 'w' or 'b', got '{player}'"),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(match &self {
            Self::White => 'w',
            Self::Black => 'b',
        })
    }
}

/// Standard [chess pieces].
///
/// [chess pieces]: https://en.wikipedia.org/wiki/Chess_piece
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    /// Returns the lowercase FEN symbol of the piece kind.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::King => 'k',
            Self::Queen => 'q',
            Self::Rook => 'r',
            Self::Bishop => 'b',
            Self::Knight => 'n',
            Self::Pawn => 'p',
        }
    }

    /// Bishops, rooks and queens move along rays until they hit the edge of
    /// the board or another piece.
    #[must_use]
    pub const fn is_sliding(self) -> bool {
        matches!(self, Self::Queen | Self::Rook | Self::Bishop)
    }
}

impl TryFrom<char> for PieceKind {
    type Error = anyhow::Error;

    fn try_from(symbol: char) -> anyhow::Result<Self> {
        match symbol.to_ascii_lowercase() {
            'k' => Ok(Self::King),
            'q' => Ok(Self::Queen),
            'r' => Ok(Self::Rook),
            'b' => Ok(Self::Bishop),
            'n' => Ok(Self::Knight),
            'p' => Ok(Self::Pawn),
            _ => bail!("piece symbol should be within \"KQRBNPkqrbnp\", got '{symbol}'"),
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// A specific piece owned by a player and standing on the board.
///
/// The owner and the kind never change. The position is only updated by
/// whoever applies moves to the board; move generation reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    #[allow(missing_docs)]
    pub position: Coord,
    #[allow(missing_docs)]
    pub owner: Player,
    #[allow(missing_docs)]
    pub kind: PieceKind,
}

impl Piece {
    #[allow(missing_docs)]
    #[must_use]
    pub const fn new(position: Coord, owner: Player, kind: PieceKind) -> Self {
        Self {
            position,
            owner,
            kind,
        }
    }

    /// Creates a piece from its FEN symbol: uppercase for White, lowercase for
    /// Black.
    ///
    /// # Errors
    ///
    /// If the symbol is not one of "KQRBNPkqrbnp".
    pub fn from_symbol(symbol: char, position: Coord) -> anyhow::Result<Self> {
        let kind = PieceKind::try_from(symbol)?;
        let owner = if symbol.is_ascii_uppercase() {
            Player::White
        } else {
            Player::Black
        };
        Ok(Self::new(position, owner, kind))
    }

    /// Returns the FEN symbol of the piece.
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self.owner {
            Player::White => self.kind.symbol().to_ascii_uppercase(),
            Player::Black => self.kind.symbol(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_char(self.symbol())
    }
}

/// Directions on the board from a perspective of White player.
///
/// Traditionally those are North (Up), West (Left), East (Right), South (Down)
/// and their combinations. However, using cardinal directions is confusing,
/// hence they are replaced by relative directions. "Up" increases `x` (the
/// rank), "Right" increases `y` (the file).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Also known as NorthWest.
    UpLeft,
    /// Also known as North.
    Up,
    /// Also known as NorthEast.
    UpRight,
    /// Also known as East.
    Right,
    /// Also known as West.
    Left,
    /// Also known as SouthWest.
    DownLeft,
    /// Also known as South.
    Down,
    /// Also known as SouthEast.
    DownRight,
}

impl Direction {
    /// Diagonal rays in the order they are walked by the move generator.
    pub const DIAGONALS: [Self; 4] = [Self::UpRight, Self::UpLeft, Self::DownLeft, Self::DownRight];
    /// Straight rays in the order they are walked by the move generator.
    pub const ORTHOGONALS: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    /// Returns a single step in this direction as `(dx, dy)`.
    #[must_use]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::UpLeft => (1, -1),
            Self::Up => (1, 0),
            Self::UpRight => (1, 1),
            Self::Right => (0, 1),
            Self::Left => (0, -1),
            Self::DownLeft => (-1, -1),
            Self::Down => (-1, 0),
            Self::DownRight => (-1, 1),
        }
    }

}
