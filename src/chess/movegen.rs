//! Candidate move generation for a single piece.
//!
//! The generator only looks at the geometry of piece movement and the occupancy
//! of destination squares. It does not check whether the mover's king ends up
//! in check and it does not produce castling, en passant or promotions: these
//! are the responsibility of the callers.
//!
//! All functions here are pure reads of the board snapshot.

use arrayvec::ArrayVec;

use crate::chess::board::Board;
use crate::chess::core::{Coord, Direction, Move, Piece, PieceKind, BOARD_SIZE};

/// The most candidates a single piece can have: a queen in the center of an
/// empty board reaches 27 squares.
pub const MAX_PIECE_MOVES: usize = 27;

/// Candidate moves of a single piece, in generation order.
pub type MoveList = ArrayVec<Move, MAX_PIECE_MOVES>;

/// Decides whether a pawn can push onto an occupied square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum PawnPush {
    /// Pawns only push onto empty squares, as in standard chess.
    #[default]
    RequireEmpty,
    /// Pushes are treated like any other destination: an enemy piece straight
    /// ahead of the pawn can be captured.
    Permissive,
}

/// Movement rules that are not fixed by piece geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Rules {
    #[allow(missing_docs)]
    pub pawn_push: PawnPush,
}

/// Knight jumps: every (±1, ±2) and (±2, ±1) delta exactly once.
const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Checks whether `piece` can land on `to`: the square has to be on the board
/// and must not be occupied by a piece of the same owner. Both empty squares
/// (quiet moves) and squares with opponent pieces (captures) are valid.
#[must_use]
pub fn evaluate_destination(board: &impl Board, piece: &Piece, to: Coord) -> Option<Move> {
    if !on_board(board, to) {
        return None;
    }
    match board.piece_at(to) {
        Some(occupant) if occupant.owner == piece.owner => None,
        _ => Some(Move::new(piece.position, to)),
    }
}

// MoveList capacity only holds for squares within BOARD_SIZE, so boards can
// exclude squares but never add them.
fn on_board(board: &impl Board, square: Coord) -> bool {
    square.is_on_board() && board.in_bounds(square)
}

/// Walks from the piece towards `direction` until the edge of the board or
/// the first occupied square. The occupied square is included if it holds an
/// opponent piece.
fn walk_ray(board: &impl Board, piece: &Piece, direction: Direction, moves: &mut MoveList) {
    for distance in 1..BOARD_SIZE {
        let to = piece.position.shift(direction, distance);
        if !on_board(board, to) {
            break;
        }
        if let Some(candidate) = evaluate_destination(board, piece, to) {
            moves.push(candidate);
        }
        if board.piece_at(to).is_some() {
            break;
        }
    }
}

/// Appends moves along the four diagonals in [`Direction::DIAGONALS`] order.
pub fn diagonal_moves(board: &impl Board, piece: &Piece, moves: &mut MoveList) {
    for direction in Direction::DIAGONALS {
        walk_ray(board, piece, direction, moves);
    }
}

/// Appends moves along ranks and files in [`Direction::ORTHOGONALS`] order.
pub fn straight_moves(board: &impl Board, piece: &Piece, moves: &mut MoveList) {
    for direction in Direction::ORTHOGONALS {
        walk_ray(board, piece, direction, moves);
    }
}

/// Appends moves to the squares displaced from the piece by `offsets`, in the
/// order of the table.
pub fn offset_moves(board: &impl Board, piece: &Piece, offsets: &[(i8, i8)], moves: &mut MoveList) {
    moves.extend(
        offsets
            .iter()
            .filter_map(|&(dx, dy)| evaluate_destination(board, piece, piece.position.offset(dx, dy))),
    );
}

fn is_empty(board: &impl Board, square: Coord) -> bool {
    on_board(board, square) && board.piece_at(square).is_none()
}

fn push_destination(board: &impl Board, piece: &Piece, to: Coord, rules: &Rules) -> Option<Move> {
    match rules.pawn_push {
        PawnPush::RequireEmpty if !is_empty(board, to) => None,
        _ => evaluate_destination(board, piece, to),
    }
}

/// Appends pawn pushes (single and, from the starting rank, double) followed
/// by the two diagonal captures.
pub fn pawn_moves(board: &impl Board, piece: &Piece, rules: &Rules, moves: &mut MoveList) {
    let forward = piece.owner.push_direction();
    let one_step = piece.position.shift(forward, 1);
    moves.extend(push_destination(board, piece, one_step, rules));
    // Double push needs a free square to jump over regardless of the rules.
    if piece.position.x == piece.owner.pawns_starting_rank() && is_empty(board, one_step) {
        moves.extend(push_destination(board, piece, piece.position.shift(forward, 2), rules));
    }
    for side in [Direction::Right, Direction::Left] {
        let target = one_step.shift(side, 1);
        if on_board(board, target) && board.piece_at(target).is_some() {
            moves.extend(evaluate_destination(board, piece, target));
        }
    }
}

impl Piece {
    /// Produces candidate moves of the piece with the default [`Rules`].
    ///
    /// ```
    /// use kibitz::chess::board::Mailbox;
    /// use kibitz::chess::core::{Coord, Piece, PieceKind, Player};
    ///
    /// let board = Mailbox::starting();
    /// let knight = Piece::new(Coord::try_from("g1").unwrap(), Player::White, PieceKind::Knight);
    /// let moves: Vec<String> = knight
    ///     .possible_moves(&board)
    ///     .iter()
    ///     .map(ToString::to_string)
    ///     .collect();
    /// assert_eq!(moves, vec!["g1h3", "g1f3"]);
    /// ```
    #[must_use]
    pub fn possible_moves(&self, board: &impl Board) -> MoveList {
        self.possible_moves_with(board, &Rules::default())
    }

    /// Produces candidate moves of the piece: every move stays on the board
    /// and never lands on a piece of the same owner.
    #[must_use]
    pub fn possible_moves_with(&self, board: &impl Board, rules: &Rules) -> MoveList {
        let mut moves = MoveList::new();
        match self.kind {
            PieceKind::Rook => straight_moves(board, self, &mut moves),
            PieceKind::Bishop => diagonal_moves(board, self, &mut moves),
            PieceKind::Queen => {
                diagonal_moves(board, self, &mut moves);
                straight_moves(board, self, &mut moves);
            },
            PieceKind::Knight => offset_moves(board, self, &KNIGHT_OFFSETS, &mut moves),
            PieceKind::King => offset_moves(board, self, &KING_OFFSETS, &mut moves),
            PieceKind::Pawn => pawn_moves(board, self, rules, &mut moves),
        }
        log::trace!(
            "{:?} {:?} on {}: {} candidates",
            self.owner,
            self.kind,
            self.position,
            moves.len()
        );
        moves
    }
}
