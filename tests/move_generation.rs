use itertools::Itertools;
use kibitz::chess::board::{Board, Mailbox};
use kibitz::chess::core::{Coord, Direction, Piece, PieceKind, Player, BOARD_SIZE};
use kibitz::chess::movegen::{PawnPush, Rules};
use kibitz::possible_moves;
use pretty_assertions::assert_eq;
use shakmaty::{attacks, Bitboard, Color, Square};

const PLACEMENTS: [&str; 8] = [
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "2n4k/1PP5/6K1/3Pp1Q1/3N4/3P4/P3R3/8",
    "3kn3/R2p1N2/8/8/7B/6K1/3R4/8",
    "2r3r1/3p3k/1p3pp1/1B5P/5P2/2P1pqP1/PP4KP/3R4",
    "r1b1qrk1/ppp2pbp/n2p1np1/4p1B1/2PPP3/2NB1N1P/PP3PP1/R2QK2R",
    "rnbq1rk1/pp4pp/1b1ppn2/2p2p2/2PP4/1P2PN2/PB2BPPP/RN1Q1RK1",
    "8/8/8/8/2P5/3k4/8/KB6",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
];

fn setup(placement: &str) -> Mailbox {
    Mailbox::from_placement(placement).expect("parsing valid placement: {placement}")
}

fn square(name: &str) -> Coord {
    Coord::try_from(name).expect("valid square name: {name}")
}

fn to_shakmaty(coord: Coord) -> Square {
    let (x, y) = (u32::try_from(coord.x).unwrap(), u32::try_from(coord.y).unwrap());
    Square::new(x * 8 + y)
}

fn from_shakmaty(square: Square) -> Coord {
    let index = u32::from(square);
    Coord::new(
        i8::try_from(index / 8).unwrap(),
        i8::try_from(index % 8).unwrap(),
    )
}

fn occupancy(board: &Mailbox, owner: Option<Player>) -> Bitboard {
    board
        .pieces()
        .filter(|piece| owner.map_or(true, |owner| piece.owner == owner))
        .fold(Bitboard::EMPTY, |acc, piece| {
            acc | Bitboard::from(to_shakmaty(piece.position))
        })
}

fn sorted_destinations(moves: impl IntoIterator<Item = Coord>) -> Vec<String> {
    moves
        .into_iter()
        .map(|to| to.to_string())
        .sorted()
        .collect::<Vec<_>>()
}

fn empty_board_moves(kind: PieceKind, name: &str) -> usize {
    let piece = Piece::new(square(name), Player::White, kind);
    possible_moves(&piece, &Mailbox::empty()).len()
}

#[test]
fn empty_board_counts() {
    assert_eq!(empty_board_moves(PieceKind::Rook, "a1"), 14);
    assert_eq!(empty_board_moves(PieceKind::Rook, "e4"), 14);
    assert_eq!(empty_board_moves(PieceKind::Bishop, "d4"), 13);
    assert_eq!(empty_board_moves(PieceKind::Bishop, "a1"), 7);
    assert_eq!(empty_board_moves(PieceKind::Queen, "a1"), 21);
    assert_eq!(empty_board_moves(PieceKind::Queen, "e5"), 27);
    assert_eq!(empty_board_moves(PieceKind::Knight, "a1"), 2);
    assert_eq!(empty_board_moves(PieceKind::Knight, "b1"), 3);
    assert_eq!(empty_board_moves(PieceKind::Knight, "e5"), 8);
    assert_eq!(empty_board_moves(PieceKind::King, "e5"), 8);
    assert_eq!(empty_board_moves(PieceKind::King, "a1"), 3);
    assert_eq!(empty_board_moves(PieceKind::King, "h4"), 5);
}

#[test]
fn moves_stay_on_board_and_avoid_own_pieces() {
    for rules in [
        Rules::default(),
        Rules {
            pawn_push: PawnPush::Permissive,
        },
    ] {
        for placement in PLACEMENTS {
            let board = setup(placement);
            for piece in board.pieces() {
                for candidate in piece.possible_moves_with(&board, &rules) {
                    assert_eq!(candidate.from, piece.position);
                    assert!(board.in_bounds(candidate.to), "{placement}: {candidate}");
                    if let Some(occupant) = board.piece_at(candidate.to) {
                        assert_ne!(occupant.owner, piece.owner, "{placement}: {candidate}");
                    }
                }
            }
        }
    }
}

#[test]
fn moves_are_unique() {
    for placement in PLACEMENTS {
        let board = setup(placement);
        for piece in board.pieces() {
            let moves = possible_moves(&piece, &board);
            assert_eq!(moves.iter().unique().count(), moves.len(), "{placement}");
        }
    }
}

// Pieces other than pawns reach exactly the squares they attack, except the
// ones occupied by their own side.
#[test]
fn same_targets_as_shakmaty() {
    for placement in PLACEMENTS {
        let board = setup(placement);
        let occupied = occupancy(&board, None);
        for piece in board.pieces() {
            let from = to_shakmaty(piece.position);
            let attacked = match piece.kind {
                PieceKind::King => attacks::king_attacks(from),
                PieceKind::Queen => attacks::queen_attacks(from, occupied),
                PieceKind::Rook => attacks::rook_attacks(from, occupied),
                PieceKind::Bishop => attacks::bishop_attacks(from, occupied),
                PieceKind::Knight => attacks::knight_attacks(from),
                PieceKind::Pawn => continue,
            };
            let expected = attacked & !occupancy(&board, Some(piece.owner));
            assert_eq!(
                sorted_destinations(possible_moves(&piece, &board).iter().map(|m| m.to)),
                sorted_destinations(expected.into_iter().map(from_shakmaty)),
                "{placement}: {piece} on {}",
                piece.position
            );
        }
    }
}

#[test]
fn pawn_captures_match_shakmaty() {
    for placement in PLACEMENTS {
        let board = setup(placement);
        for piece in board.pieces().filter(|piece| piece.kind == PieceKind::Pawn) {
            let color = match piece.owner {
                Player::White => Color::White,
                Player::Black => Color::Black,
            };
            let expected = attacks::pawn_attacks(color, to_shakmaty(piece.position))
                & occupancy(&board, Some(piece.owner.opponent()));
            let captures = possible_moves(&piece, &board)
                .iter()
                .filter(|m| m.to.y != m.from.y)
                .map(|m| m.to)
                .collect::<Vec<_>>();
            assert_eq!(
                sorted_destinations(captures),
                sorted_destinations(expected.into_iter().map(from_shakmaty)),
                "{placement}: pawn on {}",
                piece.position
            );
        }
    }
}

// A blocker at distance d leaves d - 1 squares on the ray when it is ours and d
// squares (including the capture) when it is theirs.
#[test]
fn blockers() {
    let center = square("d4");
    let kinds = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];
    for kind in kinds.into_iter().filter(|kind| kind.is_sliding()) {
        let directions: Vec<Direction> = match kind {
            PieceKind::Rook => Direction::ORTHOGONALS.to_vec(),
            PieceKind::Bishop => Direction::DIAGONALS.to_vec(),
            _ => Direction::DIAGONALS
                .into_iter()
                .chain(Direction::ORTHOGONALS)
                .collect(),
        };
        let slider = Piece::new(center, Player::White, kind);
        let mut board = Mailbox::empty();
        board.place(slider).unwrap();
        let open = possible_moves(&slider, &board).len();
        for direction in directions {
            let ray_length = (1..BOARD_SIZE)
                .take_while(|&distance| center.shift(direction, distance).is_on_board())
                .count();
            for distance in 1..=ray_length {
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                let blocker_square = center.shift(direction, distance as i8);
                for owner in [Player::White, Player::Black] {
                    let mut blocked = board;
                    blocked
                        .place(Piece::new(blocker_square, owner, PieceKind::Pawn))
                        .unwrap();
                    let moves = possible_moves(&slider, &blocked);
                    let kept = if owner == Player::White {
                        distance - 1
                    } else {
                        distance
                    };
                    assert_eq!(
                        moves.len(),
                        open - ray_length + kept,
                        "{kind:?} blocked by {owner:?} on {blocker_square}"
                    );
                    assert_eq!(
                        moves.iter().any(|m| m.to == blocker_square),
                        owner == Player::Black
                    );
                }
            }
        }
    }
}

#[test]
fn double_push_needs_empty_square_ahead() {
    for blocker in ['P', 'p'] {
        let mut board = setup("8/8/8/8/8/8/3P4/8");
        board
            .place(Piece::from_symbol(blocker, square("d3")).unwrap())
            .unwrap();
        let pawn = board.piece_at(square("d2")).unwrap();
        assert!(possible_moves(&pawn, &board).is_empty());
        let permissive = pawn.possible_moves_with(
            &board,
            &Rules {
                pawn_push: PawnPush::Permissive,
            },
        );
        let expected: Vec<String> = if blocker == 'p' {
            vec!["d2d3".to_string()]
        } else {
            vec![]
        };
        assert_eq!(
            permissive.iter().map(ToString::to_string).collect::<Vec<_>>(),
            expected
        );
    }
}

#[test]
fn black_pawns_move_down() {
    let board = setup("8/3p4/2P1P3/8/8/8/8/8");
    let pawn = board.piece_at(square("d7")).unwrap();
    assert_eq!(
        possible_moves(&pawn, &board)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["d7d6", "d7d5", "d7e6", "d7c6"]
    );
}
