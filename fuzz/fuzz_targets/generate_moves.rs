#![no_main]
use itertools::Itertools;
use kibitz::chess::board::{Board, Mailbox};
use kibitz::chess::movegen::{PawnPush, Rules};
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };
    let board = match Mailbox::from_placement(input) {
        Ok(board) => board,
        Err(_) => return,
    };
    assert_eq!(Mailbox::from_placement(&board.to_string()).ok(), Some(board));
    for pawn_push in [PawnPush::RequireEmpty, PawnPush::Permissive] {
        let rules = Rules { pawn_push };
        for piece in board.pieces() {
            let moves = piece.possible_moves_with(&board, &rules);
            assert_eq!(moves.iter().unique().count(), moves.len());
            for candidate in moves {
                assert_eq!(candidate.from, piece.position);
                assert!(board.in_bounds(candidate.to));
                if let Some(occupant) = board.piece_at(candidate.to) {
                    assert!(occupant.owner != piece.owner);
                }
            }
        }
    }
});
