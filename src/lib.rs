//! Candidate move generation for chess pieces. For more information, see
//! [README].
//!
//! The entry point is [`possible_moves`]: given a piece and a [`Board`]
//! snapshot, it enumerates the squares the piece can move to. Candidates are
//! not filtered for king safety.
//!
//! [README]: https://github.com/kirillbobyrev/kibitz/blob/main/README.md

// TODO: Gradually move most of warnings to deny.
#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![deny(clippy::perf)]

pub mod chess;
pub mod session;

use std::io::{self, Write};

use shadow_rs::shadow;

use crate::chess::board::Board;
use crate::chess::core::Piece;
use crate::chess::movegen::MoveList;

shadow!(build);

/// Produces candidate moves of `piece` on `board`: every move starts on the
/// piece's square, ends on the board and never captures a piece of the same
/// owner.
///
/// ```
/// use kibitz::chess::board::Mailbox;
/// use kibitz::chess::core::{Coord, Piece, PieceKind, Player};
///
/// let board = Mailbox::empty();
/// let rook = Piece::new(Coord::new(0, 0), Player::White, PieceKind::Rook);
/// assert_eq!(kibitz::possible_moves(&rook, &board).len(), 14);
/// ```
#[must_use]
pub fn possible_moves(piece: &Piece, board: &impl Board) -> MoveList {
    piece.possible_moves(board)
}

/// Returns the full version that can be used to identify how the crate was
/// built in the first place.
#[must_use]
pub fn version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Writes information about the version, build type and GitHub repository.
///
/// # Errors
///
/// Propagates failures of the output stream.
pub fn write_info(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "kibitz {}", version())?;
    writeln!(output, "<https://github.com/kirillbobyrev/kibitz>")?;
    writeln!(output, "Release build: {}", !shadow_rs::is_debug())?;
    if !shadow_rs::git_clean() {
        writeln!(output, "Warning: built with uncommitted changes")?;
    }
    Ok(())
}
