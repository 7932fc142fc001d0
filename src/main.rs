//! Command-line interface for inspecting candidate moves.

use std::io::{self, Write};

use clap::Parser;
use kibitz::chess::board::{Mailbox, STARTING_PLACEMENT};
use kibitz::chess::movegen::{PawnPush, Rules};
use kibitz::session::Session;

/// Prints candidate moves of chess pieces. Commands are read from stdin, one
/// per line: `position`, `place`, `remove`, `moves`, `all`, `d`, `info` and
/// `quit`.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Config {
    /// Initial board in FEN piece placement format.
    #[arg(long, default_value = STARTING_PLACEMENT)]
    placement: String,
    /// Let pawns push onto squares occupied by opponent pieces.
    #[arg(long)]
    permissive_pawn_push: bool,
    /// Enable debug logging.
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    let config = Config::parse();

    let log_level = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .write_style(env_logger::WriteStyle::Never)
    .target(env_logger::Target::Stderr)
    .init();

    if let Err(e) = run(&config) {
        log::error!("Fatal error: {e:#}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> anyhow::Result<()> {
    let board = Mailbox::try_from(config.placement.as_str())?;
    let rules = Rules {
        pawn_push: if config.permissive_pawn_push {
            PawnPush::Permissive
        } else {
            PawnPush::RequireEmpty
        },
    };
    log::info!("kibitz {}", kibitz::version());
    log::debug!("Starting with board {board} and {rules:?}");
    let mut session = Session::new(board, rules, io::stdin().lock(), io::stdout().lock());
    session.run()
}
