//! Tictactoe-Rust: play tic-tac-toe against a minimax opponent.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Play, prompting for difficulty and mark
//! - `tictactoe-rust play --difficulty normal --mark o` - Skip the prompts
//! - `tictactoe-rust demo` - Watch minimax play itself
//!
//! Logs go to stderr; set `RUST_LOG=debug` to see every evaluated action.

use std::io;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe_rust::board::{Board, Mark, Outcome, str_action};
use tictactoe_rust::game::{Session, Settings};
use tictactoe_rust::minimax::minimax;
use tictactoe_rust::policy::Difficulty;

/// Tictactoe-Rust: tic-tac-toe against a minimax opponent
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against the computer (default)
    Play(PlayArgs),
    /// Let minimax play both sides from the empty board
    Demo,
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Opponent strength: easy, normal or impossible (prompted if omitted)
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// Your mark: x or o (prompted if omitted)
    #[arg(short, long)]
    mark: Option<Mark>,

    /// Seed for the random move source
    #[arg(long)]
    seed: Option<u64>,

    /// Disable colors and screen clearing
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play(args)) => run_play(args),
        Some(Commands::Demo) => run_demo(),
        None => run_play(PlayArgs::default()),
    }
}

fn run_play(args: PlayArgs) -> Result<()> {
    let rng = match args.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let settings = Settings {
        difficulty: args.difficulty,
        human: args.mark,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), rng).with_color(!args.no_color);
    session.run(settings)
}

fn run_demo() -> Result<()> {
    println!("Tictactoe-Rust: minimax vs minimax\n");

    let mut board = Board::empty();
    while !board.is_terminal() {
        let mark = board.current_player();
        let action = minimax(&board, mark)?;
        board.play(action, mark)?;
        println!("{mark} plays {}", str_action(action));
        println!("{board}");
    }

    match board.outcome() {
        Outcome::Win(mark) => println!("{mark} wins"),
        Outcome::Draw | Outcome::Ongoing => println!("Draw"),
    }
    Ok(())
}
