//! Chess Referee - replays coordinate moves and reports each verdict.
//!
//! Moves are read from the command line as `e2e4` or `e2-e4`. Malformed and
//! illegal moves are reported and skipped; the board only changes on legal ones.

use anyhow::{bail, Context};
use chess_core::{Color, Position};
use chess_rules::{Board, RulesConfig, RulesError};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Chess Referee - validates a sequence of moves.
#[derive(Parser)]
#[command(name = "chess-referee")]
#[command(about = "Replays coordinate moves and reports legality, check and mate")]
struct Args {
    /// Path to a TOML rules configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Piece placement to start from instead of the standard position
    #[arg(long)]
    layout: Option<String>,

    /// Black moves first (only with --layout)
    #[arg(long, requires = "layout")]
    black_to_move: bool,

    /// List the legal destinations of the piece on this square at the end
    #[arg(long, value_name = "SQUARE")]
    legal: Option<String>,

    /// Moves in coordinate notation, e.g. e2e4 e7e5
    moves: Vec<String>,
}

/// Outcome of submitting one move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verdict {
    Invalid,
    Illegal,
    Ok,
    Check,
    Checkmate,
    Stalemate,
}

impl Verdict {
    fn as_str(self) -> &'static str {
        match self {
            Verdict::Invalid => "invalid",
            Verdict::Illegal => "illegal",
            Verdict::Ok => "ok",
            Verdict::Check => "check",
            Verdict::Checkmate => "checkmate",
            Verdict::Stalemate => "stalemate",
        }
    }
}

/// Parses `e2e4` or `e2-e4` into its two squares.
fn parse_move(token: &str) -> anyhow::Result<(Position, Position)> {
    let token = token.trim();
    let (from, to) = match token.split_once('-') {
        Some(pair) => pair,
        None if token.len() == 4 && token.is_ascii() => token.split_at(2),
        None => bail!("expected a move like e2e4, got {:?}", token),
    };
    let from = Position::parse(from).with_context(|| format!("bad departure in {:?}", token))?;
    let to = Position::parse(to).with_context(|| format!("bad arrival in {:?}", token))?;
    Ok((from, to))
}

/// Applies one move and classifies the position it leaves for the opponent.
fn submit(board: &mut Board, from: Position, to: Position) -> Result<Verdict, RulesError> {
    match board.apply_move(from, to) {
        Ok(()) => {}
        Err(RulesError::IllegalMove { .. }) => return Ok(Verdict::Illegal),
        Err(e) => return Err(e),
    }
    let opponent = board.side_to_move();
    Ok(if board.in_checkmate(opponent) {
        Verdict::Checkmate
    } else if board.in_check(opponent) {
        Verdict::Check
    } else if board.in_stalemate(opponent) {
        Verdict::Stalemate
    } else {
        Verdict::Ok
    })
}

/// Parses and submits one move token. A malformed token is reported as
/// [`Verdict::Invalid`] and leaves the board untouched.
fn judge(board: &mut Board, token: &str) -> Result<Verdict, RulesError> {
    match parse_move(token) {
        Ok((from, to)) => submit(board, from, to),
        Err(e) => {
            tracing::warn!("Skipping {:?}: {:#}", token, e);
            Ok(Verdict::Invalid)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RulesConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => RulesConfig::default(),
    };
    tracing::info!("Probe strategy: {:?}", config.probe);

    let mut board = match &args.layout {
        Some(layout) => {
            let side = if args.black_to_move {
                Color::Black
            } else {
                Color::White
            };
            Board::from_layout(layout, side)?
        }
        None => Board::new(),
    }
    .with_config(config);

    let mut rejected = 0usize;
    for (ply, token) in args.moves.iter().enumerate() {
        let verdict = judge(&mut board, token)?;
        if matches!(verdict, Verdict::Invalid | Verdict::Illegal) {
            rejected += 1;
        }
        println!("{:>3}. {}  {}", ply + 1, token.trim(), verdict.as_str());
        if matches!(verdict, Verdict::Checkmate | Verdict::Stalemate) {
            break;
        }
    }

    if let Some(square) = &args.legal {
        let at = Position::parse(square)?;
        let moves: Vec<String> = board
            .legal_moves(at)
            .into_iter()
            .map(|p| p.to_string())
            .collect();
        println!("{}: {}", at, moves.join(" "));
    }

    tracing::info!(
        played = board.sequence().len(),
        rejected,
        "Replay finished: {}",
        board.sequence()
    );
    Ok(())
}
