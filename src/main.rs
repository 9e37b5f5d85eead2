use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};

use timed_chess::agent::Difficulty;
use timed_chess::controller::format_clock;
use timed_chess::game_repr::{Color, MoveSpec, Position, Square};
use timed_chess::{GameConfig, GameSnapshot, Mode, Orchestrator};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "timed_chess", about = "Timed chess in the terminal, against a friend or the engine")]
struct Args {
    /// Play against the engine instead of another human
    #[arg(long)]
    ai: bool,

    /// Side the engine plays
    #[arg(long, value_enum, default_value_t = Side::Black)]
    ai_color: Side,

    /// Engine search depth in plies (overrides --difficulty)
    #[arg(long)]
    depth: Option<u8>,

    /// Engine strength preset: easy | medium | hard | expert
    #[arg(long, default_value_t = Difficulty::Hard)]
    difficulty: Difficulty,

    /// Seconds on each clock
    #[arg(long, default_value_t = 300)]
    clock: u32,

    /// Pause before the engine starts thinking, in milliseconds
    #[arg(long, default_value_t = 500)]
    ai_delay_ms: u64,

    /// Starting position as FEN
    #[arg(long)]
    fen: Option<String>,

    /// A side whose clock runs out loses
    #[arg(long)]
    time_forfeit: bool,
}

impl Args {
    fn into_config(self) -> GameConfig {
        let mut config = GameConfig::default()
            .with_mode(if self.ai { Mode::VsAi } else { Mode::TwoPlayer })
            .with_ai_side(self.ai_color.into())
            .with_difficulty(self.difficulty)
            .with_clock_secs(self.clock)
            .with_ai_delay(Duration::from_millis(self.ai_delay_ms))
            .with_time_forfeit(self.time_forfeit);
        if let Some(depth) = self.depth {
            config = config.with_search_depth(depth);
        }
        if let Some(fen) = self.fen {
            config = config.with_starting_fen(fen);
        }
        config
    }
}

const HELP: &str = "\
commands:
  <move>        e2e4, e7e8n, Nf3, O-O ...
  undo | redo | restart
  mode ai | mode pvp
  show          print the board again
  quit";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let mut orchestrator = Orchestrator::new(args.into_config()).context("could not start the game")?;

    println!("{}", HELP);
    orchestrator.wait_for_ai().await;
    print_snapshot(&orchestrator.snapshot());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let line = line.trim();
        match line {
            "" => continue,
            "quit" | "exit" => break,
            "help" => println!("{}", HELP),
            "show" => {}
            "undo" => report(orchestrator.on_undo_requested().map(|r| format!("took back {}", r.san))),
            "redo" => report(orchestrator.on_redo_requested().map(|r| format!("replayed {}", r.san))),
            "restart" => orchestrator.on_restart_requested(),
            "mode ai" => orchestrator.on_set_mode(true, false),
            "mode pvp" => orchestrator.on_set_mode(false, true),
            text => match text.parse::<MoveSpec>() {
                Ok(spec) => report(orchestrator.submit(&spec).map(|r| format!("{} played {}", r.color, r.san))),
                Err(err) => println!("{}", err),
            },
        }

        if orchestrator.ai_pending() {
            println!("engine is thinking...");
            orchestrator.wait_for_ai().await;
        }
        print_snapshot(&orchestrator.snapshot());
    }

    Ok(())
}

fn report(result: timed_chess::GameResult<String>) {
    match result {
        Ok(message) => println!("{}", message),
        Err(err) => println!("{}", err),
    }
}

fn print_snapshot(snapshot: &GameSnapshot) {
    match Position::from_fen(&snapshot.board_code) {
        Ok(position) => print!("{}", render_board(&position)),
        Err(err) => println!("{}", err),
    }
    println!(
        "White {}  Black {}  ({})",
        format_clock(snapshot.white_secs),
        format_clock(snapshot.black_secs),
        snapshot.mode
    );
    if !snapshot.history.is_empty() {
        println!("{}", format_history(&snapshot.history));
    }
    println!("{}", snapshot.status_text);
}

/// White at the bottom, one rank per line.
fn render_board(position: &Position) -> String {
    let mut out = String::new();
    for rank in (0..8).rev() {
        out.push_str(&format!("{} ", rank + 1));
        for file in 0..8 {
            let square = Square::make_square(chess::Rank::from_index(rank), chess::File::from_index(file));
            let c = position.piece_at(square).map_or('.', |piece| piece.to_char());
            out.push(' ');
            out.push(c);
        }
        out.push('\n');
    }
    out.push_str("   a b c d e f g h\n");
    out
}

/// "1. e4 e5 2. Nf3"
fn format_history(history: &[String]) -> String {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| format!("{}. {}", i + 1, pair.join(" ")))
        .collect::<Vec<_>>()
        .join(" ")
}
