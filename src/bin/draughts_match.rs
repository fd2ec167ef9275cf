//! Play a match in the terminal.
//!
//! Humans type moves such as `a3 b4`, `stats` or `exit`. In `cvc` mode the
//! observer presses Enter before each computer move, or types `stats` or
//! `exit`. Logging goes to stderr and is controlled with `RUST_LOG`.

use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use rust_draughts::agents::{Agent, HumanAgent};
use rust_draughts::session::DEFAULT_LOG_FILE;
use rust_draughts::{
    GameMode, GameStats, GameSummary, Match, MatchConfig, MatchEvent, MoveIntent, Player, RecordError, ResultLog,
    SelectorConfig, ThinkDelay,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Two humans at one keyboard
    Pvp,
    /// Human plays White against the computer
    Pvc,
    /// Computer against computer
    Cvc,
}

impl From<Mode> for GameMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Pvp => GameMode::PlayerVsPlayer,
            Mode::Pvc => GameMode::PlayerVsComputer,
            Mode::Cvc => GameMode::ComputerVsComputer,
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Play 8x8 draughts")]
struct Args {
    #[arg(long, value_enum, default_value = "pvc")]
    mode: Mode,

    /// Seed for the computer players
    #[arg(long)]
    seed: Option<u64>,

    /// Declare a draw after this many turns (0 = never)
    #[arg(long, default_value_t = 200)]
    max_turns: u32,

    /// Result log file
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    log: PathBuf,

    /// Skip the computer's thinking pause
    #[arg(long)]
    no_delay: bool,

    /// Print past results and exit
    #[arg(long)]
    history: bool,
}

fn print_summary(summary: &GameSummary) {
    match summary.winner {
        Some(winner) => println!("{winner} wins: {}.", summary.reason_text()),
        None => println!("No winner: {}.", summary.reason_text()),
    }
    println!(
        "Turns: {}  Captures: White {}, Black {}",
        summary.turns,
        summary.captures[Player::White],
        summary.captures[Player::Black]
    );
}

fn print_stats(stats: &GameStats) {
    println!(
        "Turn {}  Pieces: White {} ({} kings), Black {} ({} kings)",
        stats.turn,
        stats.pieces[Player::White],
        stats.kings[Player::White],
        stats.pieces[Player::Black],
        stats.kings[Player::Black],
    );
}

/// Observer's answer before a computer move.
#[derive(Debug, PartialEq)]
enum Watch {
    Proceed,
    Stats(GameStats),
    Stopped(GameSummary),
    /// Input is exhausted; stop asking.
    Detached,
}

fn observe<R: BufRead>(observer: &mut HumanAgent<R>, game: &mut Match) -> Watch {
    match observer.read_intent() {
        None => Watch::Detached,
        Some(MoveIntent::Exit) => game.stop().map_or(Watch::Proceed, Watch::Stopped),
        Some(MoveIntent::ShowStats) => Watch::Stats(game.controller().stats()),
        Some(_) => Watch::Proceed,
    }
}

fn main() -> Result<(), RecordError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let log = ResultLog::new(&args.log);

    if args.history {
        for line in log.entries()? {
            println!("{line}");
        }
        return Ok(());
    }

    let selector = if args.no_delay {
        SelectorConfig::default()
    } else {
        SelectorConfig::default().with_think_delay(ThinkDelay::default())
    };
    let mut config = MatchConfig::new(args.mode.into())
        .with_max_turns(args.max_turns)
        .with_selector(selector);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let mut keyboard = HumanAgent::new(BufReader::new(std::io::stdin()));
    let seat = keyboard.clone();
    let mut game = Match::from_config(config, |_| -> Box<dyn Agent> { Box::new(seat.clone()) });
    let mut watching = args.mode == Mode::Cvc;

    println!("{}", game.controller().board());
    let summary = loop {
        if let Some(player) = game.controller().current_player() {
            if let Some(forced) = game.controller().state().forced_piece() {
                println!("{player} must keep jumping with {forced}.");
            }
            if watching {
                println!("{player} (computer) to move. Press Enter, or type `stats` or `exit`:");
                match observe(&mut keyboard, &mut game) {
                    Watch::Proceed => {}
                    Watch::Stats(stats) => {
                        print_stats(&stats);
                        continue;
                    }
                    Watch::Stopped(summary) => break summary,
                    Watch::Detached => watching = false,
                }
            }
        }
        match game.step() {
            MatchEvent::Played(outcome) => {
                println!("{}: {}", outcome.mv().player(), outcome.mv());
                println!("{}", game.controller().board());
            }
            MatchEvent::Rejected { player, error } => println!("{player}: {error}. Try again."),
            MatchEvent::Malformed { player, input } => {
                println!("{player}: could not read `{input}`. Enter a move like `a3 b4`, `stats` or `exit`.");
            }
            MatchEvent::StatsRequested(stats) => print_stats(&stats),
            MatchEvent::Finished(summary) => break summary,
        }
    };

    print_summary(&summary);
    log.append(&summary, &game.label())?;
    Ok(())
}
