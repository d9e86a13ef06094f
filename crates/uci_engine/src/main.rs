use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use chess_core::{move_to_uci, Engine, Game};
use clap::{Parser, ValueEnum};
use random_engine::RandomEngine;
use tactical_engine::{EngineConfig, TacticalEngine};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    /// One-ply tactical heuristic with opening book
    Tactical,
    /// Uniformly random legal moves
    Random,
}

/// UCI engine speaking on stdin/stdout. Logs go to stderr (RUST_LOG).
#[derive(Debug, Parser)]
#[command(name = "uci_engine", version)]
struct Args {
    #[arg(long, value_enum, default_value_t = EngineKind::Tactical)]
    engine: EngineKind,

    /// TOML file with engine settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible games (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
}

fn create_engine(args: &Args) -> anyhow::Result<Box<dyn Engine>> {
    let mut config = match &args.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading engine config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    Ok(match args.engine {
        EngineKind::Tactical => Box::new(TacticalEngine::with_config(&config)),
        EngineKind::Random => Box::new(match config.seed {
            Some(seed) => RandomEngine::seeded(seed),
            None => RandomEngine::new(),
        }),
    })
}

struct Session {
    engine: Box<dyn Engine>,
    game: Game,
}

impl Session {
    fn new(engine: Box<dyn Engine>) -> Self {
        Self {
            engine,
            game: Game::startpos(),
        }
    }

    /// Handle one protocol line. Returns false once the GUI asks to quit.
    fn handle(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, args)) = parts.split_first() else {
            return Ok(true);
        };

        match command {
            "uci" => {
                writeln!(out, "id name {}", self.engine.name())?;
                writeln!(out, "id author {}", self.engine.author())?;
                writeln!(out, "option name Seed type spin default 0 min 0 max 2147483647")?;
                writeln!(out, "option name OwnBook type check default true")?;
                writeln!(out, "option name BookPlies type spin default 6 min 0 max 40")?;
                writeln!(out, "uciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "setoption" => {
                // setoption name <id> [value <x>]
                let name_at = args.iter().position(|&a| a == "name").map_or(0, |i| i + 1);
                let value_at = args.iter().position(|&a| a == "value");
                let name = args[name_at..value_at.unwrap_or(args.len()).max(name_at)].join("");
                let value = value_at.map(|i| args[i + 1..].join(" ")).unwrap_or_default();
                if !self.engine.set_option(&name, &value) {
                    warn!(name, value, "unsupported option");
                }
            }
            "ucinewgame" => {
                self.game = Game::startpos();
                self.engine.new_game();
            }
            "position" => match Game::from_uci_position(args) {
                Ok(game) => self.game = game,
                Err(err) => warn!(%err, line, "ignoring position command"),
            },
            "go" => {
                // Time controls are ignored; selection is a single pass.
                let result = self.engine.search(&mut self.game);
                match result.best_move {
                    Some(mv) => writeln!(out, "bestmove {}", move_to_uci(mv))?,
                    None => writeln!(out, "bestmove 0000")?,
                }
            }
            "quit" => return Ok(false),
            other => debug!(command = other, "ignoring unknown command"),
        }
        out.flush()?;
        Ok(true)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let engine = create_engine(&args)?;
    info!(engine = engine.name(), "starting UCI loop");

    let mut session = Session::new(engine);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        if !session.handle(&line?, &mut stdout)? {
            break;
        }
    }
    Ok(())
}
