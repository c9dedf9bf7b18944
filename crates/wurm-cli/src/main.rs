//! Entry point for the wurm binary: argument parsing, frontend registry,
//! and session startup.

use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use wurm_canvas::CanvasFrontend;
use wurm_core::command::FrontendId;
use wurm_core::config::GameConfig;
use wurm_core::error::WurmResult;
use wurm_core::game::Game;
use wurm_gpu::GpuFrontend;
use wurm_session::frontend::{Frontend, FrontendFactory};
use wurm_session::session::{Session, SessionConfig};
use wurm_term::TermFrontend;

#[derive(Parser)]
#[command(
    name = "wurm",
    about = "Snake on a grid, with terminal, canvas, and gpu frontends you can swap mid-game",
    version
)]
struct Cli {
    /// Board width in cells (10-100)
    #[arg(value_parser = clap::value_parser!(i32).range(10..=100))]
    width: i32,

    /// Board height in cells (10-100)
    #[arg(value_parser = clap::value_parser!(i32).range(10..=100))]
    height: i32,

    /// Scatter obstacles across the board
    #[arg(short, long)]
    obstacles: bool,

    /// Invert every steering key
    #[arg(short, long)]
    chaos: bool,

    /// Frontend to start with; swap at runtime with 1/2/3
    #[arg(short, long, value_enum, default_value_t = FrontendChoice::Terminal)]
    frontend: FrontendChoice,

    /// RNG seed for food and obstacle placement; defaults to the wall clock
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum FrontendChoice {
    /// Cell grid drawn in the launching terminal
    Terminal,
    /// Software-rendered window
    Canvas,
    /// GPU-rendered window
    Gpu,
}

impl FrontendChoice {
    fn id(self) -> FrontendId {
        match self {
            Self::Terminal => FrontendId::Terminal,
            Self::Canvas => FrontendId::Canvas,
            Self::Gpu => FrontendId::Gpu,
        }
    }
}

/// Builds the real frontends for the session's swap requests.
#[derive(Debug, Default)]
struct Registry;

impl FrontendFactory for Registry {
    fn create(&mut self, id: FrontendId) -> WurmResult<Box<dyn Frontend>> {
        Ok(match id {
            FrontendId::Terminal => Box::new(TermFrontend::new()),
            FrontendId::Canvas => Box::new(CanvasFrontend::new()),
            FrontendId::Gpu => Box::new(GpuFrontend::new()),
        })
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(42)
}

fn run(cli: &Cli) -> WurmResult<()> {
    let config = GameConfig::default()
        .with_size(cli.width, cli.height)
        .with_obstacles(cli.obstacles)
        .with_seed(cli.seed.unwrap_or_else(wall_clock_seed));
    let game = Game::new(&config)?;
    let session_config = SessionConfig::default().with_chaos(cli.chaos);
    let mut session = Session::new(game, Box::new(Registry), session_config);
    session.run(cli.frontend.id())?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
