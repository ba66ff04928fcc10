mod config;
mod session;

use clap::Parser;
use common::game::AutopilotKind;
use common::{SessionRng, log, logger};
use config::{DEFAULT_CONFIG_FILE, Overrides, get_config_manager};
use session::{SessionSettings, SnakeSession};

#[derive(Parser)]
#[command(name = "reverse_snake", about = "Headless Reverse Snake sessions driven by an autopilot")]
struct Args {
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    games: Option<u32>,

    #[arg(long)]
    max_ticks: Option<u64>,

    /// greedy or random
    #[arg(long)]
    autopilot: Option<AutopilotKind>,

    /// Pace ticks at 10 per second instead of running flat out.
    #[arg(long)]
    realtime: bool,

    #[arg(long)]
    use_log_prefix: bool,

    #[arg(long)]
    verbose: bool,

    #[arg(long)]
    print_final_state: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Runner".to_string())
    } else {
        None
    };
    logger::init_logger(prefix, args.verbose);

    let file_config = get_config_manager(&args.config).get_config()?;
    let overrides = Overrides {
        games: args.games,
        max_ticks_per_game: args.max_ticks,
        autopilot: args.autopilot,
        seed: args.seed,
        realtime: args.realtime,
    };
    let config = file_config.with_overrides(&overrides)?;

    let mut rng = match config.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };

    let settings = SessionSettings {
        games: config.games,
        max_ticks_per_game: config.max_ticks_per_game,
        autopilot: config.autopilot,
        realtime: config.realtime,
    };

    let summary = SnakeSession::run(&settings, &mut rng).await?;

    log!(
        "Session complete: {} game(s), {} ticks, {} food eaten, high score {:04}",
        summary.games.len(),
        summary.total_ticks(),
        summary.total_foods(),
        summary.high_score
    );
    log!("Replay this session with --seed {}", rng.seed());

    if args.print_final_state {
        println!("{}", serde_yaml_ng::to_string(&summary.final_snapshot)?);
    }

    Ok(())
}
