#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_ai::{
    hunt, init_logging, play_match, render_knowledge, AiPlayer, AnyStrategy, Fleet,
    Strategy, StrategyKind,
};
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use log::LevelFilter;
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use serde_json::json;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Log per-turn decisions.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser)]
#[cfg(feature = "std")]
enum Commands {
    /// Measure how many shots a strategy needs against random fleets.
    Bench {
        #[arg(long, value_enum, default_value_t = StrategyKind::Eckspurt)]
        strategy: StrategyKind,
        #[arg(long, default_value_t = 100)]
        games: usize,
        #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
    /// Play one full match between two strategies.
    Duel {
        #[arg(long, value_enum, default_value_t = StrategyKind::Eckspurt)]
        first: StrategyKind,
        #[arg(long, value_enum, default_value_t = StrategyKind::HuntTarget)]
        second: StrategyKind,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn seeded(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose.then_some(LevelFilter::Debug));

    match cli.command {
        Commands::Bench {
            strategy,
            games,
            seed,
        } => {
            let mut rng = seeded(seed);
            let mut shots = Vec::with_capacity(games);
            for _ in 0..games {
                let mut fleet = Fleet::random(&mut rng, Default::default())
                    .map_err(|e| anyhow::anyhow!(e))?;
                let mut player = AnyStrategy::new(strategy);
                let n = hunt(&mut player, &mut fleet, &mut rng).map_err(|e| anyhow::anyhow!(e))?;
                shots.push(n);
            }
            let total: usize = shots.iter().sum();
            let mean = if games == 0 {
                0.0
            } else {
                total as f64 / games as f64
            };
            let result = json!({
                "strategy": strategy,
                "games": games,
                "mean_shots": mean,
                "min_shots": shots.iter().min(),
                "max_shots": shots.iter().max(),
            });
            println!("{}", serde_json::to_string(&result)?);
        }
        Commands::Duel {
            first,
            second,
            seed,
        } => {
            let mut rng = seeded(seed);
            let mut p1 = AiPlayer::new(first);
            let mut p2 = AiPlayer::new(second);
            let report =
                play_match(&mut p1, &mut p2, &mut rng).map_err(|e| anyhow::anyhow!(e))?;

            for (label, player) in [("player 1", &p1), ("player 2", &p2)] {
                println!("{} ({}) view of the opponent:", label, player.kind());
                print!("{}", render_knowledge(&player.strategy().knowledge_glyphs()));
                if let Some(left) = player.strategy().ships_left() {
                    println!("ships left: {:?}", left.lengths());
                }
                println!();
            }
            let result = json!({
                "player1": {"strategy": first, "shots": report.shots[0]},
                "player2": {"strategy": second, "shots": report.shots[1]},
                "winner": if report.winner == 0 { "player1" } else { "player2" },
            });
            println!("{}", serde_json::to_string(&result)?);
        }
    }
    Ok(())
}

