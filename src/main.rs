use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use riddler::pumpkin::{
    search_for_elimination_sequence, search_for_winner, simulate_game_with_history, PlayerId,
};
use riddler::race;
use riddler::ruler::CutExperiment;

#[derive(Parser, Debug)]
#[command(name = "riddler", about = "Solvers for a trio of FiveThirtyEight Riddler puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Solve the hot-pumpkin elimination riddle.
    Pumpkin {
        /// Number of players seated in the circle.
        #[arg(long, default_value_t = 61)]
        players: u32,
        /// Observed first eliminations, in order (comma separated).
        #[arg(long, value_delimiter = ',', default_value = "19,51,52")]
        eliminations: Vec<PlayerId>,
        /// The player who should win the extra-extra-credit game.
        #[arg(long, default_value_t = 1)]
        desired_winner: PlayerId,
        /// Largest count-to value to try before giving up.
        #[arg(long, default_value_t = 1_000_000)]
        ceiling: u64,
    },
    /// Estimate the expected length of the ruler piece containing a mark.
    Ruler {
        /// Length of the ruler in inches.
        #[arg(long, default_value_t = 12.0)]
        length: f64,
        /// Number of random cuts per ruler.
        #[arg(long, default_value_t = 3)]
        slices: usize,
        /// The marked point, in inches from the left end.
        #[arg(long, default_value_t = 6.0)]
        mark: f64,
        /// Number of rulers to cut.
        #[arg(long, default_value_t = 1_000_000)]
        trials: u64,
        /// Seed for the random source (entropy if omitted).
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Estimate the lone rider's expected summit points.
    Race {
        /// Number of races to simulate.
        #[arg(long, default_value_t = 1_000_000)]
        trials: u64,
        /// Seed for the random source (entropy if omitted).
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Pumpkin {
            players,
            eliminations,
            desired_winner,
            ceiling,
        } => run_pumpkin(players, &eliminations, desired_winner, ceiling)?,
        Commands::Ruler {
            length,
            slices,
            mark,
            trials,
            seed,
        } => run_ruler(length, slices, mark, trials, seed)?,
        Commands::Race { trials, seed } => run_race(trials, seed)?,
    }

    Ok(())
}

fn run_pumpkin(
    players: u32,
    eliminations: &[PlayerId],
    desired_winner: PlayerId,
    ceiling: u64,
) -> Result<()> {
    let count_to = search_for_elimination_sequence(players, eliminations, ceiling)
        .context("no count-to value reproduces the observed eliminations")?;
    println!("smallest N reproducing the eliminations: {count_to}");

    let outcome = simulate_game_with_history(players, count_to)
        .context("full game under the recovered count failed")?;
    println!("winner under that N: player {}", outcome.winner);

    let winning_count = search_for_winner(players, desired_winner, ceiling)
        .with_context(|| format!("no count-to value crowns player {desired_winner}"))?;
    println!("smallest N crowning player {desired_winner}: {winning_count}");

    Ok(())
}

fn run_ruler(length: f64, slices: usize, mark: f64, trials: u64, seed: Option<u64>) -> Result<()> {
    let experiment = CutExperiment {
        ruler_length: length,
        slices,
        mark,
    };
    let mean = experiment
        .expected_length(trials, &mut seeded_rng(seed))
        .context("the experiment needs at least one trial and a mark on the ruler")?;
    println!("expected piece length: {mean:.6}");

    Ok(())
}

fn run_race(trials: u64, seed: Option<u64>) -> Result<()> {
    let mean = race::expected_score(trials, &mut seeded_rng(seed))
        .context("the experiment needs at least one trial")?;
    println!("expected points: {mean:.6}");

    Ok(())
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
