//! CLI frontend for the Successes d10 pool roller.

mod commands;
mod console;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "successes",
    about = "Successes — a Storyteller d10 pool roller",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll a pool once and print the result
    Roll {
        /// Number of dice in the pool
        #[arg(short, long)]
        pool: u32,

        /// Minimum face that counts as a success
        #[arg(short, long, default_value = "6")]
        difficulty: u32,

        /// Count every 10 as two successes
        #[arg(short, long)]
        specialty: bool,

        /// Spend willpower for a guaranteed success
        #[arg(short, long)]
        willpower: bool,

        /// Automatic successes from other sources
        #[arg(short, long, default_value = "0")]
        autos: u32,

        /// RNG seed for a reproducible roll
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Also show the success tally
        #[arg(short, long)]
        verbose: bool,
    },

    /// Start an interactive session that re-scores dice as modifiers change
    Play {
        /// RNG seed for reproducible rolls
        #[arg(long)]
        seed: Option<u64>,

        /// Starting difficulty
        #[arg(short, long, default_value = "6")]
        difficulty: u32,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Roll {
            pool,
            difficulty,
            specialty,
            willpower,
            autos,
            seed,
            json,
            verbose,
        } => commands::roll::run(
            pool,
            sx_mechanics::RollParameters {
                difficulty,
                specialty,
                willpower,
                autos,
            },
            seed,
            json,
            verbose,
        ),
        Commands::Play { seed, difficulty } => commands::play::run(seed, difficulty),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
