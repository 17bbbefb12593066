//! mealmax CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "mealmax", version, about = "Two meals enter, one meal leaves")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Battle two meals from a meal file
    Battle {
        /// Path to .toml meal file
        #[arg(long)]
        meals: PathBuf,

        /// ID of the first combatant
        #[arg(long)]
        first: i64,

        /// ID of the second combatant
        #[arg(long)]
        second: i64,

        /// Seed for reproducible battles
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Run every meal in a file through king-of-the-hill battles
    Tournament {
        /// Path to .toml meal file
        #[arg(long)]
        meals: PathBuf,

        /// Seed for reproducible battles
        #[arg(long)]
        seed: Option<u64>,

        /// Leaderboard order: wins, win_pct
        #[arg(long)]
        sort: Option<String>,

        /// Write the JSON report to this path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write the JSON report to the configured output directory
        #[arg(long)]
        save: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the battle score of every meal in a file
    Score {
        /// Path to .toml meal file
        #[arg(long)]
        meals: PathBuf,
    },

    /// Validate a meal file
    Validate {
        /// Path to .toml meal file
        #[arg(long)]
        meals: PathBuf,
    },

    /// Create starter config and example meal file
    Init,
}

fn main() {
    let mut filter = EnvFilter::from_default_env();
    for directive in ["mealmax=info", "mealmax_core=info"] {
        if let Ok(directive) = directive.parse() {
            filter = filter.add_directive(directive);
        }
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Battle {
            meals,
            first,
            second,
            seed,
            config,
        } => commands::battle::execute(meals, first, second, seed, config),
        Commands::Tournament {
            meals,
            seed,
            sort,
            output,
            save,
            config,
        } => commands::tournament::execute(meals, seed, sort, output, save, config),
        Commands::Score { meals } => commands::score::execute(meals),
        Commands::Validate { meals } => commands::validate::execute(meals),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
