use std::error::Error;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{
    histogram::{self, HistogramArgs},
    roll::{self, RollArgs},
    seed::{self, SeedArgs},
    shuffle::{self, ShuffleArgs},
    version::{self, VersionArgs},
};

mod commands;
mod config;
mod draws;

#[derive(Parser, Debug)]
#[command(name = "seedwell", about = "Self-seeding random draws")]
struct Cli {
    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Draw integers from a closed range.
    Roll(RollArgs),
    /// Print the given items in shuffled order.
    Shuffle(ShuffleArgs),
    /// Tally many draws and report how far they stray from uniform.
    Histogram(HistogramArgs),
    /// Seed a generator and print its provenance report.
    Seed(SeedArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);
    match cli.command {
        Command::Roll(args) => roll::run(&args),
        Command::Shuffle(args) => shuffle::run(&args),
        Command::Histogram(args) => histogram::run(&args),
        Command::Seed(args) => seed::run(&args),
        Command::Version(args) => version::run(&args),
    }
}
