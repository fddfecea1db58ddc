use std::error::Error;
use std::io::{self, Write};

use clap::Args;

use crate::draws::{Draws, SourceArgs};

#[derive(Args, Debug)]
pub struct RollArgs {
    /// Smallest value that may be drawn.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub min: i64,
    /// Largest value that may be drawn.
    #[arg(long, default_value_t = 6, allow_hyphen_values = true)]
    pub max: i64,
    /// Number of values to draw.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
    /// Emit a JSON array instead of one value per line.
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &RollArgs) -> Result<(), Box<dyn Error>> {
    let mut draws = Draws::from_args(&args.source)?;
    let values = (0..args.count)
        .map(|_| draws.get(args.min, args.max))
        .collect::<Result<Vec<i64>, _>>()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer(&mut out, &values)?;
        writeln!(out)?;
    } else {
        for value in values {
            writeln!(out, "{value}")?;
        }
    }
    Ok(())
}
