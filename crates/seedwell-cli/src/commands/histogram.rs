use std::error::Error;

use clap::Args;
use serde::Serialize;

use crate::draws::{Draws, SourceArgs};

const MAX_BUCKETS: i128 = 65_536;

#[derive(Args, Debug)]
pub struct HistogramArgs {
    /// Smallest value that may be drawn.
    #[arg(long, default_value_t = 1, allow_hyphen_values = true)]
    pub min: i64,
    /// Largest value that may be drawn.
    #[arg(long, default_value_t = 6, allow_hyphen_values = true)]
    pub max: i64,
    /// Number of draws to tally.
    #[arg(long, default_value_t = 600_000)]
    pub draws: u64,
    #[command(flatten)]
    pub source: SourceArgs,
}

#[derive(Debug, Serialize)]
struct HistogramReport {
    min: i64,
    max: i64,
    draws: u64,
    counts: Vec<u64>,
    expected: f64,
    chi_square: f64,
    max_deviation_pct: f64,
}

pub fn run(args: &HistogramArgs) -> Result<(), Box<dyn Error>> {
    let buckets = i128::from(args.max) - i128::from(args.min) + 1;
    if buckets <= 0 {
        return Err(format!("--min {} exceeds --max {}", args.min, args.max).into());
    }
    if buckets > MAX_BUCKETS {
        return Err(format!("range spans {buckets} values, at most {MAX_BUCKETS} allowed").into());
    }

    let mut draws = Draws::from_args(&args.source)?;
    let mut counts = vec![0u64; buckets as usize];
    for _ in 0..args.draws {
        let value = draws.get(args.min, args.max)?;
        counts[(i128::from(value) - i128::from(args.min)) as usize] += 1;
    }

    let report = tally(args.min, args.max, args.draws, counts);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn tally(min: i64, max: i64, draws: u64, counts: Vec<u64>) -> HistogramReport {
    let expected = draws as f64 / counts.len() as f64;
    let mut chi_square = 0.0;
    let mut max_deviation = 0.0f64;
    for &count in &counts {
        let diff = count as f64 - expected;
        if expected > 0.0 {
            chi_square += diff * diff / expected;
            max_deviation = max_deviation.max(diff.abs() / expected);
        }
    }
    HistogramReport {
        min,
        max,
        draws,
        counts,
        expected,
        chi_square,
        max_deviation_pct: max_deviation * 100.0,
    }
}
