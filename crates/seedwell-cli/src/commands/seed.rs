use std::error::Error;

use clap::Args;

use crate::draws::{Draws, SourceArgs};

#[derive(Args, Debug)]
pub struct SeedArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &SeedArgs) -> Result<(), Box<dyn Error>> {
    let draws = Draws::from_args(&args.source)?;
    let report = draws.report();
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
