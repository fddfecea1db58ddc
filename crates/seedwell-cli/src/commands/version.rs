use std::error::Error;

use clap::Args;
use seedwell_core::STATE_WORDS;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit engine and mixer details as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: &'static str,
    engine: &'static str,
    state_words: usize,
    mixer: &'static str,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION"),
        engine: "mt19937",
        state_words: STATE_WORDS,
        mixer: "seed_seq",
    };
    println!("{}", serde_json::to_string_pretty(&info)?);
    Ok(())
}
