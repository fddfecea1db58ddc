use std::error::Error;

use clap::Args;

use crate::draws::{Draws, SourceArgs};

#[derive(Args, Debug)]
pub struct ShuffleArgs {
    /// Items to shuffle.
    #[arg(required = true)]
    pub items: Vec<String>,
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn run(args: &ShuffleArgs) -> Result<(), Box<dyn Error>> {
    let mut draws = Draws::from_args(&args.source)?;
    let mut items = args.items.clone();
    draws.shuffle(&mut items);
    println!("{}", items.join(" "));
    Ok(())
}
