use clap::Parser;
use miette::Result;

use armorial::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => armorial::cli::generate::run(args)?,
        Commands::Validate(args) => armorial::cli::validate::run(args)?,
        Commands::Completions(args) => armorial::cli::completions::run(args)?,
    }

    Ok(())
}
