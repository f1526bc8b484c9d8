pub mod completions;
pub mod generate;
pub mod validate;

use clap::{Parser, Subcommand};

/// armorial - procedural heraldry composer and renderer
#[derive(Parser, Debug)]
#[command(name = "armorial")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compose emblems and render them to SVG files
    Generate(generate::GenerateArgs),

    /// Validate the catalog and emblem token files
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
