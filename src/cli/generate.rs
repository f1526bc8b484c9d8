//! Generate command implementation.
//!
//! Composes emblems and writes rendered SVG files.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::Catalog;
use crate::compose::Composer;
use crate::error::{ArmorialError, Result};
use crate::render::{ArtworkSource, BuiltinArtwork, DirArtwork, Renderer, Surface};
use crate::types::Emblem;

/// Compose emblems and render them to SVG files
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of emblems to generate
    #[arg(long, short = 'n', default_value = "1")]
    pub count: usize,

    /// Seed for deterministic output; random when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Shield shape key; drawn per emblem when omitted
    #[arg(long)]
    pub shape: Option<String>,

    /// Parent emblem token file for inheritance
    #[arg(long)]
    pub parent: Option<PathBuf>,

    /// Probability of inheriting parent traits
    #[arg(long, default_value = "0")]
    pub kinship: f64,

    /// Probability of the dominion canton augmentation
    #[arg(long, default_value = "0")]
    pub dominion: f64,

    /// Thematic hint for charge selection (e.g. Naval, Military)
    #[arg(long = "type")]
    pub type_hint: Option<String>,

    /// Directory of charge artwork SVGs; built-in glyphs when omitted
    #[arg(long)]
    pub charges: Option<PathBuf>,

    /// Output directory
    #[arg(long, short, default_value = "dist")]
    pub output: PathBuf,

    /// Also write the emblem token next to each SVG
    #[arg(long)]
    pub tokens: bool,
}

pub fn run(args: GenerateArgs) -> Result<()> {
    if !args.output.exists() {
        fs::create_dir_all(&args.output).map_err(|e| ArmorialError::Io {
            path: args.output.clone(),
            message: format!("Failed to create output directory: {e}"),
        })?;
    }

    let catalog = Catalog::standard();
    let composer = Composer::new(catalog);

    let parent = match &args.parent {
        Some(path) => {
            let token = fs::read_to_string(path).map_err(|e| ArmorialError::Io {
                path: path.clone(),
                message: format!("cannot read parent token: {e}"),
            })?;
            Some(Emblem::from_token(token.trim())?)
        }
        None => None,
    };

    let artwork: Box<dyn ArtworkSource> = match &args.charges {
        Some(dir) => Box::new(DirArtwork::new(dir)),
        None => Box::new(BuiltinArtwork::new()),
    };
    let renderer = Renderer::new(catalog, artwork.as_ref());
    let surface = Surface::new();

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut warning_count = 0;
    for index in 0..args.count {
        let emblem = composer.compose(
            &mut rng,
            parent.as_ref(),
            args.kinship,
            args.dominion,
            args.type_hint.as_deref(),
        );
        let shape = match &args.shape {
            Some(shape) => shape.clone(),
            None => catalog.shields.pick_shape(&mut rng).to_string(),
        };
        let id = format!("emblem{index}");

        if let Some(report) = renderer.render_into(&surface, &id, &emblem, &shape)? {
            for warning in &report.warnings {
                eprintln!("  {warning}");
                warning_count += 1;
            }
            let svg_path = args.output.join(format!("{id}.svg"));
            fs::write(&svg_path, &report.svg).map_err(|e| ArmorialError::Io {
                path: svg_path,
                message: format!("Failed to write SVG: {e}"),
            })?;
        }

        if args.tokens {
            let token_path = args.output.join(format!("{id}.coa"));
            fs::write(&token_path, emblem.to_token()).map_err(|e| ArmorialError::Io {
                path: token_path,
                message: format!("Failed to write token: {e}"),
            })?;
        }
    }

    println!(
        "Generated {} emblem(s) in {} (seed {seed})",
        args.count,
        args.output.display()
    );
    if warning_count > 0 {
        println!("{warning_count} warning(s); some charges were omitted");
    }
    Ok(())
}
