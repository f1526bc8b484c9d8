//! Validate command implementation.
//!
//! Runs the catalog drift checks and, when token files are given,
//! validates each stored emblem against the catalog.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::catalog::Catalog;
use crate::error::{ArmorialError, Result};
use crate::types::Emblem;
use crate::validation::{check_catalog, check_emblem, print_diagnostics, ValidationResult};

/// Validate the catalog and optional emblem token files
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Emblem token files to validate
    pub files: Vec<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let catalog = Catalog::standard();

    let mut result = ValidationResult::new();
    result.merge(check_catalog(catalog));

    for file in &args.files {
        let token = fs::read_to_string(file).map_err(|e| ArmorialError::Io {
            path: file.clone(),
            message: format!("cannot read token file: {e}"),
        })?;
        let emblem = Emblem::from_token(token.trim())?;
        result.merge(check_emblem(&emblem, catalog));
    }

    print_diagnostics(&result);

    if result.has_errors() {
        return Err(ArmorialError::Validation {
            message: format!("{} error(s) found", result.error_count()),
            help: None,
        });
    }
    Ok(())
}
