//! Validation for emblems and catalogs.
//!
//! Runs structural checks against emblem values and drift checks against
//! the catalog, reporting errors and warnings. Used by `armorial
//! validate` and by the property tests.

mod checks;
mod diagnostic;

pub use checks::{check_catalog, check_emblem};
pub use diagnostic::{Diagnostic, Severity, ValidationResult};

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }

    let errors = result.error_count();
    let warnings = result.warning_count();

    if errors > 0 {
        eprintln!(
            "Validation failed: {} error(s), {} warning(s)",
            errors, warnings
        );
    } else if warnings > 0 {
        eprintln!("Validation passed ({} warning(s))", warnings);
    } else {
        eprintln!("Validation passed.");
    }
}
