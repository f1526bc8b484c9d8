//! Structural checks for emblems and drift checks for the catalog.
//!
//! `check_emblem` verifies a single emblem value against the data-model
//! invariants; `check_catalog` verifies that every key the composer can
//! draw resolves on the renderer side. Catalog drift is a programming
//! error, so the drift checks run in tests and in `armorial validate`.

use crate::catalog::Catalog;
use crate::types::{Emblem, Tincture};

use super::{Diagnostic, ValidationResult};

/// The anchor alphabet shared by all shield shapes.
const ANCHOR_ALPHABET: &str = "abcdefghijklmnopqyzABCDEFGHIJKL";

/// Validate one emblem against the catalog.
pub fn check_emblem(emblem: &Emblem, catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_tincture(&emblem.field, "field", catalog, &mut result);

    if let Some(division) = &emblem.division {
        if !catalog.templates.has_division(&division.kind) {
            result.error(
                "armorial::check::unknown-division",
                format!("division '{}' has no template", division.kind),
            );
        }
        check_line(division.line.as_deref(), catalog, &mut result);
        check_tincture(&division.tincture, "division", catalog, &mut result);
    }

    for ordinary in &emblem.ordinaries {
        if !catalog.templates.has_ordinary(&ordinary.kind) {
            result.error(
                "armorial::check::unknown-ordinary",
                format!("ordinary '{}' has no drawable geometry", ordinary.kind),
            );
        }
        check_line(ordinary.line.as_deref(), catalog, &mut result);
        check_tincture(&ordinary.tincture, "ordinary", catalog, &mut result);
        if ordinary.divided.is_some() && emblem.division.is_none() {
            result.error(
                "armorial::check::divided-without-division",
                format!(
                    "ordinary '{}' is divided but the field is not",
                    ordinary.kind
                ),
            );
        }
    }

    let known_kinds: Vec<&str> = catalog.charges.kinds().collect();
    for charge in &emblem.charges {
        if !known_kinds.contains(&charge.kind.as_str()) {
            result.push(
                Diagnostic::warning(
                    "armorial::check::unknown-charge",
                    format!("charge '{}' is not in the catalog", charge.kind),
                )
                .with_help("external artwork may still cover it"),
            );
        }

        if charge.anchors.is_empty() {
            result.error(
                "armorial::check::empty-anchors",
                format!("charge '{}' has no anchor positions", charge.kind),
            );
        }
        for code in charge.anchors.chars() {
            if !ANCHOR_ALPHABET.contains(code) {
                result.warning(
                    "armorial::check::unknown-anchor",
                    format!("charge '{}' uses unknown anchor '{code}'", charge.kind),
                );
            }
        }

        let colors = catalog.charges.colors(&charge.kind);
        if charge.t2.is_some() && colors < 2 {
            result.error(
                "armorial::check::extra-tincture",
                format!(
                    "charge '{}' declares {colors} colors but carries t2",
                    charge.kind
                ),
            );
        }
        if charge.t3.is_some() && (charge.t2.is_none() || colors < 3) {
            result.error(
                "armorial::check::extra-tincture",
                format!(
                    "charge '{}' carries t3 without the declared colors",
                    charge.kind
                ),
            );
        }

        check_tincture(&charge.tincture, "charge", catalog, &mut result);
        if let Some(t2) = &charge.t2 {
            check_tincture(t2, "charge", catalog, &mut result);
        }
        if let Some(t3) = &charge.t3 {
            check_tincture(t3, "charge", catalog, &mut result);
        }

        if charge.divided.is_some() && emblem.division.is_none() {
            result.error(
                "armorial::check::divided-without-division",
                format!("charge '{}' is divided but the field is not", charge.kind),
            );
        }
        if charge.size <= 0.0 {
            result.error(
                "armorial::check::size",
                format!(
                    "charge '{}' has non-positive size {}",
                    charge.kind, charge.size
                ),
            );
        }
    }

    result
}

fn check_tincture(tincture: &Tincture, element: &str, catalog: &Catalog, result: &mut ValidationResult) {
    match tincture {
        Tincture::Plain(name) => {
            if catalog.tinctures.classify(name).is_none() {
                result.error(
                    "armorial::check::unknown-tincture",
                    format!("{element} tincture '{name}' is not classified"),
                );
            }
        }
        Tincture::Pattern(spec) => {
            if !catalog.patterns.supports(&spec.motif) {
                result.error(
                    "armorial::check::unknown-pattern",
                    format!("{element} pattern '{}' cannot be rendered", spec.motif),
                );
            }
            for half in [&spec.t1, &spec.t2] {
                if catalog.tinctures.classify(half).is_none() {
                    result.error(
                        "armorial::check::unknown-tincture",
                        format!("{element} pattern half '{half}' is not classified"),
                    );
                }
            }
        }
    }
}

fn check_line(line: Option<&str>, catalog: &Catalog, result: &mut ValidationResult) {
    if let Some(name) = line {
        if name != "straight" && catalog.lines.get(name).is_none() {
            result.error(
                "armorial::check::unknown-line",
                format!("line style '{name}' has no curve"),
            );
        }
    }
}

/// Verify that composer-drawable keys resolve in the renderer catalogs.
pub fn check_catalog(catalog: &Catalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for motif in catalog.tinctures.pattern_keys() {
        if !catalog.patterns.supports(motif) {
            result.error(
                "armorial::drift::pattern",
                format!("pattern '{motif}' is drawable but not renderable"),
            );
        }
    }

    for kind in catalog.ordinaries.kinds() {
        if !catalog.templates.has_ordinary(kind) {
            result.error(
                "armorial::drift::ordinary",
                format!("ordinary '{kind}' is drawable but has no template"),
            );
        }
    }
    if !catalog.templates.has_ordinary("canton") {
        result.error(
            "armorial::drift::ordinary",
            "the dominion canton has no template",
        );
    }

    for kind in catalog.divisions.kinds() {
        if !catalog.templates.has_division(kind) {
            result.error(
                "armorial::drift::division",
                format!("division '{kind}' is drawable but has no template"),
            );
        }
        if let Some(lines) = catalog.divisions.line_weights(kind) {
            for line in lines.keys().filter(|l| *l != "straight") {
                if catalog.lines.get(line).is_none() {
                    result.error(
                        "armorial::drift::line",
                        format!("line '{line}' for division '{kind}' has no curve"),
                    );
                }
            }
        }
    }
    for line in catalog
        .divisions
        .ordinary_lines()
        .keys()
        .filter(|l| *l != "straight")
    {
        if catalog.lines.get(line).is_none() {
            result.error(
                "armorial::drift::line",
                format!("ordinary line '{line}' has no curve"),
            );
        }
    }

    for (set, table) in [
        ("types", catalog.charges.types()),
        ("single", catalog.charges.single()),
        ("semy", catalog.charges.semy()),
    ] {
        for group in table.keys() {
            if group != "inescutcheon" && catalog.charges.group(group).is_none() {
                result.error(
                    "armorial::drift::charge-group",
                    format!("charge set '{set}' lists unknown group '{group}'"),
                );
            }
        }
    }

    for name in catalog.tinctures.color_names().collect::<Vec<_>>() {
        if catalog.tinctures.classify(name).is_none() {
            result.warning(
                "armorial::drift::color",
                format!("color entry '{name}' is not a classified tincture"),
            );
        }
    }

    for key in catalog.shields.keys().collect::<Vec<_>>() {
        let shape = match catalog.shields.get(key) {
            Some(shape) => shape,
            None => continue,
        };
        for code in ANCHOR_ALPHABET.chars() {
            if !shape.positions.contains_key(&code) {
                result.error(
                    "armorial::drift::anchor",
                    format!("shape '{key}' misses anchor '{code}'"),
                );
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Charge, DividedMode, Division};

    #[test]
    fn test_standard_catalog_has_no_drift() {
        let result = check_catalog(Catalog::standard());
        assert!(
            !result.has_errors(),
            "{:?}",
            result.iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_valid_emblem_passes() {
        let catalog = Catalog::standard();
        let mut emblem = Emblem::of_field(Tincture::plain("azure"));
        emblem
            .charges
            .push(Charge::new("roundel", Tincture::plain("or"), "e"));
        assert!(check_emblem(&emblem, catalog).is_ok());
    }

    #[test]
    fn test_divided_without_division_is_an_error() {
        let catalog = Catalog::standard();
        let mut emblem = Emblem::of_field(Tincture::plain("azure"));
        let mut charge = Charge::new("roundel", Tincture::plain("or"), "e");
        charge.divided = Some(DividedMode::Counter);
        emblem.charges.push(charge);
        assert!(check_emblem(&emblem, catalog).has_errors());
    }

    #[test]
    fn test_extra_tincture_is_an_error() {
        let catalog = Catalog::standard();
        let mut emblem = Emblem::of_field(Tincture::plain("azure"));
        // roundel declares one color.
        let mut charge = Charge::new("roundel", Tincture::plain("or"), "e");
        charge.t2 = Some(Tincture::plain("gules"));
        emblem.charges.push(charge);
        assert!(check_emblem(&emblem, catalog).has_errors());
    }

    #[test]
    fn test_unknown_division_is_an_error() {
        let catalog = Catalog::standard();
        let mut emblem = Emblem::of_field(Tincture::plain("azure"));
        emblem.division = Some(Division {
            kind: "perNothing".to_string(),
            tincture: Tincture::plain("or"),
            line: None,
        });
        assert!(check_emblem(&emblem, catalog).has_errors());
    }

    #[test]
    fn test_unknown_charge_is_only_a_warning() {
        let catalog = Catalog::standard();
        let mut emblem = Emblem::of_field(Tincture::plain("azure"));
        emblem
            .charges
            .push(Charge::new("spaceShuttle", Tincture::plain("or"), "e"));
        let result = check_emblem(&emblem, catalog);
        assert!(!result.has_errors());
        assert!(!result.is_ok());
    }

    #[test]
    fn test_unrenderable_pattern_is_an_error() {
        let catalog = Catalog::standard();
        let emblem = Emblem::of_field(Tincture::parse("tartan-or-gules"));
        assert!(check_emblem(&emblem, catalog).has_errors());
    }
}
