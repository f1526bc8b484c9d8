//! Tincture resolution.
//!
//! The shared primitive behind every tincture decision: draw a category,
//! force it to the metal/colour opposite of the reference (the Rule of
//! Tincture), re-draw until the result clears the reference and the
//! used-list, and expand pattern draws into a composite pair.

use rand::Rng;

use crate::catalog::Element;
use crate::catalog::TinctureCatalog;
use crate::rng::gate;
use crate::types::{PatternSize, PatternSpec, Tincture, TinctureCategory};

use super::Composer;

/// Re-draw cap: keeps resolution total even when the used-list saturates
/// an entire category table.
const MAX_REDRAWS: usize = 24;

impl Composer<'_> {
    /// Resolve a tincture for `element`, contrasting against `reference`
    /// and avoiding everything in `used`.
    ///
    /// Non-pattern picks for fields and divisions are recorded in `used`;
    /// charge picks are not, matching how contrast accumulates on the
    /// field only.
    pub(crate) fn resolve_tincture<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        element: Element,
        used: &mut Vec<String>,
        reference: Option<&Tincture>,
    ) -> Tincture {
        let tinctures = &self.catalog.tinctures;
        let base = reference.map(|t| t.base().to_string());

        let mut category =
            TinctureCatalog::category_key(tinctures.element_weights(element).pick(rng));
        if reference.is_some() && category != TinctureCategory::Patterns {
            // Rule of Tincture: metal never directly on metal, colour
            // never directly on colour, relative to the immediate
            // reference. Stains and unknown bases count as colours.
            let base_is_metal = base
                .as_deref()
                .and_then(|b| tinctures.classify(b))
                == Some(TinctureCategory::Metals);
            category = if base_is_metal {
                TinctureCategory::Colours
            } else {
                TinctureCategory::Metals
            };
        }
        if category == TinctureCategory::Metals
            && used.iter().any(|t| t == "or")
            && used.iter().any(|t| t == "argent")
        {
            // Both metals already shown elsewhere on the emblem.
            category = TinctureCategory::Colours;
        }

        let table = tinctures.category_table(category);
        let mut name = table.pick(rng).to_string();
        let mut redraws = 0;
        while (base.as_deref() == Some(name.as_str()) || used.contains(&name))
            && redraws < MAX_REDRAWS
        {
            name = table.pick(rng).to_string();
            redraws += 1;
        }

        if category != TinctureCategory::Patterns && element != Element::Charge {
            used.push(name.clone());
        }

        if category == TinctureCategory::Patterns {
            self.resolve_pattern(rng, &name, element, used)
        } else {
            Tincture::Plain(name)
        }
    }

    /// Expand a drawn pattern motif into a composite tincture.
    pub(crate) fn resolve_pattern<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        motif: &str,
        element: Element,
        used: &mut Vec<String>,
    ) -> Tincture {
        let tinctures = &self.catalog.tinctures;

        let size = if gate(rng, 0.1) {
            PatternSize::Small
        } else if gate(rng, 0.1) {
            PatternSize::Smaller
        } else if gate(rng, 0.01) {
            PatternSize::Big
        } else if gate(rng, 0.005) {
            PatternSize::Smallest
        } else {
            PatternSize::Normal
        };

        let mut charge = None;
        let mut pair: Option<(&str, &str)> = None;

        if gate(rng, 0.5) && matches!(motif, "vair" | "vairInPale" | "vairEnPointe") {
            pair = Some(("azure", "argent"));
        } else if gate(rng, 0.8) && motif == "ermine" {
            pair = Some(("argent", "sable"));
        } else if motif == "pappellony" {
            if gate(rng, 0.2) {
                pair = Some(("gules", "or"));
            } else if gate(rng, 0.2) {
                pair = Some(("argent", "sable"));
            } else if gate(rng, 0.2) {
                pair = Some(("azure", "argent"));
            }
        } else if motif == "masoned" {
            if gate(rng, 0.3) {
                pair = Some(("gules", "argent"));
            } else if gate(rng, 0.3) {
                pair = Some(("argent", "sable"));
            } else if gate(rng, 0.1) {
                pair = Some(("or", "sable"));
            }
        } else if motif == "fretty" {
            if gate(rng, 0.35) {
                pair = Some(("argent", "gules"));
            } else if gate(rng, 0.25) {
                pair = Some(("sable", "or"));
            } else if gate(rng, 0.15) {
                pair = Some(("gules", "argent"));
            }
        } else if motif == "semy" {
            charge = Some(self.select_charge(rng, self.catalog.charges.semy()));
        }

        let (mut t1, mut t2) = match pair {
            Some((t1, t2)) => (t1.to_string(), t2.to_string()),
            None => {
                let metals = tinctures.category_table(TinctureCategory::Metals);
                let colours = tinctures.category_table(TinctureCategory::Colours);
                if gate(rng, 0.7) {
                    (metals.pick(rng).to_string(), colours.pick(rng).to_string())
                } else {
                    (colours.pick(rng).to_string(), metals.pick(rng).to_string())
                }
            }
        };

        if element == Element::Division {
            // A division pattern must stay visible against tinctures
            // already shown on the field.
            if used.contains(&t1) {
                t1 = self.replace_tincture(rng, &t1);
            }
            if used.contains(&t2) {
                t2 = self.replace_tincture(rng, &t2);
            }
        }

        used.push(t1.clone());
        used.push(t2.clone());

        Tincture::Pattern(PatternSpec {
            motif: motif.to_string(),
            charge,
            t1,
            t2,
            size,
        })
    }

    /// Re-roll a tincture within its own category.
    pub(crate) fn replace_tincture<R: Rng + ?Sized>(&self, rng: &mut R, name: &str) -> String {
        let category = self
            .catalog
            .tinctures
            .classify(name)
            .unwrap_or(TinctureCategory::Colours);
        let table = self.catalog.tinctures.category_table(category);
        let mut candidate = table.pick(rng).to_string();
        let mut redraws = 0;
        while candidate == name && redraws < MAX_REDRAWS {
            candidate = table.pick(rng).to_string();
            redraws += 1;
        }
        candidate
    }

    /// The category a tincture presents on the wire: patterns and
    /// unknown names both read as patterns.
    pub(crate) fn wire_category(&self, tincture: &Tincture) -> TinctureCategory {
        match tincture {
            Tincture::Plain(name) => self
                .catalog
                .tinctures
                .classify(name)
                .unwrap_or(TinctureCategory::Patterns),
            Tincture::Pattern(_) => TinctureCategory::Patterns,
        }
    }

    pub(crate) fn same_wire_category(&self, a: &Tincture, b: &Tincture) -> bool {
        self.wire_category(a) == self.wire_category(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_rule_of_tincture_holds() {
        let catalog = Catalog::standard();
        let composer = Composer::new(catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for reference in ["or", "argent", "gules", "azure", "murrey"] {
            let reference_t = Tincture::plain(reference);
            let reference_cat = catalog.tinctures.classify(reference).unwrap();
            for _ in 0..500 {
                let mut used = Vec::new();
                let resolved =
                    composer.resolve_tincture(&mut rng, Element::Charge, &mut used, Some(&reference_t));
                if resolved.is_pattern() {
                    continue;
                }
                let resolved_cat = catalog.tinctures.classify(resolved.base()).unwrap();
                assert_ne!(
                    resolved_cat, reference_cat,
                    "{resolved:?} breaks the rule against {reference}"
                );
                assert_ne!(resolved.base(), reference);
            }
        }
    }

    #[test]
    fn test_used_list_is_avoided() {
        let catalog = Catalog::standard();
        let composer = Composer::new(catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        for _ in 0..500 {
            let mut used = vec!["gules".to_string(), "azure".to_string()];
            let resolved =
                composer.resolve_tincture(&mut rng, Element::Field, &mut used, None);
            if !resolved.is_pattern() {
                assert!(resolved.base() != "gules" && resolved.base() != "azure");
            }
        }
    }

    #[test]
    fn test_metal_overuse_forces_colours() {
        let catalog = Catalog::standard();
        let composer = Composer::new(catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        for _ in 0..500 {
            let mut used = vec!["or".to_string(), "argent".to_string()];
            let resolved =
                composer.resolve_tincture(&mut rng, Element::Field, &mut used, None);
            if !resolved.is_pattern() {
                assert_ne!(
                    catalog.tinctures.classify(resolved.base()),
                    Some(TinctureCategory::Metals)
                );
            }
        }
    }

    #[test]
    fn test_pattern_pair_is_metal_against_colour() {
        let catalog = Catalog::standard();
        let composer = Composer::new(catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(24);
        for _ in 0..500 {
            let mut used = Vec::new();
            let pattern = composer.resolve_pattern(&mut rng, "chequy", Element::Field, &mut used);
            let spec = pattern.as_pattern().unwrap();
            let c1 = catalog.tinctures.classify(&spec.t1).unwrap();
            let c2 = catalog.tinctures.classify(&spec.t2).unwrap();
            assert_ne!(c1, c2, "chequy pair {spec} lacks contrast");
        }
    }

    #[test]
    fn test_semy_binds_a_known_charge() {
        let catalog = Catalog::standard();
        let composer = Composer::new(catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(25);
        let kinds: Vec<&str> = catalog.charges.kinds().collect();
        for _ in 0..200 {
            let mut used = Vec::new();
            let pattern = composer.resolve_pattern(&mut rng, "semy", Element::Field, &mut used);
            let charge = pattern.semy_charge().expect("semy must bind a charge");
            assert!(kinds.contains(&charge), "unknown semy charge {charge}");
        }
    }

    #[test]
    fn test_division_pattern_rerolls_used_halves() {
        let catalog = Catalog::standard();
        let composer = Composer::new(catalog);
        let mut rng = ChaCha8Rng::seed_from_u64(26);
        for _ in 0..500 {
            let mut used = vec!["azure".to_string(), "argent".to_string()];
            let pattern =
                composer.resolve_pattern(&mut rng, "chequy", Element::Division, &mut used);
            let spec = pattern.as_pattern().unwrap();
            assert_ne!(spec.t1, "azure");
            assert_ne!(spec.t2, "azure");
            assert_ne!(spec.t1, "argent");
            assert_ne!(spec.t2, "argent");
        }
    }
}
