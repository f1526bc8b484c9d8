//! Tincture classification and selection weights.
//!
//! Classifies tincture names into metals / colours / stains / patterns
//! and carries the per-element category weights the composer draws from,
//! plus the tincture -> color table the renderer paints with.

use crate::rng::WeightedTable;
use crate::types::TinctureCategory;

/// Which element a tincture is being resolved for. The category weights
/// differ: fields rarely take stains, charges never take patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Field,
    Division,
    Charge,
}

/// Static tincture catalog.
#[derive(Debug)]
pub struct TinctureCatalog {
    field: WeightedTable,
    division: WeightedTable,
    charge: WeightedTable,
    metals: WeightedTable,
    colours: WeightedTable,
    stains: WeightedTable,
    patterns: WeightedTable,
    colors: Vec<(&'static str, &'static str)>,
}

impl TinctureCatalog {
    pub(crate) fn standard() -> Self {
        Self {
            field: WeightedTable::new([
                ("metals", 3.0),
                ("colours", 4.0),
                ("stains", 0.05),
                ("patterns", 0.09),
            ]),
            division: WeightedTable::new([
                ("metals", 5.0),
                ("colours", 8.0),
                ("stains", 0.1),
                ("patterns", 0.4),
            ]),
            charge: WeightedTable::new([
                ("metals", 2.0),
                ("colours", 3.0),
                ("stains", 0.05),
                ("patterns", 0.0),
            ]),
            metals: WeightedTable::new([("argent", 3.0), ("or", 2.0)]),
            colours: WeightedTable::new([
                ("gules", 5.0),
                ("azure", 4.0),
                ("sable", 3.0),
                ("vert", 2.0),
                ("purpure", 1.0),
            ]),
            stains: WeightedTable::new([("murrey", 1.0), ("sanguine", 1.0), ("tenne", 1.0)]),
            patterns: WeightedTable::new([
                ("semy", 8.0),
                ("ermine", 6.0),
                ("vair", 4.0),
                ("vairInPale", 1.0),
                ("vairEnPointe", 2.0),
                ("chequy", 8.0),
                ("lozengy", 5.0),
                ("pally", 6.0),
                ("barry", 6.0),
                ("bendy", 4.0),
                ("bendySinister", 2.0),
                ("pappellony", 4.0),
                ("masoned", 6.0),
                ("fretty", 3.0),
            ]),
            colors: vec![
                ("argent", "#fafafa"),
                ("or", "#ffe066"),
                ("gules", "#d7374a"),
                ("azure", "#377cd7"),
                ("sable", "#333333"),
                ("vert", "#26c061"),
                ("purpure", "#8f4b99"),
                ("murrey", "#85185b"),
                ("sanguine", "#b63246"),
                ("tenne", "#cc7f19"),
            ],
        }
    }

    /// Category weights for an element class.
    pub fn element_weights(&self, element: Element) -> &WeightedTable {
        match element {
            Element::Field => &self.field,
            Element::Division => &self.division,
            Element::Charge => &self.charge,
        }
    }

    /// The tincture table of one category.
    pub fn category_table(&self, category: TinctureCategory) -> &WeightedTable {
        match category {
            TinctureCategory::Metals => &self.metals,
            TinctureCategory::Colours => &self.colours,
            TinctureCategory::Stains => &self.stains,
            TinctureCategory::Patterns => &self.patterns,
        }
    }

    /// Classify a plain tincture name by table membership.
    pub fn classify(&self, name: &str) -> Option<TinctureCategory> {
        if self.metals.contains(name) {
            Some(TinctureCategory::Metals)
        } else if self.colours.contains(name) {
            Some(TinctureCategory::Colours)
        } else if self.stains.contains(name) {
            Some(TinctureCategory::Stains)
        } else if self.patterns.contains(name) {
            Some(TinctureCategory::Patterns)
        } else {
            None
        }
    }

    /// Hex color for a plain tincture name.
    pub fn color(&self, name: &str) -> Option<&'static str> {
        self.colors
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, hex)| *hex)
    }

    /// Map a category-table key (`"metals"`, ...) back to the category.
    pub fn category_key(key: &str) -> TinctureCategory {
        match key {
            "metals" => TinctureCategory::Metals,
            "colours" => TinctureCategory::Colours,
            "stains" => TinctureCategory::Stains,
            _ => TinctureCategory::Patterns,
        }
    }

    /// All pattern motif keys the composer can draw.
    pub fn pattern_keys(&self) -> impl Iterator<Item = &str> {
        self.patterns.keys()
    }

    /// Every plain tincture name that has a color entry.
    pub fn color_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.colors.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        let catalog = TinctureCatalog::standard();
        assert_eq!(catalog.classify("or"), Some(TinctureCategory::Metals));
        assert_eq!(catalog.classify("gules"), Some(TinctureCategory::Colours));
        assert_eq!(catalog.classify("murrey"), Some(TinctureCategory::Stains));
        assert_eq!(catalog.classify("vair"), Some(TinctureCategory::Patterns));
        assert_eq!(catalog.classify("plaid"), None);
    }

    #[test]
    fn test_every_base_tincture_has_a_color() {
        let catalog = TinctureCatalog::standard();
        for table in [
            catalog.category_table(TinctureCategory::Metals),
            catalog.category_table(TinctureCategory::Colours),
            catalog.category_table(TinctureCategory::Stains),
        ] {
            for name in table.keys() {
                assert!(catalog.color(name).is_some(), "no color for {name}");
            }
        }
    }

    #[test]
    fn test_charge_element_never_draws_patterns() {
        use rand::SeedableRng;
        let catalog = TinctureCatalog::standard();
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(9);
        for _ in 0..2000 {
            assert_ne!(catalog.element_weights(Element::Charge).pick(&mut rng), "patterns");
        }
    }
}
