//! Division selection weights and edge-line tables.

use crate::rng::WeightedTable;

/// Static division catalog.
#[derive(Debug)]
pub struct DivisionCatalog {
    variants: WeightedTable,
    lines: Vec<(&'static str, WeightedTable)>,
    ordinary_lines: WeightedTable,
}

impl DivisionCatalog {
    pub(crate) fn standard() -> Self {
        // Divisions with a lined template variant get a line table; the
        // rest always render with a straight boundary.
        let division_line = || {
            WeightedTable::new([
                ("straight", 20.0),
                ("wavy", 5.0),
                ("engrailed", 2.0),
                ("invected", 1.0),
                ("indented", 2.0),
                ("dancetty", 1.0),
                ("embattled", 2.0),
                ("nebuly", 1.0),
                ("dovetailed", 1.0),
                ("raguly", 1.0),
                ("urdy", 1.0),
            ])
        };
        Self {
            variants: WeightedTable::new([
                ("perPale", 5.0),
                ("perFess", 5.0),
                ("perBend", 2.0),
                ("perBendSinister", 1.0),
                ("perChevron", 1.0),
                ("perChevronReversed", 1.0),
                ("perCross", 5.0),
                ("perPile", 1.0),
                ("perSaltire", 1.0),
                ("gyronny", 1.0),
                ("chevronny", 0.3),
            ]),
            lines: vec![
                ("perPale", division_line()),
                ("perFess", division_line()),
                ("perBend", division_line()),
                ("perBendSinister", division_line()),
                ("perChevron", division_line()),
                ("perChevronReversed", division_line()),
                ("perCross", division_line()),
                ("perPile", division_line()),
            ],
            ordinary_lines: WeightedTable::new([
                ("straight", 10.0),
                ("wavy", 3.0),
                ("engrailed", 2.0),
                ("invected", 1.0),
                ("indented", 2.0),
                ("dancetty", 1.0),
                ("embattled", 2.0),
                ("raguly", 1.0),
                ("dovetailed", 1.0),
                ("nebuly", 1.0),
            ]),
        }
    }

    /// Division kind weights.
    pub fn variants(&self) -> &WeightedTable {
        &self.variants
    }

    /// Edge-line table for a division kind, when it supports one.
    pub fn line_weights(&self, kind: &str) -> Option<&WeightedTable> {
        self.lines
            .iter()
            .find(|(key, _)| *key == kind)
            .map(|(_, table)| table)
    }

    /// Edge-line table shared by lined ordinaries.
    pub fn ordinary_lines(&self) -> &WeightedTable {
        &self.ordinary_lines
    }

    /// Every drawable division kind.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.variants.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_tables_only_for_listed_kinds() {
        let catalog = DivisionCatalog::standard();
        for (kind, _) in &catalog.lines {
            assert!(catalog.variants.contains(kind), "line table for unlisted {kind}");
        }
    }

    #[test]
    fn test_straight_always_available() {
        let catalog = DivisionCatalog::standard();
        for (kind, table) in &catalog.lines {
            assert!(table.contains("straight"), "{kind} line table misses straight");
        }
        assert!(catalog.ordinary_lines().contains("straight"));
    }
}
