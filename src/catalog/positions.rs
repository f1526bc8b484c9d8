//! Anchor position tables and the position-derived size scale.
//!
//! Anchor codes are single characters; a code string names a set of
//! anchors occupied simultaneously. `e` is the honor point,
//! `ABCDEFGHIJKL` the full bordure ring, `y` the canton seat and `z` the
//! base point.

use crate::rng::WeightedTable;

/// Anchor codes covered by a canton's footprint; charges lose these
/// anchors when a canton is appended.
pub const CANTON_STRIP: &str = "ajy";

/// The full bordure-ring anchor set.
pub const BORDURE_RING: &str = "ABCDEFGHIJKL";

/// The honor-point anchor.
pub const HONOR_POINT: &str = "e";

/// Static position catalog.
#[derive(Debug)]
pub struct PositionCatalog {
    conventional: WeightedTable,
    complex: WeightedTable,
    divisions: Vec<(&'static str, WeightedTable)>,
}

impl PositionCatalog {
    pub(crate) fn standard() -> Self {
        Self {
            conventional: WeightedTable::new([
                ("e", 20.0),
                ("beh", 3.0),
                ("kn", 3.0),
                ("abcpqh", 2.0),
                ("behdf", 1.0),
                ("acegi", 1.0),
                ("jlmo", 1.0),
            ]),
            complex: WeightedTable::new([
                ("e", 40.0),
                ("beh", 1.0),
                ("kn", 1.0),
                ("jleh", 1.0),
            ]),
            divisions: vec![
                (
                    "perPale",
                    WeightedTable::new([("e", 3.0), ("pq", 5.0), ("p", 1.0), ("q", 1.0)]),
                ),
                (
                    "perFess",
                    WeightedTable::new([("e", 3.0), ("kn", 5.0), ("k", 1.0), ("n", 1.0)]),
                ),
                ("perBend", WeightedTable::new([("e", 2.0), ("lm", 5.0)])),
                ("perBendSinister", WeightedTable::new([("e", 2.0), ("jo", 5.0)])),
                (
                    "perChevron",
                    WeightedTable::new([("bz", 3.0), ("e", 2.0), ("b", 1.0)]),
                ),
                (
                    "perChevronReversed",
                    WeightedTable::new([("kz", 2.0), ("e", 2.0), ("z", 1.0)]),
                ),
                (
                    "perCross",
                    WeightedTable::new([("jlmo", 5.0), ("e", 2.0), ("jm", 1.0)]),
                ),
                (
                    "perSaltire",
                    WeightedTable::new([("bdfh", 3.0), ("e", 3.0), ("bh", 1.0)]),
                ),
                ("perPile", WeightedTable::new([("e", 3.0), ("abc", 1.0)])),
            ],
        }
    }

    /// Standard anchor sets for conventional (simple, tileable) charges.
    pub fn conventional(&self) -> &WeightedTable {
        &self.conventional
    }

    /// Anchor sets for complex charges, mostly the honor point.
    pub fn complex(&self) -> &WeightedTable {
        &self.complex
    }

    /// Standard charge anchors for a division kind.
    pub fn for_division(&self, kind: &str) -> Option<&WeightedTable> {
        self.divisions
            .iter()
            .find(|(key, _)| *key == kind)
            .map(|(_, table)| table)
    }

    /// The two canonical half anchors of a two-axis division.
    pub fn division_halves(kind: &str) -> Option<[&'static str; 2]> {
        match kind {
            "perPale" => Some(["p", "q"]),
            "perFess" => Some(["k", "n"]),
            "perBend" => Some(["l", "m"]),
            "perBendSinister" => Some(["j", "o"]),
            _ => None,
        }
    }

    /// The four canonical quadrant anchors of a four-axis division.
    pub fn division_quarters(kind: &str) -> Option<[&'static str; 4]> {
        match kind {
            "perCross" => Some(["j", "l", "m", "o"]),
            "perSaltire" => Some(["b", "d", "f", "h"]),
            _ => None,
        }
    }
}

/// Position-derived charge scale.
///
/// Center anchors are largest, the bordure ring smallest; multi-anchor
/// sets interpolate by cardinality, with explicit overrides for a few
/// layouts and a shrink for quadrant anchors under a per-cross division.
pub fn size_for(anchors: &str, ordinary: Option<&str>, division: Option<&str>) -> f64 {
    if anchors == "e" && matches!(ordinary, Some("bordure") | Some("orle")) {
        return 1.1;
    }
    if anchors == "e" {
        return 1.5;
    }
    if anchors == "jln" || anchors == "jlh" {
        return 0.7;
    }
    if anchors == "abcpqh" || anchors == "ez" || anchors == "be" {
        return 0.5;
    }
    if matches!(
        anchors,
        "a" | "b" | "c" | "d" | "f" | "g" | "h" | "i" | "bh" | "df"
    ) {
        return 0.5;
    }
    if matches!(anchors, "j" | "l" | "m" | "o" | "jlmo") && division == Some("perCross") {
        return 0.6;
    }
    match anchors.len() {
        len if len > 10 => 0.18,
        len if len > 7 => 0.3,
        len if len > 4 => 0.4,
        len if len > 2 => 0.5,
        _ => 0.7,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honor_point_is_largest() {
        assert_eq!(size_for("e", None, None), 1.5);
        assert_eq!(size_for("e", Some("bordure"), None), 1.1);
        assert_eq!(size_for("e", Some("orle"), None), 1.1);
        assert_eq!(size_for("e", Some("fess"), None), 1.5);
    }

    #[test]
    fn test_ring_is_smallest() {
        assert_eq!(size_for(BORDURE_RING, None, None), 0.18);
    }

    #[test]
    fn test_cardinality_interpolation() {
        assert_eq!(size_for("pq", None, None), 0.7);
        assert_eq!(size_for("abc", None, None), 0.5);
        assert_eq!(size_for("bdefh", None, None), 0.4);
        assert_eq!(size_for("behdfbeh", None, None), 0.3);
    }

    #[test]
    fn test_per_cross_quadrants_shrink() {
        assert_eq!(size_for("jlmo", None, Some("perCross")), 0.6);
        assert_eq!(size_for("jlmo", None, Some("perSaltire")), 0.5);
    }

    #[test]
    fn test_half_and_quarter_anchors() {
        assert_eq!(PositionCatalog::division_halves("perPale"), Some(["p", "q"]));
        assert_eq!(PositionCatalog::division_halves("perBend"), Some(["l", "m"]));
        assert_eq!(PositionCatalog::division_halves("gyronny"), None);
        assert_eq!(
            PositionCatalog::division_quarters("perSaltire"),
            Some(["b", "d", "f", "h"])
        );
        assert_eq!(PositionCatalog::division_quarters("perPale"), None);
    }
}
