//! Charge selection tables and per-charge metadata.
//!
//! Charges are drawn in two steps: a weighted group pick (`types`,
//! `single`, or `semy` depending on context), then a weighted pick inside
//! the group. `inescutcheon` is special: it is both a group key and the
//! charge itself. The `conventional` group doubles as a direct charge
//! table for the bordure-ring swap.

use std::collections::BTreeMap;

use crate::rng::WeightedTable;

/// Per-charge metadata.
#[derive(Debug, Clone, Default)]
pub struct ChargeInfo {
    /// Declared color count (1-3); drives t2/t3 presence.
    pub colors: u8,

    /// Whether horizontal mirroring is meaningful for this charge.
    pub sinister: bool,

    /// Whether vertical mirroring is meaningful for this charge.
    pub reversed: bool,

    /// Preferred anchor sets, when the charge dictates its placement.
    pub positions: Option<WeightedTable>,

    /// Fixed natural tincture that overrides low-contrast draws.
    pub natural: Option<&'static str>,
}

/// Static charge catalog.
#[derive(Debug)]
pub struct ChargeCatalog {
    types: WeightedTable,
    single: WeightedTable,
    semy: WeightedTable,
    groups: Vec<(&'static str, WeightedTable)>,
    data: BTreeMap<&'static str, ChargeInfo>,
    type_map: Vec<(&'static str, WeightedTable)>,
}

impl ChargeCatalog {
    pub(crate) fn standard() -> Self {
        let groups = vec![
            (
                "conventional",
                WeightedTable::new([
                    ("roundel", 8.0),
                    ("mullet", 7.0),
                    ("lozenge", 5.0),
                    ("crescent", 5.0),
                    ("annulet", 4.0),
                    ("mascle", 3.0),
                    ("billet", 2.0),
                    ("heart", 2.0),
                    ("sun", 3.0),
                ]),
            ),
            (
                "crosses",
                WeightedTable::new([
                    ("crossHummetty", 10.0),
                    ("crossPattee", 5.0),
                    ("crossMoline", 3.0),
                    ("crossPotent", 2.0),
                    ("crossFlory", 2.0),
                    ("saltireCouped", 2.0),
                ]),
            ),
            (
                "beasts",
                WeightedTable::new([
                    ("lionRampant", 10.0),
                    ("lionPassant", 5.0),
                    ("griffinRampant", 3.0),
                    ("boarRampant", 2.0),
                    ("bearRampant", 2.0),
                    ("wolfPassant", 2.0),
                    ("stagLodged", 1.0),
                    ("dragonPassant", 1.0),
                ]),
            ),
            (
                "birds",
                WeightedTable::new([
                    ("eagle", 8.0),
                    ("martlet", 3.0),
                    ("raven", 2.0),
                    ("falcon", 2.0),
                    ("swan", 1.0),
                    ("cock", 1.0),
                ]),
            ),
            (
                "plants",
                WeightedTable::new([
                    ("fleurDeLis", 6.0),
                    ("rose", 4.0),
                    ("trefoil", 2.0),
                    ("oak", 2.0),
                    ("garb", 2.0),
                    ("thistle", 1.0),
                ]),
            ),
            (
                "artifacts",
                WeightedTable::new([
                    ("sword", 5.0),
                    ("crown", 4.0),
                    ("castle", 3.0),
                    ("tower", 3.0),
                    ("axe", 2.0),
                    ("arrow", 2.0),
                    ("key", 2.0),
                    ("anchor", 2.0),
                    ("bugleHorn", 1.0),
                    ("ship", 1.0),
                ]),
            ),
        ];

        let mut data: BTreeMap<&'static str, ChargeInfo> = BTreeMap::new();
        let mut put = |kind: &'static str, info: ChargeInfo| {
            data.insert(kind, info);
        };
        put("mullet", ChargeInfo { reversed: true, ..one() });
        put("crescent", ChargeInfo { reversed: true, ..one() });
        put("heart", ChargeInfo { reversed: true, ..one() });
        put(
            "sun",
            ChargeInfo {
                positions: Some(WeightedTable::new([("e", 1.0)])),
                ..one()
            },
        );
        put("lionRampant", ChargeInfo { colors: 3, sinister: true, ..one() });
        put("lionPassant", ChargeInfo { colors: 3, sinister: true, ..one() });
        put("griffinRampant", ChargeInfo { colors: 3, sinister: true, ..one() });
        put(
            "boarRampant",
            ChargeInfo {
                colors: 3,
                sinister: true,
                positions: Some(WeightedTable::new([
                    ("e", 12.0),
                    ("beh", 1.0),
                    ("kn", 1.0),
                    ("jln", 2.0),
                ])),
                ..one()
            },
        );
        put("bearRampant", ChargeInfo { colors: 3, sinister: true, ..one() });
        put("wolfPassant", ChargeInfo { colors: 3, sinister: true, ..one() });
        put("stagLodged", ChargeInfo { colors: 2, sinister: true, ..one() });
        put(
            "dragonPassant",
            ChargeInfo { colors: 3, sinister: true, reversed: true, ..one() },
        );
        put("eagle", ChargeInfo { colors: 3, sinister: true, ..one() });
        put("martlet", ChargeInfo { sinister: true, ..one() });
        put("raven", ChargeInfo { sinister: true, natural: Some("sable"), ..one() });
        put("falcon", ChargeInfo { colors: 2, sinister: true, ..one() });
        put(
            "swan",
            ChargeInfo { colors: 2, sinister: true, natural: Some("argent"), ..one() },
        );
        put("cock", ChargeInfo { colors: 3, sinister: true, ..one() });
        put("rose", ChargeInfo { colors: 3, ..one() });
        put("oak", ChargeInfo { colors: 2, ..one() });
        put("garb", ChargeInfo { colors: 2, ..one() });
        put("sword", ChargeInfo { colors: 2, reversed: true, ..one() });
        put("axe", ChargeInfo { colors: 2, sinister: true, ..one() });
        put("arrow", ChargeInfo { colors: 3, reversed: true, ..one() });
        put("key", ChargeInfo { sinister: true, reversed: true, ..one() });
        put("anchor", ChargeInfo { reversed: true, ..one() });
        put("bugleHorn", ChargeInfo { colors: 2, reversed: true, ..one() });
        put("ship", ChargeInfo { colors: 2, sinister: true, ..one() });
        put("crown", ChargeInfo { colors: 2, ..one() });
        put(
            "castle",
            ChargeInfo {
                colors: 2,
                positions: Some(WeightedTable::new([("e", 4.0), ("kn", 1.0)])),
                ..one()
            },
        );
        put("tower", ChargeInfo { colors: 2, ..one() });

        Self {
            types: WeightedTable::new([
                ("conventional", 12.0),
                ("crosses", 5.0),
                ("beasts", 10.0),
                ("birds", 4.0),
                ("plants", 4.0),
                ("artifacts", 6.0),
                ("inescutcheon", 1.0),
            ]),
            single: WeightedTable::new([
                ("conventional", 12.0),
                ("crosses", 5.0),
                ("plants", 3.0),
                ("artifacts", 4.0),
                ("inescutcheon", 1.0),
            ]),
            semy: WeightedTable::new([
                ("conventional", 8.0),
                ("crosses", 3.0),
                ("plants", 3.0),
            ]),
            groups,
            data,
            type_map: vec![
                (
                    "City",
                    WeightedTable::new([("castle", 5.0), ("tower", 4.0), ("key", 2.0)]),
                ),
                (
                    "Naval",
                    WeightedTable::new([("anchor", 5.0), ("ship", 4.0)]),
                ),
                (
                    "Military",
                    WeightedTable::new([("sword", 5.0), ("axe", 3.0), ("arrow", 2.0)]),
                ),
                (
                    "Religious",
                    WeightedTable::new([("crossHummetty", 6.0), ("crossPattee", 2.0), ("crossFlory", 1.0)]),
                ),
                (
                    "Hunting",
                    WeightedTable::new([("bugleHorn", 4.0), ("stagLodged", 3.0), ("arrow", 2.0)]),
                ),
            ],
        }
    }

    /// Broad group table used when an ordinary or division is present.
    pub fn types(&self) -> &WeightedTable {
        &self.types
    }

    /// Narrower table of groups safe for a lone central charge.
    pub fn single(&self) -> &WeightedTable {
        &self.single
    }

    /// Groups eligible for binding into a semy pattern.
    pub fn semy(&self) -> &WeightedTable {
        &self.semy
    }

    /// Get a charge group table by name.
    pub fn group(&self, name: &str) -> Option<&WeightedTable> {
        self.groups
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, table)| table)
    }

    /// The conventional charge table (direct charge picks).
    pub fn conventional(&self) -> &WeightedTable {
        // The group list always leads with "conventional".
        self.group("conventional").unwrap_or(&self.groups[0].1)
    }

    /// Whether a charge kind belongs to the conventional group.
    pub fn is_conventional(&self, kind: &str) -> bool {
        self.conventional().contains(kind)
    }

    /// Metadata for a charge kind; absent entries read as one-color,
    /// orientation-fixed, no placement preference.
    pub fn info(&self, kind: &str) -> ChargeInfo {
        self.data.get(kind).cloned().unwrap_or_else(one)
    }

    /// Declared color count for a charge kind.
    pub fn colors(&self, kind: &str) -> u8 {
        self.data.get(kind).map_or(1, |info| info.colors)
    }

    /// Thematic hint table, if the hint is mapped.
    pub fn for_hint(&self, hint: &str) -> Option<&WeightedTable> {
        self.type_map
            .iter()
            .find(|(key, _)| *key == hint)
            .map(|(_, table)| table)
    }

    /// Every charge kind listed in any group.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flat_map(|(_, table)| table.keys())
            .chain(std::iter::once("inescutcheon"))
    }

    /// Group names in declaration order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(name, _)| *name)
    }

    /// Thematic hint keys.
    pub fn hints(&self) -> impl Iterator<Item = &str> {
        self.type_map.iter().map(|(name, _)| *name)
    }
}

fn one() -> ChargeInfo {
    ChargeInfo { colors: 1, ..ChargeInfo::default() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_tables_resolve() {
        let catalog = ChargeCatalog::standard();
        for set in [catalog.types(), catalog.single(), catalog.semy()] {
            for key in set.keys() {
                assert!(
                    key == "inescutcheon" || catalog.group(key).is_some(),
                    "group {key} not defined"
                );
            }
        }
    }

    #[test]
    fn test_metadata_covers_listed_kinds_only() {
        let catalog = ChargeCatalog::standard();
        let kinds: Vec<&str> = catalog.kinds().collect();
        for kind in catalog.data.keys() {
            assert!(kinds.contains(kind), "metadata for unlisted charge {kind}");
        }
    }

    #[test]
    fn test_color_counts_in_range() {
        let catalog = ChargeCatalog::standard();
        for kind in catalog.kinds() {
            let colors = catalog.colors(kind);
            assert!((1..=3).contains(&colors), "{kind} declares {colors} colors");
        }
    }

    #[test]
    fn test_conventional_membership() {
        let catalog = ChargeCatalog::standard();
        assert!(catalog.is_conventional("roundel"));
        assert!(!catalog.is_conventional("lionRampant"));
    }

    #[test]
    fn test_hint_tables_list_known_kinds() {
        let catalog = ChargeCatalog::standard();
        let kinds: Vec<&str> = catalog.kinds().collect();
        for hint in catalog.hints().collect::<Vec<_>>() {
            for kind in catalog.for_hint(hint).unwrap().keys() {
                assert!(kinds.contains(&kind), "hint {hint} lists unknown {kind}");
            }
        }
    }
}
