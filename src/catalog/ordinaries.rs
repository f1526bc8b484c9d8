//! Ordinary selection weights and placement tables.
//!
//! `lined` ordinaries can carry a decorative edge line; `straight` ones
//! cannot. Each ordinary optionally declares weighted anchor sets for
//! charges placed on it (`positions_on`) and beside it (`positions_off`).

use crate::rng::WeightedTable;

/// Placement tables one ordinary declares for accompanying charges.
#[derive(Debug, Default)]
pub struct OrdinaryInfo {
    pub positions_on: Option<WeightedTable>,
    pub positions_off: Option<WeightedTable>,
}

/// Static ordinary catalog.
#[derive(Debug)]
pub struct OrdinaryCatalog {
    lined: WeightedTable,
    straight: WeightedTable,
    data: Vec<(&'static str, OrdinaryInfo)>,
}

impl OrdinaryCatalog {
    pub(crate) fn standard() -> Self {
        let on = |entries: &[(&'static str, f64)]| Some(WeightedTable::new(entries.to_vec()));
        let data = vec![
            (
                "bar",
                OrdinaryInfo {
                    positions_on: on(&[("defdefdef", 1.0)]),
                    positions_off: on(&[
                        ("abc", 2.0),
                        ("abcgzi", 1.0),
                        ("jlh", 5.0),
                        ("bgi", 2.0),
                        ("ach", 1.0),
                    ]),
                },
            ),
            (
                "bend",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 2.0), ("jo", 1.0), ("joe", 1.0)]),
                    positions_off: on(&[("ccg", 2.0), ("ccc", 1.0)]),
                },
            ),
            (
                "bendSinister",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 1.0), ("lm", 1.0), ("lem", 4.0)]),
                    positions_off: on(&[("aai", 2.0), ("aaa", 1.0)]),
                },
            ),
            (
                "bendlet",
                OrdinaryInfo {
                    positions_on: on(&[("joejoejoe", 1.0)]),
                    positions_off: on(&[("ccg", 2.0), ("ccc", 1.0)]),
                },
            ),
            (
                "bendletSinister",
                OrdinaryInfo {
                    positions_on: on(&[("lemlemlem", 1.0)]),
                    positions_off: on(&[("aai", 2.0), ("aaa", 1.0)]),
                },
            ),
            (
                "bordure",
                OrdinaryInfo {
                    positions_on: on(&[("ABCDEFGHIJKL", 1.0)]),
                    positions_off: on(&[
                        ("e", 4.0),
                        ("jleh", 2.0),
                        ("kenken", 1.0),
                        ("peqpeq", 1.0),
                    ]),
                },
            ),
            (
                "canton",
                OrdinaryInfo {
                    positions_on: on(&[("yyyy", 1.0)]),
                    positions_off: on(&[
                        ("e", 5.0),
                        ("beh", 1.0),
                        ("def", 1.0),
                        ("bdefh", 1.0),
                        ("kn", 1.0),
                    ]),
                },
            ),
            (
                "chevron",
                OrdinaryInfo {
                    positions_on: on(&[("ach", 3.0), ("hhh", 1.0)]),
                    positions_off: None,
                },
            ),
            (
                "chevronReversed",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[("bbb", 1.0)]),
                },
            ),
            (
                "chief",
                OrdinaryInfo {
                    positions_on: on(&[("abc", 5.0), ("bbb", 1.0)]),
                    positions_off: on(&[("emo", 2.0), ("emoz", 1.0), ("ez", 2.0)]),
                },
            ),
            (
                "cross",
                OrdinaryInfo {
                    positions_on: on(&[("eeee", 1.0), ("behdfbehdf", 3.0), ("behbehbeh", 2.0)]),
                    positions_off: on(&[("acgi", 1.0)]),
                },
            ),
            (
                "crossParted",
                OrdinaryInfo {
                    positions_on: on(&[("e", 5.0), ("ee", 1.0)]),
                    positions_off: None,
                },
            ),
            (
                "fess",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 1.0), ("def", 3.0)]),
                    positions_off: on(&[("abc", 3.0), ("abcz", 1.0)]),
                },
            ),
            (
                "fessCotissed",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 1.0), ("def", 3.0)]),
                    positions_off: None,
                },
            ),
            (
                "fessDoubleCotissed",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 1.0), ("defdef", 3.0)]),
                    positions_off: None,
                },
            ),
            (
                "flaunches",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[("e", 3.0), ("kn", 1.0), ("beh", 3.0)]),
                },
            ),
            (
                "gemelle",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[("abc", 1.0)]),
                },
            ),
            (
                "gyron",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[("bh", 1.0)]),
                },
            ),
            (
                "label",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[
                        ("defgzi", 2.0),
                        ("eh", 3.0),
                        ("defdefhmo", 1.0),
                        ("egiegi", 1.0),
                        ("pqn", 5.0),
                    ]),
                },
            ),
            (
                "mount",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[("e", 5.0), ("def", 1.0), ("bdf", 3.0)]),
                },
            ),
            (
                "orle",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[
                        ("e", 4.0),
                        ("jleh", 1.0),
                        ("kenken", 1.0),
                        ("peqpeq", 1.0),
                    ]),
                },
            ),
            (
                "pale",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 12.0), ("beh", 10.0), ("kn", 3.0), ("bb", 1.0)]),
                    positions_off: on(&[("yyy", 1.0)]),
                },
            ),
            (
                "pall",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 1.0), ("jleh", 5.0), ("jlhh", 3.0)]),
                    positions_off: on(&[("BCKFEILGJbdmfo", 1.0)]),
                },
            ),
            (
                "pallReversed",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 1.0), ("bemo", 5.0)]),
                    positions_off: on(&[("aczac", 1.0)]),
                },
            ),
            (
                "pile",
                OrdinaryInfo {
                    positions_on: on(&[("bbb", 1.0)]),
                    positions_off: on(&[("acdfgi", 1.0), ("acac", 1.0)]),
                },
            ),
            (
                "pileInBend",
                OrdinaryInfo {
                    positions_on: on(&[("eeee", 1.0), ("eeoo", 1.0)]),
                    positions_off: on(&[("cg", 1.0)]),
                },
            ),
            (
                "pileInBendSinister",
                OrdinaryInfo {
                    positions_on: on(&[("eeee", 1.0), ("eemm", 1.0)]),
                    positions_off: on(&[("ai", 1.0)]),
                },
            ),
            (
                "point",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[
                        ("e", 2.0),
                        ("def", 1.0),
                        ("bdf", 3.0),
                        ("acbdef", 1.0),
                    ]),
                },
            ),
            (
                "quarter",
                OrdinaryInfo {
                    positions_on: on(&[("jjj", 1.0)]),
                    positions_off: on(&[("e", 1.0)]),
                },
            ),
            (
                "saltire",
                OrdinaryInfo {
                    positions_on: on(&[("ee", 5.0), ("jlemo", 1.0)]),
                    positions_off: None,
                },
            ),
            (
                "saltireParted",
                OrdinaryInfo {
                    positions_on: on(&[("e", 5.0), ("ee", 1.0)]),
                    positions_off: None,
                },
            ),
            (
                "terrace",
                OrdinaryInfo {
                    positions_on: None,
                    positions_off: on(&[("e", 5.0), ("def", 1.0), ("bdf", 3.0)]),
                },
            ),
        ];

        Self {
            lined: WeightedTable::new([
                ("pale", 7.0),
                ("fess", 5.0),
                ("bend", 3.0),
                ("bendSinister", 2.0),
                ("chief", 5.0),
                ("bar", 2.0),
                ("gemelle", 1.0),
                ("fessCotissed", 1.0),
                ("fessDoubleCotissed", 1.0),
                ("bendlet", 2.0),
                ("bendletSinister", 1.0),
                ("terrace", 3.0),
                ("cross", 6.0),
                ("crossParted", 1.0),
                ("saltire", 2.0),
                ("saltireParted", 1.0),
            ]),
            straight: WeightedTable::new([
                ("bordure", 8.0),
                ("orle", 4.0),
                ("mount", 1.0),
                ("point", 2.0),
                ("flaunches", 1.0),
                ("gore", 1.0),
                ("gyron", 1.0),
                ("quarter", 1.0),
                ("canton", 2.0),
                ("pall", 3.0),
                ("pallReversed", 2.0),
                ("chevron", 4.0),
                ("chevronReversed", 3.0),
                ("pile", 2.0),
                ("pileInBend", 2.0),
                ("pileInBendSinister", 1.0),
                ("piles", 1.0),
                ("pilesInPoint", 2.0),
                ("label", 1.0),
            ]),
            data,
        }
    }

    /// Ordinaries eligible for a decorative edge line.
    pub fn lined(&self) -> &WeightedTable {
        &self.lined
    }

    /// Plain ordinaries.
    pub fn straight(&self) -> &WeightedTable {
        &self.straight
    }

    /// Placement tables for an ordinary kind.
    pub fn info(&self, kind: &str) -> Option<&OrdinaryInfo> {
        self.data
            .iter()
            .find(|(key, _)| *key == kind)
            .map(|(_, info)| info)
    }

    /// Every drawable ordinary kind.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.lined.keys().chain(self.straight.keys())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_kind_listed_twice() {
        let catalog = OrdinaryCatalog::standard();
        let kinds: Vec<&str> = catalog.kinds().collect();
        let mut deduped = kinds.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), kinds.len());
    }

    #[test]
    fn test_placement_tables_belong_to_listed_kinds() {
        let catalog = OrdinaryCatalog::standard();
        let kinds: Vec<&str> = catalog.kinds().collect();
        for (kind, _) in &catalog.data {
            assert!(kinds.contains(kind), "placement data for unlisted {kind}");
        }
    }

    #[test]
    fn test_bordure_declares_the_full_ring() {
        let catalog = OrdinaryCatalog::standard();
        let info = catalog.info("bordure").unwrap();
        assert!(info.positions_on.as_ref().unwrap().contains("ABCDEFGHIJKL"));
    }
}
