//! Shield shapes: outline paths, anchor coordinates, scales, view boxes.
//!
//! All geometry lives on a 200x200 canvas. Every shape carries the full
//! anchor coordinate table; the renderer filters a charge's anchor set
//! against the table of the active shape.

use std::collections::BTreeMap;

use rand::Rng;

use crate::rng::WeightedTable;

/// The canonical baseline shape substituted for unknown keys.
pub const DEFAULT_SHAPE: &str = "heater";

/// Geometry of one shield shape.
#[derive(Debug)]
pub struct ShieldShape {
    /// Outline path on the 200x200 canvas.
    pub path: &'static str,

    /// Anchor code -> canvas coordinate.
    pub positions: BTreeMap<char, [f64; 2]>,

    /// Shape-specific charge scale multiplier.
    pub size: f64,

    /// SVG view box.
    pub view_box: &'static str,
}

/// Static shield catalog.
#[derive(Debug)]
pub struct ShieldCatalog {
    shapes: BTreeMap<&'static str, ShieldShape>,
    families: WeightedTable,
    family_tables: Vec<(&'static str, WeightedTable)>,
}

/// The shared anchor grid most shapes use unchanged.
///
/// Coordinates are offsets from the shield center: the charge transform
/// `translate(x - 100(s-1))` places a 200x200 artwork fragment's center
/// on the anchor, so `e` at the honor point is `[0, 0]`.
fn standard_grid() -> BTreeMap<char, [f64; 2]> {
    let mut grid = BTreeMap::new();
    let entries: [(char, [f64; 2]); 31] = [
        ('a', [-65.0, -50.0]),
        ('b', [0.0, -50.0]),
        ('c', [65.0, -50.0]),
        ('d', [-65.0, 0.0]),
        ('e', [0.0, 0.0]),
        ('f', [65.0, 0.0]),
        ('g', [-65.0, 50.0]),
        ('h', [0.0, 50.0]),
        ('i', [65.0, 50.0]),
        ('j', [-45.0, -40.0]),
        ('k', [0.0, -40.0]),
        ('l', [45.0, -40.0]),
        ('m', [-45.0, 40.0]),
        ('n', [0.0, 40.0]),
        ('o', [45.0, 40.0]),
        ('p', [-45.0, 0.0]),
        ('q', [45.0, 0.0]),
        ('y', [-60.0, -60.0]),
        ('z', [0.0, 80.0]),
        ('A', [0.0, -75.0]),
        ('B', [40.0, -75.0]),
        ('C', [70.0, -55.0]),
        ('D', [80.0, -15.0]),
        ('E', [70.0, 25.0]),
        ('F', [40.0, 60.0]),
        ('G', [0.0, 80.0]),
        ('H', [-40.0, 60.0]),
        ('I', [-70.0, 25.0]),
        ('J', [-80.0, -15.0]),
        ('K', [-70.0, -55.0]),
        ('L', [-40.0, -75.0]),
    ];
    grid.extend(entries);
    grid
}

impl ShieldCatalog {
    pub(crate) fn standard() -> Self {
        let mut shapes = BTreeMap::new();

        shapes.insert(
            "heater",
            ShieldShape {
                path: "M0,10 h200 v90 q0,55 -100,100 q-100,-45 -100,-100 z",
                positions: standard_grid(),
                size: 1.0,
                view_box: "0 10 200 200",
            },
        );
        shapes.insert(
            "spanish",
            ShieldShape {
                path: "M0,10 h200 v120 q0,60 -100,70 q-100,-10 -100,-70 z",
                positions: standard_grid(),
                size: 1.0,
                view_box: "0 10 200 200",
            },
        );
        shapes.insert(
            "french",
            ShieldShape {
                path: "M10,10 h180 v150 q0,40 -45,40 h-90 q-45,0 -45,-40 z",
                positions: standard_grid(),
                size: 0.95,
                view_box: "0 10 200 200",
            },
        );
        shapes.insert(
            "oldFrench",
            ShieldShape {
                path: "M0,10 h200 v130 q-10,70 -100,70 q-90,0 -100,-70 z",
                positions: standard_grid(),
                size: 1.0,
                view_box: "0 10 200 200",
            },
        );
        shapes.insert(
            "wedged",
            ShieldShape {
                path: "M0,10 h200 v95 l-100,105 -100,-105 z",
                positions: standard_grid(),
                size: 1.0,
                view_box: "0 10 200 200",
            },
        );
        shapes.insert(
            "round",
            ShieldShape {
                path: "M100,5 a95,95 0 1,0 0.0001,0 z",
                positions: {
                    // The circle cuts the corners off the grid; pull the
                    // outermost anchors inward.
                    let mut grid = standard_grid();
                    for (code, coord) in [
                        ('a', [-55.0, -45.0]),
                        ('c', [55.0, -45.0]),
                        ('g', [-55.0, 45.0]),
                        ('i', [55.0, 45.0]),
                        ('y', [-50.0, -50.0]),
                    ] {
                        grid.insert(code, coord);
                    }
                    grid
                },
                size: 1.1,
                view_box: "0 0 200 200",
            },
        );
        shapes.insert(
            "banner",
            ShieldShape {
                path: "M0,0 h200 v200 h-200 z",
                positions: standard_grid(),
                size: 1.2,
                view_box: "0 0 200 200",
            },
        );

        Self {
            shapes,
            families: WeightedTable::new([
                ("basic", 10.0),
                ("historical", 1.0),
                ("specific", 1.0),
                ("banner", 1.0),
                ("simple", 2.0),
            ]),
            family_tables: vec![
                (
                    "basic",
                    WeightedTable::new([("heater", 12.0), ("spanish", 6.0), ("french", 1.0)]),
                ),
                ("historical", WeightedTable::new([("oldFrench", 1.0)])),
                ("specific", WeightedTable::new([("wedged", 1.0)])),
                ("banner", WeightedTable::new([("banner", 1.0)])),
                ("simple", WeightedTable::new([("round", 1.0)])),
            ],
        }
    }

    /// Geometry for a shape key.
    pub fn get(&self, key: &str) -> Option<&ShieldShape> {
        self.shapes.get(key)
    }

    /// Geometry for a shape key, defaulting to the canonical baseline.
    pub fn get_or_default(&self, key: &str) -> &ShieldShape {
        self.shapes
            .get(key)
            .or_else(|| self.shapes.get(DEFAULT_SHAPE))
            .unwrap_or_else(|| {
                // The catalog is built with the default shape present.
                self.shapes
                    .values()
                    .next()
                    .expect("shield catalog is never empty")
            })
    }

    /// Draw a shape key: weighted family, then weighted shape within it.
    pub fn pick_shape<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let family = self.families.pick(rng);
        let table = self
            .family_tables
            .iter()
            .find(|(key, _)| *key == family)
            .map(|(_, table)| table);
        let shape = match table {
            Some(table) => table.pick(rng),
            None => return DEFAULT_SHAPE,
        };
        if self.shapes.contains_key(shape) {
            shape
        } else {
            DEFAULT_SHAPE
        }
    }

    /// All shape keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.shapes.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_default_shape_exists() {
        let catalog = ShieldCatalog::standard();
        assert!(catalog.get(DEFAULT_SHAPE).is_some());
        let shape = catalog.get_or_default("no-such-shape");
        assert_eq!(shape.path, catalog.get(DEFAULT_SHAPE).unwrap().path);
    }

    #[test]
    fn test_every_shape_has_core_anchors() {
        let catalog = ShieldCatalog::standard();
        for key in catalog.keys().collect::<Vec<_>>() {
            let shape = catalog.get(key).unwrap();
            for code in "abcdefghijklmnopqyzABCDEFGHIJKL".chars() {
                assert!(
                    shape.positions.contains_key(&code),
                    "{key} misses anchor {code}"
                );
            }
        }
    }

    #[test]
    fn test_family_tables_list_known_shapes() {
        let catalog = ShieldCatalog::standard();
        for (family, table) in &catalog.family_tables {
            for shape in table.keys() {
                assert!(catalog.get(shape).is_some(), "{family} lists unknown {shape}");
            }
        }
    }

    #[test]
    fn test_pick_shape_always_resolves() {
        let catalog = ShieldCatalog::standard();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..500 {
            let key = catalog.pick_shape(&mut rng);
            assert!(catalog.get(key).is_some());
        }
    }
}
