//! Random draw primitives.
//!
//! Every decision the composer makes flows through two primitives: a
//! Bernoulli gate and a weighted choice over a key -> weight table. Both
//! draw from an injected [`rand::Rng`], so composition is deterministic
//! and replayable given a seeded generator (`ChaCha8Rng` in the CLI and
//! tests).

use rand::Rng;

/// Return `true` with probability `p`.
///
/// Values outside [0, 1] are safe: `p <= 0` always returns false and
/// `p >= 1` always returns true. Inherited probabilities like
/// `kinship - 0.1` may go negative, so this must never panic.
pub fn gate<R: Rng + ?Sized>(rng: &mut R, p: f64) -> bool {
    rng.gen::<f64>() < p
}

/// An ordered key -> weight table for weighted choice.
///
/// Entries keep their declaration order so that a fixed seed always
/// replays the same sequence of picks. Zero-weight entries stay listed
/// (useful for catalog completeness checks) but are never drawn.
#[derive(Debug, Clone)]
pub struct WeightedTable {
    entries: Vec<(String, f64)>,
    total: f64,
}

impl WeightedTable {
    /// Build a table from `(key, weight)` pairs.
    pub fn new<K: Into<String>>(entries: impl IntoIterator<Item = (K, f64)>) -> Self {
        let entries: Vec<(String, f64)> = entries
            .into_iter()
            .map(|(k, w)| (k.into(), w.max(0.0)))
            .collect();
        debug_assert!(!entries.is_empty(), "weighted table must not be empty");
        let total = entries.iter().map(|(_, w)| w).sum();
        Self { entries, total }
    }

    /// Draw a key by weight.
    ///
    /// Always yields a key: if every weight is zero the first entry is
    /// returned, and accumulated rounding falls through to the last.
    pub fn pick<'a, R: Rng + ?Sized>(&'a self, rng: &mut R) -> &'a str {
        if self.total <= 0.0 {
            return &self.entries[0].0;
        }
        let mut x = rng.gen::<f64>() * self.total;
        for (key, weight) in &self.entries {
            if x < *weight {
                return key;
            }
            x -= weight;
        }
        &self.entries[self.entries.len() - 1].0
    }

    /// Check whether a key is listed.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate over the listed keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Number of listed keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_gate_extremes() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..100 {
            assert!(!gate(&mut rng, 0.0));
            assert!(!gate(&mut rng, -0.1));
            assert!(gate(&mut rng, 1.0));
        }
    }

    #[test]
    fn test_gate_distribution() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let hits = (0..10_000).filter(|_| gate(&mut rng, 0.3)).count();
        let pct = hits as f64 / 10_000.0;
        assert!((0.25..0.35).contains(&pct), "gate(0.3) hit rate {pct}");
    }

    #[test]
    fn test_pick_respects_weights() {
        let table = WeightedTable::new([("common", 9.0), ("rare", 1.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let rare = (0..10_000).filter(|_| table.pick(&mut rng) == "rare").count();
        let pct = rare as f64 / 10_000.0;
        assert!((0.07..0.13).contains(&pct), "rare hit rate {pct}");
    }

    #[test]
    fn test_pick_skips_zero_weight() {
        let table = WeightedTable::new([("never", 0.0), ("always", 1.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        for _ in 0..1000 {
            assert_eq!(table.pick(&mut rng), "always");
        }
    }

    #[test]
    fn test_pick_all_zero_falls_back_to_first() {
        let table = WeightedTable::new([("a", 0.0), ("b", 0.0)]);
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        assert_eq!(table.pick(&mut rng), "a");
    }

    #[test]
    fn test_pick_is_replayable() {
        let table = WeightedTable::new([("a", 1.0), ("b", 2.0), ("c", 3.0)]);
        let mut first = ChaCha8Rng::seed_from_u64(6);
        let mut second = ChaCha8Rng::seed_from_u64(6);
        for _ in 0..500 {
            assert_eq!(table.pick(&mut first), table.pick(&mut second));
        }
    }

    #[test]
    fn test_keys_keep_declaration_order() {
        let table = WeightedTable::new([("z", 1.0), ("a", 1.0), ("m", 1.0)]);
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }
}
