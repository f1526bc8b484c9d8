//! Tincture model.
//!
//! A tincture is either a plain name (`gules`, `argent`, ...) or a
//! composite pattern. Patterns travel between the composer and the
//! renderer as a single interchange string:
//!
//! ```text
//! <pattern>-<t1>-<t2>[-<size>]      e.g. vair-azure-argent-small
//! semy_of_<charge>-<t1>-<t2>        semy binds a charge kind
//! ```
//!
//! The enum is the resolved form of that string: classification happens
//! once when the tincture is drawn, not by repeated string probing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The four tincture categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TinctureCategory {
    Metals,
    Colours,
    Stains,
    Patterns,
}

impl fmt::Display for TinctureCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TinctureCategory::Metals => write!(f, "metals"),
            TinctureCategory::Colours => write!(f, "colours"),
            TinctureCategory::Stains => write!(f, "stains"),
            TinctureCategory::Patterns => write!(f, "patterns"),
        }
    }
}

/// Size suffix a pattern may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatternSize {
    #[default]
    Normal,
    Small,
    Smaller,
    Smallest,
    Big,
}

impl PatternSize {
    /// The interchange-string suffix, without the leading dash.
    pub fn suffix(self) -> Option<&'static str> {
        match self {
            PatternSize::Normal => None,
            PatternSize::Small => Some("small"),
            PatternSize::Smaller => Some("smaller"),
            PatternSize::Smallest => Some("smallest"),
            PatternSize::Big => Some("big"),
        }
    }

    /// Scale modifier applied to the pattern tile.
    pub fn scale(self) -> f64 {
        match self {
            PatternSize::Normal => 1.0,
            PatternSize::Small => 0.8,
            PatternSize::Smaller => 0.5,
            PatternSize::Smallest => 0.25,
            PatternSize::Big => 1.6,
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "small" => Some(PatternSize::Small),
            "smaller" => Some(PatternSize::Smaller),
            "smallest" => Some(PatternSize::Smallest),
            "big" => Some(PatternSize::Big),
            _ => None,
        }
    }
}

/// A resolved composite pattern tincture.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternSpec {
    /// Pattern motif key (`vair`, `ermine`, `semy`, ...).
    pub motif: String,

    /// Charge kind bound into a `semy` motif.
    pub charge: Option<String>,

    /// First canonical tincture of the pair.
    pub t1: String,

    /// Second canonical tincture of the pair.
    pub t2: String,

    /// Optional size suffix.
    pub size: PatternSize,
}

impl PatternSpec {
    /// The motif segment as it appears in the interchange string.
    pub fn motif_segment(&self) -> String {
        match &self.charge {
            Some(charge) => format!("semy_of_{charge}"),
            None => self.motif.clone(),
        }
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.motif_segment(), self.t1, self.t2)?;
        if let Some(suffix) = self.size.suffix() {
            write!(f, "-{suffix}")?;
        }
        Ok(())
    }
}

/// A tincture value: plain name or composite pattern.
#[derive(Debug, Clone, PartialEq)]
pub enum Tincture {
    Plain(String),
    Pattern(PatternSpec),
}

impl Tincture {
    /// Plain tincture from a catalog name.
    pub fn plain(name: impl Into<String>) -> Self {
        Tincture::Plain(name.into())
    }

    pub fn is_pattern(&self) -> bool {
        matches!(self, Tincture::Pattern(_))
    }

    /// The base name used for contrast decisions: the plain name itself,
    /// or the first tincture of a pattern pair.
    pub fn base(&self) -> &str {
        match self {
            Tincture::Plain(name) => name,
            Tincture::Pattern(spec) => &spec.t1,
        }
    }

    pub fn as_pattern(&self) -> Option<&PatternSpec> {
        match self {
            Tincture::Plain(_) => None,
            Tincture::Pattern(spec) => Some(spec),
        }
    }

    /// Charge kind bound into a semy pattern, if any.
    pub fn semy_charge(&self) -> Option<&str> {
        self.as_pattern().and_then(|spec| spec.charge.as_deref())
    }

    /// Parse an interchange string. Never fails: anything that is not a
    /// well-formed composite reads as a plain name.
    pub fn parse(s: &str) -> Self {
        if !s.contains('-') {
            return Tincture::Plain(s.to_string());
        }
        let parts: Vec<&str> = s.split('-').collect();
        let (segment, t1, t2, size) = match parts.as_slice() {
            [segment, t1, t2] => (*segment, *t1, *t2, PatternSize::Normal),
            [segment, t1, t2, size] => match PatternSize::parse(size) {
                Some(size) => (*segment, *t1, *t2, size),
                None => return Tincture::Plain(s.to_string()),
            },
            _ => return Tincture::Plain(s.to_string()),
        };
        let (motif, charge) = match segment.strip_prefix("semy_of_") {
            Some(charge) => ("semy".to_string(), Some(charge.to_string())),
            None => (segment.to_string(), None),
        };
        Tincture::Pattern(PatternSpec {
            motif,
            charge,
            t1: t1.to_string(),
            t2: t2.to_string(),
            size,
        })
    }
}

impl fmt::Display for Tincture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tincture::Plain(name) => write!(f, "{name}"),
            Tincture::Pattern(spec) => write!(f, "{spec}"),
        }
    }
}

impl FromStr for Tincture {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Tincture::parse(s))
    }
}

impl Serialize for Tincture {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Tincture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Tincture::parse(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_round_trip() {
        let t = Tincture::parse("gules");
        assert_eq!(t, Tincture::plain("gules"));
        assert_eq!(t.to_string(), "gules");
        assert_eq!(t.base(), "gules");
        assert!(!t.is_pattern());
    }

    #[test]
    fn test_pattern_round_trip() {
        let t = Tincture::parse("vair-azure-argent-small");
        let spec = t.as_pattern().expect("pattern");
        assert_eq!(spec.motif, "vair");
        assert_eq!(spec.t1, "azure");
        assert_eq!(spec.t2, "argent");
        assert_eq!(spec.size, PatternSize::Small);
        assert_eq!(t.to_string(), "vair-azure-argent-small");
        assert_eq!(t.base(), "azure");
    }

    #[test]
    fn test_pattern_without_size() {
        let t = Tincture::parse("chequy-or-sable");
        assert_eq!(t.to_string(), "chequy-or-sable");
        assert_eq!(t.as_pattern().unwrap().size, PatternSize::Normal);
    }

    #[test]
    fn test_semy_binds_charge() {
        let t = Tincture::parse("semy_of_mullet-gules-or");
        let spec = t.as_pattern().unwrap();
        assert_eq!(spec.motif, "semy");
        assert_eq!(spec.charge.as_deref(), Some("mullet"));
        assert_eq!(t.semy_charge(), Some("mullet"));
        assert_eq!(t.to_string(), "semy_of_mullet-gules-or");
    }

    #[test]
    fn test_malformed_composite_reads_as_plain() {
        let t = Tincture::parse("odd-string");
        assert_eq!(t, Tincture::plain("odd-string"));
        let t = Tincture::parse("vair-azure-argent-enormous");
        assert!(!t.is_pattern());
    }

    #[test]
    fn test_serde_as_string() {
        let t = Tincture::parse("ermine-argent-sable");
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"ermine-argent-sable\"");
        let back: Tincture = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }

    #[test]
    fn test_size_scales() {
        assert_eq!(PatternSize::Small.scale(), 0.8);
        assert_eq!(PatternSize::Smaller.scale(), 0.5);
        assert_eq!(PatternSize::Smallest.scale(), 0.25);
        assert_eq!(PatternSize::Big.scale(), 1.6);
        assert_eq!(PatternSize::Normal.scale(), 1.0);
    }
}
