//! Emblem value types.
//!
//! An [`Emblem`] is the abstract heraldic description the composer
//! produces and the renderer consumes: a field tincture, at most one
//! division, and z-ordered lists of ordinaries and charges. It is
//! immutable once built; the renderer never mutates it.
//!
//! The serde wire names (`t1`, `t`, `p`, ...) keep the compact historical
//! token format, so serialized emblems stay interchangeable with stored
//! world files.

use serde::{Deserialize, Serialize};

use crate::error::{ArmorialError, Result};
use crate::types::Tincture;

/// How an element interacts with the field division at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividedMode {
    /// Drawn only in the field region, in its own tincture.
    Field,
    /// Drawn only in the division region, in its own tincture.
    Division,
    /// Counterchanged: field-tinctured in the division region and
    /// division-tinctured in the field region.
    Counter,
}

/// A line partitioning the field into two tinctured regions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Division {
    #[serde(rename = "division")]
    pub kind: String,

    #[serde(rename = "t")]
    pub tincture: Tincture,

    /// Edge-line style; `None` reads as straight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
}

/// A standard geometric charge: band, cross, border, canton, ...
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ordinary {
    #[serde(rename = "ordinary")]
    pub kind: String,

    #[serde(rename = "t")]
    pub tincture: Tincture,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub divided: Option<DividedMode>,

    /// Drawn after the charges instead of before them.
    #[serde(default, skip_serializing_if = "is_false")]
    pub above: bool,
}

impl Ordinary {
    pub fn new(kind: impl Into<String>, tincture: Tincture) -> Self {
        Self {
            kind: kind.into(),
            tincture,
            line: None,
            divided: None,
            above: false,
        }
    }
}

/// A figure placed on the field, ordinary, or division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Charge {
    #[serde(rename = "charge")]
    pub kind: String,

    #[serde(rename = "t")]
    pub tincture: Tincture,

    /// Anchor position codes; each character names one anchor point of
    /// the shield shape, and the charge occupies every anchor at once.
    #[serde(rename = "p")]
    pub anchors: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub t2: Option<Tincture>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub t3: Option<Tincture>,

    #[serde(default = "unit_size", skip_serializing_if = "is_unit_size")]
    pub size: f64,

    #[serde(default, skip_serializing_if = "is_false")]
    pub sinister: bool,

    #[serde(default, skip_serializing_if = "is_false")]
    pub reversed: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub divided: Option<DividedMode>,
}

impl Charge {
    pub fn new(kind: impl Into<String>, tincture: Tincture, anchors: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            tincture,
            anchors: anchors.into(),
            t2: None,
            t3: None,
            size: 1.0,
            sinister: false,
            reversed: false,
            divided: None,
        }
    }

    /// Deduplicate the anchor set, keeping first-occurrence order.
    pub fn dedup_anchors(&mut self) {
        self.anchors = dedup_code(&self.anchors);
    }
}

/// An abstract heraldic achievement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Emblem {
    /// Field tincture; always defined.
    #[serde(rename = "t1")]
    pub field: Tincture,

    /// Preferred shield shape, if one was decided at composition time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shield: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub division: Option<Division>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ordinaries: Vec<Ordinary>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub charges: Vec<Charge>,
}

impl Emblem {
    /// A bare emblem with only a field tincture.
    pub fn of_field(field: Tincture) -> Self {
        Self {
            field,
            shield: None,
            division: None,
            ordinaries: Vec::new(),
            charges: Vec::new(),
        }
    }

    /// The first charge, which inheritance treats as principal.
    pub fn principal_charge(&self) -> Option<&Charge> {
        self.charges.first()
    }

    /// Serialize to the persistence token. The token is plain text with
    /// the one reserved character `#` escaped, so it can be embedded in
    /// reference attributes.
    pub fn to_token(&self) -> String {
        // Serialization of this structure cannot fail.
        serde_json::to_string(self)
            .unwrap_or_default()
            .replace('#', "%23")
    }

    /// Parse a persistence token produced by [`Emblem::to_token`].
    pub fn from_token(token: &str) -> Result<Self> {
        let json = token.replace("%23", "#");
        serde_json::from_str(&json).map_err(|e| ArmorialError::Parse {
            message: format!("invalid emblem token: {e}"),
            help: Some("expected the JSON token format written by to_token()".to_string()),
        })
    }
}

/// Deduplicate a position code string, keeping first-occurrence order.
pub fn dedup_code(code: &str) -> String {
    let mut seen = Vec::new();
    code.chars()
        .filter(|c| {
            if seen.contains(c) {
                false
            } else {
                seen.push(*c);
                true
            }
        })
        .collect()
}

fn unit_size() -> f64 {
    1.0
}

fn is_unit_size(size: &f64) -> bool {
    *size == 1.0
}

fn is_false(b: &bool) -> bool {
    !*b
}
