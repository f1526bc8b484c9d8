//! Decorative boundary curves for lined divisions and ordinaries.
//!
//! Each entry is a closed path on the 200x200 canvas covering the band
//! around y=100..115 with the decorated edge on top. Lined templates
//! translate, rotate, and mirror these paths into place.

/// Static line-style catalog.
#[derive(Debug)]
pub struct LineCatalog {
    lines: Vec<(&'static str, &'static str)>,
}

impl LineCatalog {
    pub(crate) fn standard() -> Self {
        Self {
            lines: vec![
                (
                    "wavy",
                    "M0,105 Q12.5,95 25,105 T50,105 T75,105 T100,105 T125,105 T150,105 T175,105 T200,105 L200,115 L0,115 Z",
                ),
                (
                    "engrailed",
                    "M0,108 A14,14 0 0 1 25,100 A14,14 0 0 1 50,100 A14,14 0 0 1 75,100 A14,14 0 0 1 100,100 A14,14 0 0 1 125,100 A14,14 0 0 1 150,100 A14,14 0 0 1 175,100 A14,14 0 0 1 200,108 L200,115 L0,115 Z",
                ),
                (
                    "invected",
                    "M0,100 A14,14 0 0 0 25,108 A14,14 0 0 0 50,108 A14,14 0 0 0 75,108 A14,14 0 0 0 100,108 A14,14 0 0 0 125,108 A14,14 0 0 0 150,108 A14,14 0 0 0 175,108 A14,14 0 0 0 200,100 L200,115 L0,115 Z",
                ),
                (
                    "indented",
                    "M0,100 L12.5,108 L25,100 L37.5,108 L50,100 L62.5,108 L75,100 L87.5,108 L100,100 L112.5,108 L125,100 L137.5,108 L150,100 L162.5,108 L175,100 L187.5,108 L200,100 L200,115 L0,115 Z",
                ),
                (
                    "dancetty",
                    "M0,96 L25,110 L50,96 L75,110 L100,96 L125,110 L150,96 L175,110 L200,96 L200,115 L0,115 Z",
                ),
                (
                    "embattled",
                    "M0,106 H12.5 V96 H25 V106 H37.5 V96 H50 V106 H62.5 V96 H75 V106 H87.5 V96 H100 V106 H112.5 V96 H125 V106 H137.5 V96 H150 V106 H162.5 V96 H175 V106 H187.5 V96 H200 V115 H0 Z",
                ),
                (
                    "raguly",
                    "M0,106 L10,106 L17,96 L29,96 L22,106 L35,106 L42,96 L54,96 L47,106 L60,106 L67,96 L79,96 L72,106 L85,106 L92,96 L104,96 L97,106 L110,106 L117,96 L129,96 L122,106 L135,106 L142,96 L154,96 L147,106 L160,106 L167,96 L179,96 L172,106 L185,106 L192,96 L200,96 L200,115 L0,115 Z",
                ),
                (
                    "dovetailed",
                    "M0,106 L8,106 L4,96 L21,96 L17,106 L33,106 L29,96 L46,96 L42,106 L58,106 L54,96 L71,96 L67,106 L83,106 L79,96 L96,96 L92,106 L108,106 L104,96 L121,96 L117,106 L133,106 L129,96 L146,96 L142,106 L158,106 L154,96 L171,96 L167,106 L183,106 L179,96 L196,96 L192,106 L200,106 L200,115 L0,115 Z",
                ),
                (
                    "nebuly",
                    "M0,98 C6,98 6,108 12.5,108 C19,108 19,98 25,98 C31,98 31,108 37.5,108 C44,108 44,98 50,98 C56,98 56,108 62.5,108 C69,108 69,98 75,98 C81,98 81,108 87.5,108 C94,108 94,98 100,98 C106,98 106,108 112.5,108 C119,108 119,98 125,98 C131,98 131,108 137.5,108 C144,108 144,98 150,98 C156,98 156,108 162.5,108 C169,108 169,98 175,98 C181,98 181,108 187.5,108 C194,108 194,98 200,98 L200,115 L0,115 Z",
                ),
                (
                    "urdy",
                    "M0,103 L6,96 L12.5,103 L12.5,108 L19,115 L25,108 L25,103 L31,96 L37.5,103 L37.5,108 L44,115 L50,108 L50,103 L56,96 L62.5,103 L62.5,108 L69,115 L75,108 L75,103 L81,96 L87.5,103 L87.5,108 L94,115 L100,108 L100,103 L106,96 L112.5,103 L112.5,108 L119,115 L125,108 L125,103 L131,96 L137.5,103 L137.5,108 L144,115 L150,108 L150,103 L156,96 L162.5,103 L162.5,108 L169,115 L175,108 L175,103 L181,96 L187.5,103 L187.5,108 L194,115 L200,108 L200,115 L0,115 Z",
                ),
            ],
        }
    }

    /// Path data for a line style; `straight` has no entry by design.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.lines
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, path)| *path)
    }

    /// All decorative line names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|(name, _)| *name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_is_not_a_curve() {
        let catalog = LineCatalog::standard();
        assert!(catalog.get("straight").is_none());
        assert!(catalog.get("wavy").is_some());
    }

    #[test]
    fn test_paths_are_closed_bands() {
        let catalog = LineCatalog::standard();
        for name in catalog.names().collect::<Vec<_>>() {
            let path = catalog.get(name).unwrap();
            assert!(path.starts_with("M0,"), "{name} must start at x=0");
            assert!(path.ends_with('Z'), "{name} must be closed");
        }
    }
}
