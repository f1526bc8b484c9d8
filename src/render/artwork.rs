//! Charge artwork sources.
//!
//! Charge outlines live outside the core as SVG fragments, fetched by a
//! fixed path convention keyed on the charge kind. A fragment is the
//! `<g>` element of the artwork file; the renderer re-tags it with a
//! per-render id before inlining it into the defs block.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ArmorialError, Result};

/// Supplies charge artwork fragments by kind.
pub trait ArtworkSource: Sync {
    /// Fetch the `<g>...</g>` fragment for a charge kind.
    fn fetch(&self, kind: &str) -> Result<String>;
}

/// Filesystem source reading `<root>/<kind>.svg`.
#[derive(Debug)]
pub struct DirArtwork {
    root: PathBuf,
}

impl DirArtwork {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The path a charge kind resolves to.
    pub fn path_for(&self, kind: &str) -> PathBuf {
        self.root.join(format!("{kind}.svg"))
    }

    /// Charge kinds with artwork available under the root.
    pub fn available(&self) -> Vec<String> {
        let mut kinds: Vec<String> = WalkDir::new(&self.root)
            .max_depth(1)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|e| e.to_str()) == Some("svg") {
                    path.file_stem()
                        .and_then(|s| s.to_str())
                        .map(str::to_string)
                } else {
                    None
                }
            })
            .collect();
        kinds.sort();
        kinds
    }
}

impl ArtworkSource for DirArtwork {
    fn fetch(&self, kind: &str) -> Result<String> {
        let path = self.path_for(kind);
        let text = fs::read_to_string(&path).map_err(|e| ArmorialError::Artwork {
            kind: kind.to_string(),
            message: format!("cannot read {}: {e}", path.display()),
        })?;
        extract_group(&text).map(str::to_string).ok_or_else(|| {
            ArmorialError::Artwork {
                kind: kind.to_string(),
                message: format!("no <g> element in {}", path.display()),
            }
        })
    }
}

/// In-memory source for tests and embedded artwork.
#[derive(Debug, Default)]
pub struct MemoryArtwork {
    fragments: BTreeMap<String, String>,
}

impl MemoryArtwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, kind: impl Into<String>, fragment: impl Into<String>) {
        self.fragments.insert(kind.into(), fragment.into());
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.fragments.keys().map(|s| s.as_str())
    }
}

impl ArtworkSource for MemoryArtwork {
    fn fetch(&self, kind: &str) -> Result<String> {
        self.fragments
            .get(kind)
            .cloned()
            .ok_or_else(|| ArmorialError::Artwork {
                kind: kind.to_string(),
                message: "not present in memory source".to_string(),
            })
    }
}

/// Built-in placeholder glyphs for the simple catalog charges.
///
/// Real charge art ships separately; these keep the pipeline usable
/// without an artwork directory. Fragments draw on the 200x200 canvas
/// centered on (100, 100).
#[derive(Debug, Default)]
pub struct BuiltinArtwork;

impl BuiltinArtwork {
    pub fn new() -> Self {
        Self
    }

    pub fn fragment(kind: &str) -> Option<&'static str> {
        Some(match kind {
            "roundel" => r#"<g><circle cx="100" cy="100" r="40"/></g>"#,
            "annulet" => {
                r#"<g><path d="M100,60 a40,40 0 1,0 .01,0 z M100,75 a25,25 0 1,1 -.01,0 z" fill-rule="evenodd"/></g>"#
            }
            "lozenge" => r#"<g><polygon points="100,55 135,100 100,145 65,100"/></g>"#,
            "mascle" => {
                r#"<g><path d="M100,55 135,100 100,145 65,100 z M100,72 83,100 100,128 117,100 z" fill-rule="evenodd"/></g>"#
            }
            "billet" => r#"<g><rect x="80" y="60" width="40" height="80"/></g>"#,
            "mullet" => {
                r#"<g><polygon points="100,56 110,88 144,88 117,108 127,141 100,121 73,141 83,108 56,88 90,88"/></g>"#
            }
            "crescent" => {
                r#"<g><path d="M60,95 a40,40 0 1,0 80,0 a32,32 0 1,1 -80,0 z"/></g>"#
            }
            "heart" => {
                r#"<g><path d="M100,140 C60,110 60,75 82,68 C94,64 100,74 100,80 C100,74 106,64 118,68 C140,75 140,110 100,140 z"/></g>"#
            }
            "sun" => {
                r#"<g><circle cx="100" cy="100" r="26"/><path d="M100,55 l6,18 -12,0 z M100,145 l6,-18 -12,0 z M55,100 l18,6 0,-12 z M145,100 l-18,6 0,-12 z M68,68 l16,9 -9,9 z M132,68 l-16,9 9,9 z M68,132 l16,-9 -9,-9 z M132,132 l-16,-9 9,-9 z"/></g>"#
            }
            "crossHummetty" => {
                r#"<g><polygon points="88,55 112,55 112,88 145,88 145,112 112,112 112,145 88,145 88,112 55,112 55,88 88,88"/></g>"#
            }
            "crossPattee" => {
                r#"<g><path d="M85,55 L115,55 L105,95 L145,85 L145,115 L105,105 L115,145 L85,145 L95,105 L55,115 L55,85 L95,95 z"/></g>"#
            }
            "crossMoline" => {
                r#"<g><path d="M90,58 Q100,70 110,58 L110,90 L142,90 Q130,100 142,110 L110,110 L110,142 Q100,130 90,142 L90,110 L58,110 Q70,100 58,90 L90,90 z"/></g>"#
            }
            "crossPotent" => {
                r#"<g><path d="M92,62 L108,62 L108,92 L138,92 L138,108 L108,108 L108,138 L92,138 L92,108 L62,108 L62,92 L92,92 z M80,55 L120,55 L120,62 L80,62 z M80,138 L120,138 L120,145 L80,145 z M55,80 L62,80 L62,120 L55,120 z M138,80 L145,80 L145,120 L138,120 z"/></g>"#
            }
            "crossFlory" => {
                r#"<g><path d="M92,60 L108,60 L104,92 L140,88 L140,112 L104,108 L108,140 L92,140 L96,108 L60,112 L60,88 L96,92 z M100,48 L108,60 L92,60 z M100,152 L108,140 L92,140 z M48,100 L60,108 L60,92 z M152,100 L140,108 L140,92 z"/></g>"#
            }
            "saltireCouped" => {
                r#"<g><path d="M68,58 L100,90 L132,58 L142,68 L110,100 L142,132 L132,142 L100,110 L68,142 L58,132 L90,100 L58,68 z"/></g>"#
            }
            "fleurDeLis" => {
                r#"<g><path d="M100,52 C112,66 114,82 104,94 L112,94 C114,80 126,72 140,74 C138,90 126,98 112,98 L112,106 L124,104 C126,114 118,122 108,122 L108,134 L92,134 L92,122 C82,122 74,114 76,104 L88,106 L88,98 C74,98 62,90 60,74 C74,72 86,80 88,94 L96,94 C86,82 88,66 100,52 z M88,138 L112,138 L112,148 L88,148 z"/></g>"#
            }
            "rose" => {
                r#"<g><circle cx="100" cy="100" r="14"/><path d="M100,58 C114,70 114,84 100,92 C86,84 86,70 100,58 z M142,100 C130,114 116,114 108,100 C116,86 130,86 142,100 z M100,142 C86,130 86,116 100,108 C114,116 114,130 100,142 z M58,100 C70,86 84,86 92,100 C84,114 70,114 58,100 z"/></g>"#
            }
            "trefoil" => {
                r#"<g><circle cx="100" cy="78" r="20"/><circle cx="80" cy="110" r="20"/><circle cx="120" cy="110" r="20"/><path d="M96,120 L104,120 L104,146 L96,146 z"/></g>"#
            }
            "sword" => {
                r#"<g><path d="M96,50 L104,50 L104,118 L96,118 z M80,118 L120,118 L120,126 L80,126 z M94,126 L106,126 L106,146 L100,152 L94,146 z"/></g>"#
            }
            "crown" => {
                r#"<g><path d="M62,120 L62,86 L82,102 L100,72 L118,102 L138,86 L138,120 z M62,126 L138,126 L138,136 L62,136 z"/></g>"#
            }
            "tower" => {
                r#"<g><path d="M74,146 L74,76 L82,76 L82,66 L92,66 L92,76 L108,76 L108,66 L118,66 L118,76 L126,76 L126,146 z M94,146 L94,118 L106,118 L106,146 z"/></g>"#
            }
            "key" => {
                r#"<g><path d="M100,52 a18,18 0 1,0 .01,0 z M100,62 a8,8 0 1,1 -.01,0 z M96,86 L104,86 L104,134 L118,134 L118,142 L104,142 L104,148 L96,148 z" fill-rule="evenodd"/></g>"#
            }
            "anchor" => {
                r#"<g><path d="M100,52 a12,12 0 1,0 .01,0 z M100,60 a5,5 0 1,1 -.01,0 z M96,76 L104,76 L104,134 C120,132 130,122 134,110 L142,116 C136,136 120,146 100,148 C80,146 64,136 58,116 L66,110 C70,122 80,132 96,134 z M82,88 L118,88 L118,96 L82,96 z" fill-rule="evenodd"/></g>"#
            }
            _ => return None,
        })
    }
}

impl ArtworkSource for BuiltinArtwork {
    fn fetch(&self, kind: &str) -> Result<String> {
        BuiltinArtwork::fragment(kind)
            .map(str::to_string)
            .ok_or_else(|| ArmorialError::Artwork {
                kind: kind.to_string(),
                message: "no built-in glyph".to_string(),
            })
    }
}

/// Extract the first `<g>` element from an artwork file.
pub fn extract_group(svg: &str) -> Option<&str> {
    let start = svg.find("<g")?;
    let end = svg.rfind("</g>")?;
    if end < start {
        return None;
    }
    Some(&svg[start..end + "</g>".len()])
}

/// Re-tag a fragment's root `<g>` with a per-render id, replacing any id
/// the artwork shipped with.
pub fn tag_fragment(fragment: &str, tagged_id: &str) -> String {
    let Some(open_end) = fragment.find('>') else {
        return format!(r#"<g id="{tagged_id}">{fragment}</g>"#);
    };
    let (open, rest) = fragment.split_at(open_end);
    let mut attrs = open.trim_start_matches("<g").to_string();
    if let Some(id_start) = attrs.find("id=\"") {
        if let Some(id_len) = attrs[id_start + 4..].find('"') {
            attrs.replace_range(id_start..id_start + 4 + id_len + 1, "");
        }
    }
    let attrs = attrs.trim();
    if attrs.is_empty() {
        format!(r#"<g id="{tagged_id}"{rest}"#)
    } else {
        format!(r#"<g id="{tagged_id}" {attrs}{rest}"#)
    }
}

/// The path convention, exposed for callers that only need the path.
pub fn artwork_path(root: &Path, kind: &str) -> PathBuf {
    root.join(format!("{kind}.svg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_group() {
        let svg = r#"<?xml version="1.0"?><svg><g fill="none"><path d="M0,0"/></g></svg>"#;
        assert_eq!(
            extract_group(svg),
            Some(r#"<g fill="none"><path d="M0,0"/></g>"#)
        );
        assert_eq!(extract_group("<svg></svg>"), None);
    }

    #[test]
    fn test_tag_fragment_inserts_id() {
        let tagged = tag_fragment("<g><path d=\"M0,0\"/></g>", "roundel_seat1");
        assert!(tagged.starts_with(r#"<g id="roundel_seat1">"#), "{tagged}");
    }

    #[test]
    fn test_tag_fragment_replaces_existing_id() {
        let tagged = tag_fragment(
            r#"<g id="original" fill="none"><path/></g>"#,
            "sword_seat2",
        );
        assert!(tagged.starts_with(r#"<g id="sword_seat2" fill="none">"#), "{tagged}");
        assert!(!tagged.contains("original"));
    }

    #[test]
    fn test_dir_source_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let source = DirArtwork::new(dir.path());
        std::fs::write(
            source.path_for("roundel"),
            r#"<svg><g><circle r="1"/></g></svg>"#,
        )
        .unwrap();

        let fragment = source.fetch("roundel").unwrap();
        assert_eq!(fragment, r#"<g><circle r="1"/></g>"#);
        assert_eq!(source.available(), vec!["roundel".to_string()]);
        assert!(source.fetch("lionRampant").is_err());
    }

    #[test]
    fn test_memory_source() {
        let mut source = MemoryArtwork::new();
        source.insert("mullet", "<g/>");
        assert_eq!(source.fetch("mullet").unwrap(), "<g/>");
        assert!(source.fetch("rose").is_err());
    }

    #[test]
    fn test_builtin_covers_conventional_charges() {
        use crate::catalog::Catalog;
        let catalog = Catalog::standard();
        for kind in catalog.charges.conventional().keys() {
            assert!(
                BuiltinArtwork::fragment(kind).is_some(),
                "no builtin glyph for conventional charge {kind}"
            );
        }
    }
}
