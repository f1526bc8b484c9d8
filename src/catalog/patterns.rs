//! Pattern tincture rendering.
//!
//! Builds one SVG `<pattern>` definition per distinct composite tincture
//! string. The definition id is the interchange string itself, so paint
//! references are simply `url(#vair-azure-argent)`.

use crate::types::PatternSpec;

/// Static pattern catalog.
#[derive(Debug)]
pub struct PatternCatalog {
    motifs: &'static [&'static str],
}

impl PatternCatalog {
    pub(crate) fn standard() -> Self {
        Self {
            motifs: &[
                "semy",
                "ermine",
                "vair",
                "vairInPale",
                "vairEnPointe",
                "chequy",
                "lozengy",
                "pally",
                "barry",
                "bendy",
                "bendySinister",
                "pappellony",
                "masoned",
                "fretty",
            ],
        }
    }

    /// Whether a motif key can be rendered.
    pub fn supports(&self, motif: &str) -> bool {
        self.motifs.contains(&motif)
    }

    /// All renderable motif keys.
    pub fn motifs(&self) -> impl Iterator<Item = &str> {
        self.motifs.iter().copied()
    }

    /// Build the `<pattern>` definition for a composite tincture.
    ///
    /// `clr1`/`clr2` are resolved paints for the canonical pair and
    /// `charge_ref` is the artwork fragment id a semy motif tiles with.
    /// Returns `None` for motifs outside the catalog.
    pub fn render(
        &self,
        spec: &PatternSpec,
        clr1: &str,
        clr2: &str,
        charge_ref: Option<&str>,
    ) -> Option<String> {
        let id = spec.to_string();
        let scale = spec.size.scale();
        let tile = |base: f64| base * scale;

        let body = match spec.motif.as_str() {
            "semy" => {
                let charge_ref = charge_ref?;
                return Some(format!(
                    r##"<pattern id="{id}" width="{w}" height="{h}" patternUnits="userSpaceOnUse"><rect width="{w}" height="{h}" fill="{clr1}"/><use href="#{charge_ref}" transform="scale({s})" fill="{clr2}"/><use href="#{charge_ref}" transform="translate({hw} {hh}) scale({s})" fill="{clr2}"/></pattern>"##,
                    w = tile(50.0),
                    h = tile(50.0),
                    hw = tile(25.0),
                    hh = tile(25.0),
                    s = 0.12 * scale,
                ));
            }
            "ermine" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><path d="M10,4 l2,5 -2,-2 -2,2 z M7,10 a1.5,1.5 0 1,1 .01,0 z M13,10 a1.5,1.5 0 1,1 .01,0 z M10,13 a1.5,1.5 0 1,1 .01,0 z" fill="{clr2}" transform="scale({s})"/><path d="M10,4 l2,5 -2,-2 -2,2 z M7,10 a1.5,1.5 0 1,1 .01,0 z M13,10 a1.5,1.5 0 1,1 .01,0 z M10,13 a1.5,1.5 0 1,1 .01,0 z" fill="{clr2}" transform="translate({hw} {hh}) scale({s})"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                hw = tile(20.0),
                hh = tile(20.0),
                s = scale,
            ),
            "vair" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr2}"/><path d="M0,{h2} L{q},0 L{hw},{h2} L{w3},0 L{w},{h2} Z M0,{h} L0,{h2} L{q},{h} Z M{w3},{h} L{w},{h2} L{w},{h} Z" fill="{clr1}"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                h2 = tile(20.0),
                q = tile(10.0),
                hw = tile(20.0),
                w3 = tile(30.0),
            ),
            "vairInPale" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr2}"/><path d="M0,{h2} L{q},0 L{hw},{h2} Z M{hw},{h} L{w3},{h2} L{w},{h} Z" fill="{clr1}"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                h2 = tile(20.0),
                q = tile(10.0),
                hw = tile(20.0),
                w3 = tile(30.0),
            ),
            "vairEnPointe" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr2}"/><path d="M0,{h2} L{q},0 L{hw},{h2} L{q},{h} Z M{hw},{h} L{w3},{h2} L{w},{h} L{w3},{h4} Z" fill="{clr1}"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                h2 = tile(20.0),
                h4 = tile(30.0),
                q = tile(10.0),
                hw = tile(20.0),
                w3 = tile(30.0),
            ),
            "chequy" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><rect width="{hw}" height="{hh}" fill="{clr2}"/><rect x="{hw}" y="{hh}" width="{hw}" height="{hh}" fill="{clr2}"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                hw = tile(20.0),
                hh = tile(20.0),
            ),
            "lozengy" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><polygon points="{hw},0 {w},{hh} {hw},{h} 0,{hh}" fill="{clr2}"/>"#,
                w = tile(40.0),
                h = tile(60.0),
                hw = tile(20.0),
                hh = tile(30.0),
            ),
            "pally" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><rect width="{hw}" height="{h}" fill="{clr2}"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                hw = tile(20.0),
            ),
            "barry" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><rect width="{w}" height="{hh}" fill="{clr2}"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                hh = tile(20.0),
            ),
            "bendy" | "bendySinister" => {
                let angle = if spec.motif == "bendy" { 45 } else { -45 };
                return Some(format!(
                    r#"<pattern id="{id}" width="{w}" height="{h}" patternUnits="userSpaceOnUse" patternTransform="rotate({angle})"><rect width="{w}" height="{h}" fill="{clr1}"/><rect width="{hw}" height="{h}" fill="{clr2}"/></pattern>"#,
                    w = tile(40.0),
                    h = tile(40.0),
                    hw = tile(20.0),
                ));
            }
            "pappellony" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><path d="M0,{h2} a{q},{q} 0 0,1 {hw},0 a{q},{q} 0 0,1 {hw},0 M-{q},{h} a{q},{q} 0 0,1 {hw},0 M{q},{h} a{q},{q} 0 0,1 {hw},0" fill="none" stroke="{clr2}" stroke-width="{sw}"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                h2 = tile(20.0),
                q = tile(10.0),
                hw = tile(20.0),
                sw = 2.0 * scale,
            ),
            "masoned" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><path d="M0,0 H{w} M0,{hh} H{w} M{hw},0 V{hh} M0,{hh} M{q},{hh} V{h} M{w3},{hh} V{h}" stroke="{clr2}" stroke-width="{sw}" fill="none"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                hh = tile(20.0),
                hw = tile(20.0),
                q = tile(10.0),
                w3 = tile(30.0),
                sw = 1.5 * scale,
            ),
            "fretty" => format!(
                r#"<rect width="{w}" height="{h}" fill="{clr1}"/><path d="M0,0 L{w},{h} M{w},0 L0,{h}" stroke="{clr2}" stroke-width="{sw}" fill="none"/>"#,
                w = tile(40.0),
                h = tile(40.0),
                sw = 4.0 * scale,
            ),
            _ => return None,
        };

        Some(format!(
            r#"<pattern id="{id}" width="{w}" height="{h}" patternUnits="userSpaceOnUse">{body}</pattern>"#,
            w = tile(40.0),
            h = if spec.motif == "lozengy" { tile(60.0) } else { tile(40.0) },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PatternSize, Tincture};

    fn spec(s: &str) -> PatternSpec {
        match Tincture::parse(s) {
            Tincture::Pattern(spec) => spec,
            Tincture::Plain(_) => panic!("not a pattern: {s}"),
        }
    }

    #[test]
    fn test_def_id_is_the_interchange_string() {
        let catalog = PatternCatalog::standard();
        let markup = catalog
            .render(&spec("vair-azure-argent"), "#377cd7", "#fafafa", None)
            .unwrap();
        assert!(markup.contains(r#"id="vair-azure-argent""#));
    }

    #[test]
    fn test_semy_requires_charge_ref() {
        let catalog = PatternCatalog::standard();
        let spec = spec("semy_of_mullet-gules-or");
        assert!(catalog.render(&spec, "#d7374a", "#ffe066", None).is_none());
        let markup = catalog
            .render(&spec, "#d7374a", "#ffe066", Some("mullet_test"))
            .unwrap();
        assert!(markup.contains(r##"href="#mullet_test""##));
    }

    #[test]
    fn test_size_suffix_scales_tile() {
        let catalog = PatternCatalog::standard();
        let mut small = spec("chequy-or-sable");
        small.size = PatternSize::Smaller;
        let markup = catalog.render(&small, "#ffe066", "#333333", None).unwrap();
        assert!(markup.contains(r#"width="20""#), "tile not scaled: {markup}");
    }

    #[test]
    fn test_unknown_motif_is_none() {
        let catalog = PatternCatalog::standard();
        let mut odd = spec("chequy-or-sable");
        odd.motif = "tartan".to_string();
        assert!(catalog.render(&odd, "#fff", "#000", None).is_none());
    }
}
