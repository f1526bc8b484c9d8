//! Division and ordinary geometry templates.
//!
//! Straight templates are fixed markup fragments on the 200x200 canvas.
//! Kinds with a lined variant substitute a decorative boundary curve into
//! the fragment; kinds without one always render straight, whatever line
//! the emblem carries.

/// Static template catalog.
#[derive(Debug)]
pub struct TemplateCatalog;

impl TemplateCatalog {
    pub(crate) fn standard() -> Self {
        Self
    }

    /// Markup for a division clip region. `line` is resolved curve path
    /// data, or `None` for a straight boundary.
    pub fn division(&self, kind: &str, line: Option<&str>) -> Option<String> {
        if let Some(line) = line {
            if let Some(markup) = division_lined(kind, line) {
                return Some(markup);
            }
        }
        division_straight(kind).map(str::to_string)
    }

    /// Markup for an ordinary body. Bordure and orle have no template:
    /// they are stroke renderings of the shield outline itself.
    pub fn ordinary(&self, kind: &str, line: Option<&str>) -> Option<String> {
        if let Some(line) = line {
            if let Some(markup) = ordinary_lined(kind, line) {
                return Some(markup);
            }
        }
        ordinary_straight(kind).map(str::to_string)
    }

    /// Whether a division kind has any template at all.
    pub fn has_division(&self, kind: &str) -> bool {
        division_straight(kind).is_some()
    }

    /// Whether an ordinary kind resolves to drawable geometry.
    pub fn has_ordinary(&self, kind: &str) -> bool {
        kind == "bordure" || kind == "orle" || ordinary_straight(kind).is_some()
    }
}

fn division_straight(kind: &str) -> Option<&'static str> {
    Some(match kind {
        "perFess" => r#"<rect x="0" y="100" width="200" height="100"/>"#,
        "perPale" => r#"<rect x="100" y="0" width="100" height="200"/>"#,
        "perBend" => r#"<polygon points="0,0 200,200 0,200"/>"#,
        "perBendSinister" => r#"<polygon points="200,0 0,200 200,200"/>"#,
        "perChevron" => r#"<polygon points="0,200 100,100 200,200"/>"#,
        "perChevronReversed" => r#"<polygon points="0,0 100,100 200,0"/>"#,
        "perCross" => {
            r#"<rect x="100" y="0" width="100" height="100"/><rect x="0" y="100" width="100" height="100"/>"#
        }
        "perPile" => r#"<polygon points="0,0 15,0 100,200 185,0 200,0 200,200 0,200"/>"#,
        "perSaltire" => r#"<polygon points="0,0 0,200 200,0 200,200"/>"#,
        "gyronny" => {
            r#"<polygon points="0,0 200,200 200,100 0,100"/><polygon points="200,0 0,200 100,200 100,0"/>"#
        }
        "chevronny" => {
            r#"<path d="M0,80 100,-15 200,80 200,120 100,25 0,120z M0,160 100,65 200,160 200,200 100,105 0,200z M0,240 100,145 200,240 0,240z"/>"#
        }
        _ => return None,
    })
}

fn division_lined(kind: &str, line: &str) -> Option<String> {
    Some(match kind {
        "perFess" => format!(
            r#"<path d="{line}"/><rect x="0" y="115" width="200" height="85" shape-rendering="crispedges"/>"#
        ),
        "perPale" => format!(
            r#"<path d="{line}" transform="rotate(-90 100 100)"/><rect x="115" y="0" width="85" height="200" shape-rendering="crispedges"/>"#
        ),
        "perBend" => format!(
            r#"<path d="{line}" transform="translate(-10 -10) rotate(45 110 110) scale(1.1)"/><rect x="0" y="115" width="200" height="85" transform="translate(-10 -10) rotate(45 110 110) scale(1.1)" shape-rendering="crispedges"/>"#
        ),
        "perBendSinister" => format!(
            r#"<path d="{line}" transform="translate(-10 -10) rotate(-45 110 110) scale(1.1)"/><rect x="0" y="115" width="200" height="85" transform="translate(-10 -10) rotate(-45 110 110) scale(1.1)" shape-rendering="crispedges"/>"#
        ),
        "perChevron" => format!(
            r#"<rect x="15" y="115" width="200" height="200" transform="translate(70 70) rotate(45 100 100)"/><path d="{line}" transform="translate(129 71) rotate(-45 -100 100) scale(-1 1)"/><path d="{line}" transform="translate(71 71) rotate(45 100 100)"/>"#
        ),
        "perChevronReversed" => format!(
            r#"<rect x="15" y="115" width="200" height="200" transform="translate(-70 -70) rotate(225.001 100 100)"/><path d="{line}" transform="translate(-70.7 -70.7) rotate(225 100 100) scale(1 1)"/><path d="{line}" transform="translate(270.7 -70.7) rotate(-225 -100 100) scale(-1 1)"/>"#
        ),
        "perCross" => format!(
            r#"<rect x="100" y="0" width="100" height="92.5"/><rect x="0" y="107.5" width="100" height="92.5"/><path d="{line}" transform="translate(0 50) scale(.5001)"/><path d="{line}" transform="translate(200 150) scale(-.5)"/>"#
        ),
        "perPile" => format!(
            r#"<path d="{line}" transform="translate(161.66 10) rotate(66.66 -100 100) scale(-1 1)"/><path d="{line}" transform="translate(38.33 10) rotate(-66.66 100 100)"/><polygon points="-2.15,0 84.15,200 115.85,200 202.15,0 200,200 0,200"/>"#
        ),
        _ => return None,
    })
}

fn ordinary_straight(kind: &str) -> Option<&'static str> {
    Some(match kind {
        "fess" => r#"<rect x="0" y="75" width="200" height="50"/>"#,
        "pale" => r#"<rect x="75" y="0" width="50" height="200"/>"#,
        "bend" => r#"<polygon points="35,0 200,165 200,200 165,200 0,35 0,0"/>"#,
        "bendSinister" => r#"<polygon points="0,165 165,0 200,0 200,35 35,200 0,200"/>"#,
        "chief" => r#"<rect width="200" height="75"/>"#,
        "bar" => r#"<rect x="0" y="87.5" width="200" height="25"/>"#,
        "gemelle" => {
            r#"<rect x="0" y="76" width="200" height="16"/><rect x="0" y="108" width="200" height="16"/>"#
        }
        "fessCotissed" => {
            r#"<rect x="0" y="67" width="200" height="8"/><rect x="0" y="83" width="200" height="34"/><rect x="0" y="125" width="200" height="8"/>"#
        }
        "fessDoubleCotissed" => {
            r#"<rect x="0" y="60" width="200" height="7.5"/><rect x="0" y="72.5" width="200" height="7.5"/><rect x="0" y="85" width="200" height="30"/><rect x="0" y="120" width="200" height="7.5"/><rect x="0" y="132.5" width="200" height="7.5"/>"#
        }
        "bendlet" => r#"<polygon points="22,0 200,178 200,200 178,200 0,22 0,0"/>"#,
        "bendletSinister" => r#"<polygon points="0,178 178,0 200,0 200,22 22,200 0,200"/>"#,
        "terrace" => r#"<rect x="0" y="145" width="200" height="55"/>"#,
        "cross" => {
            r#"<polygon points="85,0 85,85 0,85 0,115 85,115 85,200 115,200 115,115 200,115 200,85 115,85 115,0"/>"#
        }
        "crossParted" => {
            r#"<path d="M 80 0 L 80 80 L 0 80 L 0 95 L 80 95 L 80 105 L 0 105 L 0 120 L 80 120 L 80 200 L 95 200 L 95 120 L 105 120 L 105 200 L 120 200 L 120 120 L 200 120 L 200 105 L 120 105 L 120 95 L 200 95 L 200 80 L 120 80 L 120 0 L 105 0 L 105 80 L 95 80 L 95 0 L 80 0 z M 95 95 L 105 95 L 105 105 L 95 105 L 95 95 z"/>"#
        }
        "saltire" => {
            r#"<path d="M 0,21 79,100 0,179 0,200 21,200 100,121 179,200 200,200 200,179 121,100 200,21 200,0 179,0 100,79 21,0 0,0 Z"/>"#
        }
        "saltireParted" => {
            r#"<path d="M 7 0 L 89 82 L 82 89 L 0 7 L 0 28 L 72 100 L 0 172 L 0 193 L 82 111 L 89 118 L 7 200 L 28 200 L 100 128 L 172 200 L 193 200 L 111 118 L 118 111 L 200 193 L 200 172 L 128 100 L 200 28 L 200 7 L 118 89 L 111 82 L 193 0 L 172 0 L 100 72 L 28 0 L 7 0 z M 100 93 L 107 100 L 100 107 L 93 100 L 100 93 z"/>"#
        }
        "mount" => r#"<path d="m0,250 a100,100,0,0,1,200,0"/>"#,
        "point" => r#"<path d="M0,200 Q80,180 100,135 Q120,180 200,200"/>"#,
        "flaunches" => r#"<path d="M0,0 q120,100 0,200 M200,0 q-120,100 0,200"/>"#,
        "gore" => r#"<path d="M20,0 Q30,75 100,100 Q80,150 100,200 L0,200 L0,0 Z"/>"#,
        "pall" => {
            r#"<polygon points="0,0 30,0 100,70 170,0 200,0 200,30 122,109 122,200 78,200 78,109 0,30"/>"#
        }
        "pallReversed" => {
            r#"<polygon points="0,200 0,170 78,91 78,0 122,0 122,91 200,170 200,200 170,200 100,130 30,200"/>"#
        }
        "chevron" => r#"<polygon points="0,125 100,60 200,125 200,165 100,100 0,165"/>"#,
        "chevronReversed" => r#"<polygon points="0,75 100,140 200,75 200,35 100,100 0,35"/>"#,
        "gyron" => r#"<polygon points="0,0 100,100 0,100"/>"#,
        "quarter" => r#"<rect width="50%" height="50%"/>"#,
        "canton" => r#"<rect width="37.5%" height="37.5%"/>"#,
        "pile" => r#"<polygon points="70,0 100,175 130,0"/>"#,
        "pileInBend" => r#"<polygon points="200,200 200,144 25,25 145,200"/>"#,
        "pileInBendSinister" => r#"<polygon points="0,200 0,144 175,25 55,200"/>"#,
        "piles" => {
            r#"<polygon points="46,0 75,175 103,0"/><polygon points="95,0 125,175 154,0"/>"#
        }
        "pilesInPoint" => {
            r#"<path d="M15,0 100,200 60,0Z M80,0 100,200 120,0Z M140,0 100,200 185,0Z"/>"#
        }
        "label" => {
            r#"<path d="m 46,54.8 6.6,-15.6 95.1,0 5.9,15.5 -16.8,0.1 4.5,-11.8 L 104,43 l 4.3,11.9 -16.8,0 4.3,-11.8 -37.2,0 4.5,11.8 -16.9,0 z"/>"#
        }
        _ => return None,
    })
}

fn ordinary_lined(kind: &str, line: &str) -> Option<String> {
    Some(match kind {
        "fess" => format!(
            r#"<path d="{line}" transform="translate(0 -25)"/><path d="{line}" transform="translate(0 25) rotate(180 100 100)"/><rect x="0" y="88" width="200" height="24" stroke="none"/>"#
        ),
        "pale" => format!(
            r#"<path d="{line}" transform="rotate(-90 100 100) translate(0 -25)"/><path d="{line}" transform="rotate(90 100 100) translate(0 -25)"/><rect x="88" y="0" width="24" height="200" stroke="none"/>"#
        ),
        "bend" => format!(
            r#"<path d="{line}" transform="translate(8 -18) rotate(45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(-28 18) rotate(225 110 100) scale(1.1 1)"/><rect x="0" y="88" width="200" height="24" transform="translate(-10 0) rotate(45 110 100) scale(1.1 1)" stroke="none"/>"#
        ),
        "bendSinister" => format!(
            r#"<path d="{line}" transform="translate(-28 -18) rotate(-45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(8 18) rotate(-225 110 100) scale(1.1 1)"/><rect x="0" y="88" width="200" height="24" transform="translate(-10 0) rotate(-45 110 100) scale(1.1 1)" stroke="none"/>"#
        ),
        "chief" => format!(
            r#"<path d="{line}" transform="translate(0,-25) rotate(180.00001 100 100)"/><rect width="200" height="62" stroke="none"/>"#
        ),
        "bar" => format!(
            r#"<path d="{line}" transform="translate(0,-12.5)"/><path d="{line}" transform="translate(0,12.5) rotate(180.00001 100 100)"/><rect x="0" y="94" width="200" height="12" stroke="none"/>"#
        ),
        "gemelle" => format!(
            r#"<path d="{line}" transform="translate(0,-22.5)"/><path d="{line}" transform="translate(0,22.5) rotate(180.00001 100 100)"/>"#
        ),
        "fessCotissed" => format!(
            r#"<path d="{line}" transform="translate(0 15) scale(1 .5)"/><path d="{line}" transform="translate(0 85) rotate(180 100 50) scale(1 .5)"/><rect x="0" y="80" width="200" height="40"/>"#
        ),
        "fessDoubleCotissed" => format!(
            r#"<rect x="0" y="85" width="200" height="30"/><rect x="0" y="72.5" width="200" height="7.5"/><rect x="0" y="120" width="200" height="7.5"/><path d="{line}" transform="translate(0 10) scale(1 .5)"/><path d="{line}" transform="translate(0 90) rotate(180 100 50) scale(1 .5)"/>"#
        ),
        "bendlet" => format!(
            r#"<path d="{line}" transform="translate(2 -12) rotate(45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(-22 12) rotate(225 110 100) scale(1.1 1)"/><rect x="0" y="94" width="200" height="12" transform="translate(-10 0) rotate(45 110 100) scale(1.1 1)" stroke="none"/>"#
        ),
        "bendletSinister" => format!(
            r#"<path d="{line}" transform="translate(-22 -12) rotate(-45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(2 12) rotate(-225 110 100) scale(1.1 1)"/><rect x="0" y="94" width="200" height="12" transform="translate(-10 0) rotate(-45 110 100) scale(1.1 1)" stroke="none"/>"#
        ),
        "terrace" => format!(
            r#"<path d="{line}" transform="translate(0,50)"/><rect x="0" y="164" width="200" height="36" stroke="none"/>"#
        ),
        "cross" => format!(
            r#"<path d="{line}" transform="translate(0,-14.5)"/><path d="{line}" transform="rotate(180 100 100) translate(0,-14.5)"/><path d="{line}" transform="rotate(-90 100 100) translate(0,-14.5)"/><path d="{line}" transform="rotate(-270 100 100) translate(0,-14.5)"/>"#
        ),
        "crossParted" => format!(
            r#"<path d="{line}" transform="translate(0,-20)"/><path d="{line}" transform="rotate(180 100 100) translate(0,-20)"/><path d="{line}" transform="rotate(-90 100 100) translate(0,-20)"/><path d="{line}" transform="rotate(-270 100 100) translate(0,-20)"/>"#
        ),
        "saltire" => format!(
            r#"<path d="{line}" transform="translate(0 -10) rotate(45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(-20 10) rotate(225 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(-20 -10) rotate(-45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(0 10) rotate(-225 110 100) scale(1.1 1)"/>"#
        ),
        "saltireParted" => format!(
            r#"<path d="{line}" transform="translate(3 -13) rotate(45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(-23 13) rotate(225 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(-23 -13) rotate(-45 110 100) scale(1.1 1)"/><path d="{line}" transform="translate(3 13) rotate(-225 110 100) scale(1.1 1)"/>"#
        ),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_fallback_when_no_lined_variant() {
        let catalog = TemplateCatalog::standard();
        // perSaltire has no lined variant; the line is ignored.
        let markup = catalog.division("perSaltire", Some("M0,0")).unwrap();
        assert_eq!(markup, division_straight("perSaltire").unwrap());
    }

    #[test]
    fn test_lined_variant_substitutes_curve() {
        let catalog = TemplateCatalog::standard();
        let markup = catalog.division("perFess", Some("M0,105 TEST")).unwrap();
        assert!(markup.contains("M0,105 TEST"));
        let markup = catalog.ordinary("fess", Some("M0,105 TEST")).unwrap();
        assert!(markup.contains("M0,105 TEST"));
    }

    #[test]
    fn test_unknown_kind_is_none() {
        let catalog = TemplateCatalog::standard();
        assert!(catalog.division("perNothing", None).is_none());
        assert!(catalog.ordinary("nothing", None).is_none());
    }

    #[test]
    fn test_bordure_and_orle_are_outline_strokes() {
        let catalog = TemplateCatalog::standard();
        assert!(catalog.ordinary("bordure", None).is_none());
        assert!(catalog.has_ordinary("bordure"));
        assert!(catalog.has_ordinary("orle"));
    }
}
