//! Emblem renderer.
//!
//! Resolves an abstract emblem against the shape catalogs and emits
//! self-contained SVG markup: defs (clips, artwork, patterns), the field,
//! the clipped division region with true counterchange, ordinaries and
//! charges back-to-front, and a decorative overlay last.
//!
//! Artwork for all distinct charge kinds is fetched concurrently and the
//! render waits for the whole fan-in before assembling markup. A failed
//! fetch downgrades to a warning and that charge is omitted; unknown
//! template or pattern keys for values the composer can produce are
//! contract violations and fail the render loudly.

mod artwork;
mod surface;

use rayon::prelude::*;

use crate::catalog::{Catalog, ShieldShape, DEFAULT_SHAPE};
use crate::error::{ArmorialError, Result};
use crate::types::{dedup_code, Charge, DividedMode, Emblem, Ordinary, Tincture};
use crate::validation::Diagnostic;

pub use artwork::{
    artwork_path, extract_group, tag_fragment, ArtworkSource, BuiltinArtwork, DirArtwork,
    MemoryArtwork,
};
pub use surface::Surface;

/// Outcome of one render: the markup plus non-fatal warnings.
#[derive(Debug)]
pub struct RenderReport {
    pub id: String,
    pub svg: String,
    pub warnings: Vec<Diagnostic>,
}

/// Renders emblems against a catalog and an artwork source.
pub struct Renderer<'a> {
    catalog: &'a Catalog,
    artwork: &'a dyn ArtworkSource,
}

impl<'a> Renderer<'a> {
    pub fn new(catalog: &'a Catalog, artwork: &'a dyn ArtworkSource) -> Self {
        Self { catalog, artwork }
    }

    /// Render onto a shared surface; a no-op when the id already exists.
    pub fn render_into(
        &self,
        surface: &Surface,
        id: &str,
        emblem: &Emblem,
        shape_key: &str,
    ) -> Result<Option<RenderReport>> {
        if surface.contains(id) {
            return Ok(None);
        }
        let report = self.render(id, emblem, shape_key)?;
        if surface.insert_once(id, report.svg.clone()) {
            Ok(Some(report))
        } else {
            Ok(None)
        }
    }

    /// Render an emblem to self-contained SVG markup.
    pub fn render(&self, id: &str, emblem: &Emblem, shape_key: &str) -> Result<RenderReport> {
        let mut warnings = Vec::new();

        let shape_key = if self.catalog.shields.get(shape_key).is_some() {
            shape_key
        } else {
            DEFAULT_SHAPE
        };
        let shape = self.catalog.shields.get_or_default(shape_key);

        let regular: Vec<&Ordinary> = emblem.ordinaries.iter().filter(|o| !o.above).collect();
        let above: Vec<&Ordinary> = emblem.ordinaries.iter().filter(|o| o.above).collect();

        // Counterchange in the field region paints with the division's
        // base tincture.
        let division_base = emblem
            .division
            .as_ref()
            .map(|d| Tincture::plain(d.tincture.base()));

        let shield_clip = format!(
            r#"<clipPath id="{shape_key}_{id}"><path d="{path}"/></clipPath>"#,
            path = shape.path
        );
        let division_clip = match &emblem.division {
            Some(division) => {
                let line = self.line_path(division.line.as_deref())?;
                let template = self
                    .catalog
                    .templates
                    .division(&division.kind, line)
                    .ok_or_else(|| ArmorialError::Render {
                        message: format!("no template for division '{}'", division.kind),
                        help: Some("the division catalog and templates have drifted".to_string()),
                    })?;
                format!(r#"<clipPath id="divisionClip_{id}">{template}</clipPath>"#)
            }
            None => String::new(),
        };

        let (artwork_defs, omitted) = self.fetch_charges(id, emblem, shape, &mut warnings);
        let pattern_defs = self.pattern_defs(id, emblem)?;

        let backlight = format!(
            r##"<radialGradient id="backlight_{id}" cx="100%" cy="100%" r="150%"><stop stop-color="#fff" stop-opacity=".3" offset="0"/><stop stop-color="#fff" stop-opacity=".15" offset=".25"/><stop stop-color="#000" stop-opacity="0" offset="1"/></radialGradient>"##
        );
        let style = "<style>g.secondary,path.secondary {fill: var(--secondary);} g.tertiary,path.tertiary {fill: var(--tertiary);}</style>";
        let field_rect = format!(
            r#"<rect x="0" y="0" width="200" height="200" fill="{}"/>"#,
            self.paint(&emblem.field)
        );

        let mut division_group = String::new();
        if let Some(division) = &emblem.division {
            let base = division_base.unwrap_or_else(|| division.tincture.clone());

            // Field region: elements keeping the field half, plus
            // counterchanged elements in the division's tincture.
            for ordinary in &regular {
                match ordinary.divided {
                    Some(DividedMode::Field) => division_group.push_str(
                        &self.template_ordinary(shape, ordinary, &ordinary.tincture)?,
                    ),
                    Some(DividedMode::Counter) => {
                        division_group.push_str(&self.template_ordinary(shape, ordinary, &base)?)
                    }
                    _ => {}
                }
            }
            for charge in &emblem.charges {
                match charge.divided {
                    Some(DividedMode::Field) => division_group.push_str(&self.template_charge(
                        id,
                        shape,
                        &omitted,
                        charge,
                        &charge.tincture,
                        true,
                    )),
                    Some(DividedMode::Counter) => division_group.push_str(
                        &self.template_charge(id, shape, &omitted, charge, &base, false),
                    ),
                    _ => {}
                }
            }
            for ordinary in &above {
                match ordinary.divided {
                    Some(DividedMode::Field) => division_group.push_str(
                        &self.template_ordinary(shape, ordinary, &ordinary.tincture)?,
                    ),
                    Some(DividedMode::Counter) => {
                        division_group.push_str(&self.template_ordinary(shape, ordinary, &base)?)
                    }
                    _ => {}
                }
            }

            // Division region, clipped: its fill, elements assigned to
            // it, and counterchanged elements in the field's tincture.
            division_group.push_str(&format!(
                r#"<g clip-path="url(#divisionClip_{id})"><rect x="0" y="0" width="200" height="200" fill="{}"/>"#,
                self.paint(&division.tincture)
            ));
            for ordinary in &regular {
                match ordinary.divided {
                    Some(DividedMode::Division) => division_group.push_str(
                        &self.template_ordinary(shape, ordinary, &ordinary.tincture)?,
                    ),
                    Some(DividedMode::Counter) => division_group
                        .push_str(&self.template_ordinary(shape, ordinary, &emblem.field)?),
                    _ => {}
                }
            }
            for charge in &emblem.charges {
                match charge.divided {
                    Some(DividedMode::Division) => division_group.push_str(&self.template_charge(
                        id,
                        shape,
                        &omitted,
                        charge,
                        &charge.tincture,
                        true,
                    )),
                    Some(DividedMode::Counter) => division_group.push_str(
                        &self.template_charge(id, shape, &omitted, charge, &emblem.field, false),
                    ),
                    _ => {}
                }
            }
            for ordinary in &above {
                match ordinary.divided {
                    Some(DividedMode::Division) => division_group.push_str(
                        &self.template_ordinary(shape, ordinary, &ordinary.tincture)?,
                    ),
                    Some(DividedMode::Counter) => division_group
                        .push_str(&self.template_ordinary(shape, ordinary, &emblem.field)?),
                    _ => {}
                }
            }
            division_group.push_str("</g>");
        }

        // Everything not bound to the division, back to front.
        let mut above_all = String::new();
        for ordinary in regular.iter().filter(|o| o.divided.is_none()) {
            above_all.push_str(&self.template_ordinary(shape, ordinary, &ordinary.tincture)?);
        }
        for charge in emblem
            .charges
            .iter()
            .filter(|c| c.divided.is_none() || emblem.division.is_none())
        {
            above_all.push_str(&self.template_charge(
                id,
                shape,
                &omitted,
                charge,
                &charge.tincture,
                true,
            ));
        }
        for ordinary in above.iter().filter(|o| o.divided.is_none()) {
            above_all.push_str(&self.template_ordinary(shape, ordinary, &ordinary.tincture)?);
        }

        let overlay = format!(
            r##"<path d="{path}" fill="url(#backlight_{id})" stroke="#333"/>"##,
            path = shape.path
        );

        let svg = format!(
            r#"<svg id="{id}" width="200" height="200" viewBox="{view_box}"><defs>{shield_clip}{division_clip}{artwork_defs}{pattern_defs}{backlight}{style}</defs><g clip-path="url(#{shape_key}_{id})">{field_rect}{division_group}{above_all}</g>{overlay}</svg>"#,
            view_box = shape.view_box,
        );

        Ok(RenderReport {
            id: id.to_string(),
            svg,
            warnings,
        })
    }

    /// Resolve a line style to curve path data; `straight`/`None` means
    /// no curve. An unknown style is composer/catalog drift.
    fn line_path(&self, line: Option<&str>) -> Result<Option<&'static str>> {
        match line {
            None | Some("straight") => Ok(None),
            Some(name) => self
                .catalog
                .lines
                .get(name)
                .map(Some)
                .ok_or_else(|| ArmorialError::Render {
                    message: format!("unknown line style '{name}'"),
                    help: Some("the line catalog and composer tables have drifted".to_string()),
                }),
        }
    }

    /// Fetch artwork for every distinct charge kind, concurrently.
    ///
    /// Returns the tagged defs markup and the kinds that had to be
    /// omitted. A fetch failure never aborts the render and never
    /// affects sibling fetches.
    fn fetch_charges(
        &self,
        id: &str,
        emblem: &Emblem,
        shape: &ShieldShape,
        warnings: &mut Vec<Diagnostic>,
    ) -> (String, Vec<String>) {
        let mut kinds: Vec<&str> = emblem.charges.iter().map(|c| c.kind.as_str()).collect();
        if let Some(charge) = emblem.field.semy_charge() {
            kinds.push(charge);
        }
        if let Some(charge) = emblem
            .division
            .as_ref()
            .and_then(|d| d.tincture.semy_charge())
        {
            kinds.push(charge);
        }
        let mut unique: Vec<&str> = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }

        let fetched: Vec<(&str, Result<String>)> = unique
            .par_iter()
            .map(|kind| {
                if *kind == "inescutcheon" {
                    // Synthesized from the shield outline, never fetched.
                    return (
                        *kind,
                        Ok(format!(
                            r#"<g><path transform="translate(66 66) scale(.34)" d="{}"/></g>"#,
                            shape.path
                        )),
                    );
                }
                (*kind, self.artwork.fetch(kind))
            })
            .collect();

        let mut defs = String::new();
        let mut omitted = Vec::new();
        for (kind, outcome) in fetched {
            match outcome {
                Ok(fragment) => {
                    defs.push_str(&tag_fragment(&fragment, &format!("{kind}_{id}")));
                }
                Err(e) => {
                    warnings.push(
                        Diagnostic::warning(
                            "armorial::render::artwork",
                            format!("charge '{kind}' omitted: {e}"),
                        )
                        .with_help("check the artwork directory for the missing file"),
                    );
                    omitted.push(kind.to_string());
                }
            }
        }
        (defs, omitted)
    }

    /// Build one `<pattern>` definition per distinct composite tincture.
    fn pattern_defs(&self, id: &str, emblem: &Emblem) -> Result<String> {
        let mut seen: Vec<String> = Vec::new();
        {
            let mut consider = |tincture: &Tincture| {
                if tincture.is_pattern() {
                    let key = tincture.to_string();
                    if !seen.contains(&key) {
                        seen.push(key);
                    }
                }
            };
            consider(&emblem.field);
            if let Some(division) = &emblem.division {
                consider(&division.tincture);
            }
            for ordinary in &emblem.ordinaries {
                consider(&ordinary.tincture);
            }
            for charge in &emblem.charges {
                consider(&charge.tincture);
            }
        }

        let mut defs = String::new();
        for key in &seen {
            let tincture = Tincture::parse(key);
            let spec = match tincture.as_pattern() {
                Some(spec) => spec,
                None => continue,
            };
            let clr1 = self.paint_name(&spec.t1);
            let clr2 = self.paint_name(&spec.t2);
            let charge_ref = spec.charge.as_ref().map(|c| format!("{c}_{id}"));
            let markup = self
                .catalog
                .patterns
                .render(spec, &clr1, &clr2, charge_ref.as_deref())
                .ok_or_else(|| ArmorialError::Render {
                    message: format!("unknown pattern '{key}'"),
                    help: Some("the pattern catalog and composer tables have drifted".to_string()),
                })?;
            defs.push_str(&markup);
        }
        Ok(defs)
    }

    /// Paint for a tincture: a hex color, or a pattern reference.
    fn paint(&self, tincture: &Tincture) -> String {
        match tincture {
            Tincture::Plain(name) => self.paint_name(name),
            Tincture::Pattern(_) => format!("url(#{tincture})"),
        }
    }

    fn paint_name(&self, name: &str) -> String {
        match self.catalog.tinctures.color(name) {
            Some(hex) => hex.to_string(),
            None => format!("url(#{name})"),
        }
    }

    /// One placed copy per valid anchor, mirrored for sinister/reversed.
    ///
    /// `own_palette` keeps the charge's t2/t3 as the secondary and
    /// tertiary paints; counterchanged copies paint flat.
    fn template_charge(
        &self,
        id: &str,
        shape: &ShieldShape,
        omitted: &[String],
        charge: &Charge,
        tincture: &Tincture,
        own_palette: bool,
    ) -> String {
        if omitted.iter().any(|k| k == &charge.kind) {
            return String::new();
        }

        let primary = self.paint(tincture);
        let (secondary, tertiary) = if own_palette {
            (
                charge
                    .t2
                    .as_ref()
                    .map_or_else(|| primary.clone(), |t| self.paint(t)),
                charge
                    .t3
                    .as_ref()
                    .map_or_else(|| primary.clone(), |t| self.paint(t)),
            )
        } else {
            (primary.clone(), primary.clone())
        };

        let anchors: Vec<char> = dedup_code(&charge.anchors)
            .chars()
            .filter(|code| shape.positions.contains_key(code))
            .collect();
        if anchors.is_empty() {
            return String::new();
        }

        let mut svg = format!(
            r##"<g fill="{primary}" style="--secondary: {secondary}; --tertiary: {tertiary}" stroke="#000">"##
        );
        for code in anchors {
            let s = charge.size * shape.size;
            let sx = if charge.sinister { -s } else { s };
            let sy = if charge.reversed { -s } else { s };
            let [ax, ay] = shape.positions[&code];
            let x = ax - 100.0 * (sx - 1.0);
            let y = ay - 100.0 * (sy - 1.0);
            let scale = if charge.sinister || charge.reversed {
                format!("{sx} {sy}")
            } else {
                format!("{s}")
            };
            svg.push_str(&format!(
                r##"<use href="#{kind}_{id}" transform="translate({x} {y}) scale({scale})"/>"##,
                kind = charge.kind
            ));
        }
        svg.push_str("</g>");
        svg
    }

    /// An ordinary body: outline strokes for bordure and orle, template
    /// geometry for everything else.
    fn template_ordinary(
        &self,
        shape: &ShieldShape,
        ordinary: &Ordinary,
        tincture: &Tincture,
    ) -> Result<String> {
        let fill = self.paint(tincture);
        let body = match ordinary.kind.as_str() {
            "bordure" => format!(
                r#"<path d="{path}" fill="none" stroke="{fill}" stroke-width="16.7%"/>"#,
                path = shape.path
            ),
            "orle" => format!(
                r#"<path d="{path}" fill="none" stroke="{fill}" stroke-width="5%" transform="scale(.85)" transform-origin="center"/>"#,
                path = shape.path
            ),
            kind => {
                let line = self.line_path(ordinary.line.as_deref())?;
                self.catalog
                    .templates
                    .ordinary(kind, line)
                    .ok_or_else(|| ArmorialError::Render {
                        message: format!("no template for ordinary '{kind}'"),
                        help: Some("the ordinary catalog and templates have drifted".to_string()),
                    })?
            }
        };
        Ok(format!(r#"<g fill="{fill}" stroke="none">{body}</g>"#))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compose::Composer;
    use crate::types::Division;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sources() -> (&'static Catalog, BuiltinArtwork) {
        (Catalog::standard(), BuiltinArtwork::new())
    }

    fn simple_emblem() -> Emblem {
        let mut emblem = Emblem::of_field(Tincture::plain("azure"));
        emblem.ordinaries.push(Ordinary::new("fess", Tincture::plain("or")));
        let mut charge = Charge::new("roundel", Tincture::plain("argent"), "abc");
        charge.size = 0.5;
        emblem.charges.push(charge);
        emblem
    }

    #[test]
    fn test_render_emits_self_contained_svg() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let report = renderer.render("seat1", &simple_emblem(), "heater").unwrap();
        assert!(report.warnings.is_empty(), "{:?}", report.warnings);
        assert!(report.svg.starts_with(r#"<svg id="seat1""#));
        assert!(report.svg.contains(r#"<clipPath id="heater_seat1">"#));
        assert!(report.svg.contains(r#"id="roundel_seat1""#));
        // One placed copy per anchor.
        assert_eq!(report.svg.matches("<use href=\"#roundel_seat1\"").count(), 3);
        // Field fill comes before the ordinary which comes before charges.
        let field = report.svg.find("#377cd7").unwrap();
        let fess = report.svg.find("<rect x=\"0\" y=\"75\"").unwrap();
        assert!(field < fess);
    }

    #[test]
    fn test_unknown_shape_falls_back_to_heater() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let report = renderer
            .render("seat2", &simple_emblem(), "klingon")
            .unwrap();
        assert!(report.svg.contains(r#"clip-path="url(#heater_seat2)""#));
    }

    #[test]
    fn test_missing_artwork_warns_and_omits() {
        let (catalog, _) = sources();
        let art = MemoryArtwork::new();
        let renderer = Renderer::new(catalog, &art);
        let report = renderer.render("seat3", &simple_emblem(), "heater").unwrap();
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.svg.contains("<use href=\"#roundel_seat3\""));
        // The rest of the emblem still renders.
        assert!(report.svg.contains("<rect x=\"0\" y=\"75\""));
    }

    #[test]
    fn test_counterchange_swaps_tinctures_across_regions() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let mut emblem = Emblem::of_field(Tincture::plain("gules"));
        emblem.division = Some(Division {
            kind: "perPale".to_string(),
            tincture: Tincture::plain("or"),
            line: None,
        });
        let mut charge = Charge::new("roundel", Tincture::plain("argent"), "e");
        charge.divided = Some(DividedMode::Counter);
        emblem.charges.push(charge);

        let report = renderer.render("seat4", &emblem, "heater").unwrap();
        // Field region copy takes the division tincture (or)...
        let field_copy = report
            .svg
            .find(r##"<g fill="#ffe066" style="--secondary: #ffe066"##)
            .expect("field-region counter copy");
        // ...and the clipped division region copy takes the field (gules).
        let division_region = report.svg.find("divisionClip_seat4)\"").unwrap();
        let division_copy = report
            .svg
            .rfind(r##"<g fill="#d7374a" style="--secondary: #d7374a"##)
            .expect("division-region counter copy");
        assert!(field_copy < division_region);
        assert!(division_region < division_copy);
        // The charge's own tincture (argent) is never painted.
        assert!(!report.svg.contains("#fafafa"));
    }

    #[test]
    fn test_semy_field_fetches_bound_charge_and_pattern() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let emblem = Emblem::of_field(Tincture::parse("semy_of_mullet-azure-or"));
        let report = renderer.render("seat5", &emblem, "heater").unwrap();
        assert!(report.svg.contains(r#"id="mullet_seat5""#));
        assert!(report.svg.contains(r#"<pattern id="semy_of_mullet-azure-or""#));
        assert!(report
            .svg
            .contains(r#"fill="url(#semy_of_mullet-azure-or)""#));
    }

    #[test]
    fn test_unknown_division_template_faults() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let mut emblem = Emblem::of_field(Tincture::plain("azure"));
        emblem.division = Some(Division {
            kind: "perNothing".to_string(),
            tincture: Tincture::plain("or"),
            line: None,
        });
        assert!(renderer.render("seat6", &emblem, "heater").is_err());
    }

    #[test]
    fn test_render_into_is_idempotent_by_id() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let surface = Surface::new();
        let emblem = simple_emblem();

        let first = renderer
            .render_into(&surface, "seat7", &emblem, "heater")
            .unwrap();
        assert!(first.is_some());
        let second = renderer
            .render_into(&surface, "seat7", &emblem, "heater")
            .unwrap();
        assert!(second.is_none());
        assert_eq!(surface.len(), 1);
    }

    #[test]
    fn test_above_ordinaries_draw_after_charges() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let mut emblem = simple_emblem();
        let mut chief = Ordinary::new("chief", Tincture::plain("sable"));
        chief.above = true;
        emblem.ordinaries.push(chief);

        let report = renderer.render("seat8", &emblem, "heater").unwrap();
        let charge_at = report.svg.find("<use href=\"#roundel_seat8\"").unwrap();
        let chief_at = report.svg.find(r#"<rect width="200" height="75"/>"#).unwrap();
        assert!(charge_at < chief_at);
    }

    #[test]
    fn test_composed_emblems_always_render() {
        let (catalog, art) = sources();
        let composer = Composer::new(catalog);
        let renderer = Renderer::new(catalog, &art);
        for seed in 0..300 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let emblem = composer.compose(&mut rng, None, 0.0, 0.0, None);
            let report = renderer
                .render(&format!("case{seed}"), &emblem, "heater")
                .unwrap_or_else(|e| panic!("seed {seed}: {e}"));
            assert!(report.svg.ends_with("</svg>"));
        }
    }

    #[test]
    fn test_sinister_mirrors_horizontally() {
        let (catalog, art) = sources();
        let renderer = Renderer::new(catalog, &art);
        let mut emblem = Emblem::of_field(Tincture::plain("vert"));
        let mut charge = Charge::new("sword", Tincture::plain("or"), "e");
        charge.sinister = true;
        emblem.charges.push(charge);
        let report = renderer.render("seat9", &emblem, "heater").unwrap();
        assert!(report.svg.contains("scale(-1 1)"), "{}", report.svg);
    }
}
