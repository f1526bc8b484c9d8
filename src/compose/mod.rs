//! Emblem composer.
//!
//! A constrained stochastic grammar over the catalog tables: field, then
//! ordinary/division eligibility, then tinctures, then charge selection
//! and placement, then post-placement augmentations. The function is
//! total: every draw has a feasible outcome and every lookup a default,
//! so composition always terminates with a renderable emblem.

mod tincture;

use rand::Rng;

use crate::catalog::{
    size_for, Catalog, Element, PositionCatalog, BORDURE_RING, CANTON_STRIP, HONOR_POINT,
};
use crate::rng::{gate, WeightedTable};
use crate::types::{Charge, DividedMode, Division, Emblem, Ordinary, Tincture};

/// Ordinaries that almost never sit on a divided field.
const RARELY_DIVIDED: [&str; 5] = ["chief", "terrace", "chevron", "quarter", "flaunches"];

/// Composes emblems against a catalog.
#[derive(Debug)]
pub struct Composer<'a> {
    catalog: &'a Catalog,
}

impl<'a> Composer<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Compose a new emblem.
    ///
    /// `kinship` is the probability of inheriting traits from `parent`;
    /// `dominion` the probability of marking the result as a dominion of
    /// the parent with a canton. `hint` steers charge selection toward a
    /// thematic table (ignored when unmapped or `"Generic"`).
    pub fn compose<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        parent: Option<&Emblem>,
        kinship: f64,
        dominion: f64,
        hint: Option<&str>,
    ) -> Emblem {
        let (kinship, dominion) = match parent {
            Some(_) => (kinship, dominion),
            None => (0.0, 0.0),
        };

        let mut used: Vec<String> = Vec::new();

        let field = match parent {
            Some(p) if gate(rng, kinship) => p.field.clone(),
            _ => self.resolve_tincture(rng, Element::Field, &mut used, None),
        };
        let used_pattern = field.is_pattern().then(|| field.to_string());
        let mut emblem = Emblem::of_field(field);

        let add_charge = gate(rng, if used_pattern.is_some() { 0.5 } else { 0.93 });

        let lined_ordinary = if (add_charge && gate(rng, 0.3)) || gate(rng, 0.5) {
            match parent.and_then(|p| p.ordinaries.first()) {
                Some(first) if gate(rng, kinship) => Some(first.kind.clone()),
                _ => Some(self.catalog.ordinaries.lined().pick(rng).to_string()),
            }
        } else {
            None
        };

        let ordinary = if (!add_charge && gate(rng, 0.65)) || gate(rng, 0.3) {
            Some(lined_ordinary.clone().unwrap_or_else(|| {
                self.catalog.ordinaries.straight().pick(rng).to_string()
            }))
        } else {
            None
        };

        let rare_divided = ordinary
            .as_deref()
            .is_some_and(|kind| RARELY_DIVIDED.contains(&kind));

        let divisioned = if rare_divided {
            gate(rng, 0.03)
        } else if add_charge && ordinary.is_some() {
            gate(rng, 0.03)
        } else if add_charge {
            gate(rng, 0.3)
        } else if ordinary.is_some() {
            gate(rng, 0.7)
        } else {
            gate(rng, 0.995)
        };

        if divisioned {
            let kind = match parent.and_then(|p| p.division.as_ref()) {
                Some(inherited) if gate(rng, kinship - 0.1) => inherited.kind.clone(),
                _ => self.catalog.divisions.variants().pick(rng).to_string(),
            };
            let reference = gate(rng, 0.98).then(|| emblem.field.clone());
            let tincture =
                self.resolve_tincture(rng, Element::Division, &mut used, reference.as_ref());
            let mut division = Division { kind, tincture, line: None };
            if let Some(lines) = self.catalog.divisions.line_weights(&division.kind) {
                division.line =
                    Some(if used_pattern.is_some() || (ordinary.is_some() && gate(rng, 0.7)) {
                        "straight".to_string()
                    } else {
                        lines.pick(rng).to_string()
                    });
            }
            emblem.division = Some(division);
        }

        if let Some(kind) = &ordinary {
            let tincture =
                self.resolve_tincture(rng, Element::Charge, &mut used, Some(&emblem.field));
            let mut item = Ordinary::new(kind.clone(), tincture);
            if lined_ordinary.is_some() {
                item.line = Some(
                    if used_pattern.is_some() || (emblem.division.is_some() && gate(rng, 0.7)) {
                        "straight".to_string()
                    } else {
                        self.catalog.divisions.ordinary_lines().pick(rng).to_string()
                    },
                );
            }
            if emblem.division.is_some()
                && !add_charge
                && used_pattern.is_none()
                && gate(rng, 0.5)
                && kind != "bordure"
                && kind != "orle"
            {
                item.divided = Some(if gate(rng, 0.8) {
                    DividedMode::Counter
                } else if gate(rng, 0.6) {
                    DividedMode::Field
                } else {
                    DividedMode::Division
                });
            }
            emblem.ordinaries.push(item);
        }

        if add_charge {
            self.place_charges(
                rng,
                &mut emblem,
                &mut used,
                parent,
                kinship,
                hint,
                ordinary.as_deref(),
                divisioned,
                used_pattern.as_deref(),
            );
        }

        if gate(rng, dominion) {
            if let Some(parent) = parent.filter(|p| !p.charges.is_empty()) {
                self.append_dominion_canton(rng, &mut emblem, &mut used, parent);
            }
        }

        emblem
    }

    /// Charge selection, placement, tincture, and augmentations.
    #[allow(clippy::too_many_arguments)]
    fn place_charges<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        emblem: &mut Emblem,
        used: &mut Vec<String>,
        parent: Option<&Emblem>,
        kinship: f64,
        hint: Option<&str>,
        ordinary: Option<&str>,
        divisioned: bool,
        used_pattern: Option<&str>,
    ) {
        let kind = self.choose_charge_kind(rng, parent, kinship, hint, ordinary.is_some() || divisioned);
        let info = self.catalog.charges.info(&kind);
        let t_ordinary = emblem.ordinaries.first().map(|o| o.tincture.clone());
        let ordinary_info = ordinary.and_then(|k| self.catalog.ordinaries.info(k));
        let field = emblem.field.clone();
        let division_kind = emblem.division.as_ref().map(|d| d.kind.clone());

        // Placement priority: on-ordinary, off-ordinary, division anchors,
        // charge-preferred anchors, then the generic tables. The tincture
        // reference alternates so the charge contrasts with whatever it
        // sits on.
        let anchors: String;
        let mut tincture: Tincture;
        if let Some(on) = ordinary_info
            .and_then(|i| i.positions_on.as_ref())
            .filter(|_| gate(rng, 0.8))
        {
            anchors = on.pick(rng).to_string();
            tincture = if used_pattern.is_none() && gate(rng, 0.3) {
                field.clone()
            } else {
                self.resolve_tincture(rng, Element::Charge, &mut Vec::new(), t_ordinary.as_ref())
            };
        } else if let Some(off) = ordinary_info
            .and_then(|i| i.positions_off.as_ref())
            .filter(|_| gate(rng, 0.95))
        {
            anchors = off.pick(rng).to_string();
            tincture = match &t_ordinary {
                Some(t) if used_pattern.is_none() && gate(rng, 0.3) => t.clone(),
                _ => self.resolve_tincture(rng, Element::Charge, used, Some(&field)),
            };
        } else if let Some(table) = division_kind
            .as_deref()
            .and_then(|k| self.catalog.positions.for_division(k))
        {
            anchors = table.pick(rng).to_string();
            let mut scoped = used.clone();
            if let Some(t) = &t_ordinary {
                scoped.push(t.to_string());
            }
            tincture = self.resolve_tincture(rng, Element::Charge, &mut scoped, Some(&field));
        } else if let Some(preferred) = &info.positions {
            anchors = preferred.pick(rng).to_string();
            tincture = self.resolve_tincture(rng, Element::Charge, used, Some(&field));
        } else {
            anchors = if used_pattern.is_some() {
                HONOR_POINT.to_string()
            } else if self.catalog.charges.is_conventional(&kind) {
                self.catalog.positions.conventional().pick(rng).to_string()
            } else {
                self.catalog.positions.complex().pick(rng).to_string()
            };
            let mut scoped = used.clone();
            if let Some(t) = &t_ordinary {
                scoped.push(t.to_string());
            }
            tincture = self.resolve_tincture(rng, Element::Charge, &mut scoped, Some(&field));
        }

        if let Some(natural) = info.natural {
            let natural = Tincture::plain(natural);
            if natural != tincture && t_ordinary.as_ref() != Some(&natural) {
                tincture = natural;
            }
        }

        let mut charge = Charge::new(kind.clone(), tincture.clone(), anchors.clone());
        self.assign_palette(rng, &mut charge, used, &field);
        emblem.charges.push(charge);

        // Post-placement augmentations; at most one applies.
        if anchors == BORDURE_RING && gate(rng, 0.95) {
            // A ring of charges frames the shield; swap in a conventional
            // ring charge and seat a second one at the honor point.
            emblem.charges[0].kind = self.catalog.charges.conventional().pick(rng).to_string();
            self.assign_palette(rng, &mut emblem.charges[0], used, &field);
            let companion = self.select_charge(rng, self.catalog.charges.single());
            let companion_t = self.resolve_tincture(rng, Element::Charge, used, Some(&field));
            let mut item = Charge::new(companion, companion_t, HONOR_POINT);
            self.assign_palette(rng, &mut item, used, &field);
            emblem.charges.push(item);
        } else if gate(rng, 0.8) && kind == "inescutcheon" {
            let nested = self.select_charge(rng, self.catalog.charges.types());
            let nested_t =
                self.resolve_tincture(rng, Element::Charge, &mut Vec::new(), Some(&tincture));
            let mut item = Charge::new(nested, nested_t, anchors.clone());
            item.size = 0.5;
            self.assign_palette(rng, &mut item, &mut Vec::new(), &tincture);
            emblem.charges.push(item);
        } else if emblem.division.is_some() && ordinary.is_none() {
            self.divide_charges(rng, emblem, used, used_pattern, &anchors);
        }

        let division_kind = emblem.division.as_ref().map(|d| d.kind.clone());
        for item in emblem.charges.iter_mut() {
            item.size *= size_for(&item.anchors, ordinary, division_kind.as_deref());
            item.dedup_anchors();
            if gate(rng, 0.02) && self.catalog.charges.info(&item.kind).sinister {
                item.sinister = true;
            }
            if gate(rng, 0.02) && self.catalog.charges.info(&item.kind).reversed {
                item.reversed = true;
            }
        }
    }

    /// Dimidiation and counterchange strategies for a divided field
    /// carrying charges but no ordinary.
    fn divide_charges<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        emblem: &mut Emblem,
        used: &mut Vec<String>,
        used_pattern: Option<&str>,
        anchors: &str,
    ) {
        let (division_kind, division_line, division_t) = match &emblem.division {
            Some(d) => (d.kind.clone(), d.line.clone(), d.tincture.clone()),
            None => return,
        };
        let straight_line = division_line.as_deref() == Some("straight");
        let allow_counter =
            used_pattern.is_none() && division_line.as_deref().map_or(true, |l| l == "straight");

        if gate(rng, 0.3)
            && matches!(division_kind.as_str(), "perPale" | "perFess")
            && straight_line
        {
            // Dimidiation: the first charge keeps the field half, a
            // second one takes the division half.
            emblem.charges[0].divided = Some(DividedMode::Field);
            if gate(rng, 0.95) {
                let second_anchor = if anchors == HONOR_POINT || gate(rng, 0.5) {
                    HONOR_POINT.to_string()
                } else {
                    self.catalog
                        .positions
                        .for_division(&division_kind)
                        .map(|t| t.pick(rng).to_string())
                        .unwrap_or_else(|| HONOR_POINT.to_string())
                };
                let second = self.select_charge(rng, self.catalog.charges.single());
                let second_t =
                    self.resolve_tincture(rng, Element::Charge, used, Some(&division_t));
                let mut item = Charge::new(second, second_t, second_anchor);
                item.divided = Some(DividedMode::Division);
                self.assign_palette(rng, &mut item, used, &division_t);
                emblem.charges.push(item);
            }
        } else if allow_counter && gate(rng, 0.4) {
            emblem.charges[0].divided = Some(DividedMode::Counter);
        } else if matches!(
            division_kind.as_str(),
            "perPale" | "perFess" | "perBend" | "perBendSinister"
        ) && gate(rng, 0.8)
        {
            // Two independent charges at the canonical half anchors.
            if let Some([first, second]) = PositionCatalog::division_halves(&division_kind) {
                emblem.charges[0].anchors = first.to_string();
                let kind = self.select_charge(rng, self.catalog.charges.single());
                let tincture =
                    self.resolve_tincture(rng, Element::Charge, used, Some(&division_t));
                let mut item = Charge::new(kind, tincture, second);
                self.assign_palette(rng, &mut item, used, &division_t);
                emblem.charges.push(item);
            }
        } else if matches!(division_kind.as_str(), "perCross" | "perSaltire") && gate(rng, 0.5) {
            // Four independent charges at the quadrant anchors.
            if let Some([q1, q2, q3, q4]) = PositionCatalog::division_quarters(&division_kind) {
                emblem.charges[0].anchors = q1.to_string();
                let field = emblem.field.clone();
                for (anchor, reference) in [(q2, &division_t), (q3, &division_t), (q4, &field)] {
                    let kind = self.select_charge(rng, self.catalog.charges.single());
                    let tincture =
                        self.resolve_tincture(rng, Element::Charge, &mut Vec::new(), Some(reference));
                    let mut item = Charge::new(kind, tincture, anchor);
                    self.assign_palette(rng, &mut item, &mut Vec::new(), reference);
                    emblem.charges.push(item);
                }
            }
        } else if allow_counter && anchors.len() > 1 {
            emblem.charges[0].divided = Some(DividedMode::Counter);
        }
    }

    /// Dominion cadency: a canton in the corner bearing a miniature of
    /// the parent's principal charge.
    fn append_dominion_canton<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        emblem: &mut Emblem,
        used: &mut Vec<String>,
        parent: &Emblem,
    ) {
        let field = emblem.field.clone();
        let invert = self.same_wire_category(&parent.field, &field);
        let canton_t = if invert {
            self.resolve_tincture(rng, Element::Division, used, Some(&field))
        } else {
            parent.field.clone()
        };

        // Clear the canton's footprint: drop the covered anchors from
        // every charge, removing charges left with none, and cap
        // honor-point charges so they do not collide.
        let mut index = emblem.charges.len();
        while index > 0 {
            index -= 1;
            let charge = &mut emblem.charges[index];
            if charge.size == 1.5 {
                charge.size = 1.4;
            }
            charge.anchors.retain(|c| !CANTON_STRIP.contains(c));
            if charge.anchors.is_empty() {
                emblem.charges.remove(index);
            }
        }

        let mut kind = parent.charges[0].kind.clone();
        if kind == "inescutcheon" {
            if let Some(second) = parent.charges.get(1) {
                kind = second.kind.clone();
            }
        }
        let mut miniature_t = if invert {
            parent.field.clone()
        } else {
            parent.charges[0].tincture.clone()
        };
        if self.same_wire_category(&canton_t, &miniature_t) {
            miniature_t = self.resolve_tincture(rng, Element::Charge, used, Some(&canton_t));
        }

        let mut miniature = Charge::new(kind, miniature_t, "y");
        miniature.size = 0.5;
        self.assign_palette(rng, &mut miniature, used, &canton_t);
        emblem.charges.push(miniature);
        emblem.ordinaries.push(Ordinary::new("canton", canton_t));
    }

    /// Charge kind selection: inherit, follow the thematic hint, or draw
    /// from the applicable group table.
    fn choose_charge_kind<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        parent: Option<&Emblem>,
        kinship: f64,
        hint: Option<&str>,
        broad: bool,
    ) -> String {
        if let Some(principal) = parent.and_then(|p| p.principal_charge()) {
            if gate(rng, kinship - 0.1) {
                return principal.kind.clone();
            }
        }
        if let Some(hint) = hint {
            if hint != "Generic" && gate(rng, 0.3) {
                if let Some(table) = self.catalog.charges.for_hint(hint) {
                    return table.pick(rng).to_string();
                }
            }
        }
        let set = if broad {
            self.catalog.charges.types()
        } else {
            self.catalog.charges.single()
        };
        self.select_charge(rng, set)
    }

    /// Fill t2/t3 to match the charge kind's declared color count:
    /// secondary tinctures are drawn fresh with probability 0.25 (then
    /// the tertiary with 0.5), else copy the primary; kinds declaring
    /// fewer colors carry no extras.
    fn assign_palette<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        charge: &mut Charge,
        used: &mut Vec<String>,
        reference: &Tincture,
    ) {
        let colors = self.catalog.charges.colors(&charge.kind).max(1);
        let primary = charge.tincture.clone();
        charge.t2 = (colors > 1).then(|| {
            if gate(rng, 0.25) {
                self.resolve_tincture(rng, Element::Charge, used, Some(reference))
            } else {
                primary.clone()
            }
        });
        charge.t3 = (colors > 2 && charge.t2.is_some()).then(|| {
            if gate(rng, 0.5) {
                self.resolve_tincture(rng, Element::Charge, used, Some(reference))
            } else {
                primary.clone()
            }
        });
    }

    /// Two-step charge draw: group, then kind within the group.
    pub(crate) fn select_charge<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        set: &WeightedTable,
    ) -> String {
        let group = set.pick(rng);
        if group == "inescutcheon" {
            return "inescutcheon".to_string();
        }
        match self.catalog.charges.group(group) {
            Some(table) => table.pick(rng).to_string(),
            None => group.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::check_emblem;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn compose_seeded(seed: u64) -> Emblem {
        let composer = Composer::new(Catalog::standard());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        composer.compose(&mut rng, None, 0.0, 0.0, None)
    }

    #[test]
    fn test_same_seed_reproduces_the_same_emblem() {
        for seed in 0..50 {
            assert_eq!(compose_seeded(seed), compose_seeded(seed));
        }
    }

    #[test]
    fn test_composed_emblems_are_structurally_valid() {
        let catalog = Catalog::standard();
        for seed in 0..400 {
            let emblem = compose_seeded(seed);
            let result = check_emblem(&emblem, catalog);
            assert!(
                !result.has_errors(),
                "seed {seed}: {:?}",
                result.iter().collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn test_orphan_compose_draws_from_base_catalog() {
        let catalog = Catalog::standard();
        let mut bare_seen = false;
        for seed in 0..300 {
            let emblem = compose_seeded(seed);
            match &emblem.field {
                Tincture::Plain(name) => {
                    assert!(catalog.tinctures.classify(name).is_some(), "field {name}");
                }
                Tincture::Pattern(spec) => {
                    assert!(catalog.patterns.supports(&spec.motif), "motif {}", spec.motif);
                    assert!(catalog.tinctures.classify(&spec.t1).is_some());
                    assert!(catalog.tinctures.classify(&spec.t2).is_some());
                }
            }
            if emblem.division.is_none() && emblem.ordinaries.is_empty() {
                bare_seen = true;
            }
        }
        assert!(bare_seen, "no field-and-charges-only emblem in 300 seeds");
    }

    #[test]
    fn test_t2_t3_follow_declared_color_counts() {
        let catalog = Catalog::standard();
        for seed in 0..400 {
            let emblem = compose_seeded(seed);
            for charge in &emblem.charges {
                let colors = catalog.charges.colors(&charge.kind);
                assert_eq!(
                    charge.t2.is_some(),
                    colors >= 2,
                    "seed {seed}, {} declares {colors} colors but t2={:?}",
                    charge.kind,
                    charge.t2
                );
                if charge.t3.is_some() {
                    assert!(charge.t2.is_some() && colors >= 3);
                }
            }
        }
    }

    #[test]
    fn test_divided_requires_a_division() {
        for seed in 0..400 {
            let emblem = compose_seeded(seed);
            if emblem.division.is_none() {
                for charge in &emblem.charges {
                    assert!(charge.divided.is_none(), "seed {seed}");
                }
                for ordinary in &emblem.ordinaries {
                    assert!(ordinary.divided.is_none(), "seed {seed}");
                }
            }
        }
    }

    #[test]
    fn test_per_pale_dimidiation_pairs_field_and_division() {
        let mut pairs = 0;
        for seed in 0..6000 {
            let emblem = compose_seeded(seed);
            let per_pale_or_fess = emblem
                .division
                .as_ref()
                .is_some_and(|d| d.kind == "perPale" || d.kind == "perFess");
            if !per_pale_or_fess || !emblem.ordinaries.is_empty() {
                continue;
            }
            if emblem.charges.first().and_then(|c| c.divided) == Some(DividedMode::Field) {
                if emblem.charges.len() > 1 {
                    assert_eq!(emblem.charges[1].divided, Some(DividedMode::Division));
                    pairs += 1;
                }
            }
        }
        assert!(pairs > 0, "dimidiation branch never taken in 6000 seeds");
    }

    #[test]
    fn test_bordure_ring_gets_honor_point_companion() {
        let mut companions = 0;
        let mut ring_cases = 0;
        for seed in 0..6000 {
            let emblem = compose_seeded(seed);
            if emblem.charges.first().map(|c| c.anchors.as_str()) != Some(BORDURE_RING) {
                continue;
            }
            ring_cases += 1;
            if emblem
                .charges
                .get(1)
                .is_some_and(|second| second.anchors == HONOR_POINT)
            {
                companions += 1;
            }
        }
        assert!(ring_cases > 0, "bordure ring never drawn in 6000 seeds");
        // The companion follows with probability 0.95.
        assert!(
            companions * 2 > ring_cases,
            "only {companions} of {ring_cases} ring cases got a companion"
        );
    }

    #[test]
    fn test_full_kinship_inherits_field() {
        let composer = Composer::new(Catalog::standard());
        let parent = compose_seeded(7);
        for seed in 0..50 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let child = composer.compose(&mut rng, Some(&parent), 1.0, 0.0, None);
            assert_eq!(child.field, parent.field);
        }
    }

    #[test]
    fn test_dominion_appends_canton_with_miniature() {
        let composer = Composer::new(Catalog::standard());
        // A parent that certainly carries a charge.
        let parent = (0..200)
            .map(compose_seeded)
            .find(|e| !e.charges.is_empty())
            .expect("some parent with charges");
        let mut seen = false;
        for seed in 0..100 {
            let mut rng = ChaCha8Rng::seed_from_u64(1000 + seed);
            let child = composer.compose(&mut rng, Some(&parent), 0.0, 1.0, None);
            let canton = child.ordinaries.iter().find(|o| o.kind == "canton");
            assert!(canton.is_some(), "dominion=1 must append a canton");
            let miniature = child.charges.last().expect("miniature charge");
            assert_eq!(miniature.anchors, "y");
            assert_eq!(miniature.size, 0.5);
            for charge in &child.charges[..child.charges.len() - 1] {
                assert!(
                    !charge.anchors.contains(|c| c == 'a' || c == 'j'),
                    "canton footprint not cleared: {}",
                    charge.anchors
                );
            }
            seen = true;
        }
        assert!(seen);
    }

    #[test]
    fn test_hint_steers_charge_selection() {
        let composer = Composer::new(Catalog::standard());
        let catalog = Catalog::standard();
        let naval: Vec<&str> = catalog.charges.for_hint("Naval").unwrap().keys().collect();
        let mut hits = 0;
        let mut total = 0;
        for seed in 0..2000 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let emblem = composer.compose(&mut rng, None, 0.0, 0.0, Some("Naval"));
            if let Some(charge) = emblem.principal_charge() {
                total += 1;
                if naval.contains(&charge.kind.as_str()) {
                    hits += 1;
                }
            }
        }
        // The hint fires with probability 0.3; anchors and swaps dilute
        // it a little, but naval charges must be clearly overrepresented.
        assert!(
            hits * 100 > total * 10,
            "only {hits}/{total} naval charges under a Naval hint"
        );
    }
}
