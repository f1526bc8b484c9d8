//! Static catalogs for composition and rendering.
//!
//! The catalog is the crate's registry: every weighted selection table,
//! classification, geometry template, and color value lives here, loaded
//! once and immutable afterwards. The composer and renderer only read
//! from it.

mod charges;
mod divisions;
mod lines;
mod ordinaries;
mod patterns;
mod positions;
mod shields;
mod templates;
mod tinctures;

use std::sync::OnceLock;

pub use charges::{ChargeCatalog, ChargeInfo};
pub use divisions::DivisionCatalog;
pub use lines::LineCatalog;
pub use ordinaries::{OrdinaryCatalog, OrdinaryInfo};
pub use patterns::PatternCatalog;
pub use positions::{
    size_for, PositionCatalog, BORDURE_RING, CANTON_STRIP, HONOR_POINT,
};
pub use shields::{ShieldCatalog, ShieldShape, DEFAULT_SHAPE};
pub use templates::TemplateCatalog;
pub use tinctures::{Element, TinctureCatalog};

/// Immutable lookup tables shared by the composer and renderer.
#[derive(Debug)]
pub struct Catalog {
    pub tinctures: TinctureCatalog,
    pub charges: ChargeCatalog,
    pub ordinaries: OrdinaryCatalog,
    pub divisions: DivisionCatalog,
    pub positions: PositionCatalog,
    pub shields: ShieldCatalog,
    pub lines: LineCatalog,
    pub patterns: PatternCatalog,
    pub templates: TemplateCatalog,
}

impl Catalog {
    /// Build the built-in dataset.
    pub fn build() -> Self {
        Self {
            tinctures: TinctureCatalog::standard(),
            charges: ChargeCatalog::standard(),
            ordinaries: OrdinaryCatalog::standard(),
            divisions: DivisionCatalog::standard(),
            positions: PositionCatalog::standard(),
            shields: ShieldCatalog::standard(),
            lines: LineCatalog::standard(),
            patterns: PatternCatalog::standard(),
            templates: TemplateCatalog::standard(),
        }
    }

    /// The process-wide catalog, built on first use.
    pub fn standard() -> &'static Catalog {
        static CATALOG: OnceLock<Catalog> = OnceLock::new();
        CATALOG.get_or_init(Catalog::build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_is_shared() {
        let a = Catalog::standard() as *const Catalog;
        let b = Catalog::standard() as *const Catalog;
        assert_eq!(a, b);
    }
}
