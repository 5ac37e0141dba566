//! Built-in storefront catalog.

use vitrine_core::DomainResult;

use crate::catalog::Catalog;

const SEED_JSON: &str = include_str!("../data/seed.json");

/// The storefront's fixed seed catalog: five furniture categories and ten products.
pub fn seed_catalog() -> DomainResult<Catalog> {
    Catalog::from_json(SEED_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_loads() {
        let catalog = seed_catalog().unwrap();
        assert_eq!(catalog.categories().len(), 5);
        assert_eq!(catalog.products().len(), 10);
        assert_eq!(catalog.featured().len(), 6);
    }
}
