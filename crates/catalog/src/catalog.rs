//! Immutable catalog snapshot.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use vitrine_core::{CategoryId, DomainError, DomainResult, Entity, ProductId};

use crate::category::Category;
use crate::product::Product;
use crate::query::{query_catalog, Query};

/// JSON document shape: `{ "categories": [...], "products": [...] }`.
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    categories: Vec<Category>,
    products: Vec<Product>,
}

/// Validated set of products and categories.
///
/// Built once and then only read. Product ids and category ids are unique and
/// every product belongs to a known category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> DomainResult<Self> {
        let mut category_ids = HashSet::new();
        for category in &categories {
            if !category_ids.insert(category.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate category id {}",
                    category.id()
                )));
            }
        }

        let mut product_ids = HashSet::new();
        for product in &products {
            if !product_ids.insert(product.id()) {
                return Err(DomainError::validation(format!(
                    "duplicate product id {}",
                    product.id()
                )));
            }
            if !category_ids.contains(product.category()) {
                return Err(DomainError::invariant(format!(
                    "product {} references unknown category {}",
                    product.id(),
                    product.category()
                )));
            }
        }

        Ok(Self {
            categories,
            products,
        })
    }

    /// Parse and validate a catalog JSON document.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let doc: CatalogDocument = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed catalog document: {e}")))?;
        Self::new(doc.products, doc.categories)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id() == id)
    }

    /// Featured products in catalog order (home screen carousel).
    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_featured()).collect()
    }

    /// First `limit` products of a category in catalog order (home screen rows).
    pub fn shelf(&self, category: &CategoryId, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category() == category)
            .take(limit)
            .collect()
    }

    /// Run a query against this snapshot.
    pub fn search(&self, query: &Query) -> Vec<Product> {
        let results = query_catalog(&self.products, query);
        tracing::debug!(
            text = %query.text,
            filtered = query.filter.is_some(),
            catalog_size = self.products.len(),
            results = results.len(),
            "catalog query"
        );
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::NewProduct;
    use vitrine_core::Money;

    fn category(id: &str) -> Category {
        Category {
            id: CategoryId::new(id).unwrap(),
            name: format!("Category {id}"),
            icon: "sofa".to_string(),
        }
    }

    fn product(id: &str, category: &str) -> Product {
        Product::create(NewProduct {
            id: ProductId::new(id).unwrap(),
            name: format!("Product {id}"),
            description: String::new(),
            price: Money::from_cents(1_000),
            category: CategoryId::new(category).unwrap(),
            featured: id.len() % 2 == 0,
            rating: 4.0,
            reviews: 1,
        })
        .unwrap()
    }

    #[test]
    fn rejects_duplicate_product_ids() {
        let err = Catalog::new(vec![product("1", "a"), product("1", "a")], vec![category("a")])
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("duplicate product")));
    }

    #[test]
    fn rejects_duplicate_category_ids() {
        let err = Catalog::new(vec![], vec![category("a"), category("a")]).unwrap_err();
        assert!(matches!(err, DomainError::Validation(msg) if msg.contains("duplicate category")));
    }

    #[test]
    fn rejects_unknown_category_reference() {
        let err = Catalog::new(vec![product("1", "zzz")], vec![category("a")]).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
    }

    #[test]
    fn lookups_and_shelves() {
        let catalog = Catalog::new(
            vec![product("1", "a"), product("22", "b"), product("3", "a"), product("44", "a")],
            vec![category("a"), category("b")],
        )
        .unwrap();

        let id = ProductId::new("3").unwrap();
        assert_eq!(catalog.product(&id).map(|p| p.name()), Some("Product 3"));
        assert!(catalog.product(&ProductId::new("9").unwrap()).is_none());
        assert_eq!(
            catalog.category(&CategoryId::new("b").unwrap()).map(|c| c.name.as_str()),
            Some("Category b")
        );

        let shelf: Vec<&str> = catalog
            .shelf(&CategoryId::new("a").unwrap(), 2)
            .iter()
            .map(|p| p.id_typed().as_str())
            .collect();
        assert_eq!(shelf, vec!["1", "3"]);

        let featured: Vec<&str> = catalog
            .featured()
            .iter()
            .map(|p| p.id_typed().as_str())
            .collect();
        assert_eq!(featured, vec!["22", "44"]);
    }

    #[test]
    fn malformed_json_is_a_validation_error() {
        assert!(matches!(
            Catalog::from_json("{\"products\": 3}"),
            Err(DomainError::Validation(_))
        ));
    }
}
