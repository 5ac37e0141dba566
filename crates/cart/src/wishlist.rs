use serde::{Deserialize, Serialize};

use vitrine_catalog::Product;
use vitrine_core::{DomainError, DomainResult, Entity, ProductId};

/// Saved-for-later products, in the order they were saved. No duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` if the product was already saved.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(product.id()) {
            return false;
        }
        self.items.push(product);
        true
    }

    pub fn remove(&mut self, id: &ProductId) -> DomainResult<Product> {
        let i = self
            .items
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} in wishlist")))?;
        Ok(self.items.remove(i))
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| p.id() == id)
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
