use serde::{Deserialize, Serialize};

use vitrine_catalog::Product;
use vitrine_core::{DomainError, DomainResult, Entity, Money, ProductId};

/// One cart line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    product: Product,
    quantity: u32,
}

impl CartItem {
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Always at least 1.
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line_total(&self) -> Money {
        self.product.price().times(self.quantity)
    }
}

/// Shopping cart. Lines keep the order in which products were first added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit; an existing line is incremented instead of duplicated.
    pub fn add(&mut self, product: Product) {
        self.add_units(product, 1);
    }

    pub fn add_quantity(&mut self, product: Product, quantity: u32) -> DomainResult<()> {
        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }
        self.add_units(product, quantity);
        Ok(())
    }

    pub fn increase(&mut self, id: &ProductId) -> DomainResult<()> {
        let line = self.line_mut(id)?;
        line.quantity = line.quantity.saturating_add(1);
        Ok(())
    }

    /// Remove one unit. A line at quantity 1 stays at 1; use [`Cart::remove`] to drop it.
    pub fn decrease(&mut self, id: &ProductId) -> DomainResult<()> {
        let line = self.line_mut(id)?;
        if line.quantity > 1 {
            line.quantity -= 1;
        }
        Ok(())
    }

    pub fn remove(&mut self, id: &ProductId) -> DomainResult<CartItem> {
        let i = self
            .position(id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} in cart")))?;
        Ok(self.items.remove(i))
    }

    pub fn lines(&self) -> &[CartItem] {
        &self.items
    }

    pub fn line(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.product.id() == id)
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// `quantity` must be at least 1.
    fn add_units(&mut self, product: Product, quantity: u32) {
        match self.position(product.id()) {
            Some(i) => {
                let line = &mut self.items[i];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.items.push(CartItem { product, quantity }),
        }
    }

    fn position(&self, id: &ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.product.id() == id)
    }

    fn line_mut(&mut self, id: &ProductId) -> DomainResult<&mut CartItem> {
        self.items
            .iter_mut()
            .find(|item| item.product.id() == id)
            .ok_or_else(|| DomainError::not_found(format!("product {id} in cart")))
    }
}
