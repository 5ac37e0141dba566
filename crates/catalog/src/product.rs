use serde::{Deserialize, Serialize};

use vitrine_core::{CategoryId, DomainError, Entity, Money, ProductId};

/// Highest rating a product can carry (five stars).
pub const MAX_RATING: f64 = 5.0;

/// Input for building a [`Product`]; also the shape of a product in catalog JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: CategoryId,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u32,
}

/// Catalog product.
///
/// Immutable once built: the catalog is a fixed snapshot and no operation
/// mutates a product in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewProduct")]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    price: Money,
    category: CategoryId,
    featured: bool,
    rating: f64,
    reviews: u32,
}

impl Product {
    /// Validate and build a product.
    pub fn create(new: NewProduct) -> Result<Self, DomainError> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                new.id
            )));
        }

        if !new.rating.is_finite() || !(0.0..=MAX_RATING).contains(&new.rating) {
            return Err(DomainError::validation(format!(
                "product {}: rating must be between 0 and {MAX_RATING}",
                new.id
            )));
        }

        Ok(Self {
            id: new.id,
            name: new.name,
            description: new.description,
            price: new.price,
            category: new.category,
            featured: new.featured,
            rating: new.rating,
            reviews: new.reviews,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn category(&self) -> &CategoryId {
        &self.category
    }

    pub fn is_featured(&self) -> bool {
        self.featured
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn reviews(&self) -> u32 {
        self.reviews
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewProduct> for Product {
    type Error = DomainError;

    fn try_from(value: NewProduct) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}
