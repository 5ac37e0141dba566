//! Catalog query engine.
//!
//! [`query_catalog`] is the whole of the storefront's search: a text match over
//! name and description, attribute filters (category / featured / price
//! range), then an optional sort. It is a pure function over a catalog
//! snapshot; the search screen's filter panel state lives in [`FilterSpec`]
//! and is passed in by the caller.

use serde::{Deserialize, Serialize};

use vitrine_core::{CategoryId, Money};

use crate::product::Product;

/// Category constraint of a [`FilterSpec`].
///
/// `Featured` is a separate variant rather than a magic category id, so a real
/// category whose id happens to be `"featured"` is still matched by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    Unconstrained,
    Featured,
    ByCategory(CategoryId),
}

/// Result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    #[serde(rename = "price_asc")]
    PriceAscending,
    #[serde(rename = "price_desc")]
    PriceDescending,
    #[serde(rename = "rating")]
    RatingDescending,
}

/// Category, price and sort constraints applied after text matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSpec {
    #[serde(default)]
    pub category: CategoryFilter,
    #[serde(default)]
    pub min_price: Option<Money>,
    #[serde(default)]
    pub max_price: Option<Money>,
    /// `None` keeps catalog order.
    #[serde(default)]
    pub sort: Option<SortKey>,
}

impl FilterSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category; selecting the active one again clears it.
    pub fn toggle_category(&mut self, id: CategoryId) {
        self.category = match &self.category {
            CategoryFilter::ByCategory(current) if *current == id => CategoryFilter::Unconstrained,
            _ => CategoryFilter::ByCategory(id),
        };
    }

    /// Select featured-only; selecting it again clears the category constraint.
    pub fn toggle_featured(&mut self) {
        self.category = match self.category {
            CategoryFilter::Featured => CategoryFilter::Unconstrained,
            _ => CategoryFilter::Featured,
        };
    }

    /// Select a sort key; selecting the active one again restores catalog order.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = if self.sort == Some(key) { None } else { Some(key) };
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Inclusive price bounds; `None` leaves that side unbounded.
    pub fn with_price_range(mut self, min: Option<Money>, max: Option<Money>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn has_active_filters(&self) -> bool {
        self.category != CategoryFilter::Unconstrained
            || self.min_price.is_some()
            || self.max_price.is_some()
            || self.sort.is_some()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    fn admits(&self, product: &Product) -> bool {
        let category_ok = match &self.category {
            CategoryFilter::Unconstrained => true,
            CategoryFilter::Featured => product.is_featured(),
            CategoryFilter::ByCategory(id) => product.category() == id,
        };

        category_ok
            && self.min_price.is_none_or(|min| product.price() >= min)
            && self.max_price.is_none_or(|max| product.price() <= max)
    }
}

/// Free-text query plus optional filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub filter: Option<FilterSpec>,
}

impl Query {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            filter: None,
        }
    }

    /// Build a query from search box input.
    ///
    /// Returns `None` for blank input: the search is not submitted.
    pub fn from_search_box(raw: &str, filter: Option<FilterSpec>) -> Option<Self> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        Some(Self {
            text: text.to_string(),
            filter,
        })
    }

    /// Empty-text query listing everything the filter admits ("see all" links).
    pub fn browse(filter: FilterSpec) -> Self {
        Self {
            text: String::new(),
            filter: Some(filter),
        }
    }

    pub fn with_filter(mut self, filter: FilterSpec) -> Self {
        self.filter = Some(filter);
        self
    }
}

/// Run `query` against a catalog snapshot.
///
/// Stages, in order:
/// 1. text: blank text admits everything; otherwise the lowercased name or
///    description must contain the lowercased text. Accents are not folded,
///    so `"sofa"` does not match `"Sofá"`.
/// 2. filter: category / featured, then inclusive price bounds. A minimum
///    above the maximum simply yields nothing.
/// 3. sort: stable, so ties keep catalog order.
///
/// The input is never mutated; the result is a fresh vector.
pub fn query_catalog(catalog: &[Product], query: &Query) -> Vec<Product> {
    let needle = if query.text.trim().is_empty() {
        None
    } else {
        Some(query.text.to_lowercase())
    };

    let mut results: Vec<Product> = catalog
        .iter()
        .filter(|p| needle.as_deref().is_none_or(|n| matches_text(p, n)))
        .filter(|p| query.filter.as_ref().is_none_or(|f| f.admits(p)))
        .cloned()
        .collect();

    if let Some(key) = query.filter.as_ref().and_then(|f| f.sort) {
        sort_products(&mut results, key);
    }

    results
}

fn matches_text(product: &Product, needle: &str) -> bool {
    product.name().to_lowercase().contains(needle)
        || product.description().to_lowercase().contains(needle)
}

fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::PriceAscending => products.sort_by_key(|p| p.price()),
        SortKey::PriceDescending => products.sort_by(|a, b| b.price().cmp(&a.price())),
        SortKey::RatingDescending => products.sort_by(|a, b| b.rating().total_cmp(&a.rating())),
    }
}
