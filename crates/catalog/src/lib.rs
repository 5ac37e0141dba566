//! Catalog domain module.
//!
//! Products, categories, the immutable catalog snapshot and the query engine
//! used by the search results screen. Everything here is deterministic domain
//! logic (no IO beyond parsing an in-memory JSON document).

pub mod catalog;
pub mod category;
pub mod product;
pub mod query;
pub mod seed;

pub use catalog::Catalog;
pub use category::Category;
pub use product::{NewProduct, Product};
pub use query::{query_catalog, CategoryFilter, FilterSpec, Query, SortKey};
pub use seed::seed_catalog;
