//! Runtime configuration, read from the environment at startup.

use std::path::PathBuf;

use anyhow::{Context, Result};

use vitrine_catalog::{seed_catalog, Catalog};

/// Path to a catalog JSON document to use instead of the built-in seed.
pub const CATALOG_ENV: &str = "VITRINE_CATALOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Self {
        let catalog_path = std::env::var_os(CATALOG_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { catalog_path }
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        let catalog = match &self.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read catalog {}", path.display()))?;
                Catalog::from_json(&json)
                    .with_context(|| format!("invalid catalog {}", path.display()))?
            }
            None => {
                tracing::info!("{CATALOG_ENV} not set; using built-in seed catalog");
                seed_catalog().context("built-in seed catalog is invalid")?
            }
        };

        tracing::info!(
            products = catalog.products().len(),
            categories = catalog.categories().len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}
