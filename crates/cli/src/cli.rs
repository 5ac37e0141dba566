//! Command-line surface: argument parsing and output rendering.

use std::io::Write;

use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};

use vitrine_catalog::{Catalog, CategoryFilter, FilterSpec, Product, Query, SortKey};
use vitrine_core::{CategoryId, Money, ProductId};

#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about = "Browse and search the Vitrine furniture catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search products by text, category, price range and sort order
    Search(SearchArgs),
    /// List categories
    Categories,
    /// Show one product
    Show {
        id: ProductId,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Text matched against product names and descriptions (blank lists everything)
    #[arg(default_value = "")]
    pub text: String,

    #[arg(long, conflicts_with = "featured")]
    pub category: Option<CategoryId>,

    /// Only featured products
    #[arg(long)]
    pub featured: bool,

    /// Inclusive lower price bound, e.g. 1000 or 1299.99
    #[arg(long)]
    pub min_price: Option<Money>,

    /// Inclusive upper price bound
    #[arg(long)]
    pub max_price: Option<Money>,

    #[arg(long, value_enum)]
    pub sort: Option<SortArg>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    #[value(name = "price_asc")]
    PriceAsc,
    #[value(name = "price_desc")]
    PriceDesc,
    #[value(name = "rating")]
    Rating,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::PriceAsc => SortKey::PriceAscending,
            SortArg::PriceDesc => SortKey::PriceDescending,
            SortArg::Rating => SortKey::RatingDescending,
        }
    }
}

impl SearchArgs {
    pub fn to_query(&self) -> Query {
        let category = match (&self.category, self.featured) {
            (_, true) => CategoryFilter::Featured,
            (Some(id), false) => CategoryFilter::ByCategory(id.clone()),
            (None, false) => CategoryFilter::Unconstrained,
        };

        let mut filter = FilterSpec::new()
            .with_category(category)
            .with_price_range(self.min_price, self.max_price);
        filter.sort = self.sort.map(SortKey::from);

        let query = Query::new(self.text.clone());
        if filter.has_active_filters() {
            query.with_filter(filter)
        } else {
            query
        }
    }
}

impl Command {
    pub fn run(&self, catalog: &Catalog, out: &mut impl Write) -> Result<()> {
        match self {
            Command::Search(args) => {
                let query = args.to_query();
                let results = catalog.search(&query);
                if args.json {
                    serde_json::to_writer_pretty(&mut *out, &results)?;
                    writeln!(out)?;
                } else {
                    write_summary(out, &query, results.len())?;
                    for product in &results {
                        write_product_line(out, product)?;
                    }
                }
            }
            Command::Categories => {
                for category in catalog.categories() {
                    let count = catalog
                        .products()
                        .iter()
                        .filter(|p| *p.category() == category.id)
                        .count();
                    writeln!(out, "{:>3}  {:<16} {count} produtos", category.id, category.name)?;
                }
            }
            Command::Show { id, json } => {
                let Some(product) = catalog.product(id) else {
                    bail!("product {id} not found");
                };
                if *json {
                    serde_json::to_writer_pretty(&mut *out, product)?;
                    writeln!(out)?;
                } else {
                    let category = catalog
                        .category(product.category())
                        .map(|c| c.name.as_str())
                        .unwrap_or("-");
                    writeln!(out, "{}", product.name())?;
                    writeln!(out, "{}", product.description())?;
                    writeln!(out, "Preço:      {}", product.price())?;
                    writeln!(out, "Categoria:  {category}")?;
                    writeln!(
                        out,
                        "Avaliação:  {:.1} ({} avaliações)",
                        product.rating(),
                        product.reviews()
                    )?;
                }
            }
        }
        Ok(())
    }
}

fn write_summary(out: &mut impl Write, query: &Query, count: usize) -> Result<()> {
    let noun = if count == 1 { "resultado" } else { "resultados" };
    if query.text.trim().is_empty() {
        writeln!(out, "{count} {noun}")?;
    } else {
        writeln!(out, "{count} {noun} para \"{}\"", query.text)?;
    }
    Ok(())
}

fn write_product_line(out: &mut impl Write, product: &Product) -> Result<()> {
    writeln!(
        out,
        "{:>3}  {:<28} {:>12}  ★{:.1}",
        product.id_typed(),
        product.name(),
        product.price().to_string(),
        product.rating()
    )?;
    Ok(())
}
