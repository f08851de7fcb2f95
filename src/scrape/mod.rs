//! Pulling a catalog page into scraped items: fetching the raw markup and
//! extracting name/price pairs out of it.

pub mod extract;
pub mod fetch;

pub use extract::{extract_products, ScrapedItem, ScrapedItems};
pub use fetch::PageFetcher;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("unexpected page markup: {0}")]
    Parse(String),
}
