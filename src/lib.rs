pub mod app;
pub mod domain;
pub mod infra;
pub mod scrape;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::ingest::IngestService;
pub use domain::price::normalize_price;
pub use domain::product::{Product, ProductPatch};
pub use scrape::{extract_products, PageFetcher, ScrapeError, ScrapedItem};
pub use storage::catalog::{CatalogStore, StoreError};
