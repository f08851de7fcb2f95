//! Centralized configuration (environment variables + defaults).

/// Catalog page scraped by the ingestion task.
pub fn catalog_url() -> String {
    std::env::var("CATALOG_URL")
        .unwrap_or_else(|_| "https://www.maxidom.ru/catalog/kran-buksy/".to_string())
}

/// Seconds between ingestion passes. Defaults to 12 hours.
pub fn scrape_interval_secs() -> u64 {
    std::env::var("SCRAPE_INTERVAL_SECS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(12 * 60 * 60)
        .max(1)
}

/// SQLite database URL. The file is created on first start if missing.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://catalog.db".to_string())
}

/// HTTP listen address.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}
