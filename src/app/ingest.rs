//! The ingestion service.
//!
//! One pass pulls the configured catalog page and inserts every extracted
//! name/price pair the store has not seen yet. Existing records are left
//! untouched, so a price change on the source page never propagates to a
//! stored record.
//!
//! The background task re-runs a pass on a fixed interval until shutdown is
//! requested; the shutdown notification is honored at the top of each loop
//! iteration.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::interval;
use tracing::{debug, error, info, warn};

use crate::domain::price::normalize_price;
use crate::scrape::{extract_products, PageFetcher};
use crate::storage::catalog::CatalogStore;

pub struct IngestService {
    fetcher: PageFetcher,
    store: CatalogStore,
    catalog_url: String,
    pass_interval: Duration,
    shutdown: Arc<tokio::sync::Notify>,
}

impl IngestService {
    pub fn new(
        fetcher: PageFetcher,
        store: CatalogStore,
        catalog_url: String,
        pass_interval: Duration,
    ) -> Self {
        Self {
            fetcher,
            store,
            catalog_url,
            pass_interval,
            shutdown: Arc::new(tokio::sync::Notify::new()),
        }
    }

    /// Starts the background task that runs ingestion passes forever.
    ///
    /// The first pass runs immediately; a failed pass is logged and the task
    /// stays alive for the next scheduled one.
    pub fn start_background_task(self: Arc<Self>) {
        tokio::spawn(async move {
            let mut timer = interval(self.pass_interval);
            let shutdown = self.shutdown.clone();

            loop {
                tokio::select! {
                    _ = timer.tick() => {
                        if let Err(e) = self.run_pass().await {
                            error!("ingestion pass failed: {e:#}");
                        }
                    }
                    _ = shutdown.notified() => {
                        info!("ingestion task shutting down");
                        break;
                    }
                }
            }
        });
    }

    /// One full fetch, extract, normalize, upsert-if-absent cycle.
    pub async fn run_pass(&self) -> anyhow::Result<()> {
        let html = self.fetcher.fetch(&self.catalog_url).await?;

        let mut inserted = 0usize;
        let mut existing = 0usize;
        let mut skipped = 0usize;

        for item in extract_products(&html)? {
            let cost = match normalize_price(&item.raw_price) {
                Ok(cost) => cost,
                Err(e) => {
                    // One bad price never fails the pass.
                    warn!(title = %item.title, "skipping item: {e}");
                    skipped += 1;
                    continue;
                }
            };

            match self.store.insert_if_absent(&item.title, cost).await? {
                Some(product) => {
                    debug!(id = product.id, name = %product.name, cost = product.cost, "added product");
                    inserted += 1;
                }
                None => existing += 1,
            }
        }

        info!(inserted, existing, skipped, "ingestion pass complete");
        Ok(())
    }

    /// Stops the background task at its next loop iteration.
    pub fn shutdown(&self) {
        self.shutdown.notify_one();
    }
}
