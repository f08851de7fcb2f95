//! Ingestion passes against a fixture catalog page served locally.
//! Repeat passes add nothing and changed source prices never propagate;
//! items with digitless prices are skipped without failing the pass.

use std::time::Duration;

use axum::response::Html;
use axum::routing::get;
use axum::Router;
use pricewatch::{CatalogStore, IngestService, PageFetcher};

const PAGE_V1: &str = r#"<html><body>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Kran buksa 1/2</span></div>
    <div class="l-product__price-base">350 ₽</div>
  </div>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Kran buksa 3/4</span></div>
    <div class="l-product__price-base">1 200 ₽</div>
  </div>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Smesitel Classic</span></div>
    <div class="l-product__price-base">2 499 ₽</div>
  </div>
</body></html>"#;

// Same three products as PAGE_V1 with every price changed.
const PAGE_V2: &str = r#"<html><body>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Kran buksa 1/2</span></div>
    <div class="l-product__price-base">400 ₽</div>
  </div>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Kran buksa 3/4</span></div>
    <div class="l-product__price-base">1 500 ₽</div>
  </div>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Smesitel Classic</span></div>
    <div class="l-product__price-base">2 999 ₽</div>
  </div>
</body></html>"#;

// The middle product's price has no digits and must be skipped.
const PAGE_BAD_PRICE: &str = r#"<html><body>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Kran buksa 1/2</span></div>
    <div class="l-product__price-base">350 ₽</div>
  </div>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Kran buksa 3/4</span></div>
    <div class="l-product__price-base">по запросу</div>
  </div>
  <div class="l-product">
    <div class="l-product__name"><span itemprop="name">Smesitel Classic</span></div>
    <div class="l-product__price-base">2 499 ₽</div>
  </div>
</body></html>"#;

async fn serve_fixture(html: &'static str) -> String {
    let router = Router::new().route("/catalog/", get(move || async move { Html(html) }));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}/catalog/", addr)
}

async fn temp_store(name: &str) -> CatalogStore {
    let path = std::env::temp_dir().join(format!(
        "pricewatch_ingest_{}_{}.db",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    CatalogStore::connect(&format!("sqlite://{}", path.display()))
        .await
        .expect("store connect")
}

fn service(store: &CatalogStore, url: String) -> IngestService {
    IngestService::new(
        PageFetcher::new().expect("fetcher"),
        store.clone(),
        url,
        Duration::from_secs(3600),
    )
}

#[tokio::test]
async fn repeat_pass_changes_nothing() -> anyhow::Result<()> {
    let store = temp_store("idempotent").await;
    let ingest = service(&store, serve_fixture(PAGE_V1).await);

    ingest.run_pass().await?;
    let after_first = store.list(0, 100).await?;
    assert_eq!(after_first.len(), 3);
    assert_eq!(after_first[0].name, "Kran buksa 1/2");
    assert_eq!(after_first[0].cost, 350);
    assert_eq!(after_first[1].name, "Kran buksa 3/4");
    assert_eq!(after_first[1].cost, 1200);
    assert_eq!(after_first[2].name, "Smesitel Classic");
    assert_eq!(after_first[2].cost, 2499);

    ingest.run_pass().await?;
    let after_second = store.list(0, 100).await?;
    assert_eq!(after_second, after_first);

    Ok(())
}

#[tokio::test]
async fn changed_source_prices_do_not_propagate() -> anyhow::Result<()> {
    let store = temp_store("stale_prices").await;

    service(&store, serve_fixture(PAGE_V1).await)
        .run_pass()
        .await?;
    service(&store, serve_fixture(PAGE_V2).await)
        .run_pass()
        .await?;

    // Known names are skipped wholesale, so first-capture costs stick.
    let records = store.list(0, 100).await?;
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].cost, 350);
    assert_eq!(records[1].cost, 1200);
    assert_eq!(records[2].cost, 2499);

    Ok(())
}

#[tokio::test]
async fn digitless_price_skips_only_that_item() -> anyhow::Result<()> {
    let store = temp_store("bad_price").await;

    service(&store, serve_fixture(PAGE_BAD_PRICE).await)
        .run_pass()
        .await?;

    let records = store.list(0, 100).await?;
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Kran buksa 1/2");
    assert_eq!(records[1].name, "Smesitel Classic");

    Ok(())
}

#[tokio::test]
async fn unreachable_source_fails_the_pass() {
    let store = temp_store("unreachable").await;

    // Nothing listens here; the pass must surface the network failure
    // instead of touching the store.
    let ingest = service(&store, "http://127.0.0.1:9/catalog/".to_string());
    assert!(ingest.run_pass().await.is_err());
    assert!(store.list(0, 100).await.expect("list").is_empty());
}
