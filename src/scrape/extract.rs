//! Extracts product name/price pairs out of catalog page markup.

use scraper::{Html, Selector};
use tracing::warn;

use crate::scrape::ScrapeError;

/// Transient name/price pair pulled from one page. Consumed within a single
/// ingestion pass; never persisted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapedItem {
    pub title: String,
    pub raw_price: String,
}

/// Finite iterator over the pairs extracted from one page. Each call to
/// [`extract_products`] re-parses the markup; the iterator itself cannot be
/// restarted.
pub struct ScrapedItems {
    inner: std::iter::Zip<std::vec::IntoIter<String>, std::vec::IntoIter<String>>,
}

impl Iterator for ScrapedItems {
    type Item = ScrapedItem;

    fn next(&mut self) -> Option<ScrapedItem> {
        self.inner
            .next()
            .map(|(title, raw_price)| ScrapedItem { title, raw_price })
    }
}

/// Selects all product-name and product-price elements and pairs them by
/// positional index (the i-th name with the i-th price).
///
/// When the two element counts differ, pairing truncates to the shorter count
/// and the unmatched tail is dropped with a warning. A page with no product
/// elements at all is a parse failure.
pub fn extract_products(html: &str) -> Result<ScrapedItems, ScrapeError> {
    let name_sel = Selector::parse("div.l-product__name").unwrap();
    let title_sel = Selector::parse(r#"span[itemprop="name"]"#).unwrap();
    let price_sel = Selector::parse("div.l-product__price-base").unwrap();

    let document = Html::parse_document(html);

    let titles: Vec<String> = document
        .select(&name_sel)
        .map(|el| {
            // The visible title lives in an itemprop span; fall back to the
            // element's own text when the span is missing.
            el.select(&title_sel)
                .next()
                .map(|span| span.text().collect::<String>())
                .unwrap_or_else(|| el.text().collect::<String>())
                .trim()
                .to_string()
        })
        .collect();

    let prices: Vec<String> = document
        .select(&price_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    if titles.is_empty() && prices.is_empty() {
        return Err(ScrapeError::Parse(
            "no product elements found in page".to_string(),
        ));
    }

    if titles.len() != prices.len() {
        warn!(
            names = titles.len(),
            prices = prices.len(),
            "product name/price element counts differ, unmatched tail dropped"
        );
    }

    Ok(ScrapedItems {
        inner: titles.into_iter().zip(prices),
    })
}
