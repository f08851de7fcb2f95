//! Fetches the raw catalog page over HTTP.

use std::time::Duration;

use crate::scrape::ScrapeError;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

// A hung remote must not stall an ingestion pass indefinitely.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct PageFetcher {
    client: reqwest::Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    /// Returns the full response body as text. Connection failures, timeouts
    /// and non-success statuses all fail the fetch; there is no retry here.
    pub async fn fetch(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
