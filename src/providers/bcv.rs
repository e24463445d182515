use super::bcv_scraper::extract_rate;
use super::fetcher::{HttpPageFetcher, PageFetcher};
use crate::core::{Rate, RateProvider};
use async_trait::async_trait;
use tracing::{info, warn};
use url::Url;

/// USD/VES rates scraped from the BCV reference rate page.
pub struct BcvRateProvider<F: PageFetcher = HttpPageFetcher> {
    fetcher: F,
}

impl BcvRateProvider {
    pub fn new() -> Self {
        Self::with_fetcher(HttpPageFetcher::new())
    }
}

impl Default for BcvRateProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PageFetcher> BcvRateProvider<F> {
    pub fn with_fetcher(fetcher: F) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl<F: PageFetcher> RateProvider for BcvRateProvider<F> {
    async fn get_current_rate(&self, uri: &Url) -> Option<Rate> {
        info!("Getting new rate");

        let html = match self.fetcher.fetch(uri).await {
            Ok(html) => html,
            Err(e) => {
                warn!("Failed reading BCV page: {e}");
                return None;
            }
        };

        match extract_rate(&html) {
            Ok(rate) => Some(rate),
            Err(e) => {
                warn!("Could not extract rate from HTML: {e}");
                None
            }
        }
    }
}
