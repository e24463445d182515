pub mod bcv;
pub mod bcv_scraper;
pub mod fetcher;

pub use bcv::BcvRateProvider;
pub use fetcher::{HttpPageFetcher, PageFetcher};
