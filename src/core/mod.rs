//! Core business logic abstractions

pub mod clock;
pub mod config;
pub mod conversion;
pub mod currency;
pub mod error;
pub mod freshness;
pub mod log;
pub mod rate;
pub mod state;

// Re-export main types for cleaner imports
pub use clock::{Clock, FixedClock, SystemClock};
pub use conversion::{Conversion, convert_all, select_rates_for_conversion};
pub use currency::{Currency, CurrencyAmount, Direction};
pub use rate::{Rate, RateProvider};
pub use state::CacheState;
