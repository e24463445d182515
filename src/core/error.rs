//! Error types for the rate pipeline.

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Transport failure while downloading a page.
#[derive(Debug, Error)]
#[error("Problem loading {uri}: {message}")]
pub struct FetchError {
    pub uri: String,
    pub message: String,
}

/// The page markup did not have the expected shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("No dolar element")]
    NoRateElement,

    #[error("Problem parsing usd multiplier: {0}")]
    MultiplierParse(String),

    #[error("No date element: {0}")]
    NoDateElement(String),

    #[error("No date or date in bad format: {0}")]
    DateParse(String),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Problem reading {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Problem writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed data in {}: {reason}", path.display())]
    MalformedRecord { path: PathBuf, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// An inverse conversion hit a zero multiplier.
    #[error("Can not make this conversion with rate 0 (rate of {date})")]
    DivisionByZeroRate { date: NaiveDate },

    #[error("Conversion overflowed using the rate of {date}")]
    Overflow { date: NaiveDate },
}
