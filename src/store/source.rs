// src/store/source.rs

use crate::domain::listing::Listing;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Bundled directory dataset.
const SEED_LISTINGS: &str = include_str!("../../data/listings.json");

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read listings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed listings data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate listing id {0}")]
    DuplicateId(i64),
    #[error("listing {0} was last updated before it was submitted")]
    InvalidTimestamps(i64),
}

/// Where the initial collection comes from.
pub trait ListingSource {
    fn fetch(&self) -> Result<Vec<Listing>, SourceError>;
}

/// JSON dataset, either embedded in the binary or read from disk, delivered
/// after an optional artificial latency.
#[derive(Debug, Clone, Default)]
pub struct SeedSource {
    path: Option<PathBuf>,
    delay: Duration,
}

impl SeedSource {
    pub fn embedded() -> Self {
        Self::default()
    }

    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl ListingSource for SeedSource {
    fn fetch(&self) -> Result<Vec<Listing>, SourceError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }

        match &self.path {
            Some(path) => parse_listings(&fs::read_to_string(path)?),
            None => seed_listings(),
        }
    }
}

pub fn parse_listings(json: &str) -> Result<Vec<Listing>, SourceError> {
    Ok(serde_json::from_str(json)?)
}

/// The bundled dataset, without latency.
pub fn seed_listings() -> Result<Vec<Listing>, SourceError> {
    parse_listings(SEED_LISTINGS)
}
