pub mod directory;
pub mod source;

pub use directory::Directory;
pub use source::{ListingSource, SeedSource, SourceError};

use crate::domain::listing::{Listing, ListingStatus};
use crate::domain::ListingPatch;
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use std::collections::HashSet;

/// Progress of the initial load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Ready,
    Failed(String),
}

/// The authoritative in-memory collection of listings.
///
/// Mutations on an id that is not in the collection are silent no-ops and
/// report `false`.
#[derive(Debug)]
pub struct ListingStore {
    state: LoadState,
    listings: Vec<Listing>,
}

impl ListingStore {
    pub fn pending() -> Self {
        Self {
            state: LoadState::Pending,
            listings: Vec::new(),
        }
    }

    pub fn from_listings(listings: Vec<Listing>) -> Result<Self, SourceError> {
        validate(&listings)?;
        Ok(Self {
            state: LoadState::Ready,
            listings,
        })
    }

    /// Install the outcome of a load. The collection is only ever seeded once;
    /// later calls are ignored.
    pub fn finish_load(&mut self, result: Result<Vec<Listing>, SourceError>) {
        if self.state != LoadState::Pending {
            tracing::warn!("listing store already loaded, ignoring second load");
            return;
        }

        match result.and_then(|listings| validate(&listings).map(|_| listings)) {
            Ok(listings) => {
                tracing::info!(count = listings.len(), "listings loaded");
                self.listings = listings;
                self.state = LoadState::Ready;
            }
            Err(e) => {
                tracing::error!("failed to load listings: {e}");
                self.state = LoadState::Failed(e.to_string());
            }
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Pending
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: i64) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: i64) -> Option<&mut Listing> {
        self.listings.iter_mut().find(|l| l.id == id)
    }

    /// Listings awaiting moderation across the whole collection.
    pub fn pending_count(&self) -> usize {
        self.listings
            .iter()
            .filter(|l| l.status == ListingStatus::Pending)
            .count()
    }

    pub fn update_status(
        &mut self,
        id: i64,
        status: ListingStatus,
        now: DateTime<Utc>,
    ) -> Result<bool, ServerError> {
        let Some(listing) = self.get_mut(id) else {
            tracing::debug!(listing_id = id, "status change for unknown listing ignored");
            return Ok(false);
        };

        let from = listing.status;
        listing.set_status(status, now)?;
        tracing::info!(listing_id = id, %from, to = %status, "listing status changed");
        Ok(true)
    }

    pub fn update_fields(
        &mut self,
        id: i64,
        patch: ListingPatch,
        now: DateTime<Utc>,
    ) -> Result<bool, ServerError> {
        let Some(listing) = self.get_mut(id) else {
            tracing::debug!(listing_id = id, "edit for unknown listing ignored");
            return Ok(false);
        };

        patch.apply(listing, now)?;
        tracing::info!(listing_id = id, "listing updated");
        Ok(true)
    }

    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.listings.len();
        self.listings.retain(|l| l.id != id);

        let removed = self.listings.len() != before;
        if removed {
            tracing::info!(listing_id = id, "listing deleted");
        } else {
            tracing::debug!(listing_id = id, "delete for unknown listing ignored");
        }
        removed
    }
}

fn validate(listings: &[Listing]) -> Result<(), SourceError> {
    let mut seen = HashSet::with_capacity(listings.len());
    for listing in listings {
        if !seen.insert(listing.id) {
            return Err(SourceError::DuplicateId(listing.id));
        }
        if listing.last_updated < listing.submitted_at {
            return Err(SourceError::InvalidTimestamps(listing.id));
        }
    }
    Ok(())
}
