// src/store/directory.rs

use crate::domain::listing::Listing;
use crate::errors::ServerError;
use crate::store::{ListingSource, ListingStore, SourceError};
use std::sync::{Arc, RwLock};
use std::thread::JoinHandle;

/// Shared handle to the listing store, cheap to clone into every worker.
#[derive(Clone)]
pub struct Directory {
    store: Arc<RwLock<ListingStore>>,
}

impl Directory {
    /// A directory whose collection has not arrived yet.
    pub fn pending() -> Self {
        Self {
            store: Arc::new(RwLock::new(ListingStore::pending())),
        }
    }

    /// A directory seeded synchronously.
    pub fn ready(listings: Vec<Listing>) -> Result<Self, SourceError> {
        Ok(Self {
            store: Arc::new(RwLock::new(ListingStore::from_listings(listings)?)),
        })
    }

    /// Fetch the collection on a background thread. Until it finishes the
    /// store reports itself as loading.
    pub fn load<S>(&self, source: S) -> JoinHandle<()>
    where
        S: ListingSource + Send + 'static,
    {
        let directory = self.clone();

        std::thread::spawn(move || {
            tracing::debug!("listing load started");
            let result = source.fetch();

            let outcome = directory.write(|store| {
                store.finish_load(result);
                Ok(())
            });
            if let Err(e) = outcome {
                tracing::error!("could not install loaded listings: {e}");
            }
        })
    }

    /// Run `f` with shared access to the store.
    pub fn read<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&ListingStore) -> Result<T, ServerError>,
    {
        let store = self.store.read().map_err(|_| ServerError::InternalError)?;
        f(&*store)
    }

    /// Run `f` with exclusive access to the store. The whole closure is one
    /// atomic step as far as readers are concerned.
    pub fn write<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&mut ListingStore) -> Result<T, ServerError>,
    {
        let mut store = self.store.write().map_err(|_| ServerError::InternalError)?;
        f(&mut *store)
    }
}
