use std::{
    sync::{Arc, PoisonError, RwLock},
    time::Instant,
};

use tracing::{debug, warn};

use crate::{
    directory::BusDirectory,
    repository::BusCollection,
    source::{self, BusSource},
};

/// Holds the current fleet snapshot and swaps in replacements whole.
///
/// Readers take a [`BusDirectory`] via [`SharedDirectory::snapshot`] and keep
/// querying it even if a refresh happens meanwhile.
#[derive(Debug, Default)]
pub struct SharedDirectory {
    current: RwLock<Arc<BusCollection>>,
}

impl SharedDirectory {
    pub fn new(collection: BusCollection) -> Self {
        Self {
            current: RwLock::new(Arc::new(collection)),
        }
    }

    /// Builds a directory from the first fetch of `source`.
    pub fn load<S: BusSource + ?Sized>(source: &S) -> Result<Self, source::Error> {
        Ok(Self::new(source.fetch()?))
    }

    pub fn snapshot(&self) -> BusDirectory {
        // The lock only guards an Arc swap, a poisoned guard still holds a whole value.
        let current = self.current.read().unwrap_or_else(PoisonError::into_inner);
        BusDirectory::from(Arc::clone(&current))
    }

    pub fn replace(&self, collection: BusCollection) {
        let collection = Arc::new(collection);
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = collection;
    }

    /// Fetches a full replacement and swaps it in, returning its size.
    /// If the fetch fails the previous snapshot stays in place.
    pub fn refresh<S: BusSource + ?Sized>(&self, source: &S) -> Result<usize, source::Error> {
        debug!("Refreshing buses...");
        let now = Instant::now();
        match source.fetch() {
            Ok(collection) => {
                let len = collection.len();
                self.replace(collection);
                debug!("Refreshing {len} buses took {:?}", now.elapsed());
                Ok(len)
            }
            Err(err) => {
                warn!("Refresh failed, keeping previous buses: {err}");
                Err(err)
            }
        }
    }
}
