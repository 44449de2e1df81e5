use std::sync::Arc;

mod criteria;
mod handle;
mod query;
mod summary;

pub use criteria::*;
pub use handle::*;
pub use query::*;
pub use summary::*;

use crate::{
    repository::{BusCollection, BusRecord, Error, Occupancy},
    shared::geo::{Coordinate, Distance},
};

/// Read-only query surface over one snapshot of the fleet.
///
/// Holding a `BusDirectory` keeps its snapshot alive, so a query never sees
/// a collection change underneath it. Cloning only bumps a reference count.
#[derive(Debug, Clone, Default)]
pub struct BusDirectory {
    collection: Arc<BusCollection>,
}

impl From<Arc<BusCollection>> for BusDirectory {
    fn from(collection: Arc<BusCollection>) -> Self {
        Self { collection }
    }
}

impl From<BusCollection> for BusDirectory {
    fn from(collection: BusCollection) -> Self {
        Self::new(collection)
    }
}

impl BusDirectory {
    pub fn new(collection: BusCollection) -> Self {
        Self {
            collection: Arc::new(collection),
        }
    }

    pub fn collection(&self) -> &Arc<BusCollection> {
        &self.collection
    }

    pub fn len(&self) -> usize {
        self.collection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// See [`search`].
    pub fn search(&self, criteria: &QueryCriteria) -> Vec<&BusRecord> {
        search(&self.collection, criteria)
    }

    /// See [`find_by_number_or_id`].
    /// None means the caller should show a "bus not found" state.
    pub fn find_by_number_or_id(&self, token: &str) -> Option<&BusRecord> {
        find_by_number_or_id(&self.collection, token)
    }

    pub fn count_by_status(&self) -> Result<StatusCounts, Error> {
        count_by_status(&self.collection)
    }

    /// Occupancy of the bus with the given id, None if there is no such bus.
    pub fn occupancy_by_id(&self, id: u32) -> Option<Result<Occupancy, Error>> {
        self.bus_by_id(id).map(compute_occupancy)
    }

    pub fn bus_by_id(&self, id: u32) -> Option<&BusRecord> {
        self.collection.bus_by_id(id)
    }

    pub fn bus_by_number(&self, number: &str) -> Option<&BusRecord> {
        self.collection.bus_by_number(number)
    }

    pub fn quick_access(&self) -> Vec<&BusRecord> {
        quick_access(&self.collection)
    }

    pub fn buses_near(&self, coordinate: &Coordinate, radius: Distance) -> Vec<(&BusRecord, Distance)> {
        buses_near(&self.collection, coordinate, radius)
    }
}
