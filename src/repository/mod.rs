use std::{
    collections::{HashMap, HashSet},
    ops::Deref,
    time::Instant,
};

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

mod models;
pub use models::*;

use crate::shared::geo::Coordinate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Bus {id} is invalid: {violation}")]
    InvalidRecord { id: u32, violation: Violation },
    #[error("Unsupported status filter: {0:?}")]
    InvalidCriteria(String),
    #[error("Bus id {0} appears more than once")]
    DuplicateId(u32),
    #[error("Bus number {0} appears more than once")]
    DuplicateNumber(String),
}

/// The specific invariant a [`BusRecord`] breaks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Violation {
    #[error("id must be at least 1")]
    ZeroId,
    #[error("number {0:?} is not of the form BUS-###")]
    MalformedNumber(String),
    #[error("driver name is empty")]
    EmptyDriverName,
    #[error("route is empty")]
    EmptyRoute,
    #[error("current location is empty")]
    EmptyLocation,
    #[error("total seats is zero")]
    ZeroSeats,
    #[error("{occupied} seats occupied out of {total}")]
    OverOccupied { occupied: u16, total: u16 },
    #[error("coordinate {0} is outside WGS84 bounds")]
    InvalidCoordinate(Coordinate),
    #[error("speed {0} km/h is not a non-negative number")]
    InvalidSpeed(f64),
    #[error("fuel {0}% is above 100")]
    FuelOutOfRange(u8),
    #[error("last update {0} lies in the future")]
    FutureTimestamp(DateTime<Utc>),
}

/// Lowercase copies of the text fields a free-text search looks at.
#[derive(Debug, Clone, Default)]
pub(crate) struct SearchKeys {
    pub number: Box<str>,
    pub driver_name: Box<str>,
    pub route: Box<str>,
}

impl SearchKeys {
    fn new(record: &BusRecord) -> Self {
        Self {
            number: record.number.to_lowercase().into(),
            driver_name: record.driver_name.to_lowercase().into(),
            route: record.route.to_lowercase().into(),
        }
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.number.contains(needle)
            || self.driver_name.contains(needle)
            || self.route.contains(needle)
    }
}

/// An ordered, immutable set of buses keyed by id.
///
/// Built once per fetch and shared behind an `Arc`. A refresh builds a new
/// collection rather than editing this one.
#[derive(Debug, Clone, Default)]
pub struct BusCollection {
    buses: Box<[BusRecord]>,
    keys: Box<[SearchKeys]>,
    id_lookup: HashMap<u32, usize>,
}

impl BusCollection {
    pub fn new(buses: Vec<BusRecord>) -> Result<Self, Error> {
        debug!("Indexing {} buses...", buses.len());
        let now = Instant::now();
        let mut id_lookup: HashMap<u32, usize> = HashMap::with_capacity(buses.len());
        // Numbers are unique regardless of case.
        let mut numbers: HashSet<&str> = HashSet::new();
        let keys: Box<[SearchKeys]> = buses.iter().map(SearchKeys::new).collect();

        for (i, (bus, key)) in buses.iter().zip(keys.iter()).enumerate() {
            if id_lookup.insert(bus.id, i).is_some() {
                return Err(Error::DuplicateId(bus.id));
            }
            if !numbers.insert(&key.number) {
                return Err(Error::DuplicateNumber(bus.number.to_string()));
            }
        }

        debug!("Indexing buses took {:?}", now.elapsed());
        Ok(Self {
            buses: buses.into(),
            keys,
            id_lookup,
        })
    }

    pub fn empty() -> Self {
        Default::default()
    }

    pub fn buses(&self) -> &[BusRecord] {
        &self.buses
    }

    /// Get a bus with the given id.
    /// If no bus is found with the given id None is returned.
    pub fn bus_by_id(&self, id: u32) -> Option<&BusRecord> {
        let index = self.id_lookup.get(&id)?;
        Some(&self.buses[*index])
    }

    /// Get a bus whose number is exactly `number`, case included.
    pub fn bus_by_number(&self, number: &str) -> Option<&BusRecord> {
        self.buses.iter().find(|bus| &*bus.number == number)
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (&BusRecord, &SearchKeys)> {
        self.buses.iter().zip(self.keys.iter())
    }

    pub(crate) fn keys(&self) -> &[SearchKeys] {
        &self.keys
    }

    /// Checks every record, reporting the first invalid one in collection order.
    pub fn validate(&self) -> Result<(), Error> {
        self.buses.iter().try_for_each(BusRecord::validate)
    }
}

impl Deref for BusCollection {
    type Target = [BusRecord];

    fn deref(&self) -> &Self::Target {
        &self.buses
    }
}

impl TryFrom<Vec<BusRecord>> for BusCollection {
    type Error = Error;

    fn try_from(value: Vec<BusRecord>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
