//! Query engine for a campus bus fleet.
//!
//! A [`source::BusSource`] produces an immutable [`repository::BusCollection`],
//! which a [`directory::BusDirectory`] answers searches, lookups and summaries
//! over. [`directory::SharedDirectory`] swaps in fresh collections without
//! disturbing readers.

pub mod directory;
pub mod repository;
pub mod shared;
pub mod source;

pub mod prelude {
    pub use crate::directory::{BusDirectory, QueryCriteria, SharedDirectory, StatusCounts};
    pub use crate::repository::{BusCollection, BusRecord, FuelLevel, Occupancy, Status};
    pub use crate::shared::geo::{Coordinate, Distance};
    pub use crate::source::{BusSource, CsvSource, FixedSource, MockSource};
}
