use std::io;

use chrono::{DateTime, Utc};
use thiserror::Error;

mod config;
mod fixed;
mod mock;
mod table;

pub use config::*;
pub use fixed::*;
pub use mock::*;
pub use table::*;

use crate::repository::{self, BusCollection, BusRecord};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Zip error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("Csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
    #[error("Invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
    #[error(transparent)]
    Record(#[from] repository::Error),
}

/// Supplies the fleet. Each fetch yields a complete collection or fails as a whole.
pub trait BusSource {
    fn fetch(&self) -> Result<BusCollection, Error>;
}

/// Rejects the batch if any record breaks an invariant or was stamped after `now`.
pub(crate) fn collect(buses: Vec<BusRecord>, now: DateTime<Utc>) -> Result<BusCollection, Error> {
    for bus in &buses {
        bus.validate()?;
        bus.validate_timestamp(now)?;
    }
    Ok(BusCollection::new(buses)?)
}
