use std::{
    fs::File,
    io::{Read, Write},
    path::{Path, PathBuf},
    time::Instant,
};

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zip::ZipArchive;

use crate::{
    repository::{BusCollection, BusRecord, Status},
    shared::geo::Coordinate,
    source::{self, BusSource, CsvConfig},
};

/// One row of a bus table. Coordinates are flattened into two columns.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct CsvBus {
    pub id: u32,
    pub number: String,
    pub driver_name: String,
    pub total_seats: u16,
    pub occupied_seats: u16,
    pub route: String,
    pub current_location: String,
    pub latitude: f64,
    pub longitude: f64,
    pub speed: f64,
    pub status: Status,
    pub fuel: u8,
    /// RFC 3339.
    pub last_updated: String,
}

impl TryFrom<CsvBus> for BusRecord {
    type Error = source::Error;

    fn try_from(value: CsvBus) -> Result<Self, Self::Error> {
        let last_updated = DateTime::parse_from_rfc3339(&value.last_updated)
            .map_err(|_| source::Error::InvalidTimestamp(value.last_updated.clone()))?
            .with_timezone(&Utc);
        Ok(Self {
            id: value.id,
            number: value.number.into(),
            driver_name: value.driver_name.into(),
            total_seats: value.total_seats,
            occupied_seats: value.occupied_seats,
            route: value.route.into(),
            current_location: value.current_location.into(),
            coordinate: Coordinate::new(value.latitude, value.longitude),
            speed: value.speed,
            status: value.status,
            fuel: value.fuel,
            last_updated,
        })
    }
}

impl From<&BusRecord> for CsvBus {
    fn from(value: &BusRecord) -> Self {
        Self {
            id: value.id,
            number: value.number.to_string(),
            driver_name: value.driver_name.to_string(),
            total_seats: value.total_seats,
            occupied_seats: value.occupied_seats,
            route: value.route.to_string(),
            current_location: value.current_location.to_string(),
            latitude: value.coordinate.latitude,
            longitude: value.coordinate.longitude,
            speed: value.speed,
            status: value.status,
            fuel: value.fuel,
            last_updated: value.last_updated.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum StorageType {
    #[default]
    None,
    File(PathBuf),
    Zip(PathBuf),
}

/// Loads buses from a CSV table, either a plain file or an entry in a zip archive.
///
/// A single malformed or invalid row fails the whole fetch.
#[derive(Debug, Clone, Default)]
pub struct CsvSource {
    config: CsvConfig,
    storage: StorageType,
}

impl CsvSource {
    pub fn new(config: CsvConfig) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_file(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::File(path);
        self
    }

    pub fn from_zip(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Zip(path);
        self
    }

    /// Writes `buses` as a table this source can read back.
    pub fn write<W: Write>(&self, buses: &[BusRecord], writer: W) -> Result<(), source::Error> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.config.delimiter)
            .from_writer(writer);
        for bus in buses {
            writer.serialize(CsvBus::from(bus))?;
        }
        writer.flush()?;
        Ok(())
    }

    fn read_rows<R: Read>(&self, reader: R) -> Result<Vec<BusRecord>, source::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .from_reader(reader);
        reader
            .deserialize::<CsvBus>()
            .map(|row| BusRecord::try_from(row?))
            .collect()
    }

    fn read_zip(&self, path: &Path) -> Result<Vec<BusRecord>, source::Error> {
        let file = File::open(path)?;
        let mut archive = ZipArchive::new(file)?;
        let name = &self.config.file_name;
        let index = archive
            .index_for_name(name)
            .ok_or_else(|| source::Error::FileNotFound(name.to_string()))?;
        let entry = archive.by_index(index)?;
        self.read_rows(entry)
    }
}

impl BusSource for CsvSource {
    fn fetch(&self) -> Result<BusCollection, source::Error> {
        debug!("Loading buses...");
        let now = Instant::now();
        let buses = match &self.storage {
            StorageType::None => Vec::new(),
            StorageType::File(path) => self.read_rows(File::open(path)?)?,
            StorageType::Zip(path) => self.read_zip(path)?,
        };
        let collection = source::collect(buses, Utc::now())?;
        debug!("Loading {} buses took {:?}", collection.len(), now.elapsed());
        Ok(collection)
    }
}
