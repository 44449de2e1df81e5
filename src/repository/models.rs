use std::{fmt::Display, str::FromStr, sync::Arc};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    repository::{Error, Violation},
    shared::geo::Coordinate,
};

/// The operational state of a bus. Exactly one applies at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Status {
    Running,
    Stopped,
    #[serde(rename = "In Service")]
    InService,
    Maintenance,
}

impl Status {
    /// Every status, in the order the fleet screens list them.
    pub const ALL: [Status; 4] = [
        Status::Running,
        Status::Stopped,
        Status::InService,
        Status::Maintenance,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Running => "Running",
            Status::Stopped => "Stopped",
            Status::InService => "In Service",
            Status::Maintenance => "Maintenance",
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    /// Labels are matched exactly, no case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidCriteria(s.to_string()))
    }
}

/// Coarse fuel band used when showing a fuel gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FuelLevel {
    High,
    Medium,
    Low,
}

impl From<u8> for FuelLevel {
    fn from(fuel: u8) -> Self {
        match fuel {
            51.. => FuelLevel::High,
            26..=50 => FuelLevel::Medium,
            _ => FuelLevel::Low,
        }
    }
}

/// Seat availability derived from a single record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Occupancy {
    pub available_seats: u16,
    /// Rounded half-up, always within `0..=100`.
    pub occupancy_percent: u8,
}

/// A snapshot of one tracked vehicle.
///
/// Records are never edited in place. Cloning is cheap since every string is
/// shared.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRecord {
    pub id: u32,
    /// Display number, `BUS-` followed by at least three digits (e.g. "BUS-007").
    pub number: Arc<str>,
    pub driver_name: Arc<str>,
    pub total_seats: u16,
    pub occupied_seats: u16,
    /// Human readable corridor, e.g. "Admin Block - Library - Science Block".
    pub route: Arc<str>,
    pub current_location: Arc<str>,
    #[serde(rename = "coordinates")]
    pub coordinate: Coordinate,
    /// Kilometers per hour.
    pub speed: f64,
    pub status: Status,
    /// Percentage, `0..=100`.
    pub fuel: u8,
    pub last_updated: DateTime<Utc>,
}

impl BusRecord {
    /// Checks every field invariant that does not depend on the clock.
    pub fn validate(&self) -> Result<(), Error> {
        self.check().map_err(|violation| self.invalid(violation))
    }

    /// Rejects records stamped later than `now`.
    pub fn validate_timestamp(&self, now: DateTime<Utc>) -> Result<(), Error> {
        if self.last_updated > now {
            return Err(self.invalid(Violation::FutureTimestamp(self.last_updated)));
        }
        Ok(())
    }

    /// Seats left and share of seats taken.
    ///
    /// Fails on zero seats or when more seats are occupied than exist.
    pub fn occupancy(&self) -> Result<Occupancy, Error> {
        if self.total_seats == 0 {
            return Err(self.invalid(Violation::ZeroSeats));
        }
        if self.occupied_seats > self.total_seats {
            return Err(self.invalid(Violation::OverOccupied {
                occupied: self.occupied_seats,
                total: self.total_seats,
            }));
        }
        let total = u32::from(self.total_seats);
        let occupied = u32::from(self.occupied_seats);
        // round(occupied / total * 100) with halves rounded up
        let percent = (200 * occupied + total) / (2 * total);
        Ok(Occupancy {
            available_seats: self.total_seats - self.occupied_seats,
            occupancy_percent: percent as u8,
        })
    }

    pub fn fuel_level(&self) -> FuelLevel {
        self.fuel.into()
    }

    pub fn is_moving(&self) -> bool {
        self.speed > 0.0
    }

    pub(crate) fn invalid(&self, violation: Violation) -> Error {
        Error::InvalidRecord {
            id: self.id,
            violation,
        }
    }

    fn check(&self) -> Result<(), Violation> {
        if self.id == 0 {
            return Err(Violation::ZeroId);
        }
        if !is_bus_number(&self.number) {
            return Err(Violation::MalformedNumber(self.number.to_string()));
        }
        if self.driver_name.trim().is_empty() {
            return Err(Violation::EmptyDriverName);
        }
        if self.total_seats == 0 {
            return Err(Violation::ZeroSeats);
        }
        if self.occupied_seats > self.total_seats {
            return Err(Violation::OverOccupied {
                occupied: self.occupied_seats,
                total: self.total_seats,
            });
        }
        if self.route.trim().is_empty() {
            return Err(Violation::EmptyRoute);
        }
        if self.current_location.trim().is_empty() {
            return Err(Violation::EmptyLocation);
        }
        if !self.coordinate.is_valid() {
            return Err(Violation::InvalidCoordinate(self.coordinate));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(Violation::InvalidSpeed(self.speed));
        }
        if self.fuel > 100 {
            return Err(Violation::FuelOutOfRange(self.fuel));
        }
        Ok(())
    }
}

pub(crate) const NUMBER_PREFIX: &str = "BUS-";

fn is_bus_number(number: &str) -> bool {
    match number.strip_prefix(NUMBER_PREFIX) {
        Some(digits) => digits.len() >= 3 && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

/// Formats an id the way the fleet numbers its buses.
pub fn bus_number(id: u32) -> String {
    format!("{NUMBER_PREFIX}{id:03}")
}
