#![allow(dead_code)]

use busboard::{
    repository::{BusCollection, BusRecord, Status},
    shared::geo::Coordinate,
};
use chrono::{DateTime, Utc};

pub const CAMPUS: Coordinate = Coordinate::new(17.4485, 78.3908);

pub fn reference_time() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2024-05-01T08:30:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

pub fn bus(id: u32, number: &str, status: Status, total_seats: u16, occupied_seats: u16) -> BusRecord {
    BusRecord {
        id,
        number: number.into(),
        driver_name: "Rajesh Kumar".into(),
        total_seats,
        occupied_seats,
        route: "Main Campus - North Gate - Engineering Block".into(),
        current_location: "Main Campus".into(),
        coordinate: CAMPUS,
        speed: 25.0,
        status,
        fuel: 60,
        last_updated: reference_time(),
    }
}

/// The three bus fleet used throughout the directory tests.
pub fn small_fleet() -> Vec<BusRecord> {
    vec![
        bus(1, "BUS-001", Status::Running, 45, 30),
        bus(2, "BUS-002", Status::Stopped, 40, 0),
        bus(3, "BUS-010", Status::Running, 45, 45),
    ]
}

pub fn collection(buses: Vec<BusRecord>) -> BusCollection {
    BusCollection::new(buses).unwrap()
}

pub fn ids(buses: &[&BusRecord]) -> Vec<u32> {
    buses.iter().map(|bus| bus.id).collect()
}
