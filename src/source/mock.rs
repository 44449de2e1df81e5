use std::{sync::Arc, time::Instant};

use chrono::{DateTime, TimeDelta, Utc};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::{
    repository::{BusCollection, BusRecord, Status, bus_number},
    shared::geo::Coordinate,
    source::{self, BusSource, MockConfig},
};

const DRIVER_NAMES: [&str; 20] = [
    "Rajesh Kumar",
    "Amit Singh",
    "Suresh Reddy",
    "Vijay Sharma",
    "Prakash Rao",
    "Ramesh Patel",
    "Mahesh Gupta",
    "Anil Kumar",
    "Dinesh Verma",
    "Santosh Singh",
    "Kiran Kumar",
    "Ravi Shankar",
    "Mohan Das",
    "Gopal Krishna",
    "Ashok Kumar",
    "Sanjay Mehta",
    "Rakesh Jain",
    "Deepak Nair",
    "Manoj Desai",
    "Vinod Thakur",
];

const ROUTES: [&str; 10] = [
    "Main Campus - North Gate - Engineering Block",
    "Admin Block - Library - Science Block",
    "South Campus - Hostel - Sports Complex",
    "East Gate - Medical Center - Arts Block",
    "West Wing - Cafeteria - Central Plaza",
    "Research Park - IT Block - Commerce Block",
    "Auditorium - Conference Hall - Admin Office",
    "Student Center - Gym - Playground",
    "Faculty Housing - Guest House - Main Entrance",
    "Parking Lot A - Academic Block - Lab Complex",
];

const LOCATIONS: [&str; 20] = [
    "Main Campus",
    "North Gate",
    "Engineering Block",
    "Admin Block",
    "Library",
    "Science Block",
    "South Campus",
    "Hostel Area",
    "Sports Complex",
    "East Gate",
    "Medical Center",
    "Arts Block",
    "West Wing",
    "Cafeteria",
    "Central Plaza",
    "Research Park",
    "IT Block",
    "Commerce Block",
    "Auditorium",
    "Conference Hall",
];

const LARGE_BUS_SEATS: u16 = 45;
const SMALL_BUS_SEATS: u16 = 40;

/// Generates a plausible fleet from a seed.
///
/// Fields that cycle (driver, route, location, status, seat count) depend only
/// on the bus position. The rest is drawn from a ChaCha stream, so the same
/// seed and reference time always produce the same fleet.
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    config: MockConfig,
}

impl MockSource {
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MockConfig {
        &self.config
    }

    pub fn generate(&self) -> Vec<BusRecord> {
        self.generate_at(self.reference_time())
    }

    fn reference_time(&self) -> DateTime<Utc> {
        self.config.reference_time.unwrap_or_else(Utc::now)
    }

    fn generate_at(&self, reference: DateTime<Utc>) -> Vec<BusRecord> {
        let config = &self.config;
        let max_age_ms = config.max_age.num_milliseconds().max(0);
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);

        let drivers: Vec<Arc<str>> = DRIVER_NAMES.iter().map(|&name| name.into()).collect();
        let routes: Vec<Arc<str>> = ROUTES.iter().map(|&route| route.into()).collect();
        let locations: Vec<Arc<str>> = LOCATIONS.iter().map(|&location| location.into()).collect();

        (0..config.count)
            .map(|i| {
                let index = i as usize;
                let id = i + 1;
                let total_seats = if i % 2 == 0 {
                    LARGE_BUS_SEATS
                } else {
                    SMALL_BUS_SEATS
                };
                let occupied_seats = rng.gen_range(0..total_seats);
                let coordinate = Coordinate::new(
                    config.base.latitude + (rng.r#gen::<f64>() - 0.5) * config.spread,
                    config.base.longitude + (rng.r#gen::<f64>() - 0.5) * config.spread,
                );
                let speed = if i % 4 == 0 {
                    0.0
                } else {
                    f64::from(rng.gen_range(10u32..60))
                };
                let fuel = rng.gen_range(0u8..100);
                let age_ms = if max_age_ms > 0 {
                    rng.gen_range(0..max_age_ms)
                } else {
                    0
                };

                BusRecord {
                    id,
                    number: bus_number(id).into(),
                    driver_name: drivers[index % drivers.len()].clone(),
                    total_seats,
                    occupied_seats,
                    route: routes[index % routes.len()].clone(),
                    current_location: locations[index % locations.len()].clone(),
                    coordinate,
                    speed,
                    status: Status::ALL[index % Status::ALL.len()],
                    fuel,
                    last_updated: reference - TimeDelta::milliseconds(age_ms),
                }
            })
            .collect()
    }
}

impl BusSource for MockSource {
    fn fetch(&self) -> Result<BusCollection, source::Error> {
        debug!("Generating {} mock buses...", self.config.count);
        let now = Instant::now();
        let reference = self.reference_time();
        let buses = self.generate_at(reference);
        let collection = source::collect(buses, reference)?;
        debug!("Generating mock buses took {:?}", now.elapsed());
        Ok(collection)
    }
}
