use serde::Serialize;

use crate::{
    repository::{BusCollection, BusRecord, Error, Occupancy, Status},
    shared::geo::Coordinate,
};

/// Degree offsets used to sketch a path through a bus position.
const PREVIEW_OFFSETS: [f64; 5] = [-0.01, -0.005, 0.0, 0.005, 0.01];

/// Number of buses per status. Statuses with no bus are kept at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub running: usize,
    pub stopped: usize,
    pub in_service: usize,
    pub maintenance: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn get(&self, status: Status) -> usize {
        match status {
            Status::Running => self.running,
            Status::Stopped => self.stopped,
            Status::InService => self.in_service,
            Status::Maintenance => self.maintenance,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Status, usize)> + '_ {
        Status::ALL
            .into_iter()
            .map(move |status| (status, self.get(status)))
    }

    fn add(&mut self, status: Status) {
        let slot = match status {
            Status::Running => &mut self.running,
            Status::Stopped => &mut self.stopped,
            Status::InService => &mut self.in_service,
            Status::Maintenance => &mut self.maintenance,
        };
        *slot += 1;
        self.total += 1;
    }
}

/// Counts buses per status after validating each record.
///
/// The first invalid record in collection order aborts the count.
pub fn count_by_status(collection: &BusCollection) -> Result<StatusCounts, Error> {
    collection
        .iter()
        .try_fold(StatusCounts::default(), |mut counts, bus| {
            bus.validate()?;
            counts.add(bus.status);
            Ok(counts)
        })
}

pub fn compute_occupancy(record: &BusRecord) -> Result<Occupancy, Error> {
    record.occupancy()
}

/// A short straight path through the bus, used as a stand-in for route geometry.
pub fn route_preview(record: &BusRecord) -> [Coordinate; 5] {
    PREVIEW_OFFSETS.map(|offset| record.coordinate.offset(offset))
}
