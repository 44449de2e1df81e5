use rayon::prelude::*;

use crate::{
    directory::QueryCriteria,
    repository::{BusCollection, BusRecord},
    shared::geo::{Coordinate, Distance},
};

/// Numbers offered as one-tap shortcuts on the live location screen.
pub const QUICK_ACCESS_NUMBERS: [&str; 6] = [
    "BUS-001", "BUS-010", "BUS-025", "BUS-050", "BUS-075", "BUS-100",
];

/// Filters the collection by free text and status.
///
/// The text matches when it is a case-insensitive substring of the number,
/// the driver name or the route. It is not trimmed. Both conditions must hold
/// and the result keeps collection order.
pub fn search<'a>(collection: &'a BusCollection, criteria: &QueryCriteria) -> Vec<&'a BusRecord> {
    let needle = criteria.search_text.to_lowercase();
    collection
        .buses()
        .par_iter()
        .zip(collection.keys().par_iter())
        .filter(|(bus, keys)| criteria.matches_status(bus.status) && keys.contains(&needle))
        .map(|(bus, _)| bus)
        .collect()
}

/// Looks a bus up by its number or its id.
///
/// The token is trimmed, then compared case-insensitively with each number
/// and literally with each id rendered as a string. The first record in
/// collection order that satisfies either comparison wins.
pub fn find_by_number_or_id<'a>(collection: &'a BusCollection, token: &str) -> Option<&'a BusRecord> {
    let token = token.trim();
    let lowered = token.to_lowercase();
    collection
        .entries()
        .find(|(bus, keys)| *keys.number == *lowered || bus.id.to_string() == token)
        .map(|(bus, _)| bus)
}

/// Resolves [`QUICK_ACCESS_NUMBERS`], skipping the ones this collection lacks.
pub fn quick_access(collection: &BusCollection) -> Vec<&BusRecord> {
    QUICK_ACCESS_NUMBERS
        .iter()
        .filter_map(|number| collection.bus_by_number(number))
        .collect()
}

/// Returns buses within `radius` of `coordinate`, nearest first.
/// Buses at the same distance keep collection order.
pub fn buses_near<'a>(
    collection: &'a BusCollection,
    coordinate: &Coordinate,
    radius: Distance,
) -> Vec<(&'a BusRecord, Distance)> {
    let mut near: Vec<_> = collection
        .buses()
        .par_iter()
        .filter_map(|bus| {
            let distance = bus.coordinate.haversine_distance(coordinate);
            (distance <= radius).then_some((bus, distance))
        })
        .collect();
    near.par_sort_by(|(_, a), (_, b)| a.total_cmp(b));
    near
}
