mod common;

use busboard::{
    directory::{self, BusDirectory, QUICK_ACCESS_NUMBERS},
    repository::Status,
    shared::geo::{Coordinate, Distance},
    source::{MockConfig, MockSource},
};
use common::*;

#[test]
fn find_by_number_ignores_case() {
    let buses = collection(small_fleet());
    let upper = directory::find_by_number_or_id(&buses, "BUS-001").unwrap();
    let lower = directory::find_by_number_or_id(&buses, "bus-001").unwrap();
    assert_eq!(upper.id, 1);
    assert_eq!(lower.id, 1);
}

#[test]
fn find_trims_the_token() {
    let buses = collection(small_fleet());
    assert_eq!(directory::find_by_number_or_id(&buses, "  bus-010\t").unwrap().id, 3);
    assert_eq!(directory::find_by_number_or_id(&buses, " 2 ").unwrap().id, 2);
}

#[test]
fn find_by_id_is_exact_string_match() {
    let buses = collection(small_fleet());
    assert_eq!(directory::find_by_number_or_id(&buses, "3").unwrap().number.as_ref(), "BUS-010");
    assert!(directory::find_by_number_or_id(&buses, "03").is_none());
    assert!(directory::find_by_number_or_id(&buses, "+1").is_none());
    assert!(directory::find_by_number_or_id(&buses, "1.0").is_none());
}

#[test]
fn find_unknown_token_is_not_found() {
    let buses = collection(small_fleet());
    assert!(directory::find_by_number_or_id(&buses, "BUS-999").is_none());
    assert!(directory::find_by_number_or_id(&buses, "42").is_none());
    assert!(directory::find_by_number_or_id(&buses, "").is_none());
    assert!(directory::find_by_number_or_id(&buses, "BUS-0").is_none());
}

#[test]
fn find_returns_first_match_in_collection_order() {
    let buses = collection(vec![
        bus(10, "BUS-100", Status::Running, 45, 1),
        bus(11, "BUS-010", Status::Stopped, 40, 1),
    ]);
    assert_eq!(directory::find_by_number_or_id(&buses, "10").unwrap().id, 10);
    assert_eq!(directory::find_by_number_or_id(&buses, "bus-010").unwrap().id, 11);
}

#[test]
fn exact_lookups() {
    let directory = BusDirectory::new(collection(small_fleet()));
    assert_eq!(directory.bus_by_id(2).unwrap().number.as_ref(), "BUS-002");
    assert!(directory.bus_by_id(4).is_none());
    assert_eq!(directory.bus_by_number("BUS-010").unwrap().id, 3);
    assert!(directory.bus_by_number("bus-010").is_none());
}

#[test]
fn quick_access_skips_missing_numbers() {
    let directory = BusDirectory::new(collection(small_fleet()));
    let numbers: Vec<_> = directory
        .quick_access()
        .iter()
        .map(|bus| bus.number.to_string())
        .collect();
    assert_eq!(numbers, vec!["BUS-001", "BUS-010"]);

    let fleet = MockSource::new(MockConfig::default().with_reference_time(reference_time())).generate();
    let directory = BusDirectory::new(collection(fleet));
    let numbers: Vec<_> = directory
        .quick_access()
        .iter()
        .map(|bus| bus.number.to_string())
        .collect();
    assert_eq!(numbers, QUICK_ACCESS_NUMBERS);
}

#[test]
fn buses_near_sorted_by_distance() {
    let mut buses = small_fleet();
    buses[0].coordinate = Coordinate::new(CAMPUS.latitude + 0.01, CAMPUS.longitude);
    buses[1].coordinate = Coordinate::new(CAMPUS.latitude + 0.1, CAMPUS.longitude);
    buses[2].coordinate = CAMPUS;
    let directory = BusDirectory::new(collection(buses));

    let near = directory.buses_near(&CAMPUS, Distance::from_kilometers(2.0));
    let near_ids: Vec<_> = near.iter().map(|(bus, _)| bus.id).collect();
    assert_eq!(near_ids, vec![3, 1]);
    assert_eq!(near[0].1, Distance::from_meters(0.0));
    assert!((near[1].1.as_kilometers() - 1.11).abs() < 0.01);
}

#[test]
fn buses_near_keeps_order_on_ties() {
    let directory = BusDirectory::new(collection(small_fleet()));
    let near = directory.buses_near(&CAMPUS, Distance::from_meters(10.0));
    let near_ids: Vec<_> = near.iter().map(|(bus, _)| bus.id).collect();
    assert_eq!(near_ids, vec![1, 2, 3]);
}

#[test]
fn duplicate_keys_are_rejected() {
    use busboard::repository::{BusCollection, Error};

    let duplicate_id = BusCollection::new(vec![
        bus(1, "BUS-001", Status::Running, 45, 1),
        bus(1, "BUS-002", Status::Running, 45, 1),
    ]);
    assert_eq!(duplicate_id.unwrap_err(), Error::DuplicateId(1));

    let duplicate_number = BusCollection::new(vec![
        bus(1, "BUS-001", Status::Running, 45, 1),
        bus(2, "BUS-001", Status::Running, 45, 1),
    ]);
    assert_eq!(
        duplicate_number.unwrap_err(),
        Error::DuplicateNumber("BUS-001".into())
    );
}
