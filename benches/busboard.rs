use busboard::{
    directory::{self, QueryCriteria},
    prelude::{BusCollection, Coordinate, Distance, MockSource, Status},
    source::{BusSource, MockConfig},
};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn text_search(buses: &BusCollection) {
    let criteria = QueryCriteria::new().with_text("library");
    let _ = black_box(directory::search(buses, &criteria));
}

fn filtered_search(buses: &BusCollection) {
    let criteria = QueryCriteria::new()
        .with_text("bus-0")
        .with_status(Status::Running);
    let _ = black_box(directory::search(buses, &criteria));
}

fn lookup(buses: &BusCollection) {
    let _ = black_box(directory::find_by_number_or_id(buses, " bus-9999 "));
}

fn near(buses: &BusCollection) {
    let coordinate = Coordinate::new(17.4485, 78.3908);
    let _ = black_box(directory::buses_near(
        buses,
        &coordinate,
        Distance::from_kilometers(1.0),
    ));
}

fn criterion_benchmark(c: &mut Criterion) {
    let buses = MockSource::new(MockConfig::default().with_count(10_000))
        .fetch()
        .expect("Failed to generate buses");

    let mut group = c.benchmark_group("Directory");

    group.bench_function("Text search", |b| b.iter(|| text_search(&buses)));

    group.bench_function("Filtered search", |b| b.iter(|| filtered_search(&buses)));

    group.bench_function("Number lookup", |b| b.iter(|| lookup(&buses)));

    group.bench_function("Buses near", |b| b.iter(|| near(&buses)));

    group.bench_function("Count by status", |b| {
        b.iter(|| black_box(directory::count_by_status(&buses)))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
