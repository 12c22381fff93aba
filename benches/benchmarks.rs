//! Benchmarks for stationstats
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use stationstats::aggregate::{AggregateState, AggregateTable};
use stationstats::driver::Driver;
use stationstats::record::{parse, parse_bytes};
use stationstats::report::Reporter;
use stationstats::source::BufReadSource;
use stationstats::traits::Summary;

const STATIONS: usize = 413;

fn station_names() -> Vec<String> {
    (0..STATIONS).map(|i| format!("Station {}", i)).collect()
}

fn measurement_lines(n: usize) -> String {
    let names = station_names();
    let mut out = String::with_capacity(n * 20);
    for i in 0..n {
        let value = ((i * 7919) % 1999) as f64 / 10.0 - 99.9;
        out.push_str(&names[(i * 31) % STATIONS]);
        out.push(';');
        out.push_str(&format!("{:.1}\n", value));
    }
    out
}

// ============================================================================
// Parser Benchmarks
// ============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(1));

    group.bench_function("str", |b| {
        b.iter(|| black_box(parse(black_box("Hamburg;-12.3\n"))));
    });

    group.bench_function("bytes", |b| {
        b.iter(|| black_box(parse_bytes(black_box(b"Hamburg;-12.3"))));
    });

    group.finish();
}

// ============================================================================
// Aggregate Table Benchmarks
// ============================================================================

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_table");
    group.throughput(Throughput::Elements(1));

    group.bench_function("state_add", |b| {
        let mut state = AggregateState::new();
        let mut v = 0.0f64;
        b.iter(|| {
            state.add(black_box(v));
            v += 0.1;
        });
    });

    group.bench_function("ingest_existing_key", |b| {
        let names = station_names();
        let mut table = AggregateTable::with_capacity(STATIONS);
        for name in &names {
            table.ingest(name, 0.0);
        }
        let mut i = 0usize;
        b.iter(|| {
            table.ingest(&names[i % STATIONS], black_box(1.5));
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("snapshot", |b| {
        let names = station_names();
        let mut table = AggregateTable::new();
        for (i, name) in names.iter().enumerate() {
            table.ingest(name, i as f64);
        }
        b.iter(|| black_box(table.snapshot()));
    });

    group.bench_function("merge", |b| {
        let names = station_names();
        let mut t1 = AggregateTable::new();
        let mut t2 = AggregateTable::new();
        for (i, name) in names.iter().enumerate() {
            t1.ingest(name, i as f64);
            t2.ingest(name, -(i as f64));
        }
        b.iter(|| {
            let mut t = t1.clone();
            t.merge(black_box(&t2));
        });
    });

    group.finish();
}

// ============================================================================
// Report Benchmarks
// ============================================================================

fn bench_report(c: &mut Criterion) {
    let mut table = AggregateTable::new();
    for (i, name) in station_names().iter().enumerate() {
        table.ingest(name, i as f64 * 0.3);
    }
    let snapshot = table.snapshot();

    c.bench_function("report/format", |b| {
        b.iter(|| black_box(Reporter::new().format(&snapshot)));
    });
}

// ============================================================================
// End-to-end Benchmarks
// ============================================================================

fn bench_driver(c: &mut Criterion) {
    let n = 100_000;
    let input = measurement_lines(n);

    let mut group = c.benchmark_group("driver");
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("buffered_100k", |b| {
        b.iter(|| {
            let summary = Driver::default()
                .with_capacity(STATIONS)
                .run(BufReadSource::new(input.as_bytes()))
                .unwrap();
            black_box(summary.table.len())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_table, bench_report, bench_driver);
criterion_main!(benches);
