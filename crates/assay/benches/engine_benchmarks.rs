//! Loader and engine benchmarks.
//!
//! Measures loading and checking across row counts, in both engine modes.

use assay::{Engine, Parser, SchemaConfig};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// Generate a subscription-style CSV with some defects mixed in.
fn generate_csv_data(rows: usize) -> String {
    let mut data =
        String::from("User ID,Subscription Type,Age,Join Date,Last Payment Date,Country\n");
    let tiers = ["Basic", "Standard", "Premium", "Gold"];

    for row in 0..rows {
        let id = if row % 50 == 0 { 0 } else { row };
        let age = if row % 37 == 0 { 150 } else { 18 + row % 60 };
        let payment = if row % 101 == 0 {
            "2023-06-11".to_string()
        } else {
            format!("{:02}/{:02}/2023", (row % 28) + 1, (row % 12) + 1)
        };
        let country = if row % 23 == 0 { "" } else { "Spain" };
        data.push_str(&format!(
            "U{:06},{},{},{:02}/{:02}/2022,{},{}\n",
            id,
            tiers[row % tiers.len()],
            age,
            (row % 28) + 1,
            (row % 12) + 1,
            payment,
            country
        ));
    }

    data
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = Parser::new();

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_csv_data(*rows);

        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| black_box(parser.parse_bytes(data.as_bytes()).unwrap()))
        });
    }

    group.finish();
}

fn bench_type_driven(c: &mut Criterion) {
    let mut group = c.benchmark_group("type_driven");
    let parser = Parser::new();
    let engine = Engine::new();

    for rows in [100, 1_000, 10_000].iter() {
        let dataset = parser.parse_bytes(generate_csv_data(*rows).as_bytes()).unwrap();

        group.throughput(Throughput::Elements(dataset.cell_count() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &dataset, |b, dataset| {
            b.iter(|| black_box(engine.run(dataset)))
        });
    }

    group.finish();
}

fn bench_schema_aware(c: &mut Criterion) {
    let mut group = c.benchmark_group("schema_aware");
    let parser = Parser::new();
    let engine = Engine::schema_aware(SchemaConfig::default()).unwrap();

    for rows in [100, 1_000, 10_000].iter() {
        let dataset = parser.parse_bytes(generate_csv_data(*rows).as_bytes()).unwrap();

        group.throughput(Throughput::Elements(dataset.cell_count() as u64));
        group.bench_with_input(BenchmarkId::new("rows", rows), &dataset, |b, dataset| {
            b.iter(|| black_box(engine.run(dataset)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_type_driven, bench_schema_aware);
criterion_main!(benches);
