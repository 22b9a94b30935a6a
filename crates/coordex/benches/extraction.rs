//! Throughput benchmarks for coordinate extraction.
//!
//! Inputs are synthetic reports of increasing size mixing prose with every
//! supported notation, plus a coordinate-free text of the same size to
//! measure the cost of scanning alone.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use coordex::{ExtractOptions, extract_coordinates, extract_with_options};

const PARAGRAPH: &str = "Patrol report. Point Alpha: 51°12'32.2\"N 32°34'23.1\"E. \
Угол 2: 55°45'20.9\" с.ш. 37°37'03.6\" в.д. Waypoint N12.2112 W32.434, \
then 34-24N 124-49W. Fix 5401N 15531W confirmed! Marker 55,755831°, 37,617673°. \
The route continues along the river for a while before turning north.\n";

const PROSE: &str = "Nothing of interest was observed during the morning shift; \
the team returned at 17 past 4 with 12 samples and 3 reports in total.\n";

fn repeat_to(unit: &str, bytes: usize) -> String {
    unit.repeat(bytes / unit.len() + 1)
}

fn bench_extract_coordinates(c: &mut Criterion) {
    let options = ExtractOptions::default();
    let mut group = c.benchmark_group("extract_coordinates");

    for size in [1_000usize, 10_000, 100_000] {
        let text = repeat_to(PARAGRAPH, size);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mixed", size), &text, |b, text| {
            b.iter(|| extract_coordinates(black_box(text), &options));
        });

        let prose = repeat_to(PROSE, size);
        group.throughput(Throughput::Bytes(prose.len() as u64));
        group.bench_with_input(BenchmarkId::new("no_coordinates", size), &prose, |b, text| {
            b.iter(|| extract_coordinates(black_box(text), &options));
        });
    }

    group.finish();
}

fn bench_full_pipeline(c: &mut Criterion) {
    let options = ExtractOptions::default();
    let text = repeat_to(PARAGRAPH, 10_000);
    let mut group = c.benchmark_group("pipeline");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("extract_and_classify_10k", |b| {
        b.iter(|| extract_with_options(black_box(&text), &options));
    });
    group.finish();
}

criterion_group!(benches, bench_extract_coordinates, bench_full_pipeline);
criterion_main!(benches);
