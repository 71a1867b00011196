use collview::render::highlight::match_ranges;
use collview::{Query, RawRecord, RecordFilter, RecordSet};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn create_collection(size: usize) -> RecordSet {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // Realistic taxonomy and place names
    let taxa = [
        ("Carnivora", "Felidae", "Panthera", "onca"),
        ("Carnivora", "Felidae", "Puma", "concolor"),
        ("Carnivora", "Canidae", "Cerdocyon", "thous"),
        ("Didelphimorphia", "Didelphidae", "Didelphis", "aurita"),
        ("Rodentia", "Cricetidae", "Akodon", "cursor"),
        ("Chiroptera", "Phyllostomidae", "Artibeus", "lituratus"),
    ];
    let places = [
        ("Bahia", "Ilhéus"),
        ("Minas Gerais", "Belo Horizonte"),
        ("São Paulo", "Campinas"),
        ("Paraná", "Curitiba"),
    ];
    let preparations = ["skin", "skull", "skin; skull", "skeleton", "fluid"];

    RecordSet::from_raw((0..size).map(|i| {
        let (order, family, genus, epithet) = taxa[rng.gen_range(0..taxa.len())];
        let (state, municipality) = places[rng.gen_range(0..places.len())];

        let mut raw = RawRecord::default();
        raw.set("catalogNumber", format!("IBS{:06}", i));
        raw.set("order", order);
        raw.set("family", family);
        raw.set("genus", genus);
        raw.set("scientificName", format!("{} {}", genus, epithet));
        raw.set("stateProvince", state);
        raw.set("municipality", municipality);
        raw.set("locality", format!("Trilha {}", rng.gen_range(1..200)));
        raw.set(
            "eventDate",
            format!(
                "{}-{:02}-{:02}",
                rng.gen_range(1950..2024),
                rng.gen_range(1..13),
                rng.gen_range(1..29)
            ),
        );
        raw.set("preparations", preparations[rng.gen_range(0..preparations.len())]);
        raw
    }))
}

fn bench_filter_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_queries");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(3));

    for size in [1_000, 10_000, 50_000] {
        let filter = RecordFilter::new(create_collection(size));

        group.bench_with_input(BenchmarkId::new("empty_query", size), &size, |b, _| {
            b.iter(|| black_box(filter.filter("")))
        });

        // Common genus, view hits the cap
        group.bench_with_input(BenchmarkId::new("frequent_term", size), &size, |b, _| {
            b.iter(|| black_box(filter.filter("felidae")))
        });

        // Single catalog number, full scan with one match
        group.bench_with_input(BenchmarkId::new("rare_term", size), &size, |b, _| {
            b.iter(|| black_box(filter.filter("ibs000777")))
        });

        group.bench_with_input(BenchmarkId::new("no_match", size), &size, |b, _| {
            b.iter(|| black_box(filter.filter("tapirus")))
        });
    }

    group.finish();
}

fn bench_incremental_typing(c: &mut Criterion) {
    let mut group = c.benchmark_group("incremental_typing");
    group.sample_size(20);

    let filter = RecordFilter::new(create_collection(10_000));
    let typed = "panthera onca";

    // One filter pass per keystroke, as the render loop does
    group.bench_function("type_query", |b| {
        b.iter(|| {
            for end in 1..=typed.len() {
                black_box(filter.matching_positions(&typed[..end]));
            }
        })
    });

    group.finish();
}

fn bench_highlighting(c: &mut Criterion) {
    let mut group = c.benchmark_group("highlighting");
    let query = Query::new("são");

    group.bench_function("cell_ranges", |b| {
        b.iter(|| black_box(match_ranges(black_box("São Paulo, São Carlos"), &query)))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_filter_queries,
    bench_incremental_typing,
    bench_highlighting
);
criterion_main!(benches);
