//! Criterion benchmarks for u-stringsearch engines.
//!
//! Each engine evolves a random start toward short lowercase targets to
//! measure the cost of the search loops themselves.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_stringsearch::ga::{GaConfig, GaRunner};
use u_stringsearch::sa::{SaConfig, SaRunner};
use u_stringsearch::score::levenshtein;
use u_stringsearch::tabu::{TabuConfig, TabuRunner};
use u_stringsearch::{create_rng, random_candidate, Alphabet, Levenshtein, SubstitutionNeighbor};

const TARGETS: [&str; 3] = ["cat", "search", "metaheuristic"];

fn start_for(target: &str) -> String {
    random_candidate(&Alphabet::lowercase(), target.len(), &mut create_rng(7))
}

fn bench_levenshtein(c: &mut Criterion) {
    let mut group = c.benchmark_group("levenshtein");

    for target in TARGETS {
        let other = start_for(target);
        group.bench_with_input(BenchmarkId::from_parameter(target), &other, |b, other| {
            b.iter(|| levenshtein(black_box(target), black_box(other)))
        });
    }
    group.finish();
}

fn bench_sa(c: &mut Criterion) {
    let mut group = c.benchmark_group("sa");
    group.sample_size(10);

    for target in TARGETS {
        let start = start_for(target);
        let config = SaConfig::default()
            .with_maximum_temperature(50.0)
            .with_alpha(0.01)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(target), &(start, config), |b, (s, cfg)| {
            b.iter(|| {
                let mut runner = SaRunner::new(Levenshtein, SubstitutionNeighbor::default());
                black_box(runner.run(black_box(target), s, cfg))
            })
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for (target, pop) in [("go", 20usize), ("cat", 50), ("search", 100)] {
        let config = GaConfig::default()
            .with_population_size(pop)
            .with_max_generations(500)
            .with_seed(42);
        let runner = GaRunner::new(Levenshtein);
        group.bench_with_input(
            BenchmarkId::new(format!("p{pop}"), target),
            &config,
            |b, cfg| b.iter(|| black_box(runner.run(black_box(target), cfg))),
        );
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for target in TARGETS {
        let start = start_for(target);
        let config = TabuConfig::default()
            .with_tabu_list_max_size(50)
            .with_max_iterations(200)
            .with_number_neighbors(20)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(target), &(start, config), |b, (s, cfg)| {
            b.iter(|| {
                let mut runner = TabuRunner::new(Levenshtein, SubstitutionNeighbor::default());
                black_box(runner.run(black_box(target), s, cfg))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_levenshtein, bench_sa, bench_ga, bench_tabu);
criterion_main!(benches);
