//! Criterion benchmarks for u-pricing.
//!
//! Uses seeded generated instances so timings are comparable across runs.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_pricing::ga::{GaConfig, GaOptimizer};
use u_pricing::grasp::{GraspConfig, GraspOptimizer};
use u_pricing::greedy::GreedyOptimizer;
use u_pricing::optimizer::{Optimizer, SolveOptions};
use u_pricing::pricing::{PricingSolver, SimplexPricer};
use u_pricing::problem::{Instance, ProblemState};

fn instance(n_products: usize, n_clients: usize) -> Instance {
    Instance::generate(n_products, n_clients, &mut StdRng::seed_from_u64(42)).unwrap()
}

fn bench_simplex_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("simplex_pricing");

    for &(n_products, n_clients) in &[(10, 20), (20, 50), (40, 100)] {
        let state = ProblemState::new(&instance(n_products, n_clients));
        let all_served = vec![true; n_clients];
        let pricer = SimplexPricer::new();
        group.bench_with_input(
            BenchmarkId::new(format!("p{}", n_products), n_clients),
            &(state, all_served),
            |b, (s, d)| {
                b.iter(|| {
                    let pricing = pricer.price(black_box(s), black_box(d));
                    black_box(pricing)
                })
            },
        );
    }
    group.finish();
}

fn bench_greedy(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy");

    for &n_clients in &[20, 50, 100] {
        let instance = instance(20, n_clients);
        group.bench_with_input(BenchmarkId::from_parameter(n_clients), &instance, |b, inst| {
            b.iter(|| {
                let mut state = ProblemState::new(inst);
                let result = GreedyOptimizer::new().solve(&mut state, &SolveOptions::default());
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_grasp(c: &mut Criterion) {
    let mut group = c.benchmark_group("grasp");
    group.sample_size(10);

    for &n_clients in &[10, 20] {
        let instance = instance(10, n_clients);
        let grasp = GraspOptimizer::new(GraspConfig::default().with_iterations(5));
        group.bench_with_input(BenchmarkId::from_parameter(n_clients), &instance, |b, inst| {
            b.iter(|| {
                let mut state = ProblemState::new(inst);
                let result = grasp.solve(&mut state, &SolveOptions::default());
                black_box(result)
            })
        });
    }
    group.finish();
}

fn bench_ga(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga");
    group.sample_size(10);

    for &n_clients in &[20, 50] {
        let instance = instance(10, n_clients);
        let ga = GaOptimizer::new(GaConfig::default().with_num_generations(20));
        group.bench_with_input(BenchmarkId::from_parameter(n_clients), &instance, |b, inst| {
            b.iter(|| {
                let mut state = ProblemState::new(inst);
                let result = ga.solve(&mut state, &SolveOptions::default());
                black_box(result)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_simplex_pricing, bench_greedy, bench_grasp, bench_ga);
criterion_main!(benches);
