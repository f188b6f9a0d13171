//! Benchmarks for candidate elimination and full games.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use mastermind_solver::core::{Color, Correction, GameConfig};
use mastermind_solver::solver::{CandidateSet, Eliminator, PatternCodec, simulate_game};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn first_round_benchmark(c: &mut Criterion) {
    let config = GameConfig::new(5, 8).unwrap();
    let lazy = PatternCodec::lazy(config);
    let cached = PatternCodec::materialized(config).unwrap();
    let trial: [Color; 5] = [0, 0, 1, 2, 3];

    for (name, codec) in [("learn_5x8_lazy", &lazy), ("learn_5x8_cached", &cached)] {
        c.bench_function(name, |b| {
            let mut eliminator = Eliminator::new(codec);
            b.iter(|| {
                let mut set = CandidateSet::full(config.pattern_count());
                eliminator
                    .learn(&trial, Correction::new(1, 2), &mut set, 1)
                    .unwrap();
                black_box(set.count())
            });
        });
    }
}

fn classic_game_benchmark(c: &mut Criterion) {
    let codec = PatternCodec::materialized(GameConfig::CLASSIC).unwrap();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("classic_game", |b| {
        b.iter(|| black_box(simulate_game(&codec, &mut rng).unwrap()));
    });
}

criterion_group!(benches, first_round_benchmark, classic_game_benchmark);
criterion_main!(benches);
