use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mealmax_core::random::FixedRandom;
use mealmax_core::scoring::{compute_score, normalized_delta, win_threshold};
use mealmax_core::statistics::InMemoryStats;
use mealmax_core::{BattleEngine, Difficulty, Meal};

fn sushi() -> Meal {
    Meal::new(1, "Sushi", "Japanese", 20.0, Difficulty::Med)
}

fn pasta() -> Meal {
    Meal::new(2, "Pasta", "Italian", 15.0, Difficulty::Low)
}

fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let meal = sushi();

    group.bench_function("compute_score", |b| {
        b.iter(|| compute_score(black_box(&meal)))
    });

    group.bench_function("delta_and_threshold", |b| {
        b.iter(|| win_threshold(normalized_delta(black_box(158.0), black_box(102.0))))
    });

    group.finish();
}

fn bench_battle(c: &mut Criterion) {
    let mut group = c.benchmark_group("battle");
    let random = Arc::new(FixedRandom::new(0.1));
    let stats = Arc::new(InMemoryStats::new());
    let mut engine = BattleEngine::new(random, stats);

    group.bench_function("prep_and_battle", |b| {
        b.iter(|| {
            engine.clear_roster();
            engine.add_combatant(sushi()).unwrap();
            engine.add_combatant(pasta()).unwrap();
            black_box(engine.run_battle().unwrap())
        })
    });

    let meals: Vec<Meal> = (0..32)
        .map(|i| Meal::new(i, format!("Meal {i}"), "Fusion", 5.0 + i as f64, Difficulty::Med))
        .collect();
    group.bench_function("tournament_32", |b| {
        b.iter(|| black_box(engine.run_tournament(&meals).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_score, bench_battle);
criterion_main!(benches);
