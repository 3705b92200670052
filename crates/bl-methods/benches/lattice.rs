use bl_core::{Config, ExerciseType};
use bl_methods::{risk_neutral_probability, IndexedBinaryTree, LatticeBuilder, OptionValuator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn build_and_value(config: &Config) -> f64 {
    let p = risk_neutral_probability(config).unwrap();
    let mut prices = IndexedBinaryTree::new(config.steps()).unwrap();
    let mut values = IndexedBinaryTree::new(config.steps()).unwrap();
    LatticeBuilder::new(config).build(&mut prices).unwrap();
    OptionValuator::new(config, p)
        .value(&prices, &mut values)
        .unwrap()
}

fn bench_lattice(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_lattice");
    for steps in [8_usize, 12, 16] {
        for exercise in [ExerciseType::European, ExerciseType::American] {
            let config = Config::builder()
                .with_steps(steps)
                .with_exercise(exercise)
                .build()
                .unwrap();
            group.bench_with_input(
                BenchmarkId::new(exercise.name(), steps),
                &config,
                |b, cfg| b.iter(|| build_and_value(black_box(cfg))),
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_lattice);
criterion_main!(benches);
