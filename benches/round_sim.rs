use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use wizard_sim::core::{GameRng, RoundConfig};
use wizard_sim::round::Round;
use wizard_sim::simulation::{SimulationConfig, Simulator};

fn bench_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("round");
    for (players, cards) in [(3, 10), (4, 14), (6, 9)] {
        let config = RoundConfig::new(players, cards);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{players}x{cards}")),
            &config,
            |b, config| {
                let mut seed = 0u64;
                b.iter(|| {
                    seed += 1;
                    let mut round = Round::setup(config.clone(), GameRng::new(seed)).unwrap();
                    black_box(round.run().unwrap())
                });
            },
        );
    }
    group.finish();
}

fn bench_simulation(c: &mut Criterion) {
    let config = SimulationConfig::new()
        .with_round(RoundConfig::new(4, 10))
        .with_rounds(100);
    let simulator = Simulator::new(config);
    c.bench_function("simulate_100_rounds", |b| {
        b.iter(|| black_box(simulator.run().unwrap()))
    });
}

criterion_group!(benches, bench_round, bench_simulation);
criterion_main!(benches);
