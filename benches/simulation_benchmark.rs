use criterion::{black_box, criterion_group, criterion_main, Criterion};
use credit_planner::analysis::random::{generate_random_inputs, SamplingConfig};
use credit_planner::analysis::sweep::{installment_sweep, SweepPath};
use credit_planner::core::asset::AssetType;
use credit_planner::core::inputs::SimulationInputs;
use credit_planner::engine::simulation::SimulationEngine;
use rust_decimal_macros::dec;

fn bench_single_simulation(c: &mut Criterion) {
    let inputs = SimulationInputs::for_asset(AssetType::Vehicle);

    c.bench_function("simulate_vehicle_default", |b| {
        b.iter(|| SimulationEngine::simulate(black_box(&inputs)))
    });
}

fn bench_random_batch(c: &mut Criterion) {
    let samples = generate_random_inputs(&SamplingConfig {
        count: 1_000,
        ..Default::default()
    });

    c.bench_function("simulate_1000_random", |b| {
        b.iter(|| {
            for sample in &samples {
                black_box(SimulationEngine::simulate(black_box(&sample.inputs)));
            }
        })
    });
}

fn bench_installment_sweep(c: &mut Criterion) {
    let inputs = SimulationInputs::for_asset(AssetType::RealEstate);

    c.bench_function("sweep_loan_1000_points", |b| {
        b.iter(|| {
            installment_sweep(
                black_box(&inputs),
                SweepPath::Loan,
                dec!(1_000),
                dec!(10_990),
                dec!(10),
            )
        })
    });
}

criterion_group!(
    benches,
    bench_single_simulation,
    bench_random_batch,
    bench_installment_sweep
);
criterion_main!(benches);
