//! Mining benchmarks
//!
//! Apriori vs FP-Growth across support thresholds, plus rule generation
//! and the serial/parallel split.

use basket_mining::features::apriori::AprioriMiner;
use basket_mining::features::fp_growth::FpGrowthMiner;
use basket_mining::features::miner::ItemsetMiner;
use basket_mining::{generate_rules, mine_fpgrowth, RuleMetric, TransactionStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

/// Deterministic basket table with a few popular items
fn synthetic_store(transactions: usize, width: usize) -> TransactionStore {
    let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
    let mut rows = Vec::with_capacity(transactions);
    for _ in 0..transactions {
        let mut row = Vec::with_capacity(width);
        for column in 0..width {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let draw = (state >> 11) as f64 / (1u64 << 53) as f64;
            // early columns are popular, late columns rare
            let density = 0.6 / (1.0 + column as f64 * 0.25);
            row.push(draw < density);
        }
        rows.push(row);
    }

    let names: Vec<String> = (0..width).map(|i| format!("item_{i}")).collect();
    TransactionStore::from_table(names, &rows).unwrap()
}

// ============================================================================
// Miners
// ============================================================================

fn bench_miners_by_support(c: &mut Criterion) {
    let store = synthetic_store(2_000, 24);
    let mut group = c.benchmark_group("miners_by_support");
    group.throughput(Throughput::Elements(store.transaction_count()));

    for min_support in [0.2, 0.1, 0.05, 0.02] {
        group.bench_with_input(
            BenchmarkId::new("apriori", min_support),
            &min_support,
            |b, &s| {
                let miner = AprioriMiner::new();
                b.iter(|| black_box(miner.mine(&store, s).unwrap()));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fpgrowth", min_support),
            &min_support,
            |b, &s| {
                let miner = FpGrowthMiner::new();
                b.iter(|| black_box(miner.mine(&store, s).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_serial_vs_parallel(c: &mut Criterion) {
    let store = synthetic_store(5_000, 24);
    let mut group = c.benchmark_group("fpgrowth_parallel");

    for parallel in [false, true] {
        group.bench_with_input(
            BenchmarkId::from_parameter(if parallel { "parallel" } else { "serial" }),
            &parallel,
            |b, &parallel| {
                let miner = FpGrowthMiner::new().parallel(parallel);
                b.iter(|| black_box(miner.mine(&store, 0.05).unwrap()));
            },
        );
    }

    group.finish();
}

// ============================================================================
// Rules
// ============================================================================

fn bench_rule_generation(c: &mut Criterion) {
    let store = synthetic_store(2_000, 24);
    let itemsets = mine_fpgrowth(&store, 0.05).unwrap();

    let mut group = c.benchmark_group("rule_generation");
    group.throughput(Throughput::Elements(itemsets.len() as u64));

    for metric in [RuleMetric::Confidence, RuleMetric::Lift] {
        group.bench_with_input(BenchmarkId::from_parameter(metric), &metric, |b, &metric| {
            b.iter(|| black_box(generate_rules(&itemsets, metric, 0.5).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_miners_by_support,
    bench_serial_vs_parallel,
    bench_rule_generation
);
criterion_main!(benches);
