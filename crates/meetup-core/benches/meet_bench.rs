//! # Meetup Benchmarks
//!
//! Performance benchmarks for meetup-core rounds.
//!
//! Run with: `cargo bench -p meetup-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use meetup_core::morse::encode_text;
use meetup_core::{Agent, Roster, Status, meet};
use std::hint::black_box;

/// Create a roster of `size` agents cycling through every status.
fn create_mixed_roster(size: usize) -> Vec<Agent> {
    (0..size)
        .map(|i| Agent::new(format!("agent-{i}"), Status::ALL[i % Status::ALL.len()]))
        .collect()
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_single_round(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_round");

    for size in [100, 1000, 10000].iter() {
        let roster = create_mixed_roster(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(meet(black_box(roster))));
        });
    }

    group.finish();
}

fn bench_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("advance_10_rounds");

    for size in [100, 1000].iter() {
        let roster = Roster::new(create_mixed_roster(*size));
        group.bench_with_input(BenchmarkId::from_parameter(size), &roster, |b, roster| {
            b.iter(|| black_box(roster.advance(10)));
        });
    }

    group.finish();
}

fn bench_morse(c: &mut Criterion) {
    let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.\n".repeat(200);

    c.bench_function("morse_encode_text", |b| {
        b.iter(|| black_box(encode_text(black_box(&text))));
    });
}

criterion_group!(benches, bench_single_round, bench_advance, bench_morse);
criterion_main!(benches);
