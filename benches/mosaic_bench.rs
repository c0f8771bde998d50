//! Criterion benchmarks for deduction and population generation.
//!
//! Uses a synthetic clue pattern so the measurements are independent of
//! any particular puzzle file.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mosaic_init::board::Board;
use mosaic_init::chromosome::PopulationGenerator;
use mosaic_init::deduce::Deduction;
use mosaic_init::random::create_rng;

/// A board with a clue on every third cell, value derived from the
/// coordinate. Deterministic, with a mix of zeros and larger counts.
fn synthetic_board(size: usize) -> Board {
    let mut clues = vec![None; size * size];
    for row in 0..size {
        for col in 0..size {
            if (row * size + col) % 3 == 0 {
                clues[row * size + col] = Some(((row + col) % 9) as u8);
            }
        }
    }
    Board::from_clues(size, clues)
}

fn bench_deduce(c: &mut Criterion) {
    let mut group = c.benchmark_group("deduce");

    for &size in &[10usize, 25, 50] {
        let board = synthetic_board(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &board, |b, board| {
            b.iter(|| {
                let deduction = Deduction::from_board(black_box(board));
                black_box(deduction)
            })
        });
    }
    group.finish();
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_population");

    for &(size, count) in &[(10usize, 100usize), (25, 100), (50, 50)] {
        let board = synthetic_board(size);
        let deduction = Deduction::from_board(&board);
        group.bench_with_input(
            BenchmarkId::new(format!("s{}_n{}", size, count), size),
            &(deduction, count),
            |b, (deduction, count)| {
                b.iter(|| {
                    let mut rng = create_rng(42);
                    let generator = PopulationGenerator::new(deduction);
                    let population = generator.generate(*count, &mut rng);
                    black_box(population)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_deduce, bench_generate);
criterion_main!(benches);
