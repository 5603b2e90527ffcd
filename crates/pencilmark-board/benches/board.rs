//! Benchmarks for board mutation and candidate queries.
//!
//! # Benchmarks
//!
//! - **`fill_and_unfill`**: Assigns a complete classic 9×9 solution cell by
//!   cell in row-major order, then retracts every cell again. Measures the
//!   incremental free-value bookkeeping under heavy churn.
//! - **`candidate_sweep`**: Queries the candidate set of every cell of a
//!   half-filled board. Measures the three-way free-set intersection path.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench board
//! ```

use std::hint;

use criterion::{Criterion, criterion_group, criterion_main};
use pencilmark_board::Board;
use pencilmark_core::{BoxSize, Coord};

const SOLUTION: &str =
    "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

fn solution_value(row: u8, col: u8) -> u8 {
    SOLUTION.as_bytes()[usize::from(row) * 9 + usize::from(col)] - b'0'
}

fn bench_fill_and_unfill(c: &mut Criterion) {
    let box_size = BoxSize::new(3).unwrap();
    c.bench_function("fill_and_unfill", |b| {
        b.iter(|| {
            let mut board = Board::new(box_size);
            for row in 0..9 {
                for col in 0..9 {
                    board
                        .assign(Coord::new(row, col), solution_value(row, col))
                        .unwrap();
                }
            }
            for row in 0..9 {
                for col in 0..9 {
                    board.retract(Coord::new(row, col)).unwrap();
                }
            }
            hint::black_box(board)
        });
    });
}

fn bench_candidate_sweep(c: &mut Criterion) {
    let box_size = BoxSize::new(3).unwrap();
    let mut board = Board::new(box_size);
    // Fill the top half of the grid so the sweep sees both kinds of cell.
    for row in 0..4 {
        for col in 0..9 {
            board
                .assign(Coord::new(row, col), solution_value(row, col))
                .unwrap();
        }
    }

    c.bench_function("candidate_sweep", |b| {
        b.iter(|| {
            let mut total = 0u32;
            for row in 0..9 {
                for col in 0..9 {
                    total += board.candidates(Coord::new(row, col)).unwrap().len();
                }
            }
            hint::black_box(total)
        });
    });
}

criterion_group!(benches, bench_fill_and_unfill, bench_candidate_sweep);
criterion_main!(benches);
