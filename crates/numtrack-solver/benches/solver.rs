//! Benchmarks for the backtracking solver.
//!
//! Measures full solves on representative grids, cloning the puzzle per
//! iteration so every run searches from the same starting state.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use numtrack_core::Grid;
use numtrack_solver::BacktrackSolver;

const CLASSIC: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

// Sparse grid: a handful of givens leaves the search a deep tree.
const SPARSE: &str = "
    ___ ___ __1
    _2_ ___ ___
    ___ _3_ ___
    ___ ___ 4__
    ___ 5__ ___
    6__ ___ ___
    ___ ___ _7_
    __8 ___ ___
    ___ 9__ ___
";

fn bench_solve(c: &mut Criterion) {
    let puzzles = [
        ("classic", CLASSIC.parse::<Grid>().unwrap()),
        ("sparse", SPARSE.parse::<Grid>().unwrap()),
        ("empty", Grid::empty()),
    ];

    let solver = BacktrackSolver::new();

    for (param, grid) in puzzles {
        c.bench_with_input(BenchmarkId::new("solve", param), &grid, |b, grid| {
            b.iter_batched_ref(
                || hint::black_box(grid.clone()),
                |grid| {
                    let (solved, stats) = solver.solve(grid);
                    hint::black_box((solved, stats))
                },
                BatchSize::SmallInput,
            );
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
