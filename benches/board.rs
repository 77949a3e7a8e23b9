use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use torsnek::{Board, Cell, CELLS, COLS, ROWS};

/// A closed tour of all 425 cells, so a snake of any length can circulate
/// forever without ever meeting itself.
fn full_cycle() -> Vec<Cell> {
    let mut path = Vec::with_capacity(CELLS);
    for col in 0..COLS {
        if col % 2 == 0 {
            for row in 0..ROWS - 1 {
                path.push(Cell::new(row, col));
            }
        } else {
            for row in (0..ROWS - 1).rev() {
                path.push(Cell::new(row, col));
            }
        }
    }
    for col in (0..COLS).rev() {
        path.push(Cell::new(ROWS - 1, col));
    }
    path
}

/// One advance plus one release per iteration, walking the cycle. Tick cost
/// should not move with the body length.
fn bench_tick(c: &mut Criterion) {
    let path = full_cycle();
    let mut group = c.benchmark_group("tick");

    for len in [10usize, 100, 300] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut board = Board::new();
            board.reset(|_| false);
            board.seed(path[0]);
            for i in 1..len {
                assert!(board.advance_head(path[i - 1], path[0], path[i]));
            }

            let mut head = len - 1;
            let mut tail = 0;
            b.iter(|| {
                let next = (head + 1) % CELLS;
                assert!(board.advance_head(path[head], path[tail], path[next]));
                board.release_tail(path[next], path[tail]);
                head = next;
                tail = (tail + 1) % CELLS;
            });
        });
    }
    group.finish();
}

fn bench_food_draw(c: &mut Criterion) {
    let path = full_cycle();
    let mut rng = StdRng::seed_from_u64(42);

    c.bench_function("food draw, half-full board", |b| {
        let mut board = Board::new();
        board.reset(|_| false);
        board.seed(path[0]);
        for i in 1..CELLS / 2 {
            assert!(board.advance_head(path[i - 1], path[0], path[i]));
        }
        b.iter(|| board.random_open(&mut rng));
    });
}

criterion_group!(benches, bench_tick, bench_food_draw);
criterion_main!(benches);
