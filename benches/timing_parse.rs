use criterion::{black_box, criterion_group, criterion_main, Criterion};
use solvis::table::Table;
use solvis::timing::parse_timing;

/// Synthetic timing table: `num_grid_values` blocks of `runs` samples each.
fn synthetic_table(runs: usize, num_grid_values: usize) -> Table {
    let mut rows = vec![vec![runs as f64; 3], vec![num_grid_values as f64; 3]];
    for i in 0..num_grid_values {
        let grid = 10.0 * (i + 1) as f64;
        rows.push(vec![grid; 3]);
        for r in 0..runs {
            let t = ((i * runs + r) as f64).sin().abs() + 0.01;
            rows.push(vec![t, t * 0.5, t * 2.0]);
        }
    }
    Table::from_rows("compare_times.txt", rows).unwrap()
}

fn bench_parse_timing(c: &mut Criterion) {
    let small = synthetic_table(10, 8);
    let large = synthetic_table(100, 200);

    c.bench_function("parse_timing 8x10", |b| {
        b.iter(|| parse_timing(black_box(&small)).unwrap())
    });

    c.bench_function("parse_timing 200x100", |b| {
        b.iter(|| parse_timing(black_box(&large)).unwrap())
    });
}

criterion_group!(benches, bench_parse_timing);
criterion_main!(benches);
