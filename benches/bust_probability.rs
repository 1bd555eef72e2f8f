use cant_stop::core::{Column, ColumnSet};
use cant_stop::probability::{bust_probability, enumerate_bust_probability};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn column_set(cols: &[u8]) -> ColumnSet {
    cols.iter().map(|&c| Column::new(c)).collect()
}

fn bench_bust_probability(c: &mut Criterion) {
    let usable = column_set(&[4, 7, 10]);

    c.bench_function("bust_probability_enumerate", |b| {
        b.iter(|| enumerate_bust_probability(black_box(usable)))
    });

    bust_probability(usable);
    c.bench_function("bust_probability_cached", |b| {
        b.iter(|| bust_probability(black_box(usable)))
    });
}

criterion_group!(benches, bench_bust_probability);
criterion_main!(benches);
