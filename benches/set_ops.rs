use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use aslices_rs::{intersect, remove, unique, unique_retain};

fn bench(c: &mut Criterion) {
    let values: Vec<u64> = (0..10_000).map(|v| (v * 31) % 4096).collect();
    let others: Vec<Vec<u64>> = (1..4)
        .map(|i| (0..5_000).map(|v| (v * i * 17) % 4096).collect())
        .collect();
    let mut seqs = vec![values.clone()];
    seqs.extend(others);

    c.bench_function("unique_retain() 10000 u64", |b| {
        b.iter(|| black_box(unique_retain(black_box(&values))));
    });
    c.bench_function("unique() 10000 u64", |b| {
        b.iter(|| black_box(unique(black_box(&values))));
    });
    c.bench_function("intersect() 4 sequences", |b| {
        b.iter(|| black_box(intersect(black_box(&seqs)).unwrap()));
    });
    c.bench_function("remove() 4 sequences", |b| {
        b.iter(|| black_box(remove(black_box(&seqs)).unwrap()));
    });
}

criterion_group!(
name = set_ops;
config = Criterion::default().sample_size(200);
targets = bench
);
criterion_main!(set_ops);
