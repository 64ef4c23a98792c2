use arcgraph::{ArrayHeap, IndexedHeap};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_binary_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("binary_heap");

    group.bench_function("std_binary_heap_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(black_box(i));
            }
        });
    });

    group.bench_function("array_heap_add", |b| {
        b.iter(|| {
            let mut heap = ArrayHeap::new();
            for i in 0..1000 {
                heap.add(black_box(i));
            }
        });
    });

    group.bench_function("std_binary_heap_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(i);
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("array_heap_add_poll", |b| {
        b.iter(|| {
            let mut heap = ArrayHeap::new();
            for i in 0..1000 {
                heap.add(i);
            }
            while let Some(x) = heap.poll() {
                black_box(x);
            }
        });
    });

    group.finish();
}

fn bench_decrease_key(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_key");

    // std has no decrease-key; the usual workaround pushes a duplicate.
    group.bench_function("std_binary_heap_duplicate_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..500u32 {
                heap.push(Reverse(i + 1000));
            }
            for i in 0..500u32 {
                heap.push(Reverse(i));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("indexed_heap_replace", |b| {
        b.iter(|| {
            let mut heap = IndexedHeap::reversed();
            for i in 0..500u32 {
                heap.add(i + 1000);
            }
            for i in 0..500u32 {
                heap.replace(&(i + 1000), i);
            }
            while let Some(x) = heap.poll() {
                black_box(x);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_binary_heap, bench_decrease_key);
criterion_main!(benches);
