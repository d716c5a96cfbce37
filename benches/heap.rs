use algo_collections::PriorityQueue;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_priority_queue(c: &mut Criterion) {
    let n = 256;
    {
        let mut group = c.benchmark_group("BinaryHeap vs PriorityQueue (Push 256)");
        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h = BinaryHeap::new();
                for i in 0..n {
                    h.push(black_box(Reverse(i as i32)));
                }
                h
            })
        });

        group.bench_function("PriorityQueue<i32>", |b| {
            b.iter(|| {
                let mut h = PriorityQueue::min();
                for i in 0..n {
                    h.push(black_box(i as i32));
                }
                h
            })
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("BinaryHeap vs PriorityQueue (Drain 256)");
        let values: Vec<i32> = (0..n as i32).rev().collect();

        group.bench_function("std::collections::BinaryHeap", |b| {
            b.iter(|| {
                let mut h: BinaryHeap<Reverse<i32>> =
                    values.iter().map(|&v| Reverse(v)).collect();
                while let Some(v) = h.pop() {
                    black_box(v);
                }
            })
        });

        group.bench_function("PriorityQueue<i32>", |b| {
            b.iter(|| {
                let mut h: PriorityQueue<i32> = PriorityQueue::from_elements(values.iter().copied());
                while let Some(v) = h.pop() {
                    black_box(v);
                }
            })
        });
        group.finish();
    }
}

criterion_group!(benches, bench_priority_queue);
criterion_main!(benches);
