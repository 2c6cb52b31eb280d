use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use sequence_lib::algorithm::{rotate, rotate_range, stable_partition};
use sequence_lib::collections::contiguous::Vector;
use sequence_lib::iter::{ForwardOnly, RawCursor};

fn bench_push_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_growth");

    for size in [100, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("u64", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..size as u64 {
                    vec.push(i);
                }
                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("string", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::new();
                for i in 0..size {
                    vec.push(i.to_string());
                }
                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_middle_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("middle_insert");

    for size in [1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(100));
        group.bench_with_input(BenchmarkId::new("single", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::from_iter_sized(0..size);
                for i in 0..100 {
                    vec.insert(vec.len() / 2, i);
                }
                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("trusted_len", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::from_iter_sized(0..size);
                vec.insert_iter(size / 2, 0..100);
                black_box(vec.len())
            });
        });
        group.bench_with_input(BenchmarkId::new("single_pass", size), size, |b, &size| {
            b.iter(|| {
                let mut vec = Vector::from_iter_sized(0..size);
                vec.insert_iter(size / 2, (0..100).filter(|_| true));
                black_box(vec.len())
            });
        });
    }
    group.finish();
}

fn bench_rotate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rotate");

    for size in [1_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("random_access", size), size, |b, &size| {
            let mut vec = Vector::from_iter_sized(0..size);
            b.iter(|| black_box(rotate(&mut vec, size / 3)));
        });
        group.bench_with_input(BenchmarkId::new("forward", size), size, |b, &size| {
            let mut vec = Vector::from_iter_sized(0..size);
            b.iter(|| {
                let (first, last) = RawCursor::range(&mut vec);
                let middle = RawCursor::new(vec.as_mut_ptr(), size / 3);
                // SAFETY: All three cursors point into vec, in order.
                let new_first = unsafe {
                    rotate_range(ForwardOnly(first), ForwardOnly(middle), ForwardOnly(last))
                };
                black_box(new_first.0.index())
            });
        });
    }
    group.finish();
}

fn bench_stable_partition(c: &mut Criterion) {
    c.bench_function("stable_partition_10000", |b| {
        let mut vec = Vector::from_iter_sized(0..10_000_u32);
        b.iter(|| black_box(stable_partition(&mut vec, |x| x % 3 == 0)));
    });
}

criterion_group!(
    benches,
    bench_push_growth,
    bench_middle_insert,
    bench_rotate,
    bench_stable_partition
);
criterion_main!(benches);
