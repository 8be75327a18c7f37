//! Criterion benchmarks for the reference kernels
//!
//! Measures each kernel at a few input sizes. The harness binary covers the
//! registry-default sizes; these benchmarks exist for finer-grained kernel
//! profiling during development.

use criterion::{
    black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion,
};

use medir::dataset::DatasetGenerator;
use medir::kernels::{crc16, matmul, quicksort, softmax};

fn bench_crc16(c: &mut Criterion) {
    let generator = DatasetGenerator::new(42);
    let mut group = c.benchmark_group("crc16");

    for size in [1_024usize, 65_536] {
        let data = generator.bytes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(crc16(data)));
        });
    }

    group.finish();
}

fn bench_quicksort(c: &mut Criterion) {
    let generator = DatasetGenerator::new(42);
    let mut group = c.benchmark_group("quicksort");

    for size in [1_000usize, 10_000] {
        let data = generator.bytes(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            // Fresh unsorted copy per iteration
            b.iter_batched(
                || data.clone(),
                |mut copy| quicksort(&mut copy),
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_matmul(c: &mut Criterion) {
    let generator = DatasetGenerator::new(42);
    let mut group = c.benchmark_group("matmul");
    group.sample_size(20);

    for n in [32usize, 128] {
        let (a, b_mat) = generator.matrix_pair(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(matmul(&a, &b_mat).expect("square operands")));
        });
    }

    group.finish();
}

fn bench_softmax(c: &mut Criterion) {
    let generator = DatasetGenerator::new(42);
    let mut group = c.benchmark_group("softmax");

    for size in [1_000usize, 10_000] {
        let data = generator.vector(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(softmax(data)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_crc16,
    bench_quicksort,
    bench_matmul,
    bench_softmax
);
criterion_main!(benches);
