use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use planar_adjust_common::PlanarImage;
use planar_adjust_kernels::bench::{map_pixels, map_samples, CHUNK_SIZE};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Pixel Map (identity op)");

    // 4096x4096, so every plane spans many chunks
    let input = PlanarImage::new(4096, 4096).unwrap();
    let mut output = PlanarImage::blank_like(&input);
    group.throughput(Throughput::Bytes(input.sample_count() as u64));

    group.bench_function(format!("map_samples (chunk {CHUNK_SIZE})"), |b| {
        b.iter(|| map_samples(black_box(&input), black_box(&mut output), |s| s))
    });

    group.bench_function(format!("map_pixels (chunk {CHUNK_SIZE})"), |b| {
        b.iter(|| map_pixels(black_box(&input), black_box(&mut output), |p| p))
    });

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
