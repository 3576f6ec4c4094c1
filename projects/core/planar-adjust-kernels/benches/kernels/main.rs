use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use planar_adjust_common::PlanarImage;
use planar_adjust_kernels::{Adjustment, AdjustmentKind};
use std::hint::black_box;

// Helper to generate an image with a predictable, non-uniform pattern
fn generate_test_image(width: u32, height: u32) -> PlanarImage {
    let len = width as usize * height as usize;
    let red = (0..len).map(|i| (i % 251) as u8).collect();
    let green = (0..len).map(|i| (i % 241) as u8).collect();
    let blue = (0..len).map(|i| (i % 239) as u8).collect();
    PlanarImage::from_planes(width, height, red, green, blue).unwrap()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Planar Adjustment Kernels");

    // 1920x1080 and 4096x4096
    for (width, height) in [(1920, 1080), (4096, 4096)] {
        let input = generate_test_image(width, height);
        let mut output = PlanarImage::blank_like(&input);
        group.throughput(Throughput::Bytes(input.sample_count() as u64));

        for &kind in AdjustmentKind::all_values() {
            let adjustment = Adjustment::with_defaults(kind);
            let size = format!("{width}x{height}");

            group.bench_with_input(
                BenchmarkId::new(format!("{kind} (allocating)"), &size),
                &input,
                |b, input| b.iter(|| adjustment.apply(black_box(input))),
            );

            group.bench_with_input(
                BenchmarkId::new(format!("{kind} (into)"), &size),
                &input,
                |b, input| {
                    b.iter(|| {
                        adjustment
                            .apply_into(black_box(input), black_box(&mut output))
                            .unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
