//! Tangent and sincos benchmarks: std scalar, lane kernels, parallel.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanemath::simd::SimdMath;

const VECTOR_SIZES: &[usize] = &[1_024, 16_384, 262_144, 1_048_576, 4_194_304];

fn generate_angles(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);
    (0..len).map(|_| rng.random_range(-100.0..=100.0)).collect()
}

fn benchmark_tan(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Tangent {size}"));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));

        let angles = generate_angles(size);
        let input = angles.as_slice();

        group.bench_with_input(BenchmarkId::new("Scalar", size), input, |b, input| {
            b.iter(|| black_box(input.iter().map(|x| x.tan()).collect::<Vec<f32>>()))
        });

        group.bench_with_input(BenchmarkId::new("SIMD", size), input, |b, input| {
            b.iter(|| black_box(SimdMath::tan(black_box(input))))
        });

        group.bench_with_input(BenchmarkId::new("Parallel SIMD", size), input, |b, input| {
            b.iter(|| black_box(black_box(input).par_tan()))
        });

        group.finish();
    }
}

fn benchmark_sincos(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Sine and Cosine {size}"));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));

        let angles = generate_angles(size);
        let input = angles.as_slice();

        group.bench_with_input(BenchmarkId::new("Scalar", size), input, |b, input| {
            b.iter(|| {
                black_box(
                    input
                        .iter()
                        .map(|x| x.sin_cos())
                        .unzip::<f32, f32, Vec<f32>, Vec<f32>>(),
                )
            })
        });

        group.bench_with_input(BenchmarkId::new("SIMD sin + cos", size), input, |b, input| {
            b.iter(|| black_box((input.sin(), input.cos())))
        });

        group.bench_with_input(BenchmarkId::new("SIMD sincos", size), input, |b, input| {
            b.iter(|| black_box(input.sincos()))
        });

        group.bench_with_input(BenchmarkId::new("Parallel SIMD sincos", size), input, |b, input| {
            b.iter(|| black_box(input.par_sincos()))
        });

        group.finish();
    }
}

criterion_group!(benches, benchmark_tan, benchmark_sincos);
criterion_main!(benches);
