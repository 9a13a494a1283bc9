use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use matmul_unroll::{Matrix, Variant, multiply};

// 127 exercises the unrolled kernel's cleanup loop.
const INPUT_SIZES: &[(&str, usize)] = &[("n64", 64), ("n127", 127), ("n256", 256)];

fn make_matrix(n: usize, seed: usize) -> Matrix {
    let data = (0..n * n).map(|i| ((i * 31 + seed) % 17) as i32).collect();
    Matrix::from_vec(n, data).expect("n * n elements")
}

fn bench_matmul(c: &mut Criterion) {
    for variant in Variant::ALL {
        let mut group = c.benchmark_group(variant.to_string());
        for &(label, n) in INPUT_SIZES {
            group.throughput(Throughput::Elements((n as u64).pow(3)));

            let a = make_matrix(n, 3);
            let b = make_matrix(n, 11);
            let mut out = Matrix::zeros(n);

            group.bench_function(BenchmarkId::new("mixed", label), |bench| {
                bench.iter(|| {
                    multiply(black_box(&a), black_box(&b), black_box(&mut out), variant);
                    black_box(out.get(n / 2, n / 2));
                });
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_matmul);
criterion_main!(benches);
