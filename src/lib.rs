//! Naive vs. unrolled integer matrix multiplication.
//!
//! Two scalar kernels for `C = A * B` over square `i32` matrices, and a
//! harness that times one call of each:
//!
//! - [`matmul_naive_ijk`]: the textbook i-j-k triple loop
//! - [`matmul_unrolled_4`]: the same loop with the `k` accumulation unrolled
//!   by four, plus a cleanup loop for sizes that aren't a multiple of four
//!
//! ## Usage
//!
//! ```
//! use matmul_unroll::{Matrix, Variant, multiply};
//!
//! let a = Matrix::filled(64, 1);
//! let b = Matrix::filled(64, 1);
//! let mut c = Matrix::zeros(64);
//!
//! multiply(&a, &b, &mut c, Variant::Optimized);
//! assert!(c.as_slice().iter().all(|&v| v == 64));
//! ```
//!
//! Timing both variants the way the binary does:
//!
//! ```
//! use matmul_unroll::{BenchConfig, run_benchmark};
//!
//! let config = BenchConfig::new(32, 1).unwrap();
//! for timing in run_benchmark(&config) {
//!     println!("{timing}");
//! }
//! ```

pub mod matrix;
pub mod timing;

pub use matrix::naive_ijk::matmul_naive_ijk;
pub use matrix::unrolled::{UNROLL, matmul_unrolled_4};
pub use matrix::{Matrix, MatrixError};
pub use timing::{BenchConfig, ConfigError, Timing, Variant, run_benchmark, time_kernel};

/// Matrix dimension used by the benchmark binary.
pub const N: usize = 512;

/// Matrix multiply: C = A * B with the chosen kernel.
///
/// C is overwritten, not accumulated into.
///
/// # Panics
///
/// Panics if the three matrices don't share one dimension.
pub fn multiply(a: &Matrix, b: &Matrix, c: &mut Matrix, variant: Variant) {
    let n = a.dim();
    assert_eq!(b.dim(), n, "B: expected {}x{}, got {}x{}", n, n, b.dim(), b.dim());
    assert_eq!(c.dim(), n, "C: expected {}x{}, got {}x{}", n, n, c.dim(), c.dim());

    (variant.kernel())(a.as_slice(), b.as_slice(), c.as_mut_slice(), n);
}
