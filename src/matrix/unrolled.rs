//! i-j-k multiplication with the contraction loop unrolled by four.

use super::naive_ijk::check_square;

/// Unroll factor of the contraction loop in [`matmul_unrolled_4`].
pub const UNROLL: usize = 4;

/// Same product as [`matmul_naive_ijk`](super::naive_ijk::matmul_naive_ijk),
/// with four multiply-accumulates per trip through the `k` loop.
///
/// Fewer loop-control branches per product, and the four loads of A are
/// contiguous. The last `n % 4` terms go through a scalar cleanup loop, so
/// any `n` is accepted. Integer addition is associative, so the result is
/// bit-identical to the naive kernel.
///
/// # Panics
///
/// Panics if any slice length is not `n * n`.
#[allow(clippy::identity_op)]
pub fn matmul_unrolled_4(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_square(a, b, c, n);

    let k_main = (n / UNROLL) * UNROLL;

    for i in 0..n {
        let a_row = i * n;
        for j in 0..n {
            let mut sum = 0;

            let mut k = 0;
            while k < k_main {
                sum += a[a_row + k + 0] * b[(k + 0) * n + j];
                sum += a[a_row + k + 1] * b[(k + 1) * n + j];
                sum += a[a_row + k + 2] * b[(k + 2) * n + j];
                sum += a[a_row + k + 3] * b[(k + 3) * n + j];
                k += UNROLL;
            }

            // Remainder when n isn't a multiple of 4
            for k in k_main..n {
                sum += a[a_row + k] * b[k * n + j];
            }

            c[a_row + j] = sum;
        }
    }
}
