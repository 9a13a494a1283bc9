/// Naive matrix multiplication using i-j-k loop order.
///
/// This is the textbook triple loop. Each `C[i][j]` is accumulated in a local
/// and written once, so `c` is fully overwritten regardless of its contents.
/// The inner loop walks B down a column (stride `n`), which is what makes it
/// slow on large matrices.
///
/// # Arguments
///
/// * `a` - Matrix A (n × n), row-major
/// * `b` - Matrix B (n × n), row-major
/// * `c` - Matrix C (n × n), row-major, overwritten with A * B
/// * `n` - Dimension of all three matrices
///
/// # Panics
///
/// Panics if any slice length is not `n * n`.
pub fn matmul_naive_ijk(a: &[i32], b: &[i32], c: &mut [i32], n: usize) {
    check_square(a, b, c, n);

    for i in 0..n {
        let a_row = i * n;
        for j in 0..n {
            let mut sum = 0;
            for k in 0..n {
                sum += a[a_row + k] * b[k * n + j];
            }
            c[a_row + j] = sum;
        }
    }
}

#[inline]
pub(crate) fn check_square(a: &[i32], b: &[i32], c: &[i32], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two() {
        let a = [1, 2, 3, 4];
        let b = [5, 6, 7, 8];
        let mut c = [0; 4];
        matmul_naive_ijk(&a, &b, &mut c, 2);
        assert_eq!(c, [19, 22, 43, 50]);
    }

    #[test]
    fn empty_matrix_is_a_no_op() {
        let mut c: [i32; 0] = [];
        matmul_naive_ijk(&[], &[], &mut c, 0);
    }

    #[test]
    #[should_panic(expected = "B: expected 2x2=4 elements")]
    fn rejects_short_operand() {
        let mut c = [0; 4];
        matmul_naive_ijk(&[1, 2, 3, 4], &[1, 2, 3], &mut c, 2);
    }
}
