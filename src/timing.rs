//! Wall-clock timing of the two kernels.

use std::fmt;
use std::hint::black_box;
use std::time::Instant;

use thiserror::Error;

use crate::matrix::Matrix;
use crate::matrix::naive_ijk::matmul_naive_ijk;
use crate::matrix::unrolled::matmul_unrolled_4;
use crate::{N, multiply};

/// Signature shared by both kernels.
pub type MatmulFn = fn(&[i32], &[i32], &mut [i32], usize);

/// Which kernel to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// i-j-k triple loop.
    Naive,
    /// Contraction loop unrolled by four.
    Optimized,
}

impl Variant {
    /// Run order of the benchmark.
    pub const ALL: [Variant; 2] = [Variant::Naive, Variant::Optimized];

    pub fn kernel(self) -> MatmulFn {
        match self {
            Variant::Naive => matmul_naive_ijk,
            Variant::Optimized => matmul_unrolled_4,
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Naive => f.write_str("Naive"),
            Variant::Optimized => f.write_str("Optimized"),
        }
    }
}

/// Elapsed time of one variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub variant: Variant,
    pub seconds: f64,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} multiplication took {} seconds.",
            self.variant, self.seconds
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("matrix size must be at least 1")]
    ZeroSize,
    #[error("trial count must be at least 1")]
    ZeroTrials,
}

/// Benchmark parameters.
///
/// The default is one `N × N` run per variant with no warm-up. Setting
/// `trials` above 1 reports the mean over that many runs instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchConfig {
    pub size: usize,
    pub trials: usize,
}

impl BenchConfig {
    pub fn new(size: usize, trials: usize) -> Result<Self, ConfigError> {
        if size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if trials == 0 {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(Self { size, trials })
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self { size: N, trials: 1 }
    }
}

/// Times a single call of `variant`, writing the product into `c`.
pub fn time_kernel(variant: Variant, a: &Matrix, b: &Matrix, c: &mut Matrix) -> Timing {
    let start = Instant::now();
    multiply(black_box(a), black_box(b), c, variant);
    let seconds = start.elapsed().as_secs_f64();
    black_box(c.as_slice());

    Timing { variant, seconds }
}

/// Runs every variant in [`Variant::ALL`] order on all-ones inputs.
///
/// The output matrix is zeroed before each timed call. Returns one
/// [`Timing`] per variant, holding the mean over `config.trials` calls.
pub fn run_benchmark(config: &BenchConfig) -> Vec<Timing> {
    let a = Matrix::filled(config.size, 1);
    let b = Matrix::filled(config.size, 1);
    let mut c = Matrix::zeros(config.size);

    Variant::ALL
        .iter()
        .map(|&variant| {
            let mut total = 0.0;
            for _ in 0..config.trials {
                c.fill(0);
                total += time_kernel(variant, &a, &b, &mut c).seconds;
            }
            Timing {
                variant,
                seconds: total / config.trials as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names() {
        assert_eq!(Variant::Naive.to_string(), "Naive");
        assert_eq!(Variant::Optimized.to_string(), "Optimized");
    }

    #[test]
    fn timing_line_format() {
        let t = Timing {
            variant: Variant::Optimized,
            seconds: 0.25,
        };
        assert_eq!(t.to_string(), "Optimized multiplication took 0.25 seconds.");
    }

    #[test]
    fn config_validation() {
        assert_eq!(BenchConfig::new(0, 1), Err(ConfigError::ZeroSize));
        assert_eq!(BenchConfig::new(8, 0), Err(ConfigError::ZeroTrials));
        assert_eq!(
            BenchConfig::new(8, 3),
            Ok(BenchConfig { size: 8, trials: 3 })
        );
    }

    #[test]
    fn default_config_is_single_run_at_n() {
        let config = BenchConfig::default();
        assert_eq!(config.size, 512);
        assert_eq!(config.trials, 1);
    }

    #[test]
    fn time_kernel_writes_product() {
        let a = Matrix::filled(6, 2);
        let b = Matrix::filled(6, 3);
        let mut c = Matrix::zeros(6);

        let t = time_kernel(Variant::Optimized, &a, &b, &mut c);

        assert_eq!(t.variant, Variant::Optimized);
        assert!(t.seconds >= 0.0);
        assert!(c.as_slice().iter().all(|&v| v == 36));
    }
}
