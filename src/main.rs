//! Times the naive and unrolled kernels on N×N all-ones matrices.

use anyhow::Result;
use matmul_unroll::{BenchConfig, N, run_benchmark};

fn main() -> Result<()> {
    let config = BenchConfig::new(N, 1)?;

    for timing in run_benchmark(&config) {
        println!("{}", timing);
    }

    Ok(())
}
