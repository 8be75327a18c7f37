//! Preflight self-checks for the benchmark kernels
//!
//! Every benchmark runs a fixed-input/fixed-output check once before any
//! timing. A mismatch aborts that benchmark's run: a kernel that computes
//! the wrong answer cannot produce a meaningful measurement.

use crate::error::{MedirError, Result};
use crate::kernels::{crc16, matmul, quicksort, softmax, Matrix};
use crate::registry::BenchmarkId;

/// Tolerance for the floating-point fixed-vector checks
const TOLERANCE: f64 = 1e-9;

/// Run the fixed-vector self-check for one benchmark.
///
/// # Errors
///
/// Returns `SelfTestFailure` naming the benchmark and the mismatch if the
/// kernel's output differs from the expected literal.
pub fn self_check(id: BenchmarkId) -> Result<()> {
    match id {
        BenchmarkId::Crc16 => check_crc16(),
        BenchmarkId::Quicksort => check_quicksort(),
        BenchmarkId::Matmul => check_matmul(),
        BenchmarkId::Softmax => check_softmax(),
    }
}

fn failure(id: BenchmarkId, reason: String) -> MedirError {
    MedirError::SelfTestFailure {
        benchmark: id.as_str().to_string(),
        reason,
    }
}

fn check_crc16() -> Result<()> {
    let got = crc16(b"123456789");
    if got != 0x6e90 {
        return Err(failure(
            BenchmarkId::Crc16,
            format!("crc16(\"123456789\") = {got:#06x}, expected 0x6e90"),
        ));
    }
    Ok(())
}

fn check_quicksort() -> Result<()> {
    let mut data = vec![3, 6, 8, 10, 1, 2, 1];
    quicksort(&mut data);
    if data != [1, 1, 2, 3, 6, 8, 10] {
        return Err(failure(
            BenchmarkId::Quicksort,
            format!("sorted [3,6,8,10,1,2,1] to {data:?}"),
        ));
    }

    let mut data = vec![4, 3, 2, 1];
    quicksort(&mut data);
    if data != [1, 2, 3, 4] {
        return Err(failure(
            BenchmarkId::Quicksort,
            format!("sorted [4,3,2,1] to {data:?}"),
        ));
    }
    Ok(())
}

fn check_matmul() -> Result<()> {
    let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0])?;
    let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0])?;
    let c = matmul(&a, &b)?;

    let expected = [19.0, 22.0, 43.0, 50.0];
    for (got, want) in c.data().iter().zip(expected.iter()) {
        if (got - want).abs() > TOLERANCE {
            return Err(failure(
                BenchmarkId::Matmul,
                format!("product {:?}, expected {expected:?}", c.data()),
            ));
        }
    }
    Ok(())
}

fn check_softmax() -> Result<()> {
    let probs = softmax(&[1.0, 2.0, 3.0]);

    let sum: f64 = probs.iter().sum();
    if (sum - 1.0).abs() > TOLERANCE {
        return Err(failure(
            BenchmarkId::Softmax,
            format!("softmax([1,2,3]) sums to {sum}, expected 1.0"),
        ));
    }

    let expected = [
        0.090_030_573_170_380_46,
        0.244_728_471_054_797_64,
        0.665_240_955_774_821_9,
    ];
    for (got, want) in probs.iter().zip(expected.iter()) {
        if (got - want).abs() > TOLERANCE {
            return Err(failure(
                BenchmarkId::Softmax,
                format!("softmax([1,2,3]) = {probs:?}, expected {expected:?}"),
            ));
        }
    }
    Ok(())
}
