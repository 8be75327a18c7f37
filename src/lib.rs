//! # Medir
//!
//! Micro-benchmark harness for reference numerical kernels.
//!
//! Medir (Spanish: "to measure") runs the same small algorithms (CRC-16
//! checksum, Lomuto quicksort, dense matrix multiply, numerically stable
//! softmax) over repeated warmed-up trials and reports the mean wall-clock
//! time per trial. External implementations of the same benchmarks can be
//! attached as subprocess variants for cross-language comparison.
//!
//! ## Design
//!
//! - Deterministic inputs: every dataset comes from an injected seed, so the
//!   same seed and size always produce the same data
//! - Self-checked kernels: each benchmark validates a fixed reference vector
//!   before any timing; a wrong kernel never gets measured
//! - Explicit registry: name → default size and trial count is a static
//!   const table, not directory scanning
//! - Sequential execution: no shared state across benchmarks or trials
//!
//! ## Example
//!
//! ```
//! use medir::runner::Runner;
//!
//! let runner = Runner::default();
//! let report = runner.run("crc16", Some(1024)).unwrap();
//! assert_eq!(report.benchmark, "crc16");
//! assert!(report.passed());
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // usize -> f64 in timing math
#![allow(clippy::must_use_candidate)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]

/// CLI command implementations (extracted for testability)
pub mod cli;
/// Deterministic, seeded dataset generation
pub mod dataset;
pub mod error;
/// Reference kernel implementations (CRC-16, quicksort, matmul, softmax)
pub mod kernels;
/// Fixed-vector self-checks run before timing
pub mod preflight;
/// Static benchmark registry (name → default size, trial count)
pub mod registry;
/// Benchmark dispatcher
pub mod runner;
/// Warm-up + repeated-trial timing harness
pub mod timing;
/// Implementation variants (native kernels, external subprocesses)
pub mod variant;

// Re-exports for convenience
pub use error::{MedirError, Result};
pub use timing::TimingResult;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
