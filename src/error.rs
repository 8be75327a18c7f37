//! Error types for the benchmark harness
//!
//! Typed failure taxonomy:
//! - `UnknownBenchmark`: requested name absent from the registry (non-fatal in batch mode)
//! - `SelfTestFailure`: fixed-vector check mismatch, aborts that benchmark's timing
//! - `ChildExecution`: subprocess variant launch/exit/output failure

use thiserror::Error;

/// Errors produced by the medir harness
#[derive(Debug, Error)]
pub enum MedirError {
    /// Requested benchmark name is not in the registry
    #[error("no benchmark named '{name}' (available: {available:?})")]
    UnknownBenchmark {
        /// Name that was requested
        name: String,
        /// Names of all registered benchmarks
        available: Vec<String>,
    },

    /// A kernel's fixed-input self-check produced an unexpected result
    ///
    /// Timing a wrong kernel is meaningless, so this aborts the variant's run.
    #[error("self-test failed for '{benchmark}': {reason}")]
    SelfTestFailure {
        /// Benchmark whose check failed
        benchmark: String,
        /// Description of the mismatch
        reason: String,
    },

    /// An external variant process failed to launch, exited non-zero, or
    /// produced no parseable timing output
    #[error("external variant '{variant}' failed: {reason}")]
    ChildExecution {
        /// Label of the variant that failed
        variant: String,
        /// Description of the failure
        reason: String,
    },

    /// Matrix dimensions incompatible for the requested operation
    #[error("invalid shape: {reason}")]
    InvalidShape {
        /// Description of the shape mismatch
        reason: String,
    },

    /// Input size override outside the accepted range
    #[error("invalid size {size} for '{benchmark}': size must be at least 1")]
    InvalidSize {
        /// Benchmark the override was for
        benchmark: String,
        /// The rejected size
        size: usize,
    },

    /// Report serialization failed
    #[error("report serialization failed: {reason}")]
    Report {
        /// Description of the serialization failure
        reason: String,
    },
}

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, MedirError>;
