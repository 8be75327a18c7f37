//! Implementation variants for benchmark comparison
//!
//! A variant is one implementation of a benchmark: the in-process native
//! kernels, or an external program spawned per run. External variants
//! receive the benchmark name and input size as command-line arguments;
//! size overrides are runtime parameters, never source-text substitution.

use std::hint::black_box;
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetGenerator;
use crate::error::{MedirError, Result};
use crate::kernels::{crc16, matmul, quicksort, softmax};
use crate::preflight;
use crate::registry::{BenchmarkId, BenchmarkSpec};
use crate::timing::{measure, TimingResult};

/// Variant metadata for reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariantInfo {
    /// Short label used to qualify timing results
    pub label: String,
    /// Whether this variant runs in-process
    pub native: bool,
}

/// One implementation of a benchmark
pub trait VariantBackend {
    /// Variant metadata
    fn info(&self) -> VariantInfo;

    /// Run the benchmark described by `spec` at `size`, returning the mean
    /// trial time.
    ///
    /// # Errors
    ///
    /// Returns `SelfTestFailure` if a correctness check fails before timing,
    /// or `ChildExecution` if a subprocess variant fails.
    fn run(&self, spec: BenchmarkSpec, size: usize) -> Result<TimingResult>;
}

// ============================================================================
// Native variant (in-process kernels)
// ============================================================================

/// In-process variant running the reference kernels
///
/// Builds a deterministic dataset, runs the kernel's preflight self-check,
/// then times the kernel over the configured trials.
#[derive(Debug, Clone, Default)]
pub struct NativeVariant {
    generator: DatasetGenerator,
}

impl NativeVariant {
    /// Create a native variant with a seeded dataset generator
    #[must_use]
    pub fn new(generator: DatasetGenerator) -> Self {
        Self { generator }
    }
}

impl VariantBackend for NativeVariant {
    fn info(&self) -> VariantInfo {
        VariantInfo {
            label: "native".to_string(),
            native: true,
        }
    }

    fn run(&self, spec: BenchmarkSpec, size: usize) -> Result<TimingResult> {
        preflight::self_check(spec.id)?;

        let label = format!("{}/native", spec.id);
        let result = match spec.id {
            BenchmarkId::Crc16 => {
                let data = self.generator.bytes(size);
                measure(&label, spec.trials, || {
                    black_box(crc16(&data));
                })
            }
            BenchmarkId::Quicksort => {
                let data = self.generator.bytes(size);
                measure(&label, spec.trials, || {
                    // Every trial sorts a pristine unsorted copy; re-sorting
                    // sorted data would invalidate the measurement
                    let mut copy = data.clone();
                    quicksort(&mut copy);
                    black_box(copy);
                })
            }
            BenchmarkId::Matmul => {
                let (a, b) = self.generator.matrix_pair(size);
                // Surface any shape error once, outside the timed region
                matmul(&a, &b)?;
                measure(&label, spec.trials, || {
                    black_box(matmul(&a, &b).ok());
                })
            }
            BenchmarkId::Softmax => {
                let data = self.generator.vector(size);
                measure(&label, spec.trials, || {
                    black_box(softmax(&data));
                })
            }
        };
        Ok(result)
    }
}

// ============================================================================
// External variant (subprocess)
// ============================================================================

/// Configuration for an external subprocess variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalVariantConfig {
    /// Program to execute
    pub program: String,
    /// Arguments placed before the benchmark name and size
    pub args: Vec<String>,
    /// Label for reports
    pub label: String,
}

impl ExternalVariantConfig {
    /// Create a config for a program, labeled with the program name
    #[must_use]
    pub fn new(program: &str) -> Self {
        Self {
            program: program.to_string(),
            args: Vec::new(),
            label: program.to_string(),
        }
    }

    /// Set leading arguments
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Set the report label
    #[must_use]
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }
}

/// External program run as a blocking, synchronous child process
///
/// The child is invoked as `program [args..] <benchmark-name> <size>`, is
/// expected to run its own self-test and timing loop, and must print a
/// `Mean time: <value>ms` line on stdout. No cancellation, no timeout, no
/// retries.
#[derive(Debug, Clone)]
pub struct ExternalVariant {
    config: ExternalVariantConfig,
}

impl ExternalVariant {
    /// Create an external variant from its config
    #[must_use]
    pub fn new(config: ExternalVariantConfig) -> Self {
        Self { config }
    }

    fn child_failure(&self, spec: BenchmarkSpec, reason: String) -> MedirError {
        MedirError::ChildExecution {
            variant: format!("{}/{}", spec.id, self.config.label),
            reason,
        }
    }
}

impl VariantBackend for ExternalVariant {
    fn info(&self) -> VariantInfo {
        VariantInfo {
            label: self.config.label.clone(),
            native: false,
        }
    }

    fn run(&self, spec: BenchmarkSpec, size: usize) -> Result<TimingResult> {
        let output = Command::new(&self.config.program)
            .args(&self.config.args)
            .arg(spec.id.as_str())
            .arg(size.to_string())
            .output()
            .map_err(|e| {
                self.child_failure(
                    spec,
                    format!("failed to execute {}: {e}", self.config.program),
                )
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.child_failure(
                spec,
                format!("{}: {}", output.status, stderr.trim()),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let mean_millis = parse_mean_millis(&stdout).ok_or_else(|| {
            self.child_failure(spec, "no 'Mean time' line in output".to_string())
        })?;

        Ok(TimingResult {
            label: format!("{}/{}", spec.id, self.config.label),
            mean_millis,
        })
    }
}

/// Extract the mean from the last `Mean time: <value>ms` line of child output
fn parse_mean_millis(output: &str) -> Option<f64> {
    output
        .lines()
        .rev()
        .filter(|line| line.contains("Mean time"))
        .find_map(|line| {
            let (_, tail) = line.split_once(':')?;
            tail.trim().trim_end_matches("ms").trim().parse().ok()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::spec_for;

    #[test]
    fn test_parse_mean_millis() {
        assert_eq!(parse_mean_millis("Mean time: 0.25ms"), Some(0.25));
        assert_eq!(parse_mean_millis("Mean time: 12.5 ms"), Some(12.5));
    }

    #[test]
    fn test_parse_skips_surrounding_output() {
        let output = "CRC16: 28304\nMean time: 1.75ms\nDone\n";
        assert_eq!(parse_mean_millis(output), Some(1.75));
    }

    #[test]
    fn test_parse_takes_last_timing_line() {
        let output = "Mean time: 1.0ms\nMean time: 2.0ms\n";
        assert_eq!(parse_mean_millis(output), Some(2.0));
    }

    #[test]
    fn test_parse_missing_line_is_none() {
        assert_eq!(parse_mean_millis("no timing here"), None);
        assert_eq!(parse_mean_millis("Mean time: not-a-number"), None);
    }

    #[test]
    fn test_native_variant_runs_small_sizes() {
        let variant = NativeVariant::default();
        for id in BenchmarkId::all() {
            let mut spec = spec_for(id);
            spec.trials = 1;
            let result = variant.run(spec, 8).unwrap();
            assert!(result.label.starts_with(id.as_str()));
            assert!(result.mean_millis >= 0.0);
        }
    }
}
