//! Benchmark dispatcher
//!
//! Resolves a benchmark name against the registry, resolves the input size
//! (default or override), and runs every attached variant sequentially. In
//! batch mode each benchmark's failures are isolated so one failure never
//! aborts the rest of the run.

use serde::{Deserialize, Serialize};

use crate::dataset::{DatasetGenerator, DEFAULT_SEED};
use crate::error::{MedirError, Result};
use crate::registry::{self, BenchmarkId, BenchmarkSpec, REGISTRY};
use crate::timing::TimingResult;
use crate::variant::{NativeVariant, VariantBackend};

/// Outcome of running one benchmark across all attached variants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Benchmark name
    pub benchmark: String,
    /// Input size the run used
    pub size: usize,
    /// Timings from variants that completed
    pub timings: Vec<TimingResult>,
    /// Diagnostics from variants that failed
    pub failures: Vec<String>,
}

impl BenchmarkReport {
    /// True when every attached variant completed
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs benchmarks against a set of implementation variants
///
/// Always carries the in-process native variant; external subprocess
/// variants can be attached on top. Execution is fully sequential.
pub struct Runner {
    variants: Vec<Box<dyn VariantBackend>>,
    trials_override: Option<usize>,
}

impl Default for Runner {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Runner {
    /// Create a runner with the native variant seeded from `seed`
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            variants: vec![Box::new(NativeVariant::new(DatasetGenerator::new(seed)))],
            trials_override: None,
        }
    }

    /// Override the per-benchmark trial count for every run
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials_override = Some(trials);
        self
    }

    /// Attach an additional variant
    pub fn add_variant(&mut self, variant: Box<dyn VariantBackend>) {
        self.variants.push(variant);
    }

    /// Run one named benchmark.
    ///
    /// Resolves the default size from the registry when `size` is `None`.
    /// Variant failures are recorded in the report, not returned as errors.
    ///
    /// # Errors
    ///
    /// Returns `UnknownBenchmark` if `name` is not registered, or
    /// `InvalidSize` for a zero size override.
    pub fn run(&self, name: &str, size: Option<usize>) -> Result<BenchmarkReport> {
        let spec = registry::find(name).ok_or_else(|| MedirError::UnknownBenchmark {
            name: name.to_string(),
            available: BenchmarkId::all()
                .iter()
                .map(|id| id.as_str().to_string())
                .collect(),
        })?;

        let size = size.unwrap_or(spec.default_size);
        if size == 0 {
            return Err(MedirError::InvalidSize {
                benchmark: spec.id.as_str().to_string(),
                size,
            });
        }

        Ok(self.run_spec(spec, size))
    }

    /// Run every registered benchmark at its default size.
    ///
    /// Iterates the registry in declaration order; a failing benchmark is
    /// reported in its own entry and never prevents the remaining
    /// benchmarks from running.
    #[must_use]
    pub fn run_all(&self) -> Vec<BenchmarkReport> {
        REGISTRY
            .iter()
            .map(|spec| self.run_spec(*spec, spec.default_size))
            .collect()
    }

    fn run_spec(&self, mut spec: BenchmarkSpec, size: usize) -> BenchmarkReport {
        if let Some(trials) = self.trials_override {
            spec.trials = trials;
        }

        let mut timings = Vec::new();
        let mut failures = Vec::new();
        for variant in &self.variants {
            match variant.run(spec, size) {
                Ok(timing) => timings.push(timing),
                Err(e) => failures.push(format!("{}/{}: {e}", spec.id, variant.info().label)),
            }
        }

        BenchmarkReport {
            benchmark: spec.id.to_string(),
            size,
            timings,
            failures,
        }
    }
}
