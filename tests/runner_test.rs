//! Dispatcher behavior tests
//!
//! Registry resolution, unknown-name handling, and batch failure isolation.

use medir::error::MedirError;
use medir::registry::{BenchmarkSpec, REGISTRY};
use medir::runner::Runner;
use medir::timing::TimingResult;
use medir::variant::{VariantBackend, VariantInfo};

/// Variant that always fails, for isolation tests
struct FailingVariant;

impl VariantBackend for FailingVariant {
    fn info(&self) -> VariantInfo {
        VariantInfo {
            label: "failing".to_string(),
            native: false,
        }
    }

    fn run(&self, spec: BenchmarkSpec, _size: usize) -> Result<TimingResult, MedirError> {
        Err(MedirError::ChildExecution {
            variant: format!("{}/failing", spec.id),
            reason: "synthetic failure".to_string(),
        })
    }
}

#[test]
fn unknown_benchmark_is_reported_and_nothing_runs() {
    let runner = Runner::new(42);
    let err = runner.run("fibonacci", None).unwrap_err();
    match err {
        MedirError::UnknownBenchmark { name, available } => {
            assert_eq!(name, "fibonacci");
            assert_eq!(available.len(), REGISTRY.len());
        }
        other => panic!("expected UnknownBenchmark, got {other:?}"),
    }
}

#[test]
fn run_uses_registry_default_size() {
    let runner = Runner::new(42).with_trials(1);
    let report = runner.run("quicksort", None).unwrap();
    assert_eq!(report.size, 10_000);
    assert!(report.passed());
}

#[test]
fn run_honors_size_override() {
    let runner = Runner::new(42).with_trials(1);
    let report = runner.run("softmax", Some(64)).unwrap();
    assert_eq!(report.size, 64);
    assert_eq!(report.timings.len(), 1);
    assert_eq!(report.timings[0].label, "softmax/native");
}

#[test]
fn zero_size_is_rejected_before_running() {
    let runner = Runner::new(42);
    let err = runner.run("crc16", Some(0)).unwrap_err();
    assert!(matches!(err, MedirError::InvalidSize { size: 0, .. }));
}

#[test]
fn run_all_covers_the_whole_registry() {
    let runner = Runner::new(42).with_trials(1);
    let reports = runner.run_all();
    assert_eq!(reports.len(), REGISTRY.len());

    let names: Vec<&str> = reports.iter().map(|r| r.benchmark.as_str()).collect();
    assert_eq!(names, vec!["crc16", "quicksort", "matmul", "softmax"]);
    for report in &reports {
        assert!(report.passed(), "{} failed: {:?}", report.benchmark, report.failures);
    }
}

#[test]
fn failing_variant_does_not_abort_the_batch() {
    let mut runner = Runner::new(42).with_trials(1);
    runner.add_variant(Box::new(FailingVariant));

    let reports = runner.run_all();
    assert_eq!(reports.len(), REGISTRY.len());

    for report in &reports {
        // Native variant still produced a timing
        assert_eq!(report.timings.len(), 1, "{}", report.benchmark);
        // The failing variant is recorded as a diagnostic
        assert_eq!(report.failures.len(), 1, "{}", report.benchmark);
        assert!(report.failures[0].contains("synthetic failure"));
        assert!(!report.passed());
    }
}

#[test]
fn reports_serialize_to_json() {
    let runner = Runner::new(42).with_trials(1);
    let report = runner.run("crc16", Some(32)).unwrap();
    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"benchmark\":\"crc16\""));
    assert!(json.contains("mean_millis"));
}
