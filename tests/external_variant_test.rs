//! External subprocess variant tests
//!
//! Uses `sh -c` stand-ins for external benchmark implementations; the extra
//! name/size arguments the harness appends land in the shell's positional
//! parameters.

#![cfg(unix)]

use medir::error::MedirError;
use medir::registry::spec_for;
use medir::registry::BenchmarkId;
use medir::variant::{ExternalVariant, ExternalVariantConfig, VariantBackend};

fn shell_variant(script: &str, label: &str) -> ExternalVariant {
    ExternalVariant::new(
        ExternalVariantConfig::new("sh")
            .with_args(vec!["-c".to_string(), script.to_string()])
            .with_label(label),
    )
}

#[test]
fn well_formed_child_output_parses() {
    let variant = shell_variant("echo 'Mean time: 0.25ms'", "fake");
    let spec = spec_for(BenchmarkId::Crc16);
    let result = variant.run(spec, 1024).unwrap();
    assert_eq!(result.label, "crc16/fake");
    assert!((result.mean_millis - 0.25).abs() < 1e-12);
}

#[test]
fn child_receives_name_and_size_arguments() {
    // sh -c places the appended name in $0 and the size in $1
    let variant = shell_variant("echo \"Mean time: $1ms\"", "echo-size");
    let spec = spec_for(BenchmarkId::Softmax);
    let result = variant.run(spec, 777).unwrap();
    assert!((result.mean_millis - 777.0).abs() < 1e-12);
}

#[test]
fn nonzero_exit_is_child_execution_failure() {
    let variant = shell_variant("exit 3", "broken");
    let spec = spec_for(BenchmarkId::Quicksort);
    let err = variant.run(spec, 16).unwrap_err();
    match err {
        MedirError::ChildExecution { variant, .. } => {
            assert_eq!(variant, "quicksort/broken");
        }
        other => panic!("expected ChildExecution, got {other:?}"),
    }
}

#[test]
fn missing_timing_line_is_child_execution_failure() {
    let variant = shell_variant("echo 'no timing printed'", "silent");
    let spec = spec_for(BenchmarkId::Matmul);
    let err = variant.run(spec, 8).unwrap_err();
    assert!(matches!(err, MedirError::ChildExecution { .. }));
}

#[test]
fn missing_program_is_child_execution_failure() {
    let variant = ExternalVariant::new(ExternalVariantConfig::new(
        "/nonexistent/benchmark-binary",
    ));
    let spec = spec_for(BenchmarkId::Crc16);
    let err = variant.run(spec, 8).unwrap_err();
    assert!(matches!(err, MedirError::ChildExecution { .. }));
}
