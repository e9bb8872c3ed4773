//! Report writing round trips on disk.

use std::fs;
use std::path::PathBuf;

use sl_core::StarParams;
use sl_labeling::construct;
use sl_results::{Report, ReportWriter, ResultsError};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("sl-results-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn report_captures_the_labeling() {
    let labeling = construct(&StarParams::amalgamated(3, 2).unwrap()).unwrap();
    let report = Report::from_labeling(&labeling, Some(0.25));

    assert_eq!(report.order, 7);
    assert_eq!(report.size, 6);
    assert_eq!(report.labels.len(), 7);
    assert_eq!(report.labels[0].role, "center");
    assert_eq!(report.labels[4].role, "leaf 1.1");
    assert_eq!(report.complexity.bound, 24);
    assert_eq!(report.complexity.linear, 13);
    assert_eq!(report.step, Some(2.0));
    assert_eq!(report.remaining_pool, Some(vec![8]));
    assert!(report.verification.weights_unique);
    assert!(report.collisions.is_empty());
    assert_eq!(report.digest.len(), 64);
}

#[test]
fn same_parameters_same_digest() {
    let params = StarParams::snowflake(4).unwrap();
    let a = Report::from_labeling(&construct(&params).unwrap(), None);
    let b = Report::from_labeling(&construct(&params).unwrap(), None);
    assert_eq!(a.digest, b.digest);

    let other = Report::from_labeling(&construct(&StarParams::snowflake(5).unwrap()).unwrap(), None);
    assert_ne!(a.digest, other.digest);
}

#[test]
fn snowflake_report_lists_collisions() {
    let labeling = construct(&StarParams::snowflake(5).unwrap()).unwrap();
    let report = Report::from_labeling(&labeling, None);

    assert_eq!(report.rule, "max");
    assert_eq!(report.collisions.len(), 5);
    assert!(!report.verification.weights_unique);
    assert!(report.remaining_pool.is_none());
    assert!(report.step.is_none());
}

#[test]
fn write_then_load() {
    let dir = scratch("roundtrip");
    let writer = ReportWriter::new(&dir).unwrap();
    let labeling = construct(&StarParams::amalgamated_three(3).unwrap()).unwrap();
    let report = Report::from_labeling(&labeling, Some(0.5));

    assert!(!writer.has_report("s3"));
    let paths = writer.write("s3", &report).unwrap();
    assert!(paths.text.exists());
    assert!(writer.has_report("s3"));

    let text = fs::read_to_string(&paths.text).unwrap();
    assert!(text.contains("Vertex Labels:"));
    assert!(text.contains("Edge Weights:"));
    assert!(text.contains("Theoretical Time Complexity: T(19), V+E = 19"));

    let loaded = writer.load("s3").unwrap();
    assert_eq!(loaded, report);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn rerun_overwrites_previous_report() {
    let dir = scratch("overwrite");
    let writer = ReportWriter::new(&dir).unwrap();

    let first = construct(&StarParams::amalgamated_three(2).unwrap()).unwrap();
    writer.write("run", &Report::from_labeling(&first, None)).unwrap();
    let second = construct(&StarParams::amalgamated_three(6).unwrap()).unwrap();
    writer.write("run", &Report::from_labeling(&second, None)).unwrap();

    let loaded = writer.load("run").unwrap();
    assert_eq!(loaded.n, 6);
    let text = fs::read_to_string(dir.join("run.txt")).unwrap();
    assert!(text.contains("n: 6"));
    assert!(!text.contains("n: 2\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn diagram_written_only_when_small() {
    let dir = scratch("diagram");
    let writer = ReportWriter::new(&dir).unwrap();

    let small = construct(&StarParams::amalgamated(3, 2).unwrap()).unwrap();
    let paths = writer
        .write_with_diagram("g", &Report::from_labeling(&small, None), &small, false)
        .unwrap();
    let dot = paths.dot.unwrap();
    assert!(fs::read_to_string(&dot).unwrap().contains("--"));

    // 120 leaves: skipped, and the older diagram goes away
    let large = construct(&StarParams::amalgamated_three(60).unwrap()).unwrap();
    let paths = writer
        .write_with_diagram("g", &Report::from_labeling(&large, None), &large, false)
        .unwrap();
    assert!(paths.dot.is_none());
    assert!(!dot.exists());

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_report_is_an_error() {
    let dir = scratch("missing");
    let writer = ReportWriter::new(&dir).unwrap();
    assert!(matches!(
        writer.load("nope"),
        Err(ResultsError::ReportNotFound { .. })
    ));
    let _ = fs::remove_dir_all(&dir);
}
