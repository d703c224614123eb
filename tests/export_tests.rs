mod common;
use common::{SMALL_YAML, gst, write_file};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_export_trips_csv() {
    let home = TempDir::new().unwrap();
    let data = write_file(&home, "status.yaml", SMALL_YAML);
    let out = home.path().join("trips.csv");

    gst(home.path())
        .args(["--data", &data, "export", "--format", "csv", "--what", "trips", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some("location,start_date,end_date,days,cost"));
    assert_eq!(lines.next(), Some("Mar-a-Lago,2025-03-02,2025-03-03,2,2000.0"));
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_events_json_range() {
    let home = TempDir::new().unwrap();
    let data = write_file(&home, "status.yaml", SMALL_YAML);
    let out = home.path().join("events.json");

    gst(home.path())
        .args(["--data", &data, "export", "--format", "json", "--what", "events"])
        .args(["--range", "2025-03-01:2025-03-03", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(rows.as_array().unwrap().len(), 3);
    assert_eq!(rows[0]["type"], "arrival");
    assert_eq!(rows[0]["golf"], false);
}

#[test]
fn test_export_stats_json() {
    let home = TempDir::new().unwrap();
    let data = write_file(&home, "status.yaml", SMALL_YAML);
    let out = home.path().join("stats.json");

    gst(home.path())
        .args(["--data", &data, "export", "--format", "json", "--what", "stats"])
        .args(["--as-of", "2025-03-11", "--file"])
        .arg(&out)
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read stats json");
    assert!(content.contains("\"estimatedTotalCost\": 2010.0"));
}

#[test]
fn test_export_stats_csv_is_rejected() {
    let home = TempDir::new().unwrap();
    let data = write_file(&home, "status.yaml", SMALL_YAML);
    let out = home.path().join("stats.csv");

    gst(home.path())
        .args(["--data", &data, "export", "--format", "csv", "--what", "stats", "--file"])
        .arg(&out)
        .assert()
        .failure()
        .stderr(contains("Export format not supported"));
}

#[test]
fn test_export_existing_file_needs_force() {
    let home = TempDir::new().unwrap();
    let data = write_file(&home, "status.yaml", SMALL_YAML);
    let out = write_file(&home, "trips.csv", "old");

    // answering "n" on stdin keeps the file
    gst(home.path())
        .args(["--data", &data, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&out).unwrap(), "old");

    gst(home.path())
        .args(["--data", &data, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().starts_with("location,"));
}

#[test]
fn test_export_rejects_bad_options_before_asking_to_overwrite() {
    let home = TempDir::new().unwrap();
    let data = write_file(&home, "status.yaml", SMALL_YAML);
    let out = write_file(&home, "stats.csv", "old");

    gst(home.path())
        .args(["--data", &data, "export", "--format", "csv", "--what", "stats", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stdout(contains("Overwrite?").not())
        .stderr(contains("Export format not supported"));

    gst(home.path())
        .args(["--data", &data, "export", "--range", "2025-13", "--file", &out])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stdout(contains("Overwrite?").not())
        .stderr(contains("Invalid range"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old");
}
