#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use golfstats::{EventRecord, EventType, Events};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Binary under test, with HOME pointed at `home` so no real config is read.
pub fn gst(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("golfstats");
    cmd.env("HOME", home);
    cmd
}

/// Path of the data file shipped with the repository.
pub fn sample_data() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join("status.yaml")
        .to_string_lossy()
        .to_string()
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write test file");
    path.to_string_lossy().to_string()
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

/// Build an event store from `(date, location, type)` triples.
pub fn events(entries: &[(&str, &str, EventType)]) -> Events {
    entries
        .iter()
        .map(|(d, loc, kind)| (date(d), EventRecord::new(loc, "https://example.org", *kind)))
        .collect()
}

pub const SMALL_YAML: &str = r#"
term_start: 2025-03-01
location_costs:
  "Mar-a-Lago": 1000
  "Washington, DC": 10
events:
  "2025-03-01":
    location: "Mar-a-Lago"
    url: "https://example.org/a"
    type: arrival
  "2025-03-02":
    location: "Mar-a-Lago"
    url: "https://example.org/b"
    type: golf
  "2025-03-03":
    location: "Mar-a-Lago"
    url: ""
    type: golf_departure
  "2025-03-08":
    location: "Washington, DC"
    url: "https://example.org/c"
    type: golf
  "2025-03-10":
    location: "Scotland"
    url: "https://example.org/d"
    type: golf
"#;
