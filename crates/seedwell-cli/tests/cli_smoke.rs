use std::io::Write;
use std::process::{Command, Output};

use seedwell_core::build_seed_material;
use serde_json::Value;

fn seedwell(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seedwell"))
        .args(args)
        .output()
        .expect("run seedwell")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("json")
}

#[test]
fn explicit_seed_rolls_are_reproducible() {
    let args = [
        "roll", "--min", "1", "--max", "6", "--count", "5", "--json", "--seed", "42", "--clock",
        "0",
    ];
    let first = stdout_json(&seedwell(&args));
    let second = stdout_json(&seedwell(&args));
    assert_eq!(first, second);
    assert_eq!(first, serde_json::json!([1, 1, 3, 3, 4]));
}

#[test]
fn unseeded_rolls_stay_in_range() {
    let output = seedwell(&["roll", "--min", "-3", "--max", "3", "--count", "50"]);
    assert!(output.status.success());
    let body = String::from_utf8(output.stdout).expect("utf8");
    let values: Vec<i64> = body.lines().map(|line| line.parse().unwrap()).collect();
    assert_eq!(values.len(), 50);
    assert!(values.iter().all(|value| (-3..=3).contains(value)));
}

#[test]
fn inverted_range_exits_with_error() {
    let output = seedwell(&["roll", "--min", "6", "--max", "1"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("min-exceeds-max"), "stderr: {stderr}");
}

#[test]
fn seed_report_fingerprints_the_material() {
    let report = stdout_json(&seedwell(&["seed", "--seed", "42"]));
    let expected = build_seed_material(&[42], 0).fingerprint();
    assert_eq!(report["fingerprint"], Value::String(expected));
    assert_eq!(report["origin"]["source"], "explicit");
}

#[test]
fn global_seed_report_comes_from_the_os() {
    let report = stdout_json(&seedwell(&["seed"]));
    assert_eq!(report["origin"]["kind"], "entropy");
    assert_eq!(report["origin"]["source"], "os");
    assert_eq!(report["entropy_words"], 7);
}

#[test]
fn histogram_of_seeded_die_is_balanced() {
    let report = stdout_json(&seedwell(&[
        "histogram", "--draws", "60000", "--seed", "1", "2", "3", "--clock", "5",
    ]));
    let counts: Vec<u64> = report["counts"]
        .as_array()
        .expect("counts")
        .iter()
        .map(|count| count.as_u64().unwrap())
        .collect();
    assert_eq!(counts.len(), 6);
    assert_eq!(counts.iter().sum::<u64>(), 60_000);
    assert!(report["chi_square"].as_f64().unwrap() < 20.52);
}

#[test]
fn shuffle_prints_a_permutation() {
    let output = seedwell(&["shuffle", "a", "b", "c", "d", "e", "--seed", "9"]);
    assert!(output.status.success());
    let line = String::from_utf8(output.stdout).expect("utf8");
    let mut items: Vec<&str> = line.split_whitespace().collect();
    items.sort_unstable();
    assert_eq!(items, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn config_file_sets_warmup() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "entropy_words: 3\nwarmup_discard: 10").expect("write");
    let path = file.path().to_str().expect("utf8 path");

    let report = stdout_json(&seedwell(&["seed", "--config", path]));
    assert_eq!(report["entropy_words"], 3);
    assert_eq!(report["warmup_discard"], 10);
}

#[test]
fn version_long_names_the_engine() {
    let info = stdout_json(&seedwell(&["version", "--long"]));
    assert_eq!(info["engine"], "mt19937");
    assert_eq!(info["state_words"], 624);
}
