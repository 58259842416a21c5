use std::fs;
use std::path::PathBuf;

use fermstat_lut::{parse_args, run, ConfigError};

const KELVIN: f64 = 273.15;

/// Write a calibration file for a Beta-model NTC (10 kΩ, B = 3977)
fn beta_file(name: &str) -> PathBuf {
    let mut text = String::from("# temperature, resistance\n");
    for t in (-40..=140).step_by(10) {
        let r = 10_000.0 * (3977.0 * (1.0 / (t as f64 + KELVIN) - 1.0 / (25.0 + KELVIN))).exp();
        text.push_str(&format!("{t}, {r:.3}\n"));
    }
    write_file(name, &text)
}

fn write_file(name: &str, text: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("fermstat-lut-{}-{name}", std::process::id()));
    fs::write(&path, text).unwrap();
    path
}

fn args(list: &[&str], path: &PathBuf) -> Vec<String> {
    list.iter()
        .map(|s| s.to_string())
        .chain(std::iter::once(path.display().to_string()))
        .collect()
}

#[test]
fn steinhart_hart_tables() {
    let path = beta_file("sh.txt");
    let options = parse_args(args(&["-d", "sh"], &path)).unwrap();

    let mut out = Vec::new();
    let tables = run(&options, &mut out).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(tables.celsius.len(), 32);
    assert_eq!(tables.celsius[0], 0);
    assert_eq!(tables.celsius[1], -360);
    assert_eq!(tables.celsius[16], 250);
    assert_eq!(tables.celsius[31], 1284);
    assert_eq!(tables.fahrenheit[16], 770);
    assert_eq!(tables.fahrenheit[31], 2631);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "//Celsius");
    assert!(lines[1].starts_with("const int ad_lookup[] = { 0, -360, -253, "));
    assert!(lines[1].ends_with(", 1009, 1284 };"));
    assert_eq!(lines[2], "//Fahrenheit");
    assert!(lines[3].starts_with("const int ad_lookup[] = { 0, -329, "));
}

#[test]
fn log_domain_default() {
    let path = beta_file("log.txt");
    let options = parse_args(args(&[], &path)).unwrap();

    let mut out = Vec::new();
    let tables = run(&options, &mut out).unwrap();
    fs::remove_file(&path).ok();

    // Within the fit error of the exact curve
    assert!((tables.celsius[16] - 250).abs() <= 5);
    assert!(tables.celsius[1..].windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn coarser_table() {
    let path = beta_file("coarse.txt");
    let options = parse_args(args(&["-d", "sh", "-s", "128"], &path)).unwrap();

    let mut out = Vec::new();
    let tables = run(&options, &mut out).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(tables.celsius.len(), 8);
    assert_eq!(tables.celsius[4], 250);
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("fermstat-lut-does-not-exist.txt");
    let options = parse_args(args(&[], &path)).unwrap();
    let err = run(&options, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("cannot read"));
}

#[test]
fn malformed_line_reported() {
    let path = write_file("bad.txt", "-40 336000\n0 32650\n25 ten\n50 3600\n");
    let options = parse_args(args(&[], &path)).unwrap();
    let err = run(&options, &mut Vec::new()).unwrap_err();
    fs::remove_file(&path).ok();

    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::Parse { line: 3 })
    );
}

#[test]
fn too_few_samples() {
    let path = write_file("few.txt", "0 32650\n25 10000\n50 3600\n");
    let options = parse_args(args(&[], &path)).unwrap();
    let err = run(&options, &mut Vec::new()).unwrap_err();
    fs::remove_file(&path).ok();

    assert_eq!(
        err.downcast_ref::<ConfigError>(),
        Some(&ConfigError::TooFewSamples(3))
    );
}
