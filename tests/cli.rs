mod common;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("e2g").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("convert"))
        .stdout(predicate::str::contains("palettes"));
}

#[test]
fn palettes_as_json() {
    let out = Command::cargo_bin("e2g")
        .unwrap()
        .args(["palettes", "--json"])
        .output()
        .unwrap();
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["colors"].as_array().unwrap().len(), 20);
    assert_eq!(v["markers"].as_array().unwrap().len(), 20);
    assert_eq!(v["legend_positions"].as_array().unwrap().len(), 10);
    assert_eq!(v["fonts"][0], "Times New Roman");
    assert_eq!(v["colors"][0]["name"], "red");
}

#[test]
fn unknown_color_is_rejected() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("e2g").unwrap();
    cmd.args(["convert", "--colors", "red,chartreuse", "--input"])
        .arg(dir.path());
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown color 'chartreuse'"));
}

#[test]
fn missing_input_folder_is_a_config_error() {
    let dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("e2g").unwrap();
    cmd.args(["convert", "--input"])
        .arg(dir.path().join("nope"))
        .arg("--output")
        .arg(dir.path().join("out"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    assert!(!dir.path().join("out").exists());
}

#[test]
fn convert_reports_json() {
    if !common::fonts_available() {
        return;
    }
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let xs: Vec<f64> = (0..10).map(f64::from).collect();
    let ys: Vec<f64> = xs.iter().map(|x| x * x).collect();
    common::write_workbook(
        &input.path().join("run.xlsx"),
        "Sheet1",
        &[("X1", xs), ("Y1", ys)],
    );

    let out = Command::cargo_bin("e2g")
        .unwrap()
        .args(["convert", "--json", "--names", "parabola", "--input"])
        .arg(input.path())
        .arg("--output")
        .arg(output.path())
        .output()
        .unwrap();
    assert!(out.status.success(), "{}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["converted"].as_array().unwrap().len(), 1);
    assert_eq!(v["converted"][0]["series"][0]["label"], "parabola");
    assert!(output.path().join("run.png").exists());
}
