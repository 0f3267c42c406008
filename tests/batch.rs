mod common;

use std::fs;
use std::path::PathBuf;

use excel2graph::batch::{BatchEvent, DONE_MESSAGE, run_batch};
use excel2graph::{BatchConfig, ChartConfig};
use tempfile::tempdir;

fn curve_columns() -> Vec<(&'static str, Vec<f64>)> {
    let xs: Vec<f64> = (0..40).map(|i| i as f64 * 0.25).collect();
    let y1: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let y2: Vec<f64> = xs.iter().map(|x| 0.5 * x).collect();
    vec![("X1", xs.clone()), ("Y1", y1), ("X2", xs), ("Y2", y2)]
}

fn config(input: PathBuf, output: PathBuf, sheet: &str) -> BatchConfig {
    BatchConfig {
        input_dir: input,
        output_dir: output,
        sheet_name: sheet.to_string(),
        font_dirs: Vec::new(),
        chart: ChartConfig {
            num_series: 2,
            ..ChartConfig::default()
        },
    }
}

#[test]
fn missing_sheet_is_reported_and_other_files_convert() {
    if !common::fonts_available() {
        return;
    }
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    common::write_workbook(&input.path().join("good.xlsx"), "Data", &curve_columns());
    common::write_workbook(&input.path().join("bad.xlsx"), "Other", &curve_columns());
    common::write_workbook(&input.path().join("~$good.xlsx"), "Data", &curve_columns());

    let out_dir = output.path().join("graphs");
    let cfg = config(input.path().to_path_buf(), out_dir.clone(), "Data");
    let mut events = Vec::new();
    let report = run_batch(&cfg, |ev| events.push(ev.clone())).unwrap();

    assert_eq!(report.converted.len(), 1);
    assert_eq!(report.failed.len(), 1);
    assert_eq!(report.skipped.len(), 1);
    let font_file = report.font_file.as_ref().expect("font recorded");
    assert!(font_file.is_file());
    assert_eq!(
        report.failed[0].message,
        "Error reading sheet 'Data' from bad.xlsx. Please verify the sheet name."
    );

    assert!(!out_dir.join("bad.png").exists());
    let png = out_dir.join("good.png");
    assert_eq!(common::png_size(&png), (3600, 2400));
    assert_eq!(report.converted[0].series.len(), 2);

    // bad.xlsx sorts first, so its failure comes before good.xlsx is processed
    let kinds: Vec<&str> = events
        .iter()
        .map(|e| match e {
            BatchEvent::Started { .. } => "started",
            BatchEvent::Skipped { .. } => "skipped",
            BatchEvent::Processing { .. } => "processing",
            BatchEvent::Converted { .. } => "converted",
            BatchEvent::Failed { .. } => "failed",
            BatchEvent::Finished { .. } => "finished",
        })
        .collect();
    assert_eq!(
        kinds,
        vec!["started", "skipped", "processing", "failed", "processing", "converted", "finished"]
    );
    assert_eq!(events.last().unwrap().status(), DONE_MESSAGE);
}

#[test]
fn text_cells_fail_only_their_file() {
    if !common::fonts_available() {
        return;
    }
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    fs::write(input.path().join("a_broken.csv"), "X1,Y1\n1,2\nabc,3\n").unwrap();
    fs::write(
        input.path().join("b_fine.csv"),
        "X1,Y1,X2,Y2\n0,0,0,1\n1,1,1,2\n2,4,2,3\n3,9,,\n4,16,,\n",
    )
    .unwrap();

    let cfg = config(
        input.path().to_path_buf(),
        output.path().to_path_buf(),
        "Sheet1",
    );
    let report = run_batch(&cfg, |_| {}).unwrap();
    assert_eq!(report.failed.len(), 1);
    assert!(report.failed[0].message.contains("a_broken.csv"));
    assert!(report.failed[0].message.contains("'abc'"));

    assert_eq!(report.converted.len(), 1);
    let series = &report.converted[0].series;
    assert_eq!(series.len(), 2);
    assert_eq!(series[0].points, 5);
    assert_eq!(series[1].points, 3);
    assert!(output.path().join("b_fine.png").exists());
}

#[test]
fn empty_input_folder_finishes_cleanly() {
    if !common::fonts_available() {
        return;
    }
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    let cfg = config(
        input.path().to_path_buf(),
        output.path().join("new"),
        "Sheet1",
    );
    let report = run_batch(&cfg, |_| {}).unwrap();
    assert!(report.converted.is_empty() && report.failed.is_empty());
    assert!(output.path().join("new").is_dir());
}

#[test]
fn bad_configuration_touches_nothing() {
    let input = tempdir().unwrap();
    let output = tempdir().unwrap();
    common::write_workbook(&input.path().join("a.xlsx"), "Sheet1", &curve_columns());
    let mut cfg = config(
        input.path().to_path_buf(),
        output.path().join("never"),
        "Sheet1",
    );
    cfg.chart.num_series = 11;
    let err = run_batch(&cfg, |_| panic!("no events expected")).unwrap_err();
    assert!(err.is_config());
    assert!(!output.path().join("never").exists());
}
