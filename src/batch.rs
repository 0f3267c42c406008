//! Batch conversion: every spreadsheet in the input folder becomes one PNG.
//!
//! Files are handled one at a time in file-name order. Configuration problems
//! stop the run before any file is read; anything that goes wrong with a
//! single file is reported and the run moves on to the next one.

use log::{info, warn};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::fonts;
use crate::storage::{InputFormat, load_dataset};
use crate::viz::{SeriesSummary, render_png};

/// Final status line of a run.
pub const DONE_MESSAGE: &str = "All graphs have been created and saved!";

/// Progress notifications, emitted in order.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Started { total: usize },
    /// Editor lock file (name starts with `~`), never opened.
    Skipped { file: PathBuf },
    Processing { file: PathBuf },
    Converted { file: PathBuf, output: PathBuf },
    Failed { file: PathBuf, message: String },
    Finished { converted: usize, failed: usize },
}

impl BatchEvent {
    /// One-line, user-facing status text.
    pub fn status(&self) -> String {
        match self {
            BatchEvent::Started { total } => format!("Found {total} file(s)"),
            BatchEvent::Skipped { file } => format!("Skipped: {}", display_name(file)),
            BatchEvent::Processing { file } => format!("Processing: {}", display_name(file)),
            BatchEvent::Converted { output, .. } => format!("Saved: {}", output.display()),
            BatchEvent::Failed { message, .. } => message.clone(),
            BatchEvent::Finished { .. } => DONE_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvertedFile {
    pub input: PathBuf,
    pub output: PathBuf,
    pub series: Vec<SeriesSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedFile {
    pub input: PathBuf,
    pub message: String,
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchReport {
    pub converted: Vec<ConvertedFile>,
    pub failed: Vec<FailedFile>,
    pub skipped: Vec<PathBuf>,
    /// Font file the charts were drawn with.
    pub font_file: Option<PathBuf>,
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Supported input files in `dir`, sorted by name, plus the `~` lock files
/// that were left out. Subdirectories and other extensions are ignored.
pub fn discover_inputs(dir: &Path) -> Result<(Vec<PathBuf>, Vec<PathBuf>)> {
    let mut inputs = Vec::new();
    let mut skipped = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() || InputFormat::from_path(&path).is_none() {
            continue;
        }
        if display_name(&path).starts_with('~') {
            skipped.push(path);
        } else {
            inputs.push(path);
        }
    }
    inputs.sort();
    skipped.sort();
    Ok((inputs, skipped))
}

/// User-facing text for a file that could not be converted.
pub fn failure_message(file: &Path, sheet: &str, err: &Error) -> String {
    match err {
        Error::SheetNotFound { .. } => format!(
            "Error reading sheet '{sheet}' from {}. Please verify the sheet name.",
            display_name(file)
        ),
        other => format!("Error processing {}: {other}", display_name(file)),
    }
}

/// Convert one input file into `<output_dir>/<stem>.png`.
pub fn convert_file(input: &Path, config: &BatchConfig) -> Result<ConvertedFile> {
    let dataset = load_dataset(input, &config.sheet_name)?;
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let output = config.output_dir.join(format!("{stem}.png"));
    let series = render_png(&dataset, &config.chart, &stem, &output)?;
    Ok(ConvertedFile {
        input: input.to_path_buf(),
        output,
        series,
    })
}

/// Run the whole batch, reporting progress through `on_event`.
pub fn run_batch<F>(config: &BatchConfig, mut on_event: F) -> Result<BatchReport>
where
    F: FnMut(&BatchEvent),
{
    config.validate()?;
    fonts::ensure_registered(config.chart.font, &config.font_dirs)?;
    let font_file = fonts::registered_file(config.chart.font);
    if let Some(path) = &font_file {
        info!("using font {} from {}", config.chart.font, path.display());
    }
    let (inputs, skipped) = discover_inputs(&config.input_dir)?;
    fs::create_dir_all(&config.output_dir)?;

    on_event(&BatchEvent::Started {
        total: inputs.len(),
    });
    for file in &skipped {
        on_event(&BatchEvent::Skipped { file: file.clone() });
    }

    let mut report = BatchReport {
        skipped,
        font_file,
        ..BatchReport::default()
    };
    for file in inputs {
        info!("Processing: {}", display_name(&file));
        on_event(&BatchEvent::Processing { file: file.clone() });
        match convert_file(&file, config) {
            Ok(done) => {
                info!("saved {}", done.output.display());
                on_event(&BatchEvent::Converted {
                    file,
                    output: done.output.clone(),
                });
                report.converted.push(done);
            }
            Err(e) => {
                let message = failure_message(&file, &config.sheet_name, &e);
                warn!("{message}");
                on_event(&BatchEvent::Failed {
                    file: file.clone(),
                    message: message.clone(),
                });
                report.failed.push(FailedFile {
                    input: file,
                    message,
                });
            }
        }
    }

    info!("{DONE_MESSAGE}");
    on_event(&BatchEvent::Finished {
        converted: report.converted.len(),
        failed: report.failed.len(),
    });
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discovery_sorts_and_skips_lock_files() {
        let dir = tempdir().unwrap();
        for name in ["b.xlsx", "a.csv", "~$a.xlsx", "notes.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::create_dir(dir.path().join("sub.xlsx")).unwrap();
        let (inputs, skipped) = discover_inputs(dir.path()).unwrap();
        let names: Vec<String> = inputs.iter().map(|p| display_name(p)).collect();
        assert_eq!(names, vec!["a.csv", "b.xlsx"]);
        assert_eq!(skipped.len(), 1);
    }

    #[test]
    fn sheet_errors_get_the_friendly_message() {
        let err = Error::SheetNotFound {
            file: PathBuf::from("/in/data.xlsx"),
            sheet: "Data".into(),
        };
        assert_eq!(
            failure_message(Path::new("/in/data.xlsx"), "Data", &err),
            "Error reading sheet 'Data' from data.xlsx. Please verify the sheet name."
        );
        let other = Error::InvalidInput("bad".into());
        assert!(failure_message(Path::new("x.csv"), "S", &other).starts_with("Error processing x.csv"));
    }

    #[test]
    fn config_errors_stop_before_any_event() {
        let cfg = BatchConfig {
            input_dir: PathBuf::from("/definitely/not/here"),
            ..BatchConfig::default()
        };
        let mut events = 0;
        let err = run_batch(&cfg, |_| events += 1).unwrap_err();
        assert!(err.is_config());
        assert_eq!(events, 0);
    }

    #[test]
    fn status_lines() {
        let p = PathBuf::from("dir/run1.xlsx");
        assert_eq!(
            BatchEvent::Processing { file: p }.status(),
            "Processing: run1.xlsx"
        );
        assert_eq!(
            BatchEvent::Finished {
                converted: 1,
                failed: 0
            }
            .status(),
            DONE_MESSAGE
        );
    }
}
