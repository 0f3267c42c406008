//! Load a worksheet (or CSV file) into a [`Dataset`].
//!
//! The first row holds the column names; every following row is data.

use crate::error::{Error, Result};
use crate::models::{Cell, Column, Dataset};
use csv::ReaderBuilder;
use std::path::Path;

/// Input formats understood by [`load_dataset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Xlsx,
    Csv,
}

impl InputFormat {
    /// Format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .as_deref()
        {
            Some("xlsx") | Some("xlsm") => Some(InputFormat::Xlsx),
            Some("csv") => Some(InputFormat::Csv),
            _ => None,
        }
    }
}

/// Read `sheet` from the workbook at `path`. CSV files have a single sheet,
/// so `sheet` is ignored for them.
pub fn load_dataset<P: AsRef<Path>>(path: P, sheet: &str) -> Result<Dataset> {
    let path = path.as_ref();
    match InputFormat::from_path(path) {
        Some(InputFormat::Xlsx) => load_xlsx(path, sheet),
        Some(InputFormat::Csv) => load_csv(path),
        None => Err(Error::Workbook {
            file: path.to_path_buf(),
            reason: "unsupported file type (expected .xlsx or .csv)".into(),
        }),
    }
}

fn header_name(raw: &str, idx: usize) -> String {
    let name = raw.trim();
    if name.is_empty() {
        format!("Unnamed: {idx}")
    } else {
        name.to_string()
    }
}

fn load_xlsx(path: &Path, sheet: &str) -> Result<Dataset> {
    let book = umya_spreadsheet::reader::xlsx::read(path).map_err(|e| Error::Workbook {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let ws = book
        .get_sheet_by_name(sheet)
        .ok_or_else(|| Error::SheetNotFound {
            file: path.to_path_buf(),
            sheet: sheet.to_string(),
        })?;

    let (max_col, max_row) = ws.get_highest_column_and_row();
    let columns = (1..=max_col)
        .map(|col| Column {
            name: header_name(&ws.get_value((col, 1)), (col - 1) as usize),
            cells: (2..=max_row)
                .map(|row| Cell::parse(&ws.get_value((col, row))))
                .collect(),
        })
        .collect();
    Ok(Dataset::new(columns))
}

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers = rdr.headers()?.clone();
    let mut columns: Vec<Column> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| Column {
            name: header_name(h, i),
            cells: Vec::new(),
        })
        .collect();
    for record in rdr.records() {
        let record = record?;
        for (i, col) in columns.iter_mut().enumerate() {
            col.cells.push(Cell::parse(record.get(i).unwrap_or("")));
        }
    }
    Ok(Dataset::new(columns))
}
