//! Series extraction: find (X, Y) column pairs and pull their numeric values.

use crate::error::{Error, Result};
use crate::models::{Cell, ColumnPair, Dataset};

pub const X_PREFIX: &str = "X";
pub const Y_PREFIX: &str = "Y";

/// Pair X-prefixed columns with Y-prefixed columns that share the same suffix.
///
/// Order: X columns in dataset order, and for each X the Y columns in dataset
/// order. The suffix comparison is exact and case-sensitive. At most
/// `max_series` pairs are returned; unmatched columns are ignored.
pub fn extract_pairs(dataset: &Dataset, max_series: usize) -> Vec<ColumnPair> {
    let xs: Vec<&str> = dataset
        .column_names()
        .filter(|n| n.starts_with(X_PREFIX))
        .collect();
    let ys: Vec<&str> = dataset
        .column_names()
        .filter(|n| n.starts_with(Y_PREFIX))
        .collect();

    xs.iter()
        .flat_map(|x| {
            ys.iter()
                .filter(move |y| x[X_PREFIX.len()..] == y[Y_PREFIX.len()..])
                .map(move |y| ColumnPair::new(*x, *y))
        })
        .take(max_series)
        .collect()
}

/// Numeric values of one pair, row by row.
///
/// Rows where either cell is empty are dropped, so columns of different
/// lengths pair up to the shorter one. Text in either column is an error.
pub fn series_values(dataset: &Dataset, pair: &ColumnPair) -> Result<(Vec<f64>, Vec<f64>)> {
    let missing = |name: &str| Error::InvalidInput(format!("column '{name}' not in dataset"));
    let xc = dataset.column(&pair.x).ok_or_else(|| missing(&pair.x))?;
    let yc = dataset.column(&pair.y).ok_or_else(|| missing(&pair.y))?;

    let mut xs = Vec::with_capacity(xc.cells.len());
    let mut ys = Vec::with_capacity(yc.cells.len());
    for (row, (xv, yv)) in xc.cells.iter().zip(&yc.cells).enumerate() {
        let x = numeric(xv, &xc.name, row)?;
        let y = numeric(yv, &yc.name, row)?;
        if let (Some(x), Some(y)) = (x, y) {
            xs.push(x);
            ys.push(y);
        }
    }
    Ok((xs, ys))
}

// `row` is reported 1-based and counts the header line, matching what a
// spreadsheet user sees.
fn numeric(cell: &Cell, column: &str, row: usize) -> Result<Option<f64>> {
    match cell {
        Cell::Number(v) => Ok(Some(*v)),
        Cell::Empty => Ok(None),
        Cell::Text(t) => Err(Error::NonNumeric {
            column: column.to_string(),
            row: row + 2,
            value: t.clone(),
        }),
    }
}
