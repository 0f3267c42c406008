use serde::{Deserialize, Serialize};

/// One spreadsheet cell as seen by the pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Number(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Classify a raw cell string: blank -> `Empty`, parseable -> `Number`, otherwise `Text`.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() {
            return Cell::Empty;
        }
        match s.parse::<f64>() {
            Ok(v) => Cell::Number(v),
            Err(_) => Cell::Text(s.to_string()),
        }
    }
}

/// A named column; every column of a dataset has the same number of rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

/// Ordered collection of named columns loaded from one worksheet.
///
/// Immutable once built: the constructor pads short columns with `Cell::Empty`
/// so all columns share one row count.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    pub fn new(mut columns: Vec<Column>) -> Self {
        let rows = columns.iter().map(|c| c.cells.len()).max().unwrap_or(0);
        for c in &mut columns {
            c.cells.resize(rows, Cell::Empty);
        }
        Self { columns, rows }
    }

    /// Build a purely numeric dataset, handy for previews and tests.
    pub fn from_numeric<S: Into<String>>(columns: Vec<(S, Vec<f64>)>) -> Self {
        Self::new(
            columns
                .into_iter()
                .map(|(name, vals)| Column {
                    name: name.into(),
                    cells: vals.into_iter().map(Cell::Number).collect(),
                })
                .collect(),
        )
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// First column with the given name (duplicates resolve to the leftmost).
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// An (X, Y) column name pair sharing a common suffix, e.g. `("X1", "Y1")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnPair {
    pub x: String,
    pub y: String,
}

impl ColumnPair {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }
}
