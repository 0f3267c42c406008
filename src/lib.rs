//! excel2graph
//!
//! Turn spreadsheets holding paired `X…`/`Y…` columns into styled line charts.
//! Pairs with the `e2g` CLI and the `e2g-gui` desktop front-end.
//!
//! ### Features
//! - Pair columns by suffix (`X1`/`Y1`, `Xa`/`Ya`, …), up to 10 series per chart
//! - Smooth curves with an interpolating cubic spline, falling back to the raw polyline
//! - 20 colors, 20 marker shapes, 10 legend positions, 6 font families
//! - Batch conversion of a folder to PNG at print resolution (12 x 8 in, 300 DPI)
//! - In-memory preview rendering for interactive front-ends
//!
//! ### Example
//! ```no_run
//! use excel2graph::{BatchConfig, batch};
//!
//! let config = BatchConfig {
//!     input_dir: "./excel".into(),
//!     output_dir: "./graph".into(),
//!     ..BatchConfig::default()
//! };
//! let report = batch::run_batch(&config, |ev| println!("{}", ev.status()))?;
//! println!("{} converted, {} failed", report.converted.len(), report.failed.len());
//! # Ok::<(), excel2graph::Error>(())
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod fonts;
pub mod models;
pub mod preview;
pub mod series;
pub mod storage;
pub mod style;
pub mod viz;

pub use batch::{BatchEvent, BatchReport, run_batch};
pub use config::{BatchConfig, ChartConfig};
pub use error::{Error, Result};
pub use fonts::FontChoice;
pub use models::{Cell, Column, ColumnPair, Dataset};
pub use series::extract_pairs;
pub use style::{MarkerShape, NamedColor, SeriesStyle};
pub use viz::{LegendPosition, RenderedCurve, render_curve};
