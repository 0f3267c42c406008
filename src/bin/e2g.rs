use anyhow::{Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::path::PathBuf;

use excel2graph::config::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SHEET, DEFAULT_X_LABEL, DEFAULT_Y_LABEL,
    MAX_SERIES,
};
use excel2graph::{
    BatchConfig, ChartConfig, FontChoice, LegendPosition, MarkerShape, NamedColor, batch, fonts,
    preview,
};

#[derive(Parser, Debug)]
#[command(
    name = "e2g",
    version,
    about = "Turn spreadsheets with paired X/Y columns into styled line charts"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert every spreadsheet in a folder into a PNG chart.
    Convert(ConvertArgs),
    /// Render the synthetic preview chart to a PNG file.
    Preview(PreviewArgs),
    /// List available colors, markers, legend positions and fonts.
    Palettes(PalettesArgs),
}

#[derive(Args, Debug)]
struct StyleArgs {
    /// Number of series drawn per chart (1-10).
    #[arg(short = 'n', long, default_value_t = 1)]
    series: usize,
    /// Series colors separated by comma or semicolon (e.g., red,navy).
    #[arg(long)]
    colors: Option<String>,
    /// Series markers separated by comma or semicolon (e.g., o,s,^).
    #[arg(long)]
    markers: Option<String>,
    /// Series display names separated by comma or semicolon.
    #[arg(long)]
    names: Option<String>,
    /// X-axis label.
    #[arg(long, default_value = DEFAULT_X_LABEL)]
    x_label: String,
    /// Y-axis label.
    #[arg(long, default_value = DEFAULT_Y_LABEL)]
    y_label: String,
    /// Legend position (e.g., "upper left", lower-right, center).
    #[arg(long, default_value = "upper left")]
    legend_position: String,
    /// Hide the legend.
    #[arg(long, default_value_t = false)]
    no_legend: bool,
    /// Hide the data point markers.
    #[arg(long, default_value_t = false)]
    no_markers: bool,
    /// Font family (Times New Roman, Arial, Helvetica, Calibri, Cambria, Georgia).
    #[arg(long, default_value = "Times New Roman")]
    font: String,
    /// Extra directory searched for font files (repeatable).
    #[arg(long = "font-dir")]
    font_dirs: Vec<PathBuf>,
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// Folder with the input spreadsheets (.xlsx, .csv).
    #[arg(short, long, default_value = DEFAULT_INPUT_DIR)]
    input: PathBuf,
    /// Folder the charts are written to (created if missing).
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output: PathBuf,
    /// Worksheet read from every workbook.
    #[arg(short, long, default_value = DEFAULT_SHEET)]
    sheet: String,
    #[command(flatten)]
    style: StyleArgs,
    /// Print the batch report as JSON to stdout.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
    /// Width of the image (default 1200).
    #[arg(long, default_value_t = 1200)]
    width: u32,
    /// Height of the image (default 800).
    #[arg(long, default_value_t = 800)]
    height: u32,
    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug)]
struct PalettesArgs {
    /// Print as JSON.
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Serialize)]
struct ColorInfo {
    name: &'static str,
    hex: String,
}

#[derive(Serialize)]
struct MarkerInfo {
    symbol: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
struct Palettes {
    colors: Vec<ColorInfo>,
    markers: Vec<MarkerInfo>,
    legend_positions: Vec<&'static str>,
    fonts: Vec<&'static str>,
}

fn parse_list(s: &str) -> Vec<String> {
    s.split([',', ';'])
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

impl StyleArgs {
    fn chart_config(&self) -> Result<ChartConfig> {
        let colors = self.colors.as_deref().map(parse_list).unwrap_or_default();
        let markers = self.markers.as_deref().map(parse_list).unwrap_or_default();
        let names = self.names.as_deref().map(parse_list).unwrap_or_default();

        let mut config = ChartConfig {
            num_series: self.series,
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            show_legend: !self.no_legend,
            show_markers: !self.no_markers,
            legend_position: self.legend_position.parse::<LegendPosition>()?,
            font: self.font.parse::<FontChoice>()?,
            ..ChartConfig::default()
        };
        let longest = colors.len().max(markers.len()).max(names.len());
        if longest > MAX_SERIES {
            bail!("at most {MAX_SERIES} series styles can be given, got {longest}");
        }
        config.resize_series(longest);
        for (i, c) in colors.iter().enumerate() {
            config.series[i].color = c.parse::<NamedColor>()?;
        }
        for (i, m) in markers.iter().enumerate() {
            config.series[i].marker = m.parse::<MarkerShape>()?;
        }
        for (i, n) in names.iter().enumerate() {
            config.series[i].name = Some(n.clone());
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Convert(args) => cmd_convert(args),
        Command::Preview(args) => cmd_preview(args),
        Command::Palettes(args) => cmd_palettes(args),
    }
}

fn cmd_convert(args: ConvertArgs) -> Result<()> {
    let config = BatchConfig {
        input_dir: args.input,
        output_dir: args.output,
        sheet_name: args.sheet,
        font_dirs: args.style.font_dirs.clone(),
        chart: args.style.chart_config()?,
    };
    let quiet = args.json;
    let report = batch::run_batch(&config, |ev| {
        if !quiet {
            eprintln!("{}", ev.status());
        }
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        eprintln!(
            "{} converted, {} failed, {} skipped",
            report.converted.len(),
            report.failed.len(),
            report.skipped.len()
        );
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> Result<()> {
    let config = args.style.chart_config()?;
    fonts::ensure_registered(config.font, &args.style.font_dirs)?;
    preview::write_preview_png(&config, args.width, args.height, &args.out)?;
    eprintln!("Wrote preview to {}", args.out.display());
    Ok(())
}

fn cmd_palettes(args: PalettesArgs) -> Result<()> {
    let palettes = Palettes {
        colors: NamedColor::ALL
            .iter()
            .map(|c| ColorInfo {
                name: c.name(),
                hex: c.rgb().hex(),
            })
            .collect(),
        markers: MarkerShape::ALL
            .iter()
            .map(|m| MarkerInfo {
                symbol: m.symbol(),
                name: m.name(),
            })
            .collect(),
        legend_positions: LegendPosition::ALL.iter().map(|p| p.keyword()).collect(),
        fonts: FontChoice::ALL.iter().map(|f| f.family_name()).collect(),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&palettes)?);
        return Ok(());
    }
    println!("Colors:");
    for c in &palettes.colors {
        println!("  {:<10} {}", c.name, c.hex);
    }
    println!("Markers:");
    for m in &palettes.markers {
        println!("  {:<3} {}", m.symbol, m.name);
    }
    println!("Legend positions:");
    for p in &palettes.legend_positions {
        println!("  {p}");
    }
    println!("Fonts:");
    for f in &palettes.fonts {
        println!("  {f}");
    }
    Ok(())
}
