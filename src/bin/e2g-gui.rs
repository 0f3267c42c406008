/*!
 * Desktop front-end for excel2graph
 *
 * - Pick input/output folders and the worksheet to read
 * - Style up to 10 series (color, marker, name), axis labels, legend and font
 * - Live preview of the styling on synthetic data
 * - Batch conversion on a background thread with per-file status
 */

use eframe::egui;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;

use excel2graph::config::{
    DEFAULT_INPUT_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_SHEET, MAX_SERIES, MIN_SERIES,
};
use excel2graph::{
    BatchConfig, BatchEvent, ChartConfig, FontChoice, LegendPosition, MarkerShape, NamedColor,
    SeriesStyle, batch, preview,
};

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 720.0])
            .with_min_inner_size([900.0, 560.0])
            .with_title("Excel 2 Graph"),
        ..Default::default()
    };

    eframe::run_native(
        "Excel 2 Graph",
        options,
        Box::new(|_cc| Ok(Box::new(E2gApp::new()))),
    )
}

/// Messages from the batch thread.
#[derive(Debug)]
enum WorkerMessage {
    Status { text: String, error: bool },
    Done(Result<String, String>),
}

struct E2gApp {
    input_dir: String,
    output_dir: String,
    sheet_name: String,

    num_series: usize,
    styles: Vec<SeriesStyle>,
    names: Vec<String>,
    x_label: String,
    y_label: String,
    show_legend: bool,
    show_markers: bool,
    legend_position: LegendPosition,
    font: FontChoice,

    preview: Option<egui::TextureHandle>,
    /// Configuration and pixel size the current texture was drawn for.
    preview_for: Option<(ChartConfig, (u32, u32))>,
    preview_error: String,

    is_running: bool,
    status_message: String,
    error_messages: Vec<String>,
    worker: Option<mpsc::Receiver<WorkerMessage>>,
}

impl E2gApp {
    fn new() -> Self {
        let defaults = ChartConfig::default();
        Self {
            input_dir: DEFAULT_INPUT_DIR.to_string(),
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            sheet_name: DEFAULT_SHEET.to_string(),

            num_series: defaults.num_series,
            styles: defaults.series.clone(),
            names: (0..MAX_SERIES)
                .map(excel2graph::style::default_series_name)
                .collect(),
            x_label: defaults.x_label.clone(),
            y_label: defaults.y_label.clone(),
            show_legend: defaults.show_legend,
            show_markers: defaults.show_markers,
            legend_position: defaults.legend_position,
            font: defaults.font,

            preview: None,
            preview_for: None,
            preview_error: String::new(),

            is_running: false,
            status_message: String::new(),
            error_messages: Vec::new(),
            worker: None,
        }
    }

    /// Snapshot of the current widget state.
    fn chart_config(&self) -> ChartConfig {
        let series = self
            .styles
            .iter()
            .zip(&self.names)
            .map(|(style, name)| SeriesStyle {
                name: (!name.trim().is_empty()).then(|| name.trim().to_string()),
                ..style.clone()
            })
            .collect();
        ChartConfig {
            num_series: self.num_series,
            series,
            x_label: self.x_label.clone(),
            y_label: self.y_label.clone(),
            show_legend: self.show_legend,
            show_markers: self.show_markers,
            legend_position: self.legend_position,
            font: self.font,
            ..ChartConfig::default()
        }
    }

    fn batch_config(&self) -> BatchConfig {
        BatchConfig {
            input_dir: PathBuf::from(self.input_dir.trim()),
            output_dir: PathBuf::from(self.output_dir.trim()),
            sheet_name: self.sheet_name.trim().to_string(),
            font_dirs: Vec::new(),
            chart: self.chart_config(),
        }
    }

    fn refresh_preview(&mut self, ctx: &egui::Context, available: egui::Vec2) {
        let ppp = ctx.pixels_per_point();
        let size = preview::fit_to_box(available.x * ppp, available.y * ppp);
        let key = (self.chart_config(), size);
        if self.preview_for.as_ref() == Some(&key) {
            return;
        }
        match preview::render_preview(&key.0, size.0, size.1) {
            Ok(img) => {
                let image = egui::ColorImage::from_rgb(
                    [img.width as usize, img.height as usize],
                    &img.pixels,
                );
                self.preview = Some(ctx.load_texture("preview", image, egui::TextureOptions::LINEAR));
                self.preview_error.clear();
            }
            Err(e) => {
                self.preview_error = format!("Preview failed: {e}");
            }
        }
        self.preview_for = Some(key);
    }

    fn start_batch(&mut self) {
        let config = self.batch_config();
        if let Err(err) = config.validate() {
            self.error_messages = vec![format!("Validation error: {err}")];
            return;
        }

        self.is_running = true;
        self.error_messages.clear();
        self.status_message = "Starting...".to_string();

        let (sender, receiver) = mpsc::channel();
        self.worker = Some(receiver);

        thread::spawn(move || {
            let events = sender.clone();
            let result = batch::run_batch(&config, |ev| {
                let error = matches!(ev, BatchEvent::Failed { .. });
                let _ = events.send(WorkerMessage::Status {
                    text: ev.status(),
                    error,
                });
            });
            let done = match result {
                Ok(_) => Ok(batch::DONE_MESSAGE.to_string()),
                Err(e) => Err(e.to_string()),
            };
            let _ = sender.send(WorkerMessage::Done(done));
        });
    }

    fn poll_worker(&mut self) {
        let Some(receiver) = &self.worker else {
            return;
        };
        let mut finished = false;
        while let Ok(msg) = receiver.try_recv() {
            match msg {
                WorkerMessage::Status { text, error: true } => self.error_messages.push(text),
                WorkerMessage::Status { text, error: false } => self.status_message = text,
                WorkerMessage::Done(Ok(text)) => {
                    self.status_message = text;
                    finished = true;
                }
                WorkerMessage::Done(Err(text)) => {
                    self.status_message.clear();
                    self.error_messages.push(text);
                    finished = true;
                }
            }
        }
        if finished {
            self.is_running = false;
            self.worker = None;
        }
    }

    fn folders_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Folders");
            ui.add_space(5.0);
            folder_row(ui, "Input folder:", &mut self.input_dir);
            folder_row(ui, "Output folder:", &mut self.output_dir);
            ui.horizontal(|ui| {
                ui.label("Sheet name:");
                ui.text_edit_singleline(&mut self.sheet_name)
                    .on_hover_text("Worksheet read from every workbook");
            });
        });
    }

    fn series_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Series");
            ui.add_space(5.0);
            ui.add(
                egui::Slider::new(&mut self.num_series, MIN_SERIES..=MAX_SERIES)
                    .text("number of series"),
            );
            for i in 0..self.num_series {
                ui.horizontal(|ui| {
                    let style = &mut self.styles[i];
                    let c = style.color.rgb();
                    ui.label(
                        egui::RichText::new("■").color(egui::Color32::from_rgb(c.r, c.g, c.b)),
                    );
                    egui::ComboBox::from_id_salt(("color", i))
                        .width(90.0)
                        .selected_text(style.color.name())
                        .show_ui(ui, |ui| {
                            for color in NamedColor::ALL {
                                ui.selectable_value(&mut style.color, color, color.name());
                            }
                        });
                    egui::ComboBox::from_id_salt(("marker", i))
                        .width(110.0)
                        .selected_text(format!("{} {}", style.marker.symbol(), style.marker.name()))
                        .show_ui(ui, |ui| {
                            for marker in MarkerShape::ALL {
                                ui.selectable_value(
                                    &mut style.marker,
                                    marker,
                                    format!("{} {}", marker.symbol(), marker.name()),
                                );
                            }
                        });
                    ui.add(egui::TextEdit::singleline(&mut self.names[i]).desired_width(120.0));
                });
            }
        });
    }

    fn chart_ui(&mut self, ui: &mut egui::Ui) {
        ui.group(|ui| {
            ui.label("Chart");
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("X label:");
                ui.add(egui::TextEdit::singleline(&mut self.x_label).desired_width(80.0));
                ui.label("Y label:");
                ui.add(egui::TextEdit::singleline(&mut self.y_label).desired_width(80.0));
            });
            ui.horizontal(|ui| {
                ui.checkbox(&mut self.show_legend, "Show legend");
                ui.checkbox(&mut self.show_markers, "Show markers");
            });
            ui.horizontal(|ui| {
                ui.label("Legend position:");
                egui::ComboBox::from_id_salt("legend_position")
                    .selected_text(self.legend_position.keyword())
                    .show_ui(ui, |ui| {
                        for pos in LegendPosition::ALL {
                            ui.selectable_value(&mut self.legend_position, pos, pos.keyword());
                        }
                    });
            });
            ui.horizontal(|ui| {
                ui.label("Font:");
                egui::ComboBox::from_id_salt("font")
                    .selected_text(self.font.family_name())
                    .show_ui(ui, |ui| {
                        for font in FontChoice::ALL {
                            ui.selectable_value(&mut self.font, font, font.family_name());
                        }
                    });
            });
        });
    }
}

fn folder_row(ui: &mut egui::Ui, label: &str, value: &mut String) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.text_edit_singleline(value);
        if ui.button("Browse").clicked()
            && let Some(path) = rfd::FileDialog::new().pick_folder()
        {
            *value = path.to_string_lossy().to_string();
        }
    });
}

impl eframe::App for E2gApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_worker();
        if self.is_running {
            ctx.request_repaint();
        }

        egui::SidePanel::left("settings")
            .resizable(true)
            .default_width(420.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    ui.heading("Excel 2 Graph");
                    ui.add_space(10.0);
                    self.folders_ui(ui);
                    ui.add_space(10.0);
                    self.series_ui(ui);
                    ui.add_space(10.0);
                    self.chart_ui(ui);
                    ui.add_space(15.0);

                    ui.horizontal(|ui| {
                        if ui
                            .add_enabled(!self.is_running, egui::Button::new("Create Graphs"))
                            .clicked()
                        {
                            self.start_batch();
                        }
                        if self.is_running {
                            ui.spinner();
                        }
                    });

                    ui.add_space(10.0);
                    if !self.status_message.is_empty() {
                        ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                    }
                    for err in &self.error_messages {
                        ui.colored_label(egui::Color32::RED, err);
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Preview");
            ui.add_space(5.0);
            // leave a line for the error label
            let available = ui.available_size() - egui::vec2(0.0, 24.0);
            self.refresh_preview(ui.ctx(), available);
            if let Some(texture) = &self.preview {
                ui.add(egui::Image::new(texture).shrink_to_fit());
            }
            if !self.preview_error.is_empty() {
                ui.colored_label(egui::Color32::RED, &self.preview_error);
            }
        });
    }
}
