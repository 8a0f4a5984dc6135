use bioscope::RenderContext;
use bioscope::data::source::SAMPLE_NOTICE;
use bioscope::insights::{INSIGHTS_DISCLAIMER, INSIGHTS_HEADING};
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::color::ColorMap;
use crate::state::AppState;

/// Rows shown in the preview table.
const PREVIEW_ROWS: usize = 5;

const INFO_COLOR: Color32 = Color32::from_rgb(70, 130, 200);
const SUCCESS_COLOR: Color32 = Color32::from_rgb(60, 160, 90);

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Use sample data").clicked() {
                state.load(None);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(context) = &state.context {
            ui.label(format!(
                "{} genes loaded from {}",
                context.dataset.len(),
                context.source
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Page sections
// ---------------------------------------------------------------------------

pub fn header(ui: &mut Ui) {
    ui.heading(RichText::new("BioScope – Genomic Data Visualizer").size(26.0));
    ui.label(
        "Explore biological and genomic data. Open your own CSV file (File → Open…) \
         or use the sample dataset to visualize gene expression patterns and mutation frequencies.",
    );
    ui.add_space(8.0);
}

pub fn sample_notice(ui: &mut Ui, context: &RenderContext) {
    if context.source.is_sample() {
        ui.label(RichText::new(format!("ℹ {SAMPLE_NOTICE}")).color(INFO_COLOR));
        ui.add_space(4.0);
    }
}

/// First rows of the table, like `df.head()`.
pub fn preview_table(ui: &mut Ui, context: &RenderContext, colors: Option<&ColorMap>) {
    let rows = context.dataset.head(PREVIEW_ROWS);

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(90.0), 5)
        .header(20.0, |mut header| {
            for title in ["", "Gene", "Expression_Level", "Mutation_Rate", "Category"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|mut body| {
            for (i, record) in rows.iter().enumerate() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(i.to_string());
                    });
                    row.col(|ui| {
                        ui.label(&record.gene);
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.4}", record.expression_level));
                    });
                    row.col(|ui| {
                        ui.label(format!("{:.4}", record.mutation_rate));
                    });
                    row.col(|ui| {
                        let mut text = RichText::new(&record.category);
                        if let Some(cm) = colors {
                            text = text.color(cm.color_for(&record.category));
                        }
                        ui.label(text);
                    });
                });
            }
        });
}

pub fn insights(ui: &mut Ui, context: &RenderContext) {
    ui.heading(INSIGHTS_HEADING);
    ui.label(RichText::new(INSIGHTS_DISCLAIMER).italics().weak());
    ui.add_space(4.0);

    for fragment in &context.insights {
        ui.label(format!("•  {fragment}"));
    }

    ui.add_space(6.0);
    ui.label(RichText::new("✔ Rule-based analysis complete").color(SUCCESS_COLOR));
}

pub fn load_failed(ui: &mut Ui, message: Option<&str>) {
    ui.add_space(12.0);
    ui.label(
        RichText::new(message.unwrap_or("No dataset loaded."))
            .color(Color32::RED)
            .strong(),
    );
    ui.label("Open another file, or choose File → Use sample data.");
}

pub fn footer(ui: &mut Ui) {
    ui.add_space(16.0);
    ui.separator();
    ui.small("BioScope | Built with eframe, egui_plot & csv");
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open genomic data")
        .add_filter("Supported files", &["csv", "tsv", "txt", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("Tab-separated", &["tsv", "txt"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.load(Some(path.as_path()));
    }
}
