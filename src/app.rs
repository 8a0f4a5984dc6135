use std::path::PathBuf;

use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BioScopeApp {
    pub state: AppState,
}

impl BioScopeApp {
    /// Start with `initial_file` loaded, or the sample when `None`.
    pub fn new(initial_file: Option<PathBuf>) -> Self {
        let mut state = AppState::default();
        state.load(initial_file.as_deref());
        Self { state }
    }
}

impl eframe::App for BioScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Central panel: the whole page, top to bottom ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::header(ui);

                    match &self.state.context {
                        Some(context) => {
                            let colors = self.state.color_map.as_ref();
                            panels::sample_notice(ui, context);
                            panels::preview_table(ui, context, colors);

                            ui.add_space(12.0);
                            ui.heading("Expression Level by Gene");
                            plot::expression_bar_chart(ui, context, colors);

                            ui.add_space(12.0);
                            ui.heading("Mutation Rate Scatter Plot");
                            plot::mutation_scatter(ui, context, colors);

                            ui.add_space(12.0);
                            panels::insights(ui, context);
                        }
                        None => panels::load_failed(ui, self.state.status_message.as_deref()),
                    }

                    panels::footer(ui);
                });
        });
    }
}
