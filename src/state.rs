use std::path::Path;

use bioscope::RenderContext;

use crate::color::ColorMap;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Result of the last successful load. Cleared when a load fails.
    pub context: Option<RenderContext>,

    /// Category colours for the current context.
    pub color_map: Option<ColorMap>,

    /// Error from the last load, shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Run the pipeline for `upload` (or the sample when `None`) and
    /// replace whatever was shown before.
    pub fn load(&mut self, upload: Option<&Path>) {
        match RenderContext::build(upload) {
            Ok(context) => {
                log::info!(
                    "Showing {} genes in {} categories from {}",
                    context.statistics.row_count,
                    context.statistics.category_count,
                    context.source
                );
                self.color_map = Some(ColorMap::new(context.dataset.categories()));
                self.context = Some(context);
                self.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to load dataset: {e}");
                self.context = None;
                self.color_map = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
