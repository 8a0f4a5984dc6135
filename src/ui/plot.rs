use bioscope::RenderContext;
use bioscope::data::model::{EXPRESSION_LEVEL, GENE, MUTATION_RATE};
use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoint, PlotPoints, Points};

use crate::color::ColorMap;

const FALLBACK_COLOR: Color32 = Color32::LIGHT_BLUE;

const MIN_MARKER_RADIUS: f32 = 3.0;
const MAX_MARKER_RADIUS: f32 = 12.0;

fn category_color(colors: Option<&ColorMap>, category: &str) -> Color32 {
    colors.map_or(FALLBACK_COLOR, |cm| cm.color_for(category))
}

// ---------------------------------------------------------------------------
// Bar chart: Expression_Level per Gene, one series per Category
// ---------------------------------------------------------------------------

pub fn expression_bar_chart(ui: &mut Ui, context: &RenderContext, colors: Option<&ColorMap>) {
    let records = context.dataset.records();
    let genes: Vec<String> = records.iter().map(|r| r.gene.clone()).collect();

    Plot::new("expression_bar_chart")
        .legend(Legend::default())
        .height(320.0)
        .x_axis_label(GENE)
        .y_axis_label(EXPRESSION_LEVEL)
        .x_axis_formatter(move |mark, _range| gene_axis_label(&genes, mark.value))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for category in context.dataset.categories() {
                let bars: Vec<Bar> = records
                    .iter()
                    .enumerate()
                    .filter(|(_, r)| &r.category == category)
                    .map(|(i, r)| Bar::new(i as f64, r.expression_level).name(&r.gene).width(0.8))
                    .collect();

                let chart = BarChart::new(bars)
                    .name(category)
                    .color(category_color(colors, category));
                plot_ui.bar_chart(chart);
            }
        });
}

/// Label an x grid mark with the gene at that row, if it lands on one.
fn gene_axis_label(genes: &[String], value: f64) -> String {
    let idx = value.round();
    if (value - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    genes.get(idx as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Scatter: Mutation_Rate vs Expression_Level, sized by expression
// ---------------------------------------------------------------------------

pub fn mutation_scatter(ui: &mut Ui, context: &RenderContext, colors: Option<&ColorMap>) {
    let records = context.dataset.records();
    let lookup: Vec<([f64; 2], String)> = records
        .iter()
        .map(|r| ([r.expression_level, r.mutation_rate], r.gene.clone()))
        .collect();

    let (min, max) = records.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), r| {
        (lo.min(r.expression_level), hi.max(r.expression_level))
    });

    Plot::new("mutation_scatter")
        .legend(Legend::default())
        .height(360.0)
        .x_axis_label(EXPRESSION_LEVEL)
        .y_axis_label(MUTATION_RATE)
        .label_formatter(move |series, point| hover_label(&lookup, series, point))
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            // One item per gene so each marker gets its own radius; items
            // sharing a category name share a legend entry.
            for r in records {
                let points = Points::new(PlotPoints::new(vec![[r.expression_level, r.mutation_rate]]))
                    .radius(marker_radius(r.expression_level, min, max))
                    .filled(true)
                    .color(category_color(colors, &r.category))
                    .name(&r.category);
                plot_ui.points(points);
            }
        });
}

/// Linear map of `value` in `[min, max]` onto the marker radius range.
fn marker_radius(value: f64, min: f64, max: f64) -> f32 {
    let span = max - min;
    if !span.is_finite() || span <= f64::EPSILON {
        return (MIN_MARKER_RADIUS + MAX_MARKER_RADIUS) / 2.0;
    }
    let t = ((value - min) / span).clamp(0.0, 1.0) as f32;
    MIN_MARKER_RADIUS + t * (MAX_MARKER_RADIUS - MIN_MARKER_RADIUS)
}

/// Hover text: the gene under the cursor, or plain coordinates when the
/// pointer is not on a marker.
fn hover_label(lookup: &[([f64; 2], String)], series: &str, point: &PlotPoint) -> String {
    let coords = format!(
        "{EXPRESSION_LEVEL}: {:.2}\n{MUTATION_RATE}: {:.3}",
        point.x, point.y
    );
    if series.is_empty() {
        return coords;
    }
    let nearest = lookup.iter().min_by(|(a, _), (b, _)| {
        let da = (a[0] - point.x).powi(2) + (a[1] - point.y).powi(2);
        let db = (b[0] - point.x).powi(2) + (b[1] - point.y).powi(2);
        da.total_cmp(&db)
    });
    match nearest {
        Some((_, gene)) => format!("{gene} ({series})\n{coords}"),
        None => coords,
    }
}
