mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::BioScopeApp;
use bioscope::RenderContext;
use clap::Parser;
use eframe::egui;

#[derive(Debug, Parser)]
#[command(name = "bioscope")]
#[command(about = "Genomic data visualizer: gene expression and mutation dashboard")]
struct Cli {
    /// Gene table to open instead of the sample (.csv, .tsv, .json, .parquet)
    file: Option<PathBuf>,

    /// Print the insight report to stdout instead of opening a window
    #[arg(long)]
    report: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.report {
        let context =
            RenderContext::build(cli.file.as_deref()).context("building insight report")?;
        print!("{}", context.report());
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BioScope – Genomic Data Visualizer",
        options,
        Box::new(move |_cc| Ok(Box::new(BioScopeApp::new(cli.file)))),
    )
    .map_err(|e| anyhow::anyhow!("window closed with error: {e}"))
}
