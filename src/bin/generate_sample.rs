use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bioscope::data::loader::write_csv;
use bioscope::data::synthetic::{SAMPLE_ROWS, SAMPLE_SEED, generate};
use clap::Parser;

/// Write the synthetic gene table to a CSV file that BioScope can open.
#[derive(Debug, Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Output path
    #[arg(default_value = "sample_genes.csv")]
    output: PathBuf,

    /// RNG seed
    #[arg(long, default_value_t = SAMPLE_SEED)]
    seed: u64,

    /// Number of genes
    #[arg(long, default_value_t = SAMPLE_ROWS)]
    rows: usize,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dataset = generate(args.seed, args.rows);
    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_csv(&dataset, file).context("writing sample table")?;

    println!(
        "Wrote {} genes in {} categories to {}",
        dataset.len(),
        dataset.categories().len(),
        args.output.display()
    );
    Ok(())
}
