use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{GeneDataset, GeneRecord};

/// Seed used whenever no file is supplied.
pub const SAMPLE_SEED: u64 = 42;
pub const SAMPLE_ROWS: usize = 20;
pub const SAMPLE_CATEGORIES: [&str; 3] = ["Regulatory", "Metabolic", "Structural"];

pub const EXPRESSION_RANGE: Range<f64> = 5.0..50.0;
pub const MUTATION_RANGE: Range<f64> = 0.0..1.0;

/// The default sample: [`SAMPLE_ROWS`] genes from [`SAMPLE_SEED`].
pub fn sample_dataset() -> GeneDataset {
    generate(SAMPLE_SEED, SAMPLE_ROWS)
}

/// Generate `rows` synthetic genes named `Gene_1..=Gene_rows`.
///
/// Draws whole columns in turn from one RNG: every expression level, then
/// every mutation rate, then every category. The same seed always yields
/// the same table.
pub fn generate(seed: u64, rows: usize) -> GeneDataset {
    let mut rng = StdRng::seed_from_u64(seed);

    let expression: Vec<f64> = (0..rows).map(|_| rng.gen_range(EXPRESSION_RANGE)).collect();
    let mutation: Vec<f64> = (0..rows).map(|_| rng.gen_range(MUTATION_RANGE)).collect();
    let category: Vec<&str> = (0..rows)
        .map(|_| SAMPLE_CATEGORIES[rng.gen_range(0..SAMPLE_CATEGORIES.len())])
        .collect();

    let records = expression
        .into_iter()
        .zip(mutation)
        .zip(category)
        .enumerate()
        .map(|(i, ((expression_level, mutation_rate), category))| GeneRecord {
            gene: format!("Gene_{}", i + 1),
            expression_level,
            mutation_rate,
            category: category.to_string(),
        })
        .collect();

    GeneDataset::from_records(records)
}
