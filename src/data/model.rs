use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

// ---------------------------------------------------------------------------
// Column names as they appear on disk
// ---------------------------------------------------------------------------

pub const GENE: &str = "Gene";
pub const EXPRESSION_LEVEL: &str = "Expression_Level";
pub const MUTATION_RATE: &str = "Mutation_Rate";
pub const CATEGORY: &str = "Category";

/// Columns every input must carry, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 4] = [GENE, EXPRESSION_LEVEL, MUTATION_RATE, CATEGORY];

/// Fail with [`PipelineError::Schema`] naming each required column for
/// which `has_column` is false.
pub fn require_columns(mut has_column: impl FnMut(&str) -> bool) -> Result<(), PipelineError> {
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !has_column(name))
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::Schema { missing })
    }
}

// ---------------------------------------------------------------------------
// GeneRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single gene measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneRecord {
    #[serde(rename = "Gene")]
    pub gene: String,
    /// Non-negative by convention, not validated.
    #[serde(rename = "Expression_Level")]
    pub expression_level: f64,
    /// In `[0, 1]` by convention, not validated.
    #[serde(rename = "Mutation_Rate")]
    pub mutation_rate: f64,
    #[serde(rename = "Category")]
    pub category: String,
}

// ---------------------------------------------------------------------------
// GeneDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneDataset {
    records: Vec<GeneRecord>,
    categories: BTreeSet<String>,
}

impl GeneDataset {
    /// Build the category index from the loaded rows.
    pub fn from_records(records: Vec<GeneRecord>) -> Self {
        let categories = records.iter().map(|r| r.category.clone()).collect();
        GeneDataset {
            records,
            categories,
        }
    }

    /// All rows in file order.
    pub fn records(&self) -> &[GeneRecord] {
        &self.records
    }

    /// Sorted distinct `Category` values.
    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// The first `n` rows (fewer if the table is shorter).
    pub fn head(&self, n: usize) -> &[GeneRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gene: &str, category: &str) -> GeneRecord {
        GeneRecord {
            gene: gene.to_string(),
            expression_level: 1.0,
            mutation_rate: 0.1,
            category: category.to_string(),
        }
    }

    #[test]
    fn categories_are_distinct_and_sorted() {
        let ds = GeneDataset::from_records(vec![
            record("Gene_1", "Structural"),
            record("Gene_2", "Metabolic"),
            record("Gene_3", "Structural"),
        ]);
        let cats: Vec<&str> = ds.categories().iter().map(String::as_str).collect();
        assert_eq!(cats, ["Metabolic", "Structural"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn head_clamps_to_length() {
        let ds = GeneDataset::from_records(vec![record("Gene_1", "A"), record("Gene_2", "B")]);
        assert_eq!(ds.head(5).len(), 2);
        assert_eq!(ds.head(1)[0].gene, "Gene_1");
        assert!(GeneDataset::from_records(Vec::new()).head(5).is_empty());
    }

    #[test]
    fn require_columns_reports_all_missing_in_order() {
        let present = ["Gene", "Expression_Level"];
        let err = require_columns(|name| present.contains(&name)).unwrap_err();
        match err {
            PipelineError::Schema { missing } => {
                assert_eq!(missing, vec!["Mutation_Rate", "Category"]);
            }
            other => panic!("expected schema error, got {other:?}"),
        }
        assert!(require_columns(|_| true).is_ok());
    }
}
