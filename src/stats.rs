use crate::data::model::{GeneDataset, GeneRecord};
use crate::error::PipelineError;

/// Aggregates over one loaded table. Computed once per load.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub row_count: usize,
    /// Distinct `Category` values.
    pub category_count: usize,
    pub mean_expression: f64,
    pub mean_mutation: f64,
    /// `Gene` of the first row with the highest `Expression_Level`.
    pub top_expression_gene: String,
    /// `Gene` of the first row with the highest `Mutation_Rate`.
    pub top_mutation_gene: String,
}

impl SummaryStatistics {
    /// Fails with [`PipelineError::EmptyDataset`] on a table with no rows.
    pub fn compute(dataset: &GeneDataset) -> Result<Self, PipelineError> {
        let records = dataset.records();
        let top_expression =
            first_max_by(records, |r| r.expression_level).ok_or(PipelineError::EmptyDataset)?;
        let top_mutation =
            first_max_by(records, |r| r.mutation_rate).ok_or(PipelineError::EmptyDataset)?;

        Ok(SummaryStatistics {
            row_count: records.len(),
            category_count: dataset.categories().len(),
            mean_expression: mean(records, |r| r.expression_level),
            mean_mutation: mean(records, |r| r.mutation_rate),
            top_expression_gene: top_expression.gene.clone(),
            top_mutation_gene: top_mutation.gene.clone(),
        })
    }
}

/// Running mean; stays finite when the plain sum would overflow.
fn mean(records: &[GeneRecord], value: impl Fn(&GeneRecord) -> f64) -> f64 {
    records
        .iter()
        .map(value)
        .enumerate()
        .fold(0.0, |acc, (i, x)| acc + (x - acc) / (i + 1) as f64)
}

/// Stable argmax: on ties the earliest row wins. `None` only when empty.
fn first_max_by(
    records: &[GeneRecord],
    value: impl Fn(&GeneRecord) -> f64,
) -> Option<&GeneRecord> {
    let mut best: Option<&GeneRecord> = None;
    for record in records {
        match best {
            Some(current) if value(record) <= value(current) => {}
            _ => best = Some(record),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(gene: &str, expression_level: f64, mutation_rate: f64, category: &str) -> GeneRecord {
        GeneRecord {
            gene: gene.to_string(),
            expression_level,
            mutation_rate,
            category: category.to_string(),
        }
    }

    #[test]
    fn two_row_reference() {
        let ds = GeneDataset::from_records(vec![
            record("Gene_1", 10.0, 0.2, "A"),
            record("Gene_2", 20.0, 0.8, "B"),
        ]);
        let stats = SummaryStatistics::compute(&ds).unwrap();
        assert_eq!(stats.row_count, 2);
        assert_eq!(stats.category_count, 2);
        assert_eq!(stats.mean_expression, 15.0);
        assert!((stats.mean_mutation - 0.5).abs() < 1e-12);
        assert_eq!(stats.top_expression_gene, "Gene_2");
        assert_eq!(stats.top_mutation_gene, "Gene_2");
    }

    #[test]
    fn ties_report_the_first_row() {
        let ds = GeneDataset::from_records(vec![
            record("Gene_1", 5.0, 0.9, "A"),
            record("Gene_2", 42.0, 0.1, "A"),
            record("Gene_3", 42.0, 0.9, "A"),
        ]);
        let stats = SummaryStatistics::compute(&ds).unwrap();
        assert_eq!(stats.top_expression_gene, "Gene_2");
        assert_eq!(stats.top_mutation_gene, "Gene_1");
        assert_eq!(stats.category_count, 1);
    }

    #[test]
    fn argmax_picks_maximum_not_position() {
        let ds = GeneDataset::from_records(vec![
            record("Gene_1", 1.0, 0.3, "A"),
            record("Gene_2", 9.0, 0.1, "B"),
            record("Gene_3", 3.0, 0.7, "C"),
        ]);
        let stats = SummaryStatistics::compute(&ds).unwrap();
        assert_eq!(stats.top_expression_gene, "Gene_2");
        assert_eq!(stats.top_mutation_gene, "Gene_3");
    }

    #[test]
    fn mean_of_huge_values_stays_finite() {
        let ds = GeneDataset::from_records(vec![
            record("Gene_1", 1e308, 0.5, "A"),
            record("Gene_2", 1e308, 0.5, "A"),
        ]);
        let stats = SummaryStatistics::compute(&ds).unwrap();
        assert!(stats.mean_expression.is_finite());
        assert_eq!(stats.mean_expression, 1e308);
    }

    #[test]
    fn empty_dataset_is_fatal() {
        let ds = GeneDataset::from_records(Vec::new());
        assert!(matches!(
            SummaryStatistics::compute(&ds),
            Err(PipelineError::EmptyDataset)
        ));
    }
}
