//! Rule-based insight text.
//!
//! Every sentence comes from a fixed template filled in from
//! [`SummaryStatistics`]; two of them are picked by threshold rules.
//! Nothing here is a statistical or generative model.

use std::fmt;

use crate::stats::SummaryStatistics;

/// Mean expression strictly above this reads as "high".
pub const EXPRESSION_HIGH_THRESHOLD: f64 = 30.0;
/// Mean mutation rate strictly above this reads as "elevated".
pub const MUTATION_ELEVATED_THRESHOLD: f64 = 0.6;

pub const INSIGHTS_HEADING: &str = "Template-Generated Insights";
pub const INSIGHTS_DISCLAIMER: &str =
    "Rule-based summary filled in from fixed templates; not produced by a generative model.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpressionOutlook {
    High,
    Moderate,
}

impl ExpressionOutlook {
    pub fn classify(mean_expression: f64) -> Self {
        if mean_expression > EXPRESSION_HIGH_THRESHOLD {
            ExpressionOutlook::High
        } else {
            ExpressionOutlook::Moderate
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ExpressionOutlook::High => {
                "High overall gene expression suggests active biological processes."
            }
            ExpressionOutlook::Moderate => {
                "Expression levels are moderate, indicating stable genetic activity."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutlook {
    Elevated,
    Normal,
}

impl MutationOutlook {
    pub fn classify(mean_mutation: f64) -> Self {
        if mean_mutation > MUTATION_ELEVATED_THRESHOLD {
            MutationOutlook::Elevated
        } else {
            MutationOutlook::Normal
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MutationOutlook::Elevated => {
                "Mutation rates are elevated, which could indicate evolutionary adaptation or experimental variance."
            }
            MutationOutlook::Normal => "Mutation rates are within normal range.",
        }
    }
}

/// One sentence of the summary, in display order.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Overview { genes: usize, categories: usize },
    Averages { expression: f64, mutation: f64 },
    TopExpression(String),
    TopMutation(String),
    Expression(ExpressionOutlook),
    Mutation(MutationOutlook),
}

impl Fragment {
    /// Markdown form with the filled-in values in bold.
    pub fn markdown(&self) -> String {
        match self {
            Fragment::Averages {
                expression,
                mutation,
            } => format!(
                "Average expression level is **{expression:.2} units**, and average mutation rate is **{mutation:.2}**."
            ),
            Fragment::TopExpression(gene) => format!("Highest expressed gene: **{gene}**."),
            Fragment::TopMutation(gene) => format!("Gene with highest mutation rate: **{gene}**."),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Overview { genes, categories } => write!(
                f,
                "The dataset contains {genes} genes across {categories} biological categories."
            ),
            Fragment::Averages {
                expression,
                mutation,
            } => write!(
                f,
                "Average expression level is {expression:.2} units, and average mutation rate is {mutation:.2}."
            ),
            Fragment::TopExpression(gene) => write!(f, "Highest expressed gene: {gene}."),
            Fragment::TopMutation(gene) => write!(f, "Gene with highest mutation rate: {gene}."),
            Fragment::Expression(outlook) => f.write_str(outlook.message()),
            Fragment::Mutation(outlook) => f.write_str(outlook.message()),
        }
    }
}

/// The full summary: four factual sentences, then the two outlooks.
pub fn insight_fragments(stats: &SummaryStatistics) -> Vec<Fragment> {
    vec![
        Fragment::Overview {
            genes: stats.row_count,
            categories: stats.category_count,
        },
        Fragment::Averages {
            expression: stats.mean_expression,
            mutation: stats.mean_mutation,
        },
        Fragment::TopExpression(stats.top_expression_gene.clone()),
        Fragment::TopMutation(stats.top_mutation_gene.clone()),
        Fragment::Expression(ExpressionOutlook::classify(stats.mean_expression)),
        Fragment::Mutation(MutationOutlook::classify(stats.mean_mutation)),
    ]
}

/// Markdown bullet list, one fragment per line.
pub fn render_markdown(fragments: &[Fragment]) -> String {
    fragments
        .iter()
        .map(|f| format!("- {}\n", f.markdown()))
        .collect()
}
