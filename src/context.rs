use std::path::Path;

use crate::data::model::GeneDataset;
use crate::data::source::{DataSource, SAMPLE_NOTICE, acquire};
use crate::error::PipelineError;
use crate::insights::{
    Fragment, INSIGHTS_DISCLAIMER, INSIGHTS_HEADING, insight_fragments, render_markdown,
};
use crate::stats::SummaryStatistics;

/// Everything one load produces. Built fresh on each load and dropped
/// when the next one replaces it.
#[derive(Debug, Clone)]
pub struct RenderContext {
    pub source: DataSource,
    pub dataset: GeneDataset,
    pub statistics: SummaryStatistics,
    pub insights: Vec<Fragment>,
}

impl RenderContext {
    /// Run the whole pipeline: acquire, summarise, describe.
    pub fn build(upload: Option<&Path>) -> Result<Self, PipelineError> {
        let (source, dataset) = acquire(upload)?;
        Self::from_dataset(source, dataset)
    }

    pub fn from_dataset(source: DataSource, dataset: GeneDataset) -> Result<Self, PipelineError> {
        let statistics = SummaryStatistics::compute(&dataset)?;
        log::debug!("Summary for {source}: {statistics:?}");
        let insights = insight_fragments(&statistics);
        Ok(RenderContext {
            source,
            dataset,
            statistics,
            insights,
        })
    }

    /// Plain-text report for the terminal: source line, sample notice if
    /// any, then the insight bullets.
    pub fn report(&self) -> String {
        let mut out = format!("# BioScope: {}\n\n", self.source);
        if self.source.is_sample() {
            out.push_str(SAMPLE_NOTICE);
            out.push_str("\n\n");
        }
        out.push_str(&format!("## {INSIGHTS_HEADING}\n\n_{INSIGHTS_DISCLAIMER}_\n\n"));
        out.push_str(&render_markdown(&self.insights));
        out
    }
}
