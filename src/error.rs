use thiserror::Error;

/// Fatal failures of a single load. None of them are retried; the window
/// shows the message and waits for the next load.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Unreadable or unparseable input (I/O, malformed row, bad cell,
    /// unsupported extension). Holds the full context chain.
    #[error("failed to load dataset: {0}")]
    Load(String),

    /// Required columns absent from the input, in canonical column order.
    #[error("dataset is missing required column(s): {}", .missing.join(", "))]
    Schema { missing: Vec<&'static str> },

    /// Zero data rows: means and argmax are undefined.
    #[error("dataset has no rows, so statistics cannot be computed")]
    EmptyDataset,
}

impl From<anyhow::Error> for PipelineError {
    fn from(err: anyhow::Error) -> Self {
        PipelineError::Load(format!("{err:#}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn schema_message_lists_every_missing_column() {
        let err = PipelineError::Schema {
            missing: vec!["Mutation_Rate", "Category"],
        };
        assert_eq!(
            err.to_string(),
            "dataset is missing required column(s): Mutation_Rate, Category"
        );
    }

    #[test]
    fn load_error_keeps_context_chain() {
        let inner: anyhow::Result<()> = Err(anyhow::anyhow!("bad float"));
        let err: PipelineError = inner.context("row 3").unwrap_err().into();
        assert_eq!(err.to_string(), "failed to load dataset: row 3: bad float");
    }
}
