use std::fmt;
use std::path::{Path, PathBuf};

use super::loader::load_file;
use super::model::GeneDataset;
use super::synthetic::{SAMPLE_SEED, sample_dataset};
use crate::error::PipelineError;

/// Shown whenever the synthetic fallback is in use.
pub const SAMPLE_NOTICE: &str = "Using sample dataset (upload your own to replace it).";

/// Where the current table came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Uploaded(PathBuf),
    Sample { seed: u64 },
}

impl DataSource {
    pub fn is_sample(&self) -> bool {
        matches!(self, DataSource::Sample { .. })
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Uploaded(path) => {
                let name = path.file_name().unwrap_or(path.as_os_str());
                write!(f, "{}", name.to_string_lossy())
            }
            DataSource::Sample { seed } => write!(f, "sample dataset (seed {seed})"),
        }
    }
}

/// Load `upload` if given, otherwise fall back to the seeded sample.
///
/// A failed upload is returned as-is; the sample is never substituted
/// for a file the user asked for.
pub fn acquire(upload: Option<&Path>) -> Result<(DataSource, GeneDataset), PipelineError> {
    match upload {
        Some(path) => {
            let dataset = load_file(path)?;
            log::info!("Loaded {} genes from {}", dataset.len(), path.display());
            Ok((DataSource::Uploaded(path.to_path_buf()), dataset))
        }
        None => {
            log::info!("{SAMPLE_NOTICE}");
            Ok((DataSource::Sample { seed: SAMPLE_SEED }, sample_dataset()))
        }
    }
}
