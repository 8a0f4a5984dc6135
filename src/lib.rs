//! BioScope: load a gene table (or a seeded sample), summarise it and
//! describe it with rule-based insight text.
//!
//! The window in `main.rs` is a thin shell over [`context::RenderContext`],
//! which runs the whole pipeline once per load.

pub mod context;
pub mod data;
pub mod error;
pub mod insights;
pub mod stats;

pub use context::RenderContext;
pub use error::PipelineError;
