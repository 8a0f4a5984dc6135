//! Data layer: typed gene records, file loading and the seeded sample.
//!
//! Architecture:
//! ```text
//!  .csv / .tsv / .json / .parquet      (no file)
//!        │                                │
//!        ▼                                ▼
//!   ┌──────────┐                   ┌───────────┐
//!   │  loader   │ schema check     │ synthetic  │ StdRng(seed 42)
//!   └──────────┘                   └───────────┘
//!        │                                │
//!        └──────────────┬─────────────────┘
//!                       ▼
//!                ┌──────────────┐
//!                │ GeneDataset   │  Vec<GeneRecord>, category index
//!                └──────────────┘
//! ```

pub mod loader;
pub mod model;
pub mod source;
pub mod synthetic;
