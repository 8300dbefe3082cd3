pub mod config;
pub mod dataset;
pub mod export;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod zone;

pub use dataset::{load_zones, DatasetError};
pub use pipeline::{Pipeline, PipelineSettings, RunOutcome};
pub use report::Report;
pub use zone::{RankedZone, ScoreWeights, Zone};
