pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{cli::LocalStorage, toml_config::ServiceConfig, CliConfig};
pub use core::{diff_engine::DiffEngine, engine::CompareEngine, pipeline::ComparePipeline};
pub use domain::model::{
    ClassificationPolicy, CompareOutcome, CompareRequest, ComparisonResult, LineSet, SortMode,
};
pub use utils::error::{CompareError, Result};
