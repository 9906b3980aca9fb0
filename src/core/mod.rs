pub mod diff_engine;
pub mod engine;
pub mod extractor;
pub mod pipeline;

pub use crate::domain::model::{
    CompareOutcome, CompareRequest, ComparisonResult, ExtractedInputs, LineSet, SortMode,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
