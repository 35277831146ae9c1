pub mod engine;
pub mod scanner;
pub mod separator;
pub mod uppercase;

pub use crate::domain::model::{
    Extracted, FileAction, FileChange, FileOutcome, SourceText, SweepReport, TransformResult,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
