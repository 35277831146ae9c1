pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, SweepConfig};
pub use core::engine::SweepEngine;
pub use core::scanner::CommentPolicy;
pub use core::separator::SeparatorPipeline;
pub use core::uppercase::UppercasePipeline;
pub use utils::error::{Result, SweepError};
