pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Command};

pub use adapters::{build_pipeline, ProductionPipeline};
pub use config::AdapterConfig;
pub use core::pipeline::ModerationPipeline;
pub use domain::model::{JobRequest, ResponseEnvelope};
pub use utils::error::{AdapterError, Result};
