pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use crate::adapters::openai::OpenAiCompletion;
pub use crate::config::CliConfig;
pub use crate::core::pipeline::RelayPipeline;
pub use crate::utils::error::{RelayError, Result};
