pub mod toml_config;

use crate::domain::model::CompletionProfile;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

/// Environment variable holding the completion-service bearer credential.
/// Absence is a fatal startup condition.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "emoji-relay")]
#[command(about = "Relay free-form text to a completion API and reduce the reply to one emoji")]
pub struct CliConfig {
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub bind_addr: String,

    #[arg(long, default_value = "https://api.openai.com/v1")]
    pub api_base: String,

    #[arg(long, default_value = "gpt-4.1-mini")]
    pub emoji_model: String,

    #[arg(long, default_value = "gpt-4o-mini")]
    pub color_model: String,

    #[arg(long, default_value = "0.5")]
    pub emoji_temperature: f32,

    #[arg(long, default_value = "10", help = "Small budget discourages multiple emoji")]
    pub emoji_max_tokens: u32,

    #[arg(long, default_value = "0.0")]
    pub color_temperature: f32,

    #[arg(long, default_value = "100")]
    pub color_max_tokens: u32,

    #[arg(long, default_value = "30")]
    pub request_timeout_seconds: u64,

    #[arg(long, help = "Path to a TOML config file (takes precedence over flags)")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn emoji_profile(&self) -> CompletionProfile {
        CompletionProfile {
            model: self.emoji_model.clone(),
            temperature: self.emoji_temperature,
            max_tokens: self.emoji_max_tokens,
        }
    }

    fn color_profile(&self) -> CompletionProfile {
        CompletionProfile {
            model: self.color_model.clone(),
            temperature: self.color_temperature,
            max_tokens: self.color_max_tokens,
        }
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.request_timeout_seconds
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("bind_addr", &self.bind_addr)?;
        validation::validate_url("api_base", &self.api_base)?;
        validation::validate_non_empty_string("emoji_model", &self.emoji_model)?;
        validation::validate_non_empty_string("color_model", &self.color_model)?;
        validation::validate_range("emoji_temperature", self.emoji_temperature, 0.0, 2.0)?;
        validation::validate_range("color_temperature", self.color_temperature, 0.0, 2.0)?;
        validation::validate_positive_number("emoji_max_tokens", self.emoji_max_tokens as usize, 1)?;
        validation::validate_positive_number("color_max_tokens", self.color_max_tokens as usize, 1)?;
        validation::validate_positive_number(
            "request_timeout_seconds",
            self.request_timeout_seconds as usize,
            1,
        )?;
        Ok(())
    }
}
