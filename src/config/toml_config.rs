use crate::domain::model::CompletionProfile;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{RelayError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_EMOJI_TEMPERATURE: f32 = 0.5;
const DEFAULT_EMOJI_MAX_TOKENS: u32 = 10;
const DEFAULT_COLOR_TEMPERATURE: f32 = 0.0;
const DEFAULT_COLOR_MAX_TOKENS: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    pub api_base: String,
    pub timeout_seconds: Option<u64>,
    pub emoji: ModelConfig,
    pub color: ModelConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub model: String,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RelayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RelayError::InvalidConfigValueError {
            field: "toml_parsing".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIND_ADDR})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        // 使用正規表達式匹配 ${VAR_NAME} 格式
        let re = Regex::new(r"\$\{([^}]+)\}").expect("env substitution pattern is valid");

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_addr(&self) -> &str {
        &self.server.bind_addr
    }

    fn api_base(&self) -> &str {
        &self.upstream.api_base
    }

    fn emoji_profile(&self) -> CompletionProfile {
        CompletionProfile {
            model: self.upstream.emoji.model.clone(),
            temperature: self
                .upstream
                .emoji
                .temperature
                .unwrap_or(DEFAULT_EMOJI_TEMPERATURE),
            max_tokens: self
                .upstream
                .emoji
                .max_tokens
                .unwrap_or(DEFAULT_EMOJI_MAX_TOKENS),
        }
    }

    fn color_profile(&self) -> CompletionProfile {
        CompletionProfile {
            model: self.upstream.color.model.clone(),
            temperature: self
                .upstream
                .color
                .temperature
                .unwrap_or(DEFAULT_COLOR_TEMPERATURE),
            max_tokens: self
                .upstream
                .color
                .max_tokens
                .unwrap_or(DEFAULT_COLOR_MAX_TOKENS),
        }
    }

    fn request_timeout_seconds(&self) -> u64 {
        self.upstream.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.bind_addr", &self.server.bind_addr)?;
        validation::validate_url("upstream.api_base", &self.upstream.api_base)?;
        validation::validate_non_empty_string("upstream.emoji.model", &self.upstream.emoji.model)?;
        validation::validate_non_empty_string("upstream.color.model", &self.upstream.color.model)?;

        if let Some(temperature) = self.upstream.emoji.temperature {
            validation::validate_range("upstream.emoji.temperature", temperature, 0.0, 2.0)?;
        }
        if let Some(temperature) = self.upstream.color.temperature {
            validation::validate_range("upstream.color.temperature", temperature, 0.0, 2.0)?;
        }
        if let Some(timeout) = self.upstream.timeout_seconds {
            validation::validate_positive_number("upstream.timeout_seconds", timeout as usize, 1)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[server]
bind_addr = "0.0.0.0:8080"

[upstream]
api_base = "https://api.openai.com/v1"
timeout_seconds = 15

[upstream.emoji]
model = "gpt-4.1-mini"
temperature = 0.5
max_tokens = 10

[upstream.color]
model = "gpt-4o-mini"
"#;

    #[test]
    fn test_parse_sample_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert_eq!(config.request_timeout_seconds(), 15);
        assert_eq!(config.emoji_profile().max_tokens, 10);
        // 未指定的欄位採用預設值
        assert_eq!(config.color_profile().temperature, 0.0);
        assert_eq!(config.color_profile().max_tokens, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("RELAY_TEST_BIND", "127.0.0.1:9999");
        let content = SAMPLE.replace("0.0.0.0:8080", "${RELAY_TEST_BIND}");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9999");
    }

    #[test]
    fn test_unset_env_var_left_verbatim() {
        let content = SAMPLE.replace("0.0.0.0:8080", "${RELAY_TEST_UNSET_VAR}");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.bind_addr(), "${RELAY_TEST_UNSET_VAR}");
    }

    #[test]
    fn test_invalid_toml_rejected() {
        assert!(TomlConfig::from_toml_str("not valid toml [[[").is_err());
    }

    #[test]
    fn test_bad_api_base_rejected() {
        let content = SAMPLE.replace("https://api.openai.com/v1", "ftp://example.com");
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert!(config.validate().is_err());
    }
}
