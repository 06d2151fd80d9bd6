use crate::domain::model::CompletionProfile;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Narrow interface over the external completion service so the pipeline can be
/// tested deterministically against canned outputs.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, prompt: &str, profile: &CompletionProfile) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn api_base(&self) -> &str;
    fn emoji_profile(&self) -> CompletionProfile;
    fn color_profile(&self) -> CompletionProfile;
    fn request_timeout_seconds(&self) -> u64;
}
