use crate::core::{color, emoji, prompt};
use crate::core::{ColorResult, CompletionProfile, CompletionService, EmojiResult};
use crate::utils::error::Result;

/// Drives one request end to end: template the prompt, await a single completion,
/// reduce the reply to the contract (one emoji grapheme, or one `#RRGGBB` string).
/// No retries; an upstream failure surfaces immediately.
pub struct RelayPipeline<C: CompletionService> {
    completion: C,
    emoji_profile: CompletionProfile,
    color_profile: CompletionProfile,
}

impl<C: CompletionService> RelayPipeline<C> {
    pub fn new(
        completion: C,
        emoji_profile: CompletionProfile,
        color_profile: CompletionProfile,
    ) -> Self {
        Self {
            completion,
            emoji_profile,
            color_profile,
        }
    }

    pub async fn emoji_for_text(&self, input: &str) -> Result<EmojiResult> {
        let prompt = prompt::emoji_prompt(input);

        tracing::debug!("Requesting emoji completion ({} input chars)", input.len());
        let text = self.completion.complete(&prompt, &self.emoji_profile).await?;
        tracing::debug!("Raw completion text: {:?}", text);

        let emoji = emoji::normalize(&text);
        tracing::info!("Normalized emoji: {}", emoji);

        Ok(EmojiResult {
            emoji,
            source_text: text,
        })
    }

    pub async fn color_for_emoji(&self, input: &str) -> Result<ColorResult> {
        let prompt = prompt::color_prompt(input);

        tracing::debug!("Requesting color completion for {}", input);
        let text = self.completion.complete(&prompt, &self.color_profile).await?;
        tracing::debug!("Raw completion text: {:?}", text);

        let hex = color::validate(&text);
        let valid = hex == text.trim();
        tracing::info!("Validated color: {} (valid: {})", hex, valid);

        Ok(ColorResult { hex, valid })
    }
}
