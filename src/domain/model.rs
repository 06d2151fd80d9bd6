use serde::{Deserialize, Serialize};

/// 單一請求的 emoji 正規化結果，產生後不再變動
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmojiResult {
    /// Exactly one user-perceived emoji grapheme (possibly several code points joined by ZWJ).
    pub emoji: String,
    /// The raw completion text the emoji was extracted from.
    pub source_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorResult {
    /// A `#RRGGBB` string; the fallback constant when the candidate failed validation.
    pub hex: String,
    pub valid: bool,
}

/// Per-endpoint completion tuning. The emoji endpoint runs hot with a tiny token
/// budget to discourage multiple emoji; the color endpoint runs at temperature 0.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionProfile {
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
}
