use lazy_static::lazy_static;
use regex::Regex;

/// Returned when the completion text contains no pictographic content at all.
pub const FALLBACK_EMOJI: &str = "❓";

lazy_static! {
    // Flag sequences (two regional indicators) are tried first so they stay one
    // unit; otherwise an extended-pictographic code point carries optional
    // presentation/skin-tone marks and any ZWJ-joined continuations.
    static ref EMOJI_RUN: Regex = Regex::new(
        r"[\x{1F1E6}-\x{1F1FF}]{2}|\p{Extended_Pictographic}[\x{FE0F}\x{1F3FB}-\x{1F3FF}]*(?:\x{200D}\p{Extended_Pictographic}[\x{FE0F}\x{1F3FB}-\x{1F3FF}]*)*"
    )
    .expect("emoji run pattern is valid");
}

/// Reduces arbitrary completion text to exactly one user-perceived emoji grapheme.
///
/// Composite (ZWJ-joined) emoji and flag sequences are preserved intact. When the
/// upstream service ignored the single-emoji instruction and returned several
/// disjoint emoji, the first one wins. Text with no emoji at all yields
/// [`FALLBACK_EMOJI`], never an empty string.
pub fn normalize(text: &str) -> String {
    let mut runs = EMOJI_RUN.find_iter(text);

    let first = match runs.next() {
        Some(m) => m.as_str().to_string(),
        None => {
            tracing::warn!("No emoji in completion text, using fallback");
            return FALLBACK_EMOJI.to_string();
        }
    };

    if runs.next().is_some() {
        tracing::warn!("Multiple separate emoji in completion text, keeping the first");
    }

    first
}
