use lazy_static::lazy_static;
use regex::Regex;

/// Substituted when the completion text is not a well-formed `#RRGGBB` color.
/// The color prompt instructs the model to emit this same value when unsure.
pub const FALLBACK_COLOR: &str = "#000000";

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("hex color pattern is valid");
}

/// Accepts a candidate color string and returns it trimmed when it has the exact
/// `#RRGGBB` shape (case preserved), else [`FALLBACK_COLOR`]. Never fails.
pub fn validate(candidate: &str) -> String {
    let trimmed = candidate.trim();

    if HEX_COLOR.is_match(trimmed) {
        trimmed.to_string()
    } else {
        tracing::warn!("Invalid color format {:?}, using fallback", candidate);
        FALLBACK_COLOR.to_string()
    }
}
