//! Prompt templates for the two completion calls. Wording matters here: the
//! normalizer and validator are the safety net, but the instructions keep the
//! model close to the contract in the first place.

use crate::core::color::FALLBACK_COLOR;

const EMOJI_PREAMBLE: &str = "\
Return exactly **one** emoji that best matches the input.
Do **not** return any other characters, words, or more than one separate emoji.
The emoji should be a single Unicode emoji or a valid composite emoji (emojis connected by a Zero Width Joiner).
If there are multiple separate emojis, return only the first one.
";

pub fn emoji_prompt(input: &str) -> String {
    format!("{}{}", EMOJI_PREAMBLE, input)
}

pub fn color_prompt(emoji: &str) -> String {
    format!(
        "Return the most dominant color of the following emoji in hexadecimal RGB format (e.g., #FFFFFF for white).\n\
         Only return the hexadecimal color code and nothing else.\n\
         If you cannot determine the color, return {}.\n\
         Emoji: {}",
        FALLBACK_COLOR, emoji
    )
}
