pub mod color;
pub mod emoji;
pub mod pipeline;
pub mod prompt;

pub use crate::domain::model::{ColorResult, CompletionProfile, EmojiResult};
pub use crate::domain::ports::{CompletionService, ConfigProvider};
pub use crate::utils::error::Result;
