//! 数据模型模块

mod api;
mod suggestion;

pub use api::{ExamplesResponse, ImageAttachment, TranslateRequest, TranslateResponse};
pub use suggestion::{CategoryStyle, FeedbackCategory, Suggestion};
