//! Gemini 模块
//!
//! 封装 generateContent REST 接口：请求组装、客户端调用、响应解码与校验。

mod client;
mod decode;
mod types;

pub use client::GeminiClient;
pub use decode::decode_json_array;
pub use types::*;
