//! 应用配置管理
//!
//! 配置全部来自环境变量。API Key 是唯一的必填项，
//! 缺失时在启动阶段直接失败，而不是等到第一次调用。

use std::env;

use crate::error::AppError;

/// 应用配置结构体
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API 密钥（必填）
    pub api_key: String,

    /// Gemini API 基础 URL
    pub base_url: String,

    /// 模型名称
    pub model: String,

    /// HTTP 监听端口
    pub port: u16,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_port() -> u16 {
    8765
}

impl AppConfig {
    /// 从环境变量加载配置
    ///
    /// `GEMINI_API_KEY` 缺失或为空时返回配置错误
    pub fn from_env() -> Result<Self, AppError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                AppError::Config("GEMINI_API_KEY environment variable not set".to_string())
            })?;

        let base_url = env::var("GEMINI_BASE_URL").unwrap_or_else(|_| default_base_url());
        let model = env::var("GEMINI_MODEL").unwrap_or_else(|_| default_model());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(default_port);

        Ok(Self {
            api_key,
            base_url,
            model,
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(
            default_base_url(),
            "https://generativelanguage.googleapis.com/v1beta"
        );
        assert_eq!(default_model(), "gemini-2.5-flash");
        assert_eq!(default_port(), 8765);
    }
}
