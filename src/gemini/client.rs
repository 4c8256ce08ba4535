//! Gemini generateContent 客户端

use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error};

use super::types::{GenerateContentRequest, GenerateContentResponse, GeminiError};

/// Gemini API 客户端
///
/// 每次调用发起恰好一次出站请求，无重试、无缓存。
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// 创建新的 Gemini 客户端
    ///
    /// API Key 为空时在构造期失败，而非首次调用时
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self, GeminiError> {
        let api_key = api_key.into();
        if api_key.is_empty() {
            return Err(GeminiError::Config("API Key is required".to_string()));
        }

        // 构建 HTTP 客户端
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .connect_timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(5)
            .build()
            .map_err(GeminiError::Http)?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.into(),
        })
    }

    /// 调用 generateContent 并返回模型产出的原始文本
    pub async fn generate_text(
        &self,
        model: &str,
        request: &GenerateContentRequest,
    ) -> Result<String, GeminiError> {
        let endpoint = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            model,
            self.api_key
        );

        debug!("Gemini API request: model={}", model);

        let response = self
            .client
            .post(&endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        // 检查状态码
        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let error_text = response.text().await.unwrap_or_default();
            error!(
                "Gemini API error: status={}, body={}",
                status_code,
                truncate_for_log(&error_text, 500)
            );
            return Err(GeminiError::Api {
                status: status_code,
                message: error_text,
            });
        }

        let body: GenerateContentResponse = response.json().await?;
        body.first_text()
            .ok_or_else(|| GeminiError::Shape("response contained no candidate text".to_string()))
    }
}

/// 按字节上限截断日志文本，回退到字符边界避免切断多字节字符
fn truncate_for_log(text: &str, max_bytes: usize) -> &str {
    if text.len() <= max_bytes {
        return text;
    }
    let mut end = max_bytes;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_for_log("오류", 500), "오류");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        // 第 500 字节落在多字节字符中间时回退到边界
        let body = format!("{}한글 오류 메시지", "x".repeat(499));
        let truncated = truncate_for_log(&body, 500);
        assert!(truncated.len() <= 500);
        assert_eq!(truncated, "x".repeat(499));

        let ascii = "y".repeat(600);
        assert_eq!(truncate_for_log(&ascii, 500).len(), 500);
    }
}
