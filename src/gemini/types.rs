//! Gemini 类型定义

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 内联二进制附件（经 base64 编码的图片）
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME 类型，如 "image/png"
    pub mime_type: String,
    /// base64 编码的字节数据
    pub data: String,
}

/// 请求内容片段
///
/// 线上格式为 `{"text": ...}` 或 `{"inlineData": {...}}`，
/// 序列化顺序即发送顺序。
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text {
        text: String,
    },
    InlineData {
        #[serde(rename = "inlineData")]
        inline_data: InlineData,
    },
}

impl Part {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            text: content.into(),
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self::InlineData {
            inline_data: InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            },
        }
    }

    /// 是否为图片片段
    pub fn is_inline_data(&self) -> bool {
        matches!(self, Self::InlineData { .. })
    }
}

/// 一条消息内容（角色 + 有序片段）
#[derive(Debug, Clone, Serialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

impl Content {
    pub fn user(parts: Vec<Part>) -> Self {
        Self {
            role: "user".to_string(),
            parts,
        }
    }
}

/// 系统指令（仅包含文本片段）
#[derive(Debug, Clone, Serialize)]
pub struct SystemInstruction {
    pub parts: Vec<TextPart>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextPart {
    pub text: String,
}

impl SystemInstruction {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![TextPart { text: text.into() }],
        }
    }
}

/// 生成参数
///
/// responseSchema 约束模型输出为符合该 JSON Schema 的文本
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// 响应 MIME 类型（固定 "application/json"）
    pub response_mime_type: String,
    /// 响应 JSON Schema
    pub response_schema: Value,
    /// 温度参数
    pub temperature: f64,
    /// top_p 参数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

/// generateContent 请求载荷
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub system_instruction: SystemInstruction,
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

/// generateContent 响应载荷
///
/// 仅消费 candidates[0].content.parts[*].text，其余字段忽略
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// 提取首个候选的文本内容
    pub fn first_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

/// Gemini 错误类型
///
/// Config 在构造期触发；Http/Api 归类为传输失败；
/// Format/Shape 区分"不是 JSON"与"是 JSON 但结构不对"。
#[derive(Debug, thiserror::Error)]
pub enum GeminiError {
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(String),

    /// HTTP 请求错误
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    /// API 返回错误
    #[error("API 错误 ({status}): {message}")]
    Api { status: u16, message: String },

    /// 响应不是有效的 JSON
    #[error("响应不是有效的 JSON: {0}")]
    Format(#[from] serde_json::Error),

    /// 响应结构不符合预期
    #[error("响应结构不符合预期: {0}")]
    Shape(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_serialization() {
        let text = serde_json::to_value(Part::text("hello")).unwrap();
        assert_eq!(text, json!({"text": "hello"}));

        let image = serde_json::to_value(Part::inline_data("image/png", "QUJD")).unwrap();
        assert_eq!(
            image,
            json!({"inlineData": {"mimeType": "image/png", "data": "QUJD"}})
        );
    }

    #[test]
    fn test_request_serialization_camel_case() {
        let request = GenerateContentRequest {
            system_instruction: SystemInstruction::new("persona"),
            contents: vec![Content::user(vec![Part::text("hi")])],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: json!({"type": "ARRAY"}),
                temperature: 0.7,
                top_p: Some(0.95),
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["systemInstruction"]["parts"][0]["text"], "persona");
        assert_eq!(value["contents"][0]["role"], "user");
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["topP"], 0.95);
    }

    #[test]
    fn test_first_text_concatenates_parts() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "[1, "}, {"text": "2]"}]
                }
            }]
        });
        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("[1, 2]"));
    }

    #[test]
    fn test_first_text_empty_candidates() {
        let response: GenerateContentResponse =
            serde_json::from_value(json!({"candidates": []})).unwrap();
        assert!(response.first_text().is_none());

        let blank: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{"content": {"parts": [{"text": "  "}]}}]
        }))
        .unwrap();
        assert!(blank.first_text().is_none());
    }
}
