//! 示例反馈语句服务
//!
//! 为输入框生成可点击的示例语句。该功能纯属锦上添花，
//! 因此任何失败都降级为内置示例，绝不向调用方抛错。

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::warn;

use crate::gemini::{
    decode_json_array, Content, GeminiClient, GeminiError, GenerateContentRequest,
    GenerationConfig, Part, SystemInstruction,
};

/// 系统指令：给设计负责人提意见的用户人设
const SYSTEM_INSTRUCTION: &str = "당신은 디자인 팀장에게 피드백을 주는 사용자 역할을 합니다. \
항상 JSON 형식으로 응답해야 합니다. 응답은 5개의 문자열을 담은 배열이어야 합니다.";

/// 用户提示词
const USER_PROMPT: &str = "디자인에 대한 모호하고 막연한 피드백 예시 5개를 한국어로 생성해줘. \
짧고 흔하게 사용되는 문장으로 부탁해. 예를 들어 '좀 더 세련되게 만들어주세요.' 같은 느낌으로.";

/// 字符串数组的响应 Schema
static RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "STRING",
            "description": "모호한 디자인 피드백 문장",
        },
    })
});

/// 温度调高以获得更多样的示例
const TEMPERATURE: f64 = 1.0;

/// 首次渲染展示的静态示例
pub const INITIAL_EXAMPLES: [&str; 5] = [
    "좀 더 세련되게 만들어주세요.",
    "뭔가 허전한 느낌이에요.",
    "사용자가 더 오래 머물게 하고 싶어요.",
    "좀 더 전문가적인 느낌이 나도록 해주세요.",
    "눈에 잘 안 들어와요.",
];

/// 生成失败时的内置回退示例
const FALLBACK_EXAMPLES: [&str; 5] = [
    "좀 더 생동감 있게 만들어 주세요.",
    "뭔가 정리가 안 된 느낌이에요.",
    "사용자가 신뢰할 수 있도록 바꿔주세요.",
    "너무 복잡해서 사용하기 어려워요.",
    "더 직관적으로 만들어 주세요.",
];

/// 示例语句服务
pub struct ExamplePromptService {
    client: Arc<GeminiClient>,
    model: String,
}

impl ExamplePromptService {
    pub fn new(client: Arc<GeminiClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// 首次渲染用的静态示例
    pub fn initial(&self) -> Vec<String> {
        INITIAL_EXAMPLES.iter().map(|s| s.to_string()).collect()
    }

    /// 刷新示例语句
    ///
    /// 全函数：传输、解码、结构失败或空结果一律回退到内置示例，
    /// 只记日志，不向调用方返回错误。
    pub async fn refresh(&self) -> Vec<String> {
        let result = self.request_examples().await;
        examples_or_fallback(result)
    }

    async fn request_examples(&self) -> Result<Vec<String>, GeminiError> {
        let request = build_request();
        let raw = self.client.generate_text(&self.model, &request).await?;
        parse_examples(&raw)
    }
}

/// 组装 generateContent 请求
fn build_request() -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: SystemInstruction::new(SYSTEM_INSTRUCTION),
        contents: vec![Content::user(vec![Part::text(USER_PROMPT)])],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: RESPONSE_SCHEMA.clone(),
            temperature: TEMPERATURE,
            top_p: None,
        },
    }
}

/// 解析字符串数组，原样保序返回
fn parse_examples(raw: &str) -> Result<Vec<String>, GeminiError> {
    let items = decode_json_array(raw)?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(GeminiError::Shape(format!(
                "element {} is not a string: {}",
                index, other
            ))),
        })
        .collect()
}

/// 失败或空结果时替换为内置回退示例
fn examples_or_fallback(result: Result<Vec<String>, GeminiError>) -> Vec<String> {
    match result {
        Ok(examples) if !examples.is_empty() => examples,
        Ok(_) => {
            warn!("Example generation returned an empty batch, using fallback");
            fallback()
        }
        Err(e) => {
            warn!("Example generation failed, using fallback: {}", e);
            fallback()
        }
    }
}

fn fallback() -> Vec<String> {
    FALLBACK_EXAMPLES.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_high_temperature() {
        let request = build_request();
        assert_eq!(request.generation_config.temperature, 1.0);
        assert!(request.generation_config.top_p.is_none());
    }

    #[test]
    fn test_parse_preserves_order_and_length() {
        let raw = r#"["하나", "둘", "셋", "넷", "다섯"]"#;
        let examples = parse_examples(raw).unwrap();
        assert_eq!(examples, vec!["하나", "둘", "셋", "넷", "다섯"]);
    }

    #[test]
    fn test_parse_accepts_other_lengths() {
        assert_eq!(parse_examples(r#"["a", "b"]"#).unwrap().len(), 2);
    }

    #[test]
    fn test_parse_non_string_element_is_shape_error() {
        assert!(matches!(
            parse_examples(r#"["a", 3]"#).unwrap_err(),
            GeminiError::Shape(_)
        ));
    }

    #[test]
    fn test_fallback_on_error() {
        let examples = examples_or_fallback(Err(GeminiError::Shape("boom".to_string())));
        assert_eq!(examples.len(), 5);
        assert_eq!(examples[0], FALLBACK_EXAMPLES[0]);
    }

    #[test]
    fn test_fallback_on_empty_batch() {
        let examples = examples_or_fallback(Ok(Vec::new()));
        assert!(!examples.is_empty());
    }

    #[test]
    fn test_success_passes_through_verbatim() {
        let batch = vec!["그대로".to_string()];
        assert_eq!(examples_or_fallback(Ok(batch.clone())), batch);
    }
}
