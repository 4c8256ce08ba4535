//! 建议翻译服务
//!
//! 把模糊的设计反馈（文本 + 可选截图）翻译为结构化的改进建议。
//! 固定的指令人设、输出 Schema 与采样参数共同构成本生成器的契约。

use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

use crate::gemini::{
    decode_json_array, Content, GeminiClient, GeminiError, GenerateContentRequest,
    GenerationConfig, Part, SystemInstruction,
};
use crate::models::{ImageAttachment, Suggestion};

/// 系统指令：UI/UX 设计专家人设
const SYSTEM_INSTRUCTION: &str = "\
당신은 세계적인 UI/UX 디자인 전문가입니다.\n\
사용자가 입력하는 모호하고 막연한 디자인 피드백을 듣고, 이를 구체적이고 실행 가능한 몇 가지 디자인 개선 제안으로 번역하는 역할을 합니다.\n\
사용자가 스크린샷 이미지를 함께 제공할 경우, 해당 이미지를 분석하여 피드백의 맥락을 파악하고, 이미지에 기반한 구체적인 제안을 해주세요.\n\
답변은 항상 JSON 형식이어야 합니다. 제안은 'category'와 'suggestion' 필드를 포함하는 객체의 배열로 구성됩니다.\n\
'category'는 다음 중 하나여야 합니다: 'Typography', 'Color', 'Layout', 'Component', 'Interaction', 'General', 'Content', 'Iconography', 'Accessibility'.\n\
각 제안은 명확하고, 구체적이며, 디자이너나 개발자가 바로 이해하고 적용할 수 있도록 작성해주세요.";

/// 指令文本允许的九个分类标签
///
/// 渲染侧的封闭枚举只定义了前六个，后三个落到通用样式。
/// 这一不一致沿自上游约定，刻意不做收窄。
const ALLOWED_CATEGORIES: [&str; 9] = [
    "Typography",
    "Color",
    "Layout",
    "Component",
    "Interaction",
    "General",
    "Content",
    "Iconography",
    "Accessibility",
];

/// 建议列表的响应 Schema
static RESPONSE_SCHEMA: Lazy<Value> = Lazy::new(|| {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "category": {
                    "type": "STRING",
                    "enum": ALLOWED_CATEGORIES,
                    "description": "디자인 제안의 카테고리",
                },
                "suggestion": {
                    "type": "STRING",
                    "description": "구체적인 디자인 개선 제안",
                },
            },
            "required": ["category", "suggestion"],
        },
    })
});

/// 温度偏低，倾向稳定一致的输出
const TEMPERATURE: f64 = 0.7;
const TOP_P: f64 = 0.95;

/// 建议翻译服务
pub struct SuggestionTranslator {
    client: Arc<GeminiClient>,
    model: String,
}

impl SuggestionTranslator {
    pub fn new(client: Arc<GeminiClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    /// 翻译一条反馈
    ///
    /// 每次调用恰好一次出站请求。空建议列表是合法结果，不是错误。
    pub async fn translate(
        &self,
        feedback_text: &str,
        attachment: Option<&ImageAttachment>,
    ) -> Result<Vec<Suggestion>, GeminiError> {
        info!(
            "Translating feedback: text_len={}, has_attachment={}",
            feedback_text.len(),
            attachment.is_some()
        );

        let request = build_request(feedback_text, attachment);
        let raw = self.client.generate_text(&self.model, &request).await?;
        parse_suggestions(&raw)
    }
}

/// 组装 generateContent 请求
///
/// 附件存在时图片片段排在文本之前（先看截图再读抱怨）
fn build_request(
    feedback_text: &str,
    attachment: Option<&ImageAttachment>,
) -> GenerateContentRequest {
    let mut parts = Vec::with_capacity(2);
    if let Some(image) = attachment {
        parts.push(Part::inline_data(&image.mime_type, &image.data));
    }
    parts.push(Part::text(feedback_text));

    GenerateContentRequest {
        system_instruction: SystemInstruction::new(SYSTEM_INSTRUCTION),
        contents: vec![Content::user(parts)],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: RESPONSE_SCHEMA.clone(),
            temperature: TEMPERATURE,
            top_p: Some(TOP_P),
        },
    }
}

/// 解析建议列表
///
/// 解码 → 顶层结构 → 逐元素字段检查，任一阶段失败即短路。
/// 两个字段都必须非空，空串视为结构不合法而不是合法建议。
fn parse_suggestions(raw: &str) -> Result<Vec<Suggestion>, GeminiError> {
    let items = decode_json_array(raw)?;

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let suggestion: Suggestion = serde_json::from_value(item).map_err(|e| {
                GeminiError::Shape(format!("element {} is not a valid suggestion: {}", index, e))
            })?;

            if suggestion.category.label().trim().is_empty()
                || suggestion.suggestion.trim().is_empty()
            {
                return Err(GeminiError::Shape(format!(
                    "element {} has an empty category or suggestion",
                    index
                )));
            }

            Ok(suggestion)
        })
        .collect()
}
