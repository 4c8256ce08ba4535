//! 反馈相关端点

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{
    ExamplesResponse, FeedbackCategory, ImageAttachment, TranslateRequest, TranslateResponse,
};
use crate::state::AppState;

/// 仅有截图、文本为空时替补的默认提示语
const DEFAULT_FEEDBACK_TEXT: &str = "첨부된 이미지를 분석하고 개선점을 제안해주세요.";

/// 翻译反馈处理器
///
/// 空建议列表照常返回 200（"无建议"状态），错误一律走 AppError
async fn translate_feedback(
    State(state): State<Arc<AppState>>,
    Json(req): Json<TranslateRequest>,
) -> AppResult<Json<TranslateResponse>> {
    if let Some(attachment) = &req.attachment {
        validate_attachment(attachment)?;
    }

    let text = effective_feedback_text(&req.text, req.attachment.is_some())?;

    let suggestions = state
        .translator
        .translate(text, req.attachment.as_ref())
        .await?;

    info!("Translation produced {} suggestions", suggestions.len());
    Ok(Json(TranslateResponse { suggestions }))
}

/// 初始示例语句处理器（静态列表）
async fn initial_examples(State(state): State<Arc<AppState>>) -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: state.examples.initial(),
    })
}

/// 刷新示例语句处理器
///
/// 服务内部已做回退，这里永远返回 200
async fn refresh_examples(State(state): State<Arc<AppState>>) -> Json<ExamplesResponse> {
    Json(ExamplesResponse {
        examples: state.examples.refresh().await,
    })
}

/// 分类样式表处理器（六个已知分类）
async fn category_styles() -> Json<serde_json::Value> {
    let styles: Vec<serde_json::Value> = FeedbackCategory::known()
        .into_iter()
        .map(|category| {
            let style = category.style();
            serde_json::json!({
                "category": category.label(),
                "icon": style.icon,
                "color": style.color,
                "label": style.label,
            })
        })
        .collect();

    Json(serde_json::json!({ "categories": styles }))
}

/// 计算实际发送的反馈文本
///
/// 文本为空但有附件时替补默认提示语；两者皆空是调用方违约
fn effective_feedback_text(text: &str, has_attachment: bool) -> Result<&str, AppError> {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        return Ok(trimmed);
    }
    if has_attachment {
        return Ok(DEFAULT_FEEDBACK_TEXT);
    }
    Err(AppError::BadRequest(
        "either feedback text or an attachment is required".to_string(),
    ))
}

/// 校验附件描述符
fn validate_attachment(attachment: &ImageAttachment) -> Result<(), AppError> {
    if !attachment.mime_type.starts_with("image/") {
        return Err(AppError::BadRequest(format!(
            "attachment must be an image, got '{}'",
            attachment.mime_type
        )));
    }
    if attachment.data.is_empty() {
        return Err(AppError::BadRequest(
            "attachment data must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// 创建反馈路由
pub fn feedback_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/feedback/translate", post(translate_feedback))
        .route("/api/feedback/examples", get(initial_examples))
        .route("/api/feedback/examples/refresh", post(refresh_examples))
        .route("/api/feedback/categories", get(category_styles))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_text_passes_through_trimmed() {
        assert_eq!(
            effective_feedback_text("  좀 더 세련되게  ", false).unwrap(),
            "좀 더 세련되게"
        );
    }

    #[test]
    fn test_empty_text_with_attachment_uses_default() {
        assert_eq!(
            effective_feedback_text("   ", true).unwrap(),
            DEFAULT_FEEDBACK_TEXT
        );
    }

    #[test]
    fn test_empty_text_without_attachment_is_rejected() {
        assert!(matches!(
            effective_feedback_text("", false),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn test_attachment_mime_must_be_image() {
        let bad = ImageAttachment {
            mime_type: "application/pdf".to_string(),
            data: "QUJD".to_string(),
        };
        assert!(matches!(
            validate_attachment(&bad),
            Err(AppError::BadRequest(_))
        ));

        let good = ImageAttachment {
            mime_type: "image/jpeg".to_string(),
            data: "QUJD".to_string(),
        };
        assert!(validate_attachment(&good).is_ok());
    }
}
