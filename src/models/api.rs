//! REST API 请求/响应模型

use serde::{Deserialize, Serialize};

use super::suggestion::Suggestion;

/// 图片附件描述符
///
/// 前端负责把文件编码为 base64，核心只接收编码后的描述符
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    /// MIME 类型，必须以 "image/" 开头
    pub mime_type: String,
    /// base64 编码的图片字节
    pub data: String,
}

/// 反馈翻译请求
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateRequest {
    /// 用户输入的原始反馈文本（前端已 trim）
    #[serde(default)]
    pub text: String,
    /// 可选的截图附件
    pub attachment: Option<ImageAttachment>,
}

/// 反馈翻译响应
///
/// 空列表是合法结果（"无建议"状态），与错误响应严格区分
#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub suggestions: Vec<Suggestion>,
}

/// 示例反馈语句响应
#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<String>,
}
