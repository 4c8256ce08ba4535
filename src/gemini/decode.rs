//! 响应解码与结构校验
//!
//! 两个生成器共用的校验入口：先尝试 JSON 解码，再检查顶层是否为数组。
//! 分类顺序为 解码 → 结构 → 字段，任一阶段失败即短路，
//! 保证错误分类精确（字段级检查由各调用方完成）。

use serde_json::Value;

use super::types::GeminiError;

/// 将原始响应文本解码为 JSON 数组
///
/// - 非法 JSON → `GeminiError::Format`
/// - 合法 JSON 但顶层不是数组 → `GeminiError::Shape`
/// - 空数组是合法结果，原样返回
pub fn decode_json_array(raw: &str) -> Result<Vec<Value>, GeminiError> {
    let value: Value = serde_json::from_str(raw.trim())?;

    match value {
        Value::Array(items) => Ok(items),
        other => Err(GeminiError::Shape(format!(
            "expected a JSON array, got {}",
            json_type_name(&other)
        ))),
    }
}

/// JSON 值的类型名（用于错误信息）
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
