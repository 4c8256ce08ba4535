//! 设计建议领域模型

use serde::{Deserialize, Serialize};

/// 建议分类
///
/// 渲染侧的封闭集合为六个已知分类；模型可能返回集合之外的标签
/// （指令文本允许九个），未识别的标签原样保留并落到通用样式。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FeedbackCategory {
    Typography,
    Color,
    Layout,
    Component,
    Interaction,
    General,
    /// 已知集合之外的标签，原样保留
    Unrecognized(String),
}

impl From<String> for FeedbackCategory {
    fn from(label: String) -> Self {
        match label.as_str() {
            "Typography" => Self::Typography,
            "Color" => Self::Color,
            "Layout" => Self::Layout,
            "Component" => Self::Component,
            "Interaction" => Self::Interaction,
            "General" => Self::General,
            _ => Self::Unrecognized(label),
        }
    }
}

impl From<FeedbackCategory> for String {
    fn from(category: FeedbackCategory) -> Self {
        category.label().to_string()
    }
}

impl FeedbackCategory {
    /// 分类标签（未识别分类返回原始标签）
    pub fn label(&self) -> &str {
        match self {
            Self::Typography => "Typography",
            Self::Color => "Color",
            Self::Layout => "Layout",
            Self::Component => "Component",
            Self::Interaction => "Interaction",
            Self::General => "General",
            Self::Unrecognized(label) => label,
        }
    }

    /// 六个已知分类
    pub fn known() -> [FeedbackCategory; 6] {
        [
            Self::Typography,
            Self::Color,
            Self::Layout,
            Self::Component,
            Self::Interaction,
            Self::General,
        ]
    }

    /// 分类的展示样式，未识别分类使用通用样式
    pub fn style(&self) -> CategoryStyle {
        match self {
            Self::Typography => CategoryStyle::new("T", "bg-sky-500", "타이포그래피"),
            Self::Color => CategoryStyle::new("C", "bg-rose-500", "색상"),
            Self::Layout => CategoryStyle::new("L", "bg-amber-500", "레이아웃"),
            Self::Component => CategoryStyle::new("Co", "bg-emerald-500", "컴포넌트"),
            Self::Interaction => CategoryStyle::new("I", "bg-violet-500", "인터랙션"),
            Self::General => CategoryStyle::new("G", "bg-gray-500", "일반"),
            Self::Unrecognized(_) => CategoryStyle::new("?", "bg-slate-500", "기타"),
        }
    }
}

/// 分类展示样式
#[derive(Debug, Clone, Serialize)]
pub struct CategoryStyle {
    /// 图标文字
    pub icon: &'static str,
    /// 背景色 class
    pub color: &'static str,
    /// 本地化标签
    pub label: &'static str,
}

impl CategoryStyle {
    fn new(icon: &'static str, color: &'static str, label: &'static str) -> Self {
        Self { icon, color, label }
    }
}

/// 一条可执行的设计改进建议
///
/// 仅由模型响应解码产生，不可变，下次提交时整体替换。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub category: FeedbackCategory,
    pub suggestion: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_known_label() {
        assert_eq!(
            FeedbackCategory::from("Color".to_string()),
            FeedbackCategory::Color
        );
        assert_eq!(
            FeedbackCategory::from("General".to_string()),
            FeedbackCategory::General
        );
    }

    #[test]
    fn test_unrecognized_label_preserved_verbatim() {
        let category = FeedbackCategory::from("Accessibility".to_string());
        assert_eq!(
            category,
            FeedbackCategory::Unrecognized("Accessibility".to_string())
        );
        assert_eq!(category.label(), "Accessibility");

        // 序列化回原始标签
        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            serde_json::json!("Accessibility")
        );
    }

    #[test]
    fn test_unrecognized_category_uses_generic_style() {
        let style = FeedbackCategory::Unrecognized("Iconography".to_string()).style();
        assert_eq!(style.icon, "?");
        assert_eq!(FeedbackCategory::Color.style().color, "bg-rose-500");
    }

    #[test]
    fn test_suggestion_deserialization() {
        let suggestion: Suggestion = serde_json::from_str(
            r#"{"category":"Color","suggestion":"Increase contrast on primary buttons."}"#,
        )
        .unwrap();
        assert_eq!(suggestion.category, FeedbackCategory::Color);
        assert_eq!(
            suggestion.suggestion,
            "Increase contrast on primary buttons."
        );
    }

    #[test]
    fn test_suggestion_missing_field_fails() {
        let result = serde_json::from_str::<Suggestion>(r#"{"category":"Color"}"#);
        assert!(result.is_err());
    }
}
