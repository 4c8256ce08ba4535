//! 应用状态管理
//!
//! 定义在请求处理器之间共享的状态。
//! 两个生成器服务共享同一个 Gemini 客户端；启动后状态不可变，
//! 各次调用之间没有任何共享可变数据。

use std::sync::Arc;

use crate::config::AppConfig;
use crate::gemini::{GeminiClient, GeminiError};
use crate::services::{ExamplePromptService, SuggestionTranslator};

/// 应用共享状态
pub struct AppState {
    /// 建议翻译服务
    pub translator: SuggestionTranslator,
    /// 示例语句服务
    pub examples: ExamplePromptService,
}

impl AppState {
    /// 从配置创建应用状态
    ///
    /// API Key 为空时在此处失败（fail fast）
    pub fn from_config(config: &AppConfig) -> Result<Self, GeminiError> {
        let client = Arc::new(GeminiClient::new(&config.api_key, &config.base_url)?);

        Ok(Self {
            translator: SuggestionTranslator::new(Arc::clone(&client), &config.model),
            examples: ExamplePromptService::new(client, &config.model),
        })
    }
}

/// 创建可共享的应用状态
pub fn create_shared_state(config: &AppConfig) -> Result<Arc<AppState>, GeminiError> {
    Ok(Arc::new(AppState::from_config(config)?))
}
