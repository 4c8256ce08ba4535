//! API 路由模块

mod feedback;
mod health;

pub use feedback::feedback_routes;
pub use health::health_routes;

use axum::Router;

use crate::state::AppState;
use std::sync::Arc;

/// 创建所有 API 路由
pub fn create_api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(feedback_routes())
        .with_state(state)
}
