//! Design Feedback Translator - Rust Backend
//!
//! 使用 axum 框架构建的后端服务，把模糊的设计反馈翻译为结构化的改进建议。

use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;
mod gemini;
mod models;
mod services;
mod state;

use api::create_api_routes;
use config::AppConfig;
use state::create_shared_state;

#[tokio::main]
async fn main() {
    // 初始化日志
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "feedback_backend=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Design Feedback Translator backend...");

    // 加载配置，缺少 API Key 直接终止启动
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // 创建共享状态（在此构造 Gemini 客户端，fail fast）
    let state = match create_shared_state(&config) {
        Ok(state) => state,
        Err(e) => {
            error!("Failed to initialize Gemini client: {}", e);
            std::process::exit(1);
        }
    };

    // 配置 CORS（允许所有来源，前端为独立静态站点）
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // 构建路由
    let app = Router::new().merge(create_api_routes(state)).layer(cors);

    // 绑定地址
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    info!("Server listening on: {}", addr);

    // 启动服务器
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
