//! 路由配置模块
//!
//! 定义所有 REST API 端点的路由映射和中间件

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use vise_shared::observability::middleware::{http_tracing, request_id};

use crate::{handlers, state::AppState};

/// 业务路由
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/client", post(handlers::client::register_client))
        .route("/clients", get(handlers::client::list_clients))
        .route("/purchase", post(handlers::purchase::evaluate_purchase))
}

/// 构建完整应用
///
/// 请求 ID 中间件在最外层，保证追踪 span 能拿到请求 ID
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .merge(api_routes())
        .with_state(state)
        .layer(middleware::from_fn(http_tracing))
        .layer(middleware::from_fn(request_id))
        .layer(cors)
}
