//! 健康检查处理器

use axum::{Json, extract::State};

use crate::{dto::ReadyResponse, state::AppState};

/// 存活检查
///
/// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}

/// 就绪检查，附带当前登记客户数
///
/// GET /ready
pub async fn readiness_check(State(state): State<AppState>) -> Json<ReadyResponse> {
    Json(ReadyResponse {
        status: "ready",
        clients: state.registry.count(),
    })
}
