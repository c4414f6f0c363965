//! 客户登记 API 处理器

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use rule_engine::{CardTier, EligibilityDecision};
use tracing::{info, warn};
use vise_shared::observability::metrics;

use crate::{
    dto::{RegisterClientRequest, RegisterClientResponse},
    error::{ApiError, Result},
    models::{Client, NewClient},
    state::AppState,
};

/// 登记客户
///
/// POST /client
pub async fn register_client(
    State(state): State<AppState>,
    payload: std::result::Result<Json<RegisterClientRequest>, JsonRejection>,
) -> Result<Json<RegisterClientResponse>> {
    let Json(req) = payload?;
    let (name, application) = req.into_application()?;

    match state.engine.evaluate_eligibility(&application) {
        EligibilityDecision::Eligible(card_type) => {
            let client = state.registry.register(NewClient {
                name,
                country: application.country,
                monthly_income: application.monthly_income,
                vise_club: application.vise_club,
                card_type,
            });

            metrics::record_registration(card_type.as_str(), "approved");
            info!(
                client_id = client.client_id,
                card_type = %card_type,
                country = %client.country,
                "客户登记成功"
            );

            Ok(Json(RegisterClientResponse::from(&client)))
        }
        EligibilityDecision::Rejected(reason) => {
            metrics::record_registration(card_type_label(&application.card_type), reason.code());
            warn!(
                card_type = %application.card_type,
                country = %application.country,
                reason = reason.code(),
                "客户不满足开卡条件"
            );

            Err(ApiError::Eligibility(reason))
        }
    }
}

/// 指标标签只取已知卡型，任意输入不会产生新的时间序列
fn card_type_label(raw: &str) -> &'static str {
    raw.parse::<CardTier>()
        .map(|tier| tier.as_str())
        .unwrap_or("invalid")
}

/// 列出所有已登记客户（按 ID 升序）
///
/// GET /clients
pub async fn list_clients(State(state): State<AppState>) -> Json<Vec<Client>> {
    Json(state.registry.list())
}
