//! 消费评估 API 处理器

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use rule_engine::PurchaseContext;
use tracing::{info, warn};
use vise_shared::observability::metrics;

use crate::{
    dto::{PurchaseRequest, PurchaseResponse},
    error::{ApiError, Result},
    state::AppState,
};

/// 评估一次消费
///
/// POST /purchase
///
/// 顺序：字段校验 → 客户查找 → 消费来源国授权 → 折扣计算。消费不会被保存。
pub async fn evaluate_purchase(
    State(state): State<AppState>,
    payload: std::result::Result<Json<PurchaseRequest>, JsonRejection>,
) -> Result<Json<PurchaseResponse>> {
    let Json(req) = payload?;
    let purchase = req.into_purchase()?;

    let client = state
        .registry
        .get(purchase.client_id)
        .ok_or(ApiError::ClientNotFound(purchase.client_id))?;

    let ctx = PurchaseContext {
        tier: client.card_type,
        client_country: client.country,
        amount: purchase.amount,
        purchase_country: purchase.purchase_country,
        purchased_at: purchase.purchased_at,
    };

    let quote = match state.engine.quote_purchase(&ctx) {
        Ok(quote) => quote,
        Err(denied) => {
            metrics::record_purchase_evaluation(ctx.tier.as_str(), "denied", None);
            warn!(
                client_id = client.client_id,
                card_type = %ctx.tier,
                purchase_country = %ctx.purchase_country,
                "消费来源国受限"
            );
            return Err(denied.into());
        }
    };

    metrics::record_purchase_evaluation(ctx.tier.as_str(), "approved", Some(quote.percent.value()));
    info!(
        client_id = client.client_id,
        card_type = %ctx.tier,
        currency = %purchase.currency,
        percent = quote.percent.value(),
        final_amount = %quote.final_amount,
        "消费评估完成"
    );

    Ok(Json(PurchaseResponse::approved(client.client_id, &quote)))
}
