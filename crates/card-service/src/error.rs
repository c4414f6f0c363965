//! 卡片服务错误类型定义
//!
//! 所有失败都以 `{status: "Rejected", error}` 的形式返回给调用方

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rule_engine::{PurchaseDenied, RejectionReason, RuleError};
use serde_json::json;
use validator::ValidationErrors;

/// 注册请求缺少字段时的固定提示
pub const MISSING_CLIENT_FIELDS: &str =
    "Faltan campos requeridos: name, country, monthlyIncome, viseClub, cardType";

/// 消费请求缺少字段时的固定提示
pub const MISSING_PURCHASE_FIELDS: &str =
    "Faltan campos requeridos: clientId, amount, currency, purchaseDate, purchaseCountry";

/// 卡片服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Eligibility(RejectionReason),

    #[error("Cliente no registrado")]
    ClientNotFound(u64),

    #[error(transparent)]
    PurchaseDenied(#[from] PurchaseDenied),

    #[error("内部错误: {0}")]
    Internal(String),
}

impl ApiError {
    /// 返回对应的 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Eligibility(_) => StatusCode::BAD_REQUEST,
            Self::ClientNotFound(_) => StatusCode::NOT_FOUND,
            Self::PurchaseDenied(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 返回错误码（用于日志和指标）
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Eligibility(_) => "NOT_ELIGIBLE",
            Self::ClientNotFound(_) => "CLIENT_NOT_FOUND",
            Self::PurchaseDenied(_) => "PURCHASE_DENIED",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl ApiError {
    /// 从 validator 错误转换
    ///
    /// 任一字段缺失时返回 `missing` 固定提示，否则带出第一条字段错误信息
    pub fn from_validation(errors: &ValidationErrors, missing: &str) -> Self {
        let field_errors = errors.field_errors();
        let mut all = field_errors.values().flat_map(|errs| errs.iter());

        if all.clone().any(|err| err.code == "required") {
            return Self::Validation(missing.to_string());
        }

        let message = all
            .find_map(|err| err.message.as_ref().map(ToString::to_string))
            .unwrap_or_else(|| errors.to_string());
        Self::Validation(message)
    }
}

impl From<RuleError> for ApiError {
    fn from(err: RuleError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 系统级错误只返回通用提示，详细信息仅记录日志
        let message = match &self {
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "内部错误");
                "Error interno del servidor".to_string()
            }
            other => {
                tracing::debug!(code = other.error_code(), error = %other, "请求被拒绝");
                other.to_string()
            }
        };

        let body = Json(json!({
            "status": "Rejected",
            "error": message,
        }));

        (status, body).into_response()
    }
}

/// 卡片服务 Result 类型别名
pub type Result<T> = std::result::Result<T, ApiError>;
