//! 规则引擎错误类型

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuleError {
    #[error("Tipo de tarjeta inválido")]
    InvalidCardType(String),

    #[error("Valor inválido para {field}: {reason}")]
    InvalidNumber { field: &'static str, reason: String },

    #[error("Fecha de compra inválida: {0}")]
    InvalidPurchaseDate(String),

    #[error("País inválido: {0:?}")]
    InvalidCountry(String),
}

pub type Result<T> = std::result::Result<T, RuleError>;
