//! 响应体定义

use rule_engine::{CardTier, PurchaseQuote};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Client;

/// 登记成功响应
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientResponse {
    pub client_id: u64,
    pub name: String,
    pub card_type: CardTier,
    pub status: &'static str,
    pub message: String,
}

impl From<&Client> for RegisterClientResponse {
    fn from(client: &Client) -> Self {
        Self {
            client_id: client.client_id,
            name: client.name.clone(),
            card_type: client.card_type,
            status: "Registered",
            message: format!("Cliente apto para tarjeta {}", client.card_type),
        }
    }
}

/// 消费批准响应
#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub status: &'static str,
    pub purchase: PurchaseSummary,
}

impl PurchaseResponse {
    pub fn approved(client_id: u64, quote: &PurchaseQuote) -> Self {
        Self {
            status: "Approved",
            purchase: PurchaseSummary {
                client_id,
                original_amount: quote.original_amount,
                discount_applied: quote.discount_applied,
                final_amount: quote.final_amount,
                benefit: quote.benefit(),
            },
        }
    }
}

/// 消费明细
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseSummary {
    pub client_id: u64,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_applied: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_amount: Decimal,
    pub benefit: String,
}

/// 就绪检查响应
#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub clients: usize,
}
