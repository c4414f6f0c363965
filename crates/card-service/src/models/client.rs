//! 登记客户模型

use rule_engine::{CardTier, Country};
use rust_decimal::Decimal;
use serde::Serialize;

/// 已登记的持卡客户
///
/// 登记成功后创建，之后不再修改
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub client_id: u64,
    pub name: String,
    pub country: Country,
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_income: Decimal,
    pub vise_club: bool,
    pub card_type: CardTier,
}

/// 待登记客户（尚未分配 ID）
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub country: Country,
    pub monthly_income: Decimal,
    pub vise_club: bool,
    pub card_type: CardTier,
}

impl NewClient {
    pub(crate) fn into_client(self, client_id: u64) -> Client {
        Client {
            client_id,
            name: self.name,
            country: self.country,
            monthly_income: self.monthly_income,
            vise_club: self.vise_club,
            card_type: self.card_type,
        }
    }
}
