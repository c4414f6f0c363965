//! 消费授权检查
//!
//! 在折扣计算之前执行：Black/White 卡不能在受限国家消费，
//! 与客户本人的居住国无关。

use thiserror::Error;

use crate::countries::{Country, RestrictedCountries};
use crate::models::CardTier;

/// 消费被拒绝
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("El cliente con tarjeta {tier} no puede realizar compras desde {purchase_country}")]
pub struct PurchaseDenied {
    pub tier: CardTier,
    pub purchase_country: Country,
}

/// 检查消费来源国是否允许
pub fn authorize(
    tier: CardTier,
    purchase_country: &Country,
    restricted: &RestrictedCountries,
) -> Result<(), PurchaseDenied> {
    if tier.rules().purchase_origin_restricted && restricted.contains(purchase_country) {
        return Err(PurchaseDenied {
            tier,
            purchase_country: purchase_country.clone(),
        });
    }
    Ok(())
}
