//! 折扣计算
//!
//! 每个等级根据消费星期、金额和是否境外产生零个或多个候选折扣，
//! 最终取最大值（权益不叠加）。金额使用十进制运算并四舍五入到两位小数。

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

use crate::models::PurchaseContext;

/// 折扣百分比
///
/// 只能由等级目录产生，取值范围固定为 {0, 5, 15, 20, 25, 30, 35}
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct DiscountPercent(u8);

impl DiscountPercent {
    pub const NONE: DiscountPercent = DiscountPercent(0);

    /// 所有可能的折扣值
    pub const ALLOWED: [u8; 7] = [0, 5, 15, 20, 25, 30, 35];

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// 折扣比例（0 到 1 之间的精确小数）
    pub fn rate(self) -> Decimal {
        Decimal::new(i64::from(self.0), 2)
    }

    /// 面向用户的权益描述
    pub fn benefit(self) -> String {
        if self.is_zero() {
            "Sin beneficio aplicable".to_string()
        } else {
            format!("Descuento {}%", self.0)
        }
    }
}

impl fmt::Display for DiscountPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// 收集所有适用的候选折扣
pub fn candidates(ctx: &PurchaseContext) -> Vec<u8> {
    let rules = ctx.tier.rules();
    let weekday = ctx.weekday();

    let mut found: Vec<u8> = rules
        .windows
        .iter()
        .filter(|window| window.days.contains(&weekday))
        .filter(|window| ctx.amount > Decimal::from(window.amount_above))
        .map(|window| window.percent)
        .collect();

    if let Some(bonus) = rules.abroad_bonus.filter(|_| ctx.is_abroad()) {
        found.push(bonus);
    }

    found
}

/// 计算折扣百分比：候选值取最大，无候选为 0
pub fn compute(ctx: &PurchaseContext) -> DiscountPercent {
    candidates(ctx)
        .into_iter()
        .max()
        .map(DiscountPercent)
        .unwrap_or(DiscountPercent::NONE)
}

/// 按货币习惯四舍五入到两位小数（非负金额下等价于 half-up）
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// 消费报价
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseQuote {
    pub percent: DiscountPercent,
    #[serde(with = "rust_decimal::serde::float")]
    pub original_amount: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub discount_applied: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub final_amount: Decimal,
}

impl PurchaseQuote {
    /// 比例不超过 1，折扣额不会超过原金额，任意合法金额都不会溢出
    pub fn new(amount: Decimal, percent: DiscountPercent) -> Self {
        let discount_applied = round_currency(amount * percent.rate());
        let final_amount = round_currency(amount - discount_applied);

        Self {
            percent,
            original_amount: amount,
            discount_applied,
            final_amount,
        }
    }

    pub fn benefit(&self) -> String {
        self.percent.benefit()
    }
}
