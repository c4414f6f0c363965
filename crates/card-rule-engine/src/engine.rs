//! 规则引擎门面
//!
//! 持有受限国家集合，对外提供资格评估、消费授权、折扣计算和报价四个入口。
//! 引擎不可变，可通过 `Arc` 在请求之间共享。

use tracing::debug;

use crate::authorization::{self, PurchaseDenied};
use crate::countries::{Country, RestrictedCountries};
use crate::discount::{self, DiscountPercent, PurchaseQuote};
use crate::eligibility::{self, EligibilityDecision};
use crate::models::{CardTier, ClientApplication, PurchaseContext};

#[derive(Debug, Clone, Default)]
pub struct CardRuleEngine {
    restricted: RestrictedCountries,
}

impl CardRuleEngine {
    pub fn new(restricted: RestrictedCountries) -> Self {
        Self { restricted }
    }

    pub fn restricted_countries(&self) -> &RestrictedCountries {
        &self.restricted
    }

    /// 评估开卡资格
    pub fn evaluate_eligibility(&self, application: &ClientApplication) -> EligibilityDecision {
        let decision = eligibility::evaluate(application, &self.restricted);
        debug!(
            card_type = %application.card_type,
            country = %application.country,
            eligible = decision.is_eligible(),
            reason = ?decision.reason().map(|r| r.code()),
            "资格评估完成"
        );
        decision
    }

    /// 消费授权检查
    pub fn authorize_purchase(
        &self,
        tier: CardTier,
        purchase_country: &Country,
    ) -> Result<(), PurchaseDenied> {
        authorization::authorize(tier, purchase_country, &self.restricted)
    }

    /// 计算折扣百分比
    pub fn compute_discount(&self, ctx: &PurchaseContext) -> DiscountPercent {
        let percent = discount::compute(ctx);
        debug!(
            tier = %ctx.tier,
            weekday = %ctx.weekday(),
            abroad = ctx.is_abroad(),
            amount = %ctx.amount,
            percent = percent.value(),
            "折扣计算完成"
        );
        percent
    }

    /// 授权检查通过后计算完整报价
    pub fn quote_purchase(&self, ctx: &PurchaseContext) -> Result<PurchaseQuote, PurchaseDenied> {
        self.authorize_purchase(ctx.tier, &ctx.purchase_country)?;
        let percent = self.compute_discount(ctx);
        Ok(PurchaseQuote::new(ctx.amount, percent))
    }
}
