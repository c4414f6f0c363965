//! 卡片规则引擎
//!
//! 提供 VISE 卡产品的确定性规则评估能力：
//! - 卡片等级目录（收入门槛、俱乐部要求、折扣档位）
//! - 国家名称规范化与受限国家集合
//! - 开卡资格评估（短路求值，只返回第一个失败原因）
//! - 消费授权检查与折扣计算（多个候选折扣取最大值）
//!
//! 引擎本身无副作用，不持有任何可变状态。

pub mod authorization;
pub mod catalog;
pub mod countries;
pub mod discount;
pub mod eligibility;
pub mod engine;
pub mod error;
pub mod models;

pub use authorization::PurchaseDenied;
pub use catalog::{DiscountWindow, IncomeWording, TierRules};
pub use countries::{Country, RestrictedCountries, normalize_country};
pub use discount::{DiscountPercent, PurchaseQuote};
pub use eligibility::{EligibilityDecision, RejectionReason};
pub use engine::CardRuleEngine;
pub use error::{Result, RuleError};
pub use models::{CardTier, ClientApplication, PurchaseContext, parse_purchase_date, to_decimal};
