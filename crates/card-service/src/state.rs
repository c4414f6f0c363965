//! 应用状态定义
//!
//! 包含 Axum 路由共享的应用状态

use std::sync::Arc;

use rule_engine::{CardRuleEngine, RestrictedCountries};

use crate::store::ClientRegistry;

/// Axum 应用共享状态
///
/// 登记表内部使用 Arc，规则引擎不可变，克隆成本很低
#[derive(Clone, Default)]
pub struct AppState {
    /// 客户登记表
    pub registry: ClientRegistry,
    /// 规则引擎
    pub engine: Arc<CardRuleEngine>,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(engine: CardRuleEngine) -> Self {
        Self {
            registry: ClientRegistry::new(),
            engine: Arc::new(engine),
        }
    }

    /// 使用给定受限国家列表创建
    pub fn with_restricted_countries<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(CardRuleEngine::new(RestrictedCountries::new(names)))
    }
}
