//! 国家名称规范化与受限国家集合
//!
//! 所有国家比较都基于规范形式：NFD 分解后去掉组合音标、转小写、折叠空白。
//! 因此 "Irán"、"iran"、"IRÁN" 被视为同一个国家。

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::error::{Result, RuleError};

/// 默认受限国家（"Irán" 与 "Iran" 规范化后合并为一项）
pub const DEFAULT_RESTRICTED_COUNTRIES: [&str; 5] = ["China", "Vietnam", "India", "Irán", "Iran"];

/// 计算国家名称的规范形式
pub fn normalize_country(raw: &str) -> String {
    let stripped: String = raw
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// 国家
///
/// 保留用户输入的原始拼写用于展示，比较与哈希只使用规范形式。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Country {
    name: String,
    key: String,
}

impl Country {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let key = normalize_country(&name);
        Self { name, key }
    }

    /// 解析并拒绝空白名称
    pub fn parse(name: &str) -> Result<Self> {
        let country = Self::new(name);
        if country.key.is_empty() {
            return Err(RuleError::InvalidCountry(name.to_string()));
        }
        Ok(country)
    }

    /// 原始名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 规范形式
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Country {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Country {}

impl std::hash::Hash for Country {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<String> for Country {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&str> for Country {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<Country> for String {
    fn from(country: Country) -> Self {
        country.name
    }
}

/// 受限国家集合
///
/// 居住在这些国家的客户不能申请 Black/White 卡，
/// Black/White 卡也不能在这些国家消费。
#[derive(Debug, Clone)]
pub struct RestrictedCountries {
    // 按首次出现顺序保留，用于生成拒绝原因中的国家列表
    entries: Vec<Country>,
    keys: HashSet<String>,
}

impl RestrictedCountries {
    /// 从名称列表构建，规范形式相同的名称只保留第一个
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries = Vec::new();
        let mut keys = HashSet::new();

        for name in names {
            let country = Country::new(name.as_ref());
            if country.key().is_empty() {
                continue;
            }
            if keys.insert(country.key().to_string()) {
                entries.push(country);
            }
        }

        Self { entries, keys }
    }

    pub fn contains(&self, country: &Country) -> bool {
        self.keys.contains(country.key())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 以逗号分隔的展示名称
    pub fn display_list(&self) -> String {
        self.entries
            .iter()
            .map(Country::name)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for RestrictedCountries {
    fn default() -> Self {
        Self::new(DEFAULT_RESTRICTED_COUNTRIES)
    }
}
