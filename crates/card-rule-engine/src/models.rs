//! 规则引擎领域模型

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, Utc, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::countries::Country;
use crate::error::{Result, RuleError};

/// 卡片等级
///
/// 封闭集合，输入时大小写不敏感，内部统一使用小写规范形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTier {
    Classic,
    Gold,
    Platinum,
    Black,
    White,
}

impl CardTier {
    pub const ALL: [CardTier; 5] = [
        CardTier::Classic,
        CardTier::Gold,
        CardTier::Platinum,
        CardTier::Black,
        CardTier::White,
    ];

    /// 规范名称（小写）
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
            Self::Black => "black",
            Self::White => "white",
        }
    }
}

impl fmt::Display for CardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardTier {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Self::Classic),
            "gold" => Ok(Self::Gold),
            "platinum" => Ok(Self::Platinum),
            "black" => Ok(Self::Black),
            "white" => Ok(Self::White),
            _ => Err(RuleError::InvalidCardType(s.to_string())),
        }
    }
}

/// 开卡申请
///
/// `card_type` 保留原始输入，由资格评估负责解析，
/// 这样未知卡型会以拒绝原因而不是错误的形式返回。
#[derive(Debug, Clone)]
pub struct ClientApplication {
    pub card_type: String,
    pub monthly_income: Decimal,
    pub vise_club: bool,
    pub country: Country,
}

impl ClientApplication {
    pub fn new(
        card_type: impl Into<String>,
        monthly_income: Decimal,
        vise_club: bool,
        country: Country,
    ) -> Self {
        Self {
            card_type: card_type.into(),
            monthly_income,
            vise_club,
            country,
        }
    }
}

/// 消费评估上下文
#[derive(Debug, Clone)]
pub struct PurchaseContext {
    pub tier: CardTier,
    pub client_country: Country,
    pub amount: Decimal,
    pub purchase_country: Country,
    pub purchased_at: DateTime<Utc>,
}

impl PurchaseContext {
    /// 消费日期对应的 UTC 星期
    pub fn weekday(&self) -> Weekday {
        self.purchased_at.weekday()
    }

    /// 消费国与客户居住国不同即视为境外消费
    pub fn is_abroad(&self) -> bool {
        self.purchase_country != self.client_country
    }
}

/// 解析消费日期
///
/// 支持 RFC 3339、无时区的日期时间（按 UTC 处理）以及纯日期（UTC 零点）
pub fn parse_purchase_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| RuleError::InvalidPurchaseDate(raw.to_string()))
}

/// 将 JSON 数值转换为十进制金额，拒绝负数和非有限值
///
/// 经由 f64 的最短往返十进制表示解析，保留全部有效数字，
/// 使 `100.00000000000001` 这类输入仍严格大于 100。超出 `Decimal` 范围的数值被拒绝。
pub fn to_decimal(value: f64, field: &'static str) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(RuleError::InvalidNumber {
            field,
            reason: "debe ser un número finito".to_string(),
        });
    }
    if value < 0.0 {
        return Err(RuleError::InvalidNumber {
            field,
            reason: "no puede ser negativo".to_string(),
        });
    }

    Decimal::from_str(&value.to_string()).map_err(|_| RuleError::InvalidNumber {
        field,
        reason: "fuera de rango".to_string(),
    })
}
