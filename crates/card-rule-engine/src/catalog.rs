//! 卡片等级目录
//!
//! 每个等级一行规则参数，资格评估和折扣计算共用同一张表，
//! 避免两条代码路径各自按卡型字符串分支。

use chrono::Weekday;
use serde::Serialize;

use crate::models::CardTier;

const MON_TO_WED: &[Weekday] = &[Weekday::Mon, Weekday::Tue, Weekday::Wed];
const MON_TO_FRI: &[Weekday] = &[
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
];
const SATURDAY: &[Weekday] = &[Weekday::Sat];
const WEEKEND: &[Weekday] = &[Weekday::Sat, Weekday::Sun];

/// 境外消费固定加成
const ABROAD_BONUS: u8 = 5;

/// 折扣档位
///
/// 消费日期落在 `days` 内且金额严格大于 `amount_above` 时，贡献 `percent` 候选折扣
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiscountWindow {
    pub days: &'static [Weekday],
    pub amount_above: u32,
    pub percent: u8,
}

impl DiscountWindow {
    const fn new(days: &'static [Weekday], amount_above: u32, percent: u8) -> Self {
        Self {
            days,
            amount_above,
            percent,
        }
    }
}

/// 收入不足时拒绝原因的措辞
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeWording {
    /// `Ingreso mínimo de {min} USD requerido para {label}`
    Required,
    /// `El cliente no cumple con el ingreso mínimo de {min} USD para {label}`
    NotMet,
}

/// 等级规则参数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierRules {
    pub tier: CardTier,
    /// 拒绝原因中使用的等级名称
    pub label: &'static str,
    /// 最低月收入（USD），0 表示无要求
    pub min_income: u32,
    pub income_wording: IncomeWording,
    pub club_required: bool,
    /// 居住在受限国家的客户不可申请
    pub residency_restricted: bool,
    /// 不可在受限国家消费
    pub purchase_origin_restricted: bool,
    pub windows: &'static [DiscountWindow],
    pub abroad_bonus: Option<u8>,
}

static CLASSIC: TierRules = TierRules {
    tier: CardTier::Classic,
    label: "Classic",
    min_income: 0,
    income_wording: IncomeWording::Required,
    club_required: false,
    residency_restricted: false,
    purchase_origin_restricted: false,
    windows: &[],
    abroad_bonus: None,
};

static GOLD: TierRules = TierRules {
    tier: CardTier::Gold,
    label: "Gold",
    min_income: 500,
    income_wording: IncomeWording::NotMet,
    club_required: false,
    residency_restricted: false,
    purchase_origin_restricted: false,
    windows: &[DiscountWindow::new(MON_TO_WED, 100, 15)],
    abroad_bonus: None,
};

static PLATINUM: TierRules = TierRules {
    tier: CardTier::Platinum,
    label: "Platinum",
    min_income: 1000,
    income_wording: IncomeWording::Required,
    club_required: true,
    residency_restricted: false,
    purchase_origin_restricted: false,
    windows: &[
        DiscountWindow::new(MON_TO_WED, 100, 20),
        DiscountWindow::new(SATURDAY, 200, 30),
    ],
    abroad_bonus: Some(ABROAD_BONUS),
};

static BLACK: TierRules = TierRules {
    tier: CardTier::Black,
    label: "Black/White",
    min_income: 2000,
    income_wording: IncomeWording::Required,
    club_required: true,
    residency_restricted: true,
    purchase_origin_restricted: true,
    windows: &[
        DiscountWindow::new(MON_TO_WED, 100, 25),
        DiscountWindow::new(SATURDAY, 200, 35),
    ],
    abroad_bonus: Some(ABROAD_BONUS),
};

static WHITE: TierRules = TierRules {
    tier: CardTier::White,
    label: "Black/White",
    min_income: 2000,
    income_wording: IncomeWording::Required,
    club_required: true,
    residency_restricted: true,
    purchase_origin_restricted: true,
    windows: &[
        DiscountWindow::new(MON_TO_FRI, 100, 25),
        DiscountWindow::new(WEEKEND, 200, 35),
    ],
    abroad_bonus: Some(ABROAD_BONUS),
};

impl CardTier {
    /// 查询等级规则
    pub fn rules(self) -> &'static TierRules {
        match self {
            Self::Classic => &CLASSIC,
            Self::Gold => &GOLD,
            Self::Platinum => &PLATINUM,
            Self::Black => &BLACK,
            Self::White => &WHITE,
        }
    }
}
