//! 开卡资格评估
//!
//! 检查顺序固定：卡型 → 最低收入 → 俱乐部会员 → 居住国。
//! 第一个不满足的条件决定拒绝原因，后续检查不再执行。

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::catalog::IncomeWording;
use crate::countries::RestrictedCountries;
use crate::models::{CardTier, ClientApplication};

/// 资格评估结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EligibilityDecision {
    Eligible(CardTier),
    Rejected(RejectionReason),
}

impl EligibilityDecision {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible(_))
    }

    pub fn reason(&self) -> Option<&RejectionReason> {
        match self {
            Self::Eligible(_) => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// 拒绝原因
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RejectionReason {
    InvalidCardType,
    InsufficientIncome {
        label: &'static str,
        minimum: u32,
        wording: IncomeWording,
    },
    ClubMembershipRequired {
        label: &'static str,
    },
    RestrictedResidence {
        tier: CardTier,
        countries: String,
    },
}

impl RejectionReason {
    /// 指标标签用的短代码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidCardType => "invalid_card_type",
            Self::InsufficientIncome { .. } => "insufficient_income",
            Self::ClubMembershipRequired { .. } => "club_membership_required",
            Self::RestrictedResidence { .. } => "restricted_residence",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCardType => f.write_str("Tipo de tarjeta inválido"),
            Self::InsufficientIncome {
                label,
                minimum,
                wording: IncomeWording::Required,
            } => write!(f, "Ingreso mínimo de {minimum} USD requerido para {label}"),
            Self::InsufficientIncome {
                label,
                minimum,
                wording: IncomeWording::NotMet,
            } => write!(
                f,
                "El cliente no cumple con el ingreso mínimo de {minimum} USD para {label}"
            ),
            Self::ClubMembershipRequired { label } => write!(
                f,
                "El cliente no cumple con la suscripción VISE CLUB requerida para {label}"
            ),
            Self::RestrictedResidence { tier, countries } => write!(
                f,
                "Clientes residentes en {countries} no pueden solicitar tarjeta {tier}"
            ),
        }
    }
}

/// 评估开卡资格
pub fn evaluate(
    application: &ClientApplication,
    restricted: &RestrictedCountries,
) -> EligibilityDecision {
    let Ok(tier) = application.card_type.parse::<CardTier>() else {
        return EligibilityDecision::Rejected(RejectionReason::InvalidCardType);
    };
    let rules = tier.rules();

    if application.monthly_income < Decimal::from(rules.min_income) {
        return EligibilityDecision::Rejected(RejectionReason::InsufficientIncome {
            label: rules.label,
            minimum: rules.min_income,
            wording: rules.income_wording,
        });
    }

    if rules.club_required && !application.vise_club {
        return EligibilityDecision::Rejected(RejectionReason::ClubMembershipRequired {
            label: rules.label,
        });
    }

    if rules.residency_restricted && restricted.contains(&application.country) {
        return EligibilityDecision::Rejected(RejectionReason::RestrictedResidence {
            tier,
            countries: restricted.display_list(),
        });
    }

    EligibilityDecision::Eligible(tier)
}
