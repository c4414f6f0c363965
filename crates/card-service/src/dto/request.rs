//! 请求体定义
//!
//! 字段统一声明为 Option，由 validator 校验必填与取值范围。
//! 缺失、null 和空白字符串都视为缺少字段，返回固定的提示信息；
//! 类型错误由 JSON 解析阶段拒绝。

use chrono::{DateTime, Utc};
use rule_engine::{ClientApplication, Country, parse_purchase_date, to_decimal};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use validator::Validate;

use crate::error::{ApiError, MISSING_CLIENT_FIELDS, MISSING_PURCHASE_FIELDS};

/// 开卡登记请求
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterClientRequest {
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required)]
    pub country: Option<String>,
    #[validate(required, range(min = 0.0, message = "monthlyIncome no puede ser negativo"))]
    pub monthly_income: Option<f64>,
    #[validate(required)]
    pub vise_club: Option<bool>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required)]
    pub card_type: Option<String>,
}

impl RegisterClientRequest {
    /// 校验必填字段并转换为资格评估输入
    ///
    /// 返回客户姓名和开卡申请
    pub fn into_application(self) -> Result<(String, ClientApplication), ApiError> {
        self.validate()
            .map_err(|errors| ApiError::from_validation(&errors, MISSING_CLIENT_FIELDS))?;

        // 校验通过后各字段必然存在
        let missing = || ApiError::Validation(MISSING_CLIENT_FIELDS.to_string());
        let name = self.name.ok_or_else(missing)?;
        let country = self.country.ok_or_else(missing)?;
        let monthly_income = self.monthly_income.ok_or_else(missing)?;
        let vise_club = self.vise_club.ok_or_else(missing)?;
        let card_type = self.card_type.ok_or_else(missing)?;

        let application = ClientApplication::new(
            card_type,
            to_decimal(monthly_income, "monthlyIncome")?,
            vise_club,
            Country::parse(&country)?,
        );

        Ok((name, application))
    }
}

/// 消费评估请求
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseRequest {
    #[validate(required)]
    pub client_id: Option<u64>,
    #[validate(required, range(min = 0.0, message = "amount no puede ser negativo"))]
    pub amount: Option<f64>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required)]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required)]
    pub purchase_date: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(required)]
    pub purchase_country: Option<String>,
}

/// 通过校验的消费请求
#[derive(Debug, Clone)]
pub struct ValidatedPurchase {
    pub client_id: u64,
    pub amount: Decimal,
    pub currency: String,
    pub purchased_at: DateTime<Utc>,
    pub purchase_country: Country,
}

impl PurchaseRequest {
    /// 校验必填字段、金额和日期
    pub fn into_purchase(self) -> Result<ValidatedPurchase, ApiError> {
        self.validate()
            .map_err(|errors| ApiError::from_validation(&errors, MISSING_PURCHASE_FIELDS))?;

        let missing = || ApiError::Validation(MISSING_PURCHASE_FIELDS.to_string());
        let client_id = self.client_id.ok_or_else(missing)?;
        let amount = self.amount.ok_or_else(missing)?;
        let currency = self.currency.ok_or_else(missing)?;
        let purchase_date = self.purchase_date.ok_or_else(missing)?;
        let purchase_country = self.purchase_country.ok_or_else(missing)?;

        Ok(ValidatedPurchase {
            client_id,
            amount: to_decimal(amount, "amount")?,
            currency,
            purchased_at: parse_purchase_date(&purchase_date)?,
            purchase_country: Country::parse(&purchase_country)?,
        })
    }
}

/// 空白字符串按缺失处理
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}
