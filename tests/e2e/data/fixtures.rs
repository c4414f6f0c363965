//! 测试数据 Fixtures
//!
//! 预定义的请求体，日期选用 2024 年 1 月已知星期。

use serde_json::{Value, json};

/// 2024-01-15 周一
pub const MONDAY: &str = "2024-01-15T10:00:00Z";
/// 2024-01-18 周四
pub const THURSDAY: &str = "2024-01-18";
/// 2024-01-20 周六
pub const SATURDAY: &str = "2024-01-20T15:30:00Z";
/// 2024-01-21 周日
pub const SUNDAY: &str = "2024-01-21";

/// 测试客户
pub struct TestClients;

impl TestClients {
    pub fn application(
        name: &str,
        country: &str,
        income: f64,
        vise_club: bool,
        card_type: &str,
    ) -> Value {
        json!({
            "name": name,
            "country": country,
            "monthlyIncome": income,
            "viseClub": vise_club,
            "cardType": card_type,
        })
    }

    pub fn classic() -> Value {
        Self::application("Carlos", "Peru", 300.0, false, "classic")
    }

    pub fn gold() -> Value {
        Self::application("Gabriela", "Peru", 800.0, false, "gold")
    }

    pub fn platinum() -> Value {
        Self::application("Pedro", "Peru", 1500.0, true, "platinum")
    }

    pub fn black() -> Value {
        Self::application("Beatriz", "Perú", 2500.0, true, "Black")
    }

    pub fn white() -> Value {
        Self::application("Walter", "Peru", 3000.0, true, "white")
    }
}

/// 测试消费
pub struct TestPurchases;

impl TestPurchases {
    pub fn purchase(client_id: &Value, amount: f64, date: &str, country: &str) -> Value {
        json!({
            "clientId": client_id,
            "amount": amount,
            "currency": "USD",
            "purchaseDate": date,
            "purchaseCountry": country,
        })
    }
}
