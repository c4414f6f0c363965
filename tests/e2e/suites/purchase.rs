//! 消费评估测试套件

use serde_json::Value;

use crate::data::*;
use crate::helpers::*;
use crate::setup::TestEnvironment;

/// 登记客户并返回 clientId
async fn register(env: &TestEnvironment, request: Value) -> Value {
    let resp = env.api.register_client(&request).await.unwrap();
    assert_eq!(resp.status, 200, "登记失败: {:?}", resp.body);
    resp.body["clientId"].clone()
}

#[tokio::test]
async fn test_white_weekend_domestic() {
    let env = TestEnvironment::setup().await.unwrap();
    let id = register(&env, TestClients::white()).await;

    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&id, 250.0, SATURDAY, "PERU"))
        .await
        .unwrap();
    assert_approved(&resp, 87.5, 162.5, "Descuento 35%");
    assert_eq!(resp.body["purchase"]["clientId"], id);
    assert_eq!(resp.body["purchase"]["originalAmount"].as_f64(), Some(250.0));

    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&id, 300.0, SUNDAY, "Peru"))
        .await
        .unwrap();
    assert_approved(&resp, 105.0, 195.0, "Descuento 35%");

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_platinum_max_not_sum() {
    let env = TestEnvironment::setup().await.unwrap();
    let id = register(&env, TestClients::platinum()).await;

    // 周一满 100 得 20%，境外 5%，取最大值
    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&id, 150.0, MONDAY, "Chile"))
        .await
        .unwrap();
    assert_approved(&resp, 30.0, 120.0, "Descuento 20%");

    // 周四只有境外加成
    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&id, 80.0, THURSDAY, "Chile"))
        .await
        .unwrap();
    assert_approved(&resp, 4.0, 76.0, "Descuento 5%");

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_rounding_half_up() {
    let env = TestEnvironment::setup().await.unwrap();
    let id = register(&env, TestClients::black()).await;

    // 100.10 * 25% = 25.025
    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&id, 100.10, MONDAY, "Peru"))
        .await
        .unwrap();
    assert_approved(&resp, 25.03, 75.07, "Descuento 25%");

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_no_benefit() {
    let env = TestEnvironment::setup().await.unwrap();
    let classic = register(&env, TestClients::classic()).await;
    let gold = register(&env, TestClients::gold()).await;

    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&classic, 999.0, MONDAY, "Chile"))
        .await
        .unwrap();
    assert_approved(&resp, 0.0, 999.0, "Sin beneficio aplicable");

    // 金额必须严格大于 100
    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&gold, 100.0, MONDAY, "Peru"))
        .await
        .unwrap();
    assert_approved(&resp, 0.0, 100.0, "Sin beneficio aplicable");

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_restricted_purchase_country() {
    let env = TestEnvironment::setup().await.unwrap();
    let black = register(&env, TestClients::black()).await;
    let platinum = register(&env, TestClients::platinum()).await;

    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&black, 500.0, SATURDAY, "India"))
        .await
        .unwrap();
    assert_eq!(
        assert_rejected(&resp, 403),
        "El cliente con tarjeta black no puede realizar compras desde India"
    );

    // Platinum 在受限国家消费不受影响，且属于境外消费
    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&platinum, 50.0, THURSDAY, "India"))
        .await
        .unwrap();
    assert_approved(&resp, 2.5, 47.5, "Descuento 5%");

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_purchase_validation() {
    let env = TestEnvironment::setup().await.unwrap();
    let id = register(&env, TestClients::gold()).await;

    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&Value::from(9_999), 10.0, MONDAY, "Peru"))
        .await
        .unwrap();
    assert_eq!(assert_rejected(&resp, 404), "Cliente no registrado");

    let resp = env
        .api
        .evaluate_purchase(&serde_json::json!({ "clientId": id, "amount": 10 }))
        .await
        .unwrap();
    assert_eq!(
        assert_rejected(&resp, 400),
        "Faltan campos requeridos: clientId, amount, currency, purchaseDate, purchaseCountry"
    );

    let resp = env
        .api
        .evaluate_purchase(&TestPurchases::purchase(&id, 10.0, "not-a-date", "Peru"))
        .await
        .unwrap();
    assert_rejected(&resp, 400);

    env.teardown().await.unwrap();
}
