//! 客户登记测试套件

use crate::data::*;
use crate::helpers::*;
use crate::setup::TestEnvironment;

#[tokio::test]
async fn test_register_each_tier() {
    let env = TestEnvironment::setup().await.unwrap();

    for (request, card_type) in [
        (TestClients::classic(), "classic"),
        (TestClients::gold(), "gold"),
        (TestClients::platinum(), "platinum"),
        (TestClients::black(), "black"),
        (TestClients::white(), "white"),
    ] {
        let resp = env.api.register_client(&request).await.unwrap();
        assert_eq!(resp.status, 200, "{card_type}: {:?}", resp.body);
        assert_eq!(resp.body["status"], "Registered");
        assert_eq!(resp.body["cardType"], card_type);
        assert_eq!(
            resp.body["message"],
            format!("Cliente apto para tarjeta {card_type}")
        );
    }

    if env.is_embedded() {
        let clients = env.api.list_clients().await.unwrap();
        let ids: Vec<u64> = clients
            .body
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["clientId"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_income_thresholds() {
    let env = TestEnvironment::setup().await.unwrap();

    let cases = [
        ("gold", 499.99, "El cliente no cumple con el ingreso mínimo de 500 USD para Gold"),
        ("platinum", 999.0, "Ingreso mínimo de 1000 USD requerido para Platinum"),
        ("black", 500.0, "Ingreso mínimo de 2000 USD requerido para Black/White"),
    ];

    for (card_type, income, expected) in cases {
        let request = TestClients::application("Ana", "Peru", income, true, card_type);
        let resp = env.api.register_client(&request).await.unwrap();
        assert_eq!(assert_rejected(&resp, 400), expected);
    }

    // 恰好等于门槛可以通过
    let request = TestClients::application("Ana", "Peru", 500.0, false, "gold");
    let resp = env.api.register_client(&request).await.unwrap();
    assert_eq!(resp.status, 200);

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_club_and_residency_rules() {
    let env = TestEnvironment::setup().await.unwrap();

    let request = TestClients::application("Ana", "Peru", 1500.0, false, "platinum");
    let resp = env.api.register_client(&request).await.unwrap();
    assert_eq!(
        assert_rejected(&resp, 400),
        "El cliente no cumple con la suscripción VISE CLUB requerida para Platinum"
    );

    for country in ["iran", "Iran", "IRÁN", "  china "] {
        let request = TestClients::application("Ana", country, 5000.0, true, "white");
        let resp = env.api.register_client(&request).await.unwrap();
        assert_eq!(
            assert_rejected(&resp, 400),
            "Clientes residentes en China, Vietnam, India, Irán no pueden solicitar tarjeta white",
            "{country}"
        );
    }

    // Platinum 不受居住国限制
    let request = TestClients::application("Ana", "China", 1500.0, true, "platinum");
    let resp = env.api.register_client(&request).await.unwrap();
    assert_eq!(resp.status, 200);

    env.teardown().await.unwrap();
}

#[tokio::test]
async fn test_registration_validation() {
    let env = TestEnvironment::setup().await.unwrap();

    let resp = env
        .api
        .register_client(&serde_json::json!({ "name": "", "country": "Peru" }))
        .await
        .unwrap();
    assert_eq!(
        assert_rejected(&resp, 400),
        "Faltan campos requeridos: name, country, monthlyIncome, viseClub, cardType"
    );

    let request = TestClients::application("Ana", "Peru", 1000.0, true, "diamond");
    let resp = env.api.register_client(&request).await.unwrap();
    assert_eq!(assert_rejected(&resp, 400), "Tipo de tarjeta inválido");

    let request = TestClients::application("Ana", "Peru", -1.0, true, "classic");
    let resp = env.api.register_client(&request).await.unwrap();
    assert_rejected(&resp, 400);

    let resp = env.api.post_raw("/client", "{\"name\":").await.unwrap();
    assert_rejected(&resp, 400);
    assert_eq!(resp.request_id.as_deref(), Some("e2e-raw"));

    env.teardown().await.unwrap();
}
