//! Testes de integração da API: autenticação, papéis e cadastros

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;

use common::*;

#[tokio::test]
async fn test_liveness() {
    let app = test_app();
    let (status, body) = send(&app, Method::GET, "/test", None, None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("ok"));
}

#[tokio::test]
async fn test_protected_routes_require_token() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/api/delivery", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/api/auth/me", Some("token-falso"), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_and_login_flow() {
    let app = test_app();
    let token =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;

    // /me devolve o admin recém-criado
    let (status, body) = send(&app, Method::GET, "/api/auth/me", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["role"], json!("admin"));
    assert_eq!(body["email"], json!("admin@alfa.com.br"));

    // Login com a senha certa
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "admin@alfa.com.br", "password": "senha-forte-123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], json!(true));

    // Senha errada nega sem vazar qual campo falhou
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "admin@alfa.com.br", "password": "senha-errada" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_duplicate_cnpj_is_rejected() {
    let app = test_app();
    register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "a@alfa.com.br").await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "company_name": "Outra",
            "company_cnpj": "12.345.678/0001-90",
            "admin_name": "Admin",
            "admin_email": "b@outra.com.br",
            "admin_password": "senha-forte-123",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_pending_user_cannot_login_before_activation() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/user",
        Some(&admin),
        Some(json!({
            "name": "Motorista Bruno",
            "email": "bruno@alfa.com.br",
            "role": "motorista",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], json!("pending"));
    let activation_token = body["data"]["activation_token"].as_str().unwrap().to_string();

    // Sem ativação não há login (não existe sequer senha)
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "bruno@alfa.com.br", "password": "qualquer-senha" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Ativando, o login passa a funcionar
    let (status, _) = send(
        &app,
        Method::POST,
        "/api/auth/activate",
        None,
        Some(json!({ "token": activation_token, "password": "senha-nova-123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": "bruno@alfa.com.br", "password": "senha-nova-123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["role"], json!("motorista"));
}

#[tokio::test]
async fn test_admin_only_routes_reject_other_roles() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    let vendedor =
        create_and_activate_user(&app, &admin, "Vendedor Alpha", "v@alfa.com.br", "vendedor")
            .await;
    let motorista =
        create_and_activate_user(&app, &admin, "Motorista Bruno", "m@alfa.com.br", "motorista")
            .await;

    for token in [&vendedor, &motorista] {
        let (status, _) = send(&app, Method::GET, "/api/user", Some(token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, Method::GET, "/api/settings", Some(token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send(&app, Method::GET, "/api/finance/movement", Some(token), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    // Motorista tampouco acessa o módulo de relatórios financeiros
    let (status, _) = send(
        &app,
        Method::GET,
        "/api/report/financial",
        Some(&motorista),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_settings_reject_negative_rates() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;

    // Sem configuração ainda: GET devolve 404 (relatórios degradam,
    // mas a tela de configuração mostra o aviso)
    let (status, _) = send(&app, Method::GET, "/api/settings", Some(&admin), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/settings",
        Some(&admin),
        Some(json!({
            "min_freight_fee": -80,
            "freight_rate_m3": 10,
            "repasse_rate_m3": 150,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    configure_rates(&app, &admin, 80, 10, 150).await;
    let (status, body) = send(&app, Method::GET, "/api/settings", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["min_freight_fee"]), 80.into());
}

#[tokio::test]
async fn test_quote_review_transitions() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 10, 420).await;

    // Total derivado na criação
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/quote/{}", quote_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(dec(&body["total_price"]), 4200.into());
    assert_eq!(body["status"], json!("pendente"));

    // Aprovar uma vez funciona; a segunda é conflito
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/quote/{}/approve", quote_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/quote/{}/approve", quote_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Recusar depois de aprovado também é conflito
    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/quote/{}/reject", quote_id),
        Some(&admin),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_delivery_requires_approved_quote() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 10, 420).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/delivery",
        Some(&admin),
        Some(json!({
            "quote_id": quote_id,
            "scheduled_date": "2026-09-01T08:00:00Z",
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_tenant_isolation() {
    let app = test_app();
    let admin_a =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    let admin_b =
        register_company(&app, "Concreteira Beta", "98.765.432/0001-10", "admin@beta.com.br")
            .await;

    let client_id = create_client(&app, &admin_a, "Construtora Luxor", "11.222.333/0001-44").await;

    // A empresa B não enxerga o cliente da empresa A
    let (status, _) = send(
        &app,
        Method::GET,
        &format!("/api/client/{}", client_id),
        Some(&admin_b),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/api/client", Some(&admin_b), None).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}
