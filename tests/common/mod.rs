#![allow(dead_code)]
//! Helpers compartilhados dos testes de integração
//!
//! Os testes exercitam o router real sobre o armazenamento em memória,
//! requisição a requisição via `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use rust_decimal::Decimal;
use serde_json::{json, Value};
use tower::ServiceExt;

use concreteflow::config::environment::EnvironmentConfig;
use concreteflow::routes::create_app_router;
use concreteflow::state::AppState;
use concreteflow::storage::MemoryStore;

/// App de teste com armazenamento vazio
pub fn test_app() -> Router {
    let config = EnvironmentConfig {
        environment: "test".to_string(),
        port: 0,
        host: "127.0.0.1".to_string(),
        jwt_secret: "segredo-de-teste".to_string(),
        jwt_expiration: 3600,
        cors_origins: vec![],
    };
    create_app_router(AppState::new(MemoryStore::new(), config))
}

/// Dispara uma requisição e devolve (status, corpo JSON)
pub async fn send(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

/// Lê um Decimal de um campo JSON (string ou número)
pub fn dec(value: &Value) -> Decimal {
    match value {
        Value::String(s) => s.parse().expect("decimal inválido"),
        Value::Number(n) => n.to_string().parse().expect("decimal inválido"),
        other => panic!("esperava decimal, veio {:?}", other),
    }
}

/// Registra uma empresa e devolve o token do admin
pub async fn register_company(app: &Router, name: &str, cnpj: &str, admin_email: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/register",
        None,
        Some(json!({
            "company_name": name,
            "company_cnpj": cnpj,
            "admin_name": "Admin Teste",
            "admin_email": admin_email,
            "admin_password": "senha-forte-123",
        })),
    )
    .await;

    assert_eq!(status, StatusCode::OK, "registro falhou: {}", body);
    assert_eq!(body["success"], json!(true));
    body["token"].as_str().unwrap().to_string()
}

/// Cria e ativa um usuário com o papel informado, devolvendo o token
/// de sessão dele
pub async fn create_and_activate_user(
    app: &Router,
    admin_token: &str,
    name: &str,
    email: &str,
    role: &str,
) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/user",
        Some(admin_token),
        Some(json!({ "name": name, "email": email, "role": role })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "criação de usuário falhou: {}", body);
    let activation_token = body["data"]["activation_token"].as_str().unwrap().to_string();

    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/activate",
        None,
        Some(json!({ "token": activation_token, "password": "senha-nova-123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "ativação falhou: {}", body);

    let (status, body) = send(
        app,
        Method::POST,
        "/api/auth/login",
        None,
        Some(json!({ "email": email, "password": "senha-nova-123" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login falhou: {}", body);
    body["token"].as_str().unwrap().to_string()
}

/// Cadastra um cliente e devolve seu id
pub async fn create_client(app: &Router, token: &str, name: &str, cpf_cnpj: &str) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/client",
        Some(token),
        Some(json!({ "name": name, "cpf_cnpj": cpf_cnpj })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "cadastro de cliente falhou: {}", body);
    body["data"]["id"].as_str().unwrap().to_string()
}

/// Cria um orçamento e devolve seu id
pub async fn create_quote(
    app: &Router,
    token: &str,
    client_id: &str,
    volume: i64,
    price: i64,
) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/quote",
        Some(token),
        Some(json!({
            "client_id": client_id,
            "destination": "Rua A, 100, Centro, SP",
            "concrete_type": "FCK 25 bombeável",
            "volume_m3": volume,
            "price_per_m3": price,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "criação de orçamento falhou: {}", body);
    body["data"]["id"].as_str().unwrap().to_string()
}

/// Aprova um orçamento e agenda uma entrega a partir dele
pub async fn approved_quote_to_delivery(
    app: &Router,
    admin_token: &str,
    quote_id: &str,
    motorista_id: Option<&str>,
) -> String {
    let (status, body) = send(
        app,
        Method::POST,
        &format!("/api/quote/{}/approve", quote_id),
        Some(admin_token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "aprovação falhou: {}", body);

    let mut payload = json!({
        "quote_id": quote_id,
        "scheduled_date": "2026-09-01T08:00:00Z",
    });
    if let Some(id) = motorista_id {
        payload["motorista_id"] = json!(id);
    }

    let (status, body) = send(app, Method::POST, "/api/delivery", Some(admin_token), Some(payload)).await;
    assert_eq!(status, StatusCode::OK, "agendamento falhou: {}", body);
    body["data"]["id"].as_str().unwrap().to_string()
}

/// Define as taxas mestras da empresa
pub async fn configure_rates(
    app: &Router,
    admin_token: &str,
    min_fee: i64,
    freight: i64,
    repasse: i64,
) {
    let (status, body) = send(
        app,
        Method::PUT,
        "/api/settings",
        Some(admin_token),
        Some(json!({
            "min_freight_fee": min_fee,
            "freight_rate_m3": freight,
            "repasse_rate_m3": repasse,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "configuração falhou: {}", body);
}
