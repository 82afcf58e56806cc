//! Derivação financeira e relatórios exercitados pela API completa

mod common;

use axum::http::{Method, StatusCode};
use rust_decimal::Decimal;
use serde_json::json;

use common::*;

/// Cenário de ponta a ponta: volume 10, repasse 150, frete 10, taxa
/// mínima 80, usina 80 -> receita 1500, frete 100, usina 800, custo
/// total 900, lucro 600
#[tokio::test]
async fn test_financial_report_typical_scenario() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    configure_rates(&app, &admin, 80, 10, 150).await;

    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 10, 420).await;
    approved_quote_to_delivery(&app, &admin, &quote_id, None).await;

    let (status, body) = send(&app, Method::GET, "/api/report/financial", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings_configured"], json!(true));

    let rows = body["deliveries"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(dec(&row["gross_revenue"]), 1500.into());
    assert_eq!(dec(&row["freight_cost"]), 100.into());
    assert_eq!(dec(&row["plant_cost"]), 800.into());
    assert_eq!(dec(&row["total_cost"]), 900.into());
    assert_eq!(dec(&row["net_profit"]), 600.into());

    let totals = &body["totals"];
    assert_eq!(dec(&totals["net_profit"]), 600.into());
}

/// Volume 2 fica abaixo do ponto de quebra: o frete aplica o piso 80
#[tokio::test]
async fn test_minimum_freight_floor_in_report() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    configure_rates(&app, &admin, 80, 10, 150).await;

    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 2, 420).await;
    approved_quote_to_delivery(&app, &admin, &quote_id, None).await;

    let (_, body) = send(&app, Method::GET, "/api/report/financial", Some(&admin), None).await;
    let row = &body["deliveries"].as_array().unwrap()[0];
    assert_eq!(dec(&row["freight_cost"]), 80.into());
    // receita 300 - (80 + 160) = 60
    assert_eq!(dec(&row["net_profit"]), 60.into());
}

/// Lucro negativo aparece como negativo, nunca zerado
#[tokio::test]
async fn test_negative_profit_is_displayed() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    // Repasse de 50 não cobre frete + usina
    configure_rates(&app, &admin, 80, 10, 50).await;

    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 100, 420).await;
    approved_quote_to_delivery(&app, &admin, &quote_id, None).await;

    let (_, body) = send(&app, Method::GET, "/api/report/financial", Some(&admin), None).await;
    let row = &body["deliveries"].as_array().unwrap()[0];
    assert_eq!(dec(&row["net_profit"]), Decimal::from(-4000));
    assert_eq!(dec(&body["totals"]["net_profit"]), Decimal::from(-4000));
}

/// Sem configuração de taxas o relatório degrada para vazio com
/// totais zerados, sem erro
#[tokio::test]
async fn test_missing_settings_degrades_to_empty_report() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;

    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 10, 420).await;
    approved_quote_to_delivery(&app, &admin, &quote_id, None).await;

    let (status, body) = send(&app, Method::GET, "/api/report/financial", Some(&admin), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["settings_configured"], json!(false));
    assert_eq!(body["deliveries"].as_array().unwrap().len(), 0);
    assert_eq!(dec(&body["totals"]["net_profit"]), Decimal::ZERO);
}

/// A base de volume é um parâmetro: padrão usa o contratado mesmo
/// depois de finalizada; `realizado` usa o volume coletado
#[tokio::test]
async fn test_volume_base_parameter_in_report() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    configure_rates(&app, &admin, 80, 10, 150).await;

    let motorista =
        create_and_activate_user(&app, &admin, "Motorista Bruno", "bruno@alfa.com.br", "motorista")
            .await;
    let (_, me) = send(&app, Method::GET, "/api/auth/me", Some(&motorista), None).await;
    let motorista_id = me["id"].as_str().unwrap().to_string();

    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 10, 420).await;
    let delivery_id =
        approved_quote_to_delivery(&app, &admin, &quote_id, Some(&motorista_id)).await;

    let (status, _) = send(
        &app,
        Method::POST,
        &format!("/api/delivery/{}/finalize", delivery_id),
        Some(&motorista),
        Some(json!({ "actual_volume_m3": 8 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // Base padrão: o volume contratado de 10 m³
    let (_, body) = send(&app, Method::GET, "/api/report/financial", Some(&admin), None).await;
    let row = &body["deliveries"].as_array().unwrap()[0];
    assert_eq!(dec(&row["volume_m3"]), 10.into());
    assert_eq!(dec(&row["gross_revenue"]), 1500.into());

    // Base realizada: 8 m³ -> receita 1200, frete 80, usina 640
    let (_, body) = send(
        &app,
        Method::GET,
        "/api/report/financial?volume_base=realizado",
        Some(&admin),
        None,
    )
    .await;
    let row = &body["deliveries"].as_array().unwrap()[0];
    assert_eq!(dec(&row["volume_m3"]), 8.into());
    assert_eq!(dec(&row["gross_revenue"]), 1200.into());
    assert_eq!(dec(&row["freight_cost"]), 80.into());
    assert_eq!(dec(&row["net_profit"]), Decimal::from(1200 - 80 - 640));
}

/// Vendedor só enxerga as próprias vendas no relatório; admin vê tudo
#[tokio::test]
async fn test_vendedor_scope_in_financial_report() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    configure_rates(&app, &admin, 80, 10, 150).await;

    let vendedor =
        create_and_activate_user(&app, &admin, "Vendedor Alpha", "alpha@alfa.com.br", "vendedor")
            .await;

    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;

    // Uma venda do admin, uma do vendedor
    let quote_admin = create_quote(&app, &admin, &client_id, 10, 420).await;
    approved_quote_to_delivery(&app, &admin, &quote_admin, None).await;

    let quote_vendedor = create_quote(&app, &vendedor, &client_id, 2, 420).await;
    approved_quote_to_delivery(&app, &admin, &quote_vendedor, None).await;

    let (_, body) = send(&app, Method::GET, "/api/report/financial", Some(&admin), None).await;
    assert_eq!(body["deliveries"].as_array().unwrap().len(), 2);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/report/financial",
        Some(&vendedor),
        None,
    )
    .await;
    let rows = body["deliveries"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(dec(&rows[0]["volume_m3"]), 2.into());
}

/// Dashboard por papel: contadores de entrega e lucro só para admin
#[tokio::test]
async fn test_dashboard_shapes_by_role() {
    let app = test_app();
    let admin =
        register_company(&app, "Concreteira Alfa", "12.345.678/0001-90", "admin@alfa.com.br")
            .await;
    configure_rates(&app, &admin, 80, 10, 150).await;

    let motorista =
        create_and_activate_user(&app, &admin, "Motorista Bruno", "bruno@alfa.com.br", "motorista")
            .await;
    let (_, me) = send(&app, Method::GET, "/api/auth/me", Some(&motorista), None).await;
    let motorista_id = me["id"].as_str().unwrap().to_string();

    let client_id = create_client(&app, &admin, "Construtora Luxor", "98.765.432/0001-10").await;
    let quote_id = create_quote(&app, &admin, &client_id, 10, 420).await;
    approved_quote_to_delivery(&app, &admin, &quote_id, Some(&motorista_id)).await;

    let (_, body) = send(&app, Method::GET, "/api/report/dashboard", Some(&admin), None).await;
    assert_eq!(body["role"], json!("admin"));
    assert_eq!(body["deliveries_agendadas"], json!(1));
    assert_eq!(body["clients"], json!(1));
    assert_eq!(dec(&body["net_profit"]), 600.into());

    // Motorista recebe apenas os contadores das próprias entregas
    let (_, body) = send(
        &app,
        Method::GET,
        "/api/report/dashboard",
        Some(&motorista),
        None,
    )
    .await;
    assert_eq!(body["role"], json!("motorista"));
    assert_eq!(body["deliveries_agendadas"], json!(1));
    assert!(body.get("net_profit").is_none());
    assert!(body.get("clients").is_none());
}
