//! Dados de demonstração
//!
//! Popular o armazenamento com uma empresa de exemplo e registros em
//! cada estado do ciclo de vida, para desenvolvimento local.

use bcrypt::{hash, DEFAULT_COST};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::client::Client;
use crate::models::company::Company;
use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::models::quote::{Quote, QuoteStatus};
use crate::models::settings::RateSettings;
use crate::models::truck::{Truck, TruckStatus};
use crate::models::user::{User, UserRole, UserStatus};
use crate::storage::MemoryStore;

/// Semear uma empresa de demonstração com usuários de cada papel,
/// frota, um orçamento aprovado e entregas em cada estado.
pub async fn seed_demo_data(store: &MemoryStore) -> anyhow::Result<()> {
    let now = Utc::now();
    let company_id = Uuid::new_v4();

    store
        .companies
        .insert(
            company_id,
            Company {
                id: company_id,
                name: "Concreteira Horizonte".to_string(),
                cnpj: "12.345.678/0001-90".to_string(),
                address: Some("Rod. BR-101, km 42".to_string()),
                phone: Some("(11) 4002-8922".to_string()),
                email: Some("contato@horizonte.com.br".to_string()),
                is_active: true,
                created_at: now,
            },
        )
        .await;

    // Um usuário por papel, todos com senha "demo123"
    let demo_hash = hash("demo123", DEFAULT_COST)?;
    let mut user_ids = Vec::new();
    for (name, email, role) in [
        ("Admin Demo", "admin@horizonte.com.br", UserRole::Admin),
        ("Vendedor Alpha", "vendedor@horizonte.com.br", UserRole::Vendedor),
        ("Motorista Bruno", "motorista@horizonte.com.br", UserRole::Motorista),
    ] {
        let id = Uuid::new_v4();
        store
            .users
            .insert(
                id,
                User {
                    id,
                    company_id,
                    name: name.to_string(),
                    email: email.to_string(),
                    phone: None,
                    password_hash: Some(demo_hash.clone()),
                    role,
                    status: UserStatus::Active,
                    activation_token: None,
                    activation_expires: None,
                    last_login: None,
                    created_at: now,
                    updated_at: now,
                },
            )
            .await;
        user_ids.push(id);
    }
    let (vendedor_id, motorista_id) = (user_ids[1], user_ids[2]);

    let client_id = Uuid::new_v4();
    store
        .clients
        .insert(
            client_id,
            Client {
                id: client_id,
                company_id,
                name: "Construtora Luxor".to_string(),
                email: Some("obras@luxor.com.br".to_string()),
                phone: Some("(11) 98765-4321".to_string()),
                address: Some("Rua A, 100, Centro".to_string()),
                cpf_cnpj: "98.765.432/0001-10".to_string(),
                created_at: now,
                updated_at: now,
            },
        )
        .await;

    for (plate, model, capacity) in [("ABC-1234", "Betoneira 8m³", 8), ("DEF-5678", "Betoneira 10m³", 10)] {
        let id = Uuid::new_v4();
        store
            .trucks
            .insert(
                id,
                Truck {
                    id,
                    company_id,
                    plate: plate.to_string(),
                    model: Some(model.to_string()),
                    capacity_m3: Decimal::from(capacity),
                    status: TruckStatus::Disponivel,
                    driver_id: Some(motorista_id),
                    created_at: now,
                },
            )
            .await;
    }

    let settings_id = Uuid::new_v4();
    store
        .settings
        .insert(
            settings_id,
            RateSettings {
                id: settings_id,
                company_id,
                min_freight_fee: Decimal::from(80),
                freight_rate_m3: Decimal::from(10),
                repasse_rate_m3: Decimal::from(150),
                updated_at: now,
            },
        )
        .await;

    let quote_id = Uuid::new_v4();
    let volume = Decimal::from(10);
    let price = Decimal::from(420);
    store
        .quotes
        .insert(
            quote_id,
            Quote {
                id: quote_id,
                company_id,
                client_id,
                vendedor_id,
                destination: "Rua A, 100, Centro, SP".to_string(),
                concrete_type: "FCK 25 bombeável".to_string(),
                volume_m3: volume,
                price_per_m3: price,
                total_price: volume * price,
                status: QuoteStatus::Aprovado,
                valid_until: None,
                created_at: now,
                updated_at: now,
            },
        )
        .await;

    // Entregas em cada estado do ciclo de vida
    let states = [
        (DeliveryStatus::Agendada, None),
        (DeliveryStatus::EmRota, None),
        (DeliveryStatus::Finalizada, Some("9.8".parse::<Decimal>()?)),
        (DeliveryStatus::Cancelada, None),
    ];
    for (i, (status, actual)) in states.into_iter().enumerate() {
        let id = Uuid::new_v4();
        store
            .deliveries
            .insert(
                id,
                Delivery {
                    id,
                    company_id,
                    quote_id,
                    vendedor_id,
                    motorista_id: Some(motorista_id),
                    scheduled_date: now + Duration::days(i as i64),
                    destination: "Rua A, 100, Centro, SP".to_string(),
                    volume_m3: volume,
                    actual_volume_m3: actual,
                    status,
                    notes: None,
                    created_at: now,
                    updated_at: now,
                },
            )
            .await;
    }

    tracing::info!("🌱 Dados de demonstração semeados (empresa Concreteira Horizonte)");
    Ok(())
}
