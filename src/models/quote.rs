//! Modelo de Orçamento
//!
//! Proposta de fornecimento de concreto para um cliente; quando
//! aprovada pode originar entregas agendadas.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status do orçamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteStatus {
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "aprovado")]
    Aprovado,
    #[serde(rename = "recusado")]
    Recusado,
}

impl QuoteStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuoteStatus::Pendente => "pendente",
            QuoteStatus::Aprovado => "aprovado",
            QuoteStatus::Recusado => "recusado",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pendente" => Some(QuoteStatus::Pendente),
            "aprovado" => Some(QuoteStatus::Aprovado),
            "recusado" => Some(QuoteStatus::Recusado),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quote {
    pub id: Uuid,
    pub company_id: Uuid,
    pub client_id: Uuid,
    pub vendedor_id: Uuid,
    /// Endereço da obra / ponto de descarga
    pub destination: String,
    /// Tipo de concreto (ex: "FCK 25 bombeável")
    pub concrete_type: String,
    pub volume_m3: Decimal,
    pub price_per_m3: Decimal,
    /// volume_m3 × price_per_m3, calculado na criação
    pub total_price: Decimal,
    pub status: QuoteStatus,
    pub valid_until: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
