//! Modelo de Caminhão (frota)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estado do caminhão na frota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TruckStatus {
    #[serde(rename = "disponivel")]
    Disponivel,
    #[serde(rename = "manutencao")]
    Manutencao,
    #[serde(rename = "inativo")]
    Inativo,
}

impl TruckStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TruckStatus::Disponivel => "disponivel",
            TruckStatus::Manutencao => "manutencao",
            TruckStatus::Inativo => "inativo",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "disponivel" => Some(TruckStatus::Disponivel),
            "manutencao" => Some(TruckStatus::Manutencao),
            "inativo" => Some(TruckStatus::Inativo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Truck {
    pub id: Uuid,
    pub company_id: Uuid,
    pub plate: String,
    pub model: Option<String>,
    /// Capacidade do balão em m³
    pub capacity_m3: Decimal,
    pub status: TruckStatus,
    /// Motorista habitual, quando houver
    pub driver_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}
