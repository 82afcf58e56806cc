//! DTOs de entrega

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::delivery::Delivery;

/// Criação de entrega a partir de um orçamento aprovado. Destino e
/// volume vêm do orçamento; o destino pode ser sobrescrito quando a
/// descarga ocorre em outro ponto da obra.
#[derive(Debug, Deserialize)]
pub struct CreateDeliveryRequest {
    pub quote_id: Uuid,
    pub scheduled_date: DateTime<Utc>,
    pub destination: Option<String>,
    pub motorista_id: Option<Uuid>,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AssignDriverRequest {
    pub motorista_id: Uuid,
}

/// Finalização: o volume realizado é obrigatório e positivo; a
/// validação devolve mensagem legível sem mutação em caso de erro.
#[derive(Debug, Deserialize)]
pub struct FinalizeDeliveryRequest {
    pub actual_volume_m3: Option<Decimal>,
}

/// Cancelamento exige a etapa explícita de confirmação humana
#[derive(Debug, Deserialize)]
pub struct CancelDeliveryRequest {
    #[serde(default)]
    pub confirmed: bool,
}

/// Filtros de listagem de entregas
#[derive(Debug, Deserialize)]
pub struct DeliveryFilters {
    /// "agendada" | "em_rota" | "finalizada" | "cancelada"
    pub status: Option<String>,
    pub motorista_id: Option<Uuid>,
    pub vendedor_id: Option<Uuid>,
    /// Agendadas a partir de (RFC3339)
    pub from: Option<DateTime<Utc>>,
    /// Agendadas até (RFC3339)
    pub to: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize)]
pub struct DeliveryResponse {
    pub id: Uuid,
    pub quote_id: Uuid,
    pub vendedor_id: Uuid,
    pub motorista_id: Option<Uuid>,
    pub scheduled_date: DateTime<Utc>,
    pub destination: String,
    pub volume_m3: Decimal,
    pub actual_volume_m3: Option<Decimal>,
    pub status: String,
    pub notes: Option<String>,
    /// Carimbo de versão para controle otimista de concorrência
    pub version: u32,
    pub updated_at: DateTime<Utc>,
}

impl DeliveryResponse {
    pub fn from_versioned(delivery: Delivery, version: u32) -> Self {
        Self {
            id: delivery.id,
            quote_id: delivery.quote_id,
            vendedor_id: delivery.vendedor_id,
            motorista_id: delivery.motorista_id,
            scheduled_date: delivery.scheduled_date,
            destination: delivery.destination,
            volume_m3: delivery.volume_m3,
            actual_volume_m3: delivery.actual_volume_m3,
            status: delivery.status.as_str().to_string(),
            notes: delivery.notes,
            version,
            updated_at: delivery.updated_at,
        }
    }
}
