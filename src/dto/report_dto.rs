//! DTOs de relatórios financeiros e dashboards

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use crate::services::finance_service::VolumeBase;

#[derive(Debug, Deserialize)]
pub struct FinancialReportQuery {
    /// "agendada" | "em_rota" | "finalizada" | "cancelada"
    pub status: Option<String>,
    pub vendedor_id: Option<Uuid>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    #[serde(default)]
    pub volume_base: VolumeBase,
}

/// Figuras derivadas de uma entrega
#[derive(Debug, Serialize)]
pub struct DeliveryFinancialsResponse {
    pub delivery_id: Uuid,
    pub destination: String,
    pub status: String,
    pub vendedor_id: Uuid,
    /// Volume usado na derivação
    pub volume_m3: Decimal,
    pub gross_revenue: Decimal,
    pub freight_cost: Decimal,
    pub plant_cost: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Serialize)]
pub struct FinancialTotalsResponse {
    pub gross_revenue: Decimal,
    pub freight_cost: Decimal,
    pub plant_cost: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
}

#[derive(Debug, Serialize)]
pub struct FinancialReportResponse {
    pub deliveries: Vec<DeliveryFinancialsResponse>,
    pub totals: FinancialTotalsResponse,
    /// Falso quando a empresa ainda não tem taxas configuradas (o
    /// relatório degrada para vazio em vez de falhar)
    pub settings_configured: bool,
}

/// Contadores do dashboard, moldados pelo papel do usuário
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub role: String,
    pub deliveries_agendadas: usize,
    pub deliveries_em_rota: usize,
    pub deliveries_finalizadas: usize,
    pub deliveries_canceladas: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes_pendentes: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quotes_aprovados: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clients: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trucks_disponiveis: Option<usize>,
    /// Lucro líquido agregado (apenas admin)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub net_profit: Option<Decimal>,
}
