//! Configurações de valores da empresa
//!
//! Registro único por empresa com as taxas usadas pela derivação
//! financeira: piso do frete, frete por m³ e repasse do vendedor por
//! m³. Todas não negativas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateSettings {
    pub id: Uuid,
    pub company_id: Uuid,
    /// Taxa mínima do frete (R$) - piso aplicado sobre o frete por m³
    pub min_freight_fee: Decimal,
    /// Valor do frete por m³ carregado (R$)
    pub freight_rate_m3: Decimal,
    /// Repasse do vendedor por m³ (R$) - receita contabilizada da empresa
    pub repasse_rate_m3: Decimal,
    pub updated_at: DateTime<Utc>,
}
