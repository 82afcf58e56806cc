//! DTOs de configurações de valores

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::settings::RateSettings;

/// Atualização (upsert) do registro único de taxas da empresa
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub min_freight_fee: Decimal,
    pub freight_rate_m3: Decimal,
    pub repasse_rate_m3: Decimal,
}

#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub id: Uuid,
    pub min_freight_fee: Decimal,
    pub freight_rate_m3: Decimal,
    pub repasse_rate_m3: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl From<RateSettings> for SettingsResponse {
    fn from(settings: RateSettings) -> Self {
        Self {
            id: settings.id,
            min_freight_fee: settings.min_freight_fee,
            freight_rate_m3: settings.freight_rate_m3,
            repasse_rate_m3: settings.repasse_rate_m3,
            updated_at: settings.updated_at,
        }
    }
}
