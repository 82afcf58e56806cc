//! Repositório de configurações de valores
//!
//! Uma empresa tem no máximo um registro ativo de taxas; a escrita é
//! um upsert sobre esse registro.

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::settings::RateSettings;
use crate::storage::{Collection, MemoryStore};
use crate::utils::errors::AppResult;

pub struct SettingsRepository {
    settings: Collection<RateSettings>,
}

impl SettingsRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            settings: store.settings.clone(),
        }
    }

    pub async fn find_by_company(&self, company_id: Uuid) -> Option<RateSettings> {
        self.settings
            .find(|s| s.company_id == company_id)
            .await
            .map(|v| v.record)
    }

    pub async fn upsert(
        &self,
        company_id: Uuid,
        min_freight_fee: Decimal,
        freight_rate_m3: Decimal,
        repasse_rate_m3: Decimal,
    ) -> AppResult<RateSettings> {
        let now = Utc::now();

        if let Some(current) = self.settings.find(|s| s.company_id == company_id).await {
            let updated = self
                .settings
                .update(current.record.id, current.version, |s| {
                    s.min_freight_fee = min_freight_fee;
                    s.freight_rate_m3 = freight_rate_m3;
                    s.repasse_rate_m3 = repasse_rate_m3;
                    s.updated_at = now;
                })
                .await?;
            return Ok(updated.record);
        }

        let id = Uuid::new_v4();
        let settings = RateSettings {
            id,
            company_id,
            min_freight_fee,
            freight_rate_m3,
            repasse_rate_m3,
            updated_at: now,
        };
        self.settings.insert(id, settings.clone()).await;
        Ok(settings)
    }
}
