//! Repositório de entregas
//!
//! Entregas nunca são removidas; apenas transicionam de status. As
//! atualizações passam pelo carimbo de versão da coleção.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::delivery_dto::DeliveryFilters;
use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::storage::{Collection, MemoryStore, Versioned};
use crate::utils::errors::{AppError, AppResult};

pub struct DeliveryRepository {
    deliveries: Collection<Delivery>,
}

impl DeliveryRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            deliveries: store.deliveries.clone(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        company_id: Uuid,
        quote_id: Uuid,
        vendedor_id: Uuid,
        motorista_id: Option<Uuid>,
        scheduled_date: DateTime<Utc>,
        destination: String,
        volume_m3: Decimal,
        notes: Option<String>,
    ) -> AppResult<Versioned<Delivery>> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let delivery = Delivery {
            id,
            company_id,
            quote_id,
            vendedor_id,
            motorista_id,
            scheduled_date,
            destination,
            volume_m3,
            actual_volume_m3: None,
            status: DeliveryStatus::Agendada,
            notes,
            created_at: now,
            updated_at: now,
        };
        Ok(self.deliveries.insert(id, delivery).await)
    }

    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> AppResult<Versioned<Delivery>> {
        self.deliveries
            .get(id)
            .await
            .filter(|v| v.record.company_id == company_id)
            .ok_or_else(|| AppError::NotFound("Entrega não encontrada".to_string()))
    }

    pub async fn list(
        &self,
        company_id: Uuid,
        filters: &DeliveryFilters,
    ) -> AppResult<Vec<Versioned<Delivery>>> {
        let status = match filters.status.as_deref() {
            Some(s) => Some(
                DeliveryStatus::from_str(s)
                    .ok_or_else(|| AppError::BadRequest(format!("Status inválido: '{}'", s)))?,
            ),
            None => None,
        };

        let mut deliveries = self
            .deliveries
            .filter(|d| {
                d.company_id == company_id
                    && status.map_or(true, |s| d.status == s)
                    && filters.motorista_id.map_or(true, |id| d.motorista_id == Some(id))
                    && filters.vendedor_id.map_or(true, |id| d.vendedor_id == id)
                    && filters.from.map_or(true, |from| d.scheduled_date >= from)
                    && filters.to.map_or(true, |to| d.scheduled_date <= to)
            })
            .await;
        deliveries.sort_by(|a, b| a.record.scheduled_date.cmp(&b.record.scheduled_date));
        Ok(deliveries)
    }

    /// Atualização com a versão lida pelo chamador (CAS)
    pub async fn update_versioned<F>(
        &self,
        id: Uuid,
        expected_version: u32,
        apply: F,
    ) -> AppResult<Versioned<Delivery>>
    where
        F: FnOnce(&mut Delivery),
    {
        let updated = self
            .deliveries
            .update(id, expected_version, |delivery| {
                apply(delivery);
                delivery.updated_at = Utc::now();
            })
            .await?;
        Ok(updated)
    }
}
