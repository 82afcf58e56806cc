//! Repositório de caminhões

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::truck::{Truck, TruckStatus};
use crate::storage::{Collection, MemoryStore, Versioned};
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct TruckRepository {
    trucks: Collection<Truck>,
}

impl TruckRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            trucks: store.trucks.clone(),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        plate: String,
        model: Option<String>,
        capacity_m3: Decimal,
        driver_id: Option<Uuid>,
    ) -> AppResult<Truck> {
        if self.plate_exists(&plate, company_id).await {
            return Err(conflict_error("Caminhão", "placa", &plate));
        }

        let id = Uuid::new_v4();
        let truck = Truck {
            id,
            company_id,
            plate,
            model,
            capacity_m3,
            status: TruckStatus::Disponivel,
            driver_id,
            created_at: Utc::now(),
        };
        self.trucks.insert(id, truck.clone()).await;
        Ok(truck)
    }

    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> AppResult<Versioned<Truck>> {
        self.trucks
            .get(id)
            .await
            .filter(|v| v.record.company_id == company_id)
            .ok_or_else(|| AppError::NotFound("Caminhão não encontrado".to_string()))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Vec<Truck> {
        let mut trucks: Vec<Truck> = self
            .trucks
            .filter(|t| t.company_id == company_id)
            .await
            .into_iter()
            .map(|v| v.record)
            .collect();
        trucks.sort_by(|a, b| a.plate.cmp(&b.plate));
        trucks
    }

    pub async fn plate_exists(&self, plate: &str, company_id: Uuid) -> bool {
        self.trucks
            .exists(|t| t.company_id == company_id && t.plate == plate)
            .await
    }

    pub async fn update<F>(&self, id: Uuid, company_id: Uuid, apply: F) -> AppResult<Versioned<Truck>>
    where
        F: FnOnce(&mut Truck),
    {
        let current = self.find_by_id(id, company_id).await?;
        let updated = self.trucks.update(id, current.version, apply).await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> AppResult<()> {
        self.find_by_id(id, company_id).await?;
        self.trucks.remove(id).await?;
        Ok(())
    }
}
