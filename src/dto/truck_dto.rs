//! DTOs de caminhão (frota)

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::truck::Truck;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTruckRequest {
    #[validate(custom = "crate::utils::validation::validate_plate")]
    pub plate: String,

    #[validate(length(min = 2, max = 100))]
    pub model: Option<String>,

    pub capacity_m3: Decimal,

    pub driver_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTruckRequest {
    #[validate(length(min = 2, max = 100))]
    pub model: Option<String>,

    pub capacity_m3: Option<Decimal>,

    /// "disponivel" | "manutencao" | "inativo"
    pub status: Option<String>,

    pub driver_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct TruckResponse {
    pub id: Uuid,
    pub plate: String,
    pub model: Option<String>,
    pub capacity_m3: Decimal,
    pub status: String,
    pub driver_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<Truck> for TruckResponse {
    fn from(truck: Truck) -> Self {
        Self {
            id: truck.id,
            plate: truck.plate,
            model: truck.model,
            capacity_m3: truck.capacity_m3,
            status: truck.status.as_str().to_string(),
            driver_id: truck.driver_id,
            created_at: truck.created_at,
        }
    }
}
