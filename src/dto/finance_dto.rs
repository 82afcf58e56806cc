//! DTOs de movimentações financeiras

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::finance::FinanceEntry;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateEntryRequest {
    /// "receita" | "despesa"
    pub kind: String,

    #[validate(length(min = 2, max = 60))]
    pub category: String,

    #[validate(length(min = 2, max = 200))]
    pub description: String,

    pub amount: Decimal,

    pub date: NaiveDate,

    pub quote_id: Option<Uuid>,

    /// "pendente" | "pago" | "vencido" (padrão: pendente)
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EntryFilters {
    pub kind: Option<String>,
    pub status: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub id: Uuid,
    pub kind: String,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub quote_id: Option<Uuid>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<FinanceEntry> for EntryResponse {
    fn from(entry: FinanceEntry) -> Self {
        Self {
            id: entry.id,
            kind: entry.kind.as_str().to_string(),
            category: entry.category,
            description: entry.description,
            amount: entry.amount,
            date: entry.date,
            quote_id: entry.quote_id,
            status: entry.status.as_str().to_string(),
            created_at: entry.created_at,
        }
    }
}
