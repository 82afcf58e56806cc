//! DTOs de orçamento

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::quote::Quote;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    pub client_id: Uuid,

    #[validate(length(min = 5, max = 200))]
    pub destination: String,

    #[validate(length(min = 2, max = 100))]
    pub concrete_type: String,

    pub volume_m3: Decimal,

    pub price_per_m3: Decimal,

    /// Data limite de validade (YYYY-MM-DD)
    pub valid_until: Option<NaiveDate>,
}

/// Filtros de listagem de orçamentos
#[derive(Debug, Deserialize)]
pub struct QuoteFilters {
    /// "pendente" | "aprovado" | "recusado"
    pub status: Option<String>,
    pub client_id: Option<Uuid>,
    pub vendedor_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    pub id: Uuid,
    pub client_id: Uuid,
    pub vendedor_id: Uuid,
    pub destination: String,
    pub concrete_type: String,
    pub volume_m3: Decimal,
    pub price_per_m3: Decimal,
    pub total_price: Decimal,
    pub status: String,
    pub valid_until: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl From<Quote> for QuoteResponse {
    fn from(quote: Quote) -> Self {
        Self {
            id: quote.id,
            client_id: quote.client_id,
            vendedor_id: quote.vendedor_id,
            destination: quote.destination,
            concrete_type: quote.concrete_type,
            volume_m3: quote.volume_m3,
            price_per_m3: quote.price_per_m3,
            total_price: quote.total_price,
            status: quote.status.as_str().to_string(),
            valid_until: quote.valid_until,
            created_at: quote.created_at,
        }
    }
}
