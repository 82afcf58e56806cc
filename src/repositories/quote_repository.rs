//! Repositório de orçamentos

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::quote_dto::QuoteFilters;
use crate::models::quote::{Quote, QuoteStatus};
use crate::storage::{Collection, MemoryStore, Versioned};
use crate::utils::errors::{AppError, AppResult};

pub struct QuoteRepository {
    quotes: Collection<Quote>,
}

impl QuoteRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            quotes: store.quotes.clone(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        company_id: Uuid,
        client_id: Uuid,
        vendedor_id: Uuid,
        destination: String,
        concrete_type: String,
        volume_m3: Decimal,
        price_per_m3: Decimal,
        valid_until: Option<NaiveDate>,
    ) -> AppResult<Quote> {
        let now = Utc::now();
        let id = Uuid::new_v4();
        let quote = Quote {
            id,
            company_id,
            client_id,
            vendedor_id,
            destination,
            concrete_type,
            volume_m3,
            price_per_m3,
            total_price: volume_m3 * price_per_m3,
            status: QuoteStatus::Pendente,
            valid_until,
            created_at: now,
            updated_at: now,
        };
        self.quotes.insert(id, quote.clone()).await;
        Ok(quote)
    }

    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> AppResult<Versioned<Quote>> {
        self.quotes
            .get(id)
            .await
            .filter(|v| v.record.company_id == company_id)
            .ok_or_else(|| AppError::NotFound("Orçamento não encontrado".to_string()))
    }

    pub async fn list(&self, company_id: Uuid, filters: &QuoteFilters) -> AppResult<Vec<Quote>> {
        let status = match filters.status.as_deref() {
            Some(s) => Some(
                QuoteStatus::from_str(s)
                    .ok_or_else(|| AppError::BadRequest(format!("Status inválido: '{}'", s)))?,
            ),
            None => None,
        };

        let mut quotes: Vec<Quote> = self
            .quotes
            .filter(|q| {
                q.company_id == company_id
                    && status.map_or(true, |s| q.status == s)
                    && filters.client_id.map_or(true, |id| q.client_id == id)
                    && filters.vendedor_id.map_or(true, |id| q.vendedor_id == id)
            })
            .await
            .into_iter()
            .map(|v| v.record)
            .collect();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(quotes)
    }

    pub async fn update<F>(&self, id: Uuid, company_id: Uuid, apply: F) -> AppResult<Versioned<Quote>>
    where
        F: FnOnce(&mut Quote),
    {
        let current = self.find_by_id(id, company_id).await?;
        let updated = self
            .quotes
            .update(id, current.version, |quote| {
                apply(quote);
                quote.updated_at = Utc::now();
            })
            .await?;
        Ok(updated)
    }
}
