//! Repositório de movimentações financeiras

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::dto::finance_dto::EntryFilters;
use crate::models::finance::{EntryKind, FinanceEntry, PaymentStatus};
use crate::storage::{Collection, MemoryStore};
use crate::utils::errors::{AppError, AppResult};

pub struct FinanceRepository {
    entries: Collection<FinanceEntry>,
}

impl FinanceRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            entries: store.finance_entries.clone(),
        }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        company_id: Uuid,
        kind: EntryKind,
        category: String,
        description: String,
        amount: Decimal,
        date: NaiveDate,
        quote_id: Option<Uuid>,
        status: PaymentStatus,
    ) -> AppResult<FinanceEntry> {
        let id = Uuid::new_v4();
        let entry = FinanceEntry {
            id,
            company_id,
            kind,
            category,
            description,
            amount,
            date,
            quote_id,
            status,
            created_at: Utc::now(),
        };
        self.entries.insert(id, entry.clone()).await;
        Ok(entry)
    }

    pub async fn list(
        &self,
        company_id: Uuid,
        filters: &EntryFilters,
    ) -> AppResult<Vec<FinanceEntry>> {
        let kind = match filters.kind.as_deref() {
            Some(k) => Some(
                EntryKind::from_str(k)
                    .ok_or_else(|| AppError::BadRequest(format!("Tipo inválido: '{}'", k)))?,
            ),
            None => None,
        };
        let status = match filters.status.as_deref() {
            Some(s) => Some(
                PaymentStatus::from_str(s)
                    .ok_or_else(|| AppError::BadRequest(format!("Status inválido: '{}'", s)))?,
            ),
            None => None,
        };

        let mut entries: Vec<FinanceEntry> = self
            .entries
            .filter(|e| {
                e.company_id == company_id
                    && kind.map_or(true, |k| e.kind == k)
                    && status.map_or(true, |s| e.status == s)
                    && filters.from.map_or(true, |from| e.date >= from)
                    && filters.to.map_or(true, |to| e.date <= to)
            })
            .await
            .into_iter()
            .map(|v| v.record)
            .collect();
        entries.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(entries)
    }
}
