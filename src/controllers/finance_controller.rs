//! Controller de movimentações financeiras

use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::finance_dto::{CreateEntryRequest, EntryFilters, EntryResponse};
use crate::models::auth::AuthenticatedUser;
use crate::models::finance::{EntryKind, PaymentStatus};
use crate::repositories::finance_repository::FinanceRepository;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};

pub struct FinanceController {
    entries: FinanceRepository,
}

impl FinanceController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            entries: FinanceRepository::new(store),
        }
    }

    pub async fn create(
        &self,
        ctx: &AuthenticatedUser,
        request: CreateEntryRequest,
    ) -> AppResult<ApiResponse<EntryResponse>> {
        request.validate()?;

        let kind = EntryKind::from_str(&request.kind)
            .ok_or_else(|| AppError::BadRequest(format!("Tipo inválido: '{}'", request.kind)))?;
        let status = match request.status.as_deref() {
            Some(s) => PaymentStatus::from_str(s)
                .ok_or_else(|| AppError::BadRequest(format!("Status inválido: '{}'", s)))?,
            None => PaymentStatus::Pendente,
        };
        if request.amount.is_sign_negative() || request.amount.is_zero() {
            return Err(AppError::ValidationMessage(
                "O valor do lançamento deve ser positivo".to_string(),
            ));
        }

        let entry = self
            .entries
            .create(
                ctx.company_id,
                kind,
                request.category,
                request.description,
                request.amount,
                request.date,
                request.quote_id,
                status,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            entry.into(),
            "Lançamento registrado com sucesso".to_string(),
        ))
    }

    pub async fn list(
        &self,
        ctx: &AuthenticatedUser,
        filters: EntryFilters,
    ) -> AppResult<Vec<EntryResponse>> {
        let entries = self.entries.list(ctx.company_id, &filters).await?;
        Ok(entries.into_iter().map(EntryResponse::from).collect())
    }
}
