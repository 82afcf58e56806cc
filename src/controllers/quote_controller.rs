//! Controller de orçamentos

use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::quote_dto::{CreateQuoteRequest, QuoteFilters, QuoteResponse};
use crate::models::auth::AuthenticatedUser;
use crate::models::quote::QuoteStatus;
use crate::models::user::UserRole;
use crate::repositories::client_repository::ClientRepository;
use crate::repositories::quote_repository::QuoteRepository;
use crate::services::authorization_service::AuthorizationService;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_positive_volume;

pub struct QuoteController {
    quotes: QuoteRepository,
    clients: ClientRepository,
}

impl QuoteController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            quotes: QuoteRepository::new(store),
            clients: ClientRepository::new(store),
        }
    }

    pub async fn create(
        &self,
        ctx: &AuthenticatedUser,
        request: CreateQuoteRequest,
    ) -> AppResult<ApiResponse<QuoteResponse>> {
        if !AuthorizationService::can_create_quote(ctx) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para criar orçamentos".to_string(),
            ));
        }
        request.validate()?;

        if validate_positive_volume(request.volume_m3).is_err() {
            return Err(AppError::ValidationMessage(
                "O volume do orçamento deve ser positivo".to_string(),
            ));
        }
        if request.price_per_m3.is_sign_negative() || request.price_per_m3.is_zero() {
            return Err(AppError::ValidationMessage(
                "O preço por m³ deve ser positivo".to_string(),
            ));
        }

        // O cliente precisa existir no tenant
        self.clients
            .find_by_id(request.client_id, ctx.company_id)
            .await?;

        let quote = self
            .quotes
            .create(
                ctx.company_id,
                request.client_id,
                ctx.user_id,
                request.destination,
                request.concrete_type,
                request.volume_m3,
                request.price_per_m3,
                request.valid_until,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            quote.into(),
            "Orçamento criado com sucesso".to_string(),
        ))
    }

    pub async fn list(
        &self,
        ctx: &AuthenticatedUser,
        mut filters: QuoteFilters,
    ) -> AppResult<Vec<QuoteResponse>> {
        // Vendedor enxerga apenas os próprios orçamentos
        if ctx.role == UserRole::Vendedor {
            filters.vendedor_id = Some(ctx.user_id);
        }

        let quotes = self.quotes.list(ctx.company_id, &filters).await?;
        Ok(quotes.into_iter().map(QuoteResponse::from).collect())
    }

    pub async fn get_by_id(&self, ctx: &AuthenticatedUser, id: Uuid) -> AppResult<QuoteResponse> {
        let quote = self.quotes.find_by_id(id, ctx.company_id).await?;
        if ctx.role == UserRole::Vendedor && quote.record.vendedor_id != ctx.user_id {
            return Err(AppError::NotFound("Orçamento não encontrado".to_string()));
        }
        Ok(quote.record.into())
    }

    pub async fn approve(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
    ) -> AppResult<ApiResponse<QuoteResponse>> {
        self.review(ctx, id, QuoteStatus::Aprovado, "Orçamento aprovado com sucesso")
            .await
    }

    pub async fn reject(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
    ) -> AppResult<ApiResponse<QuoteResponse>> {
        self.review(ctx, id, QuoteStatus::Recusado, "Orçamento recusado")
            .await
    }

    /// Aprovação/recusa só sai do estado pendente
    async fn review(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
        new_status: QuoteStatus,
        message: &str,
    ) -> AppResult<ApiResponse<QuoteResponse>> {
        if !AuthorizationService::can_review_quote(ctx) {
            return Err(AppError::Forbidden(
                "Apenas administradores avaliam orçamentos".to_string(),
            ));
        }

        let current = self.quotes.find_by_id(id, ctx.company_id).await?;
        if current.record.status != QuoteStatus::Pendente {
            return Err(AppError::Conflict(format!(
                "Orçamento já está '{}'",
                current.record.status.as_str()
            )));
        }

        let updated = self
            .quotes
            .update(id, ctx.company_id, |quote| {
                quote.status = new_status;
            })
            .await?;

        tracing::info!(
            "📋 Orçamento {} -> {}",
            id,
            updated.record.status.as_str()
        );
        Ok(ApiResponse::success_with_message(
            updated.record.into(),
            message.to_string(),
        ))
    }
}
