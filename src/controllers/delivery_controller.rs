//! Controller de entregas
//!
//! Criação a partir de orçamento aprovado, atribuição de motorista e
//! as três ações do ciclo de vida, com autorização por papel antes de
//! chegar ao gerenciador.

use uuid::Uuid;

use crate::dto::common::ApiResponse;
use crate::dto::delivery_dto::{
    AssignDriverRequest, CancelDeliveryRequest, CreateDeliveryRequest, DeliveryFilters,
    DeliveryResponse, FinalizeDeliveryRequest,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::delivery::DeliveryStatus;
use crate::models::quote::QuoteStatus;
use crate::models::user::UserRole;
use crate::repositories::delivery_repository::DeliveryRepository;
use crate::repositories::quote_repository::QuoteRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::authorization_service::AuthorizationService;
use crate::services::lifecycle_service::LifecycleService;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};

pub struct DeliveryController {
    deliveries: DeliveryRepository,
    quotes: QuoteRepository,
    users: UserRepository,
    lifecycle: LifecycleService,
}

impl DeliveryController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            deliveries: DeliveryRepository::new(store),
            quotes: QuoteRepository::new(store),
            users: UserRepository::new(store),
            lifecycle: LifecycleService::new(store),
        }
    }

    /// Agendar entrega a partir de um orçamento aprovado
    pub async fn create(
        &self,
        ctx: &AuthenticatedUser,
        request: CreateDeliveryRequest,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        if !AuthorizationService::can_schedule_delivery(ctx) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para agendar entregas".to_string(),
            ));
        }

        let quote = self
            .quotes
            .find_by_id(request.quote_id, ctx.company_id)
            .await?
            .record;

        if quote.status != QuoteStatus::Aprovado {
            return Err(AppError::BadRequest(format!(
                "Apenas orçamentos aprovados geram entregas (status atual: '{}')",
                quote.status.as_str()
            )));
        }
        if ctx.role == UserRole::Vendedor && quote.vendedor_id != ctx.user_id {
            return Err(AppError::Forbidden(
                "Vendedores agendam apenas entregas dos próprios orçamentos".to_string(),
            ));
        }
        if let Some(motorista_id) = request.motorista_id {
            self.ensure_motorista(ctx, motorista_id).await?;
        }

        let created = self
            .deliveries
            .create(
                ctx.company_id,
                quote.id,
                quote.vendedor_id,
                request.motorista_id,
                request.scheduled_date,
                request.destination.unwrap_or(quote.destination),
                quote.volume_m3,
                request.notes,
            )
            .await?;

        tracing::info!("📅 Entrega {} agendada", created.record.id);
        Ok(ApiResponse::success_with_message(
            DeliveryResponse::from_versioned(created.record, created.version),
            "Entrega agendada com sucesso".to_string(),
        ))
    }

    pub async fn list(
        &self,
        ctx: &AuthenticatedUser,
        mut filters: DeliveryFilters,
    ) -> AppResult<Vec<DeliveryResponse>> {
        // Escopo por papel: motorista vê as suas, vendedor as das
        // próprias vendas, admin tudo
        match ctx.role {
            UserRole::Motorista => filters.motorista_id = Some(ctx.user_id),
            UserRole::Vendedor => filters.vendedor_id = Some(ctx.user_id),
            UserRole::Admin => {}
        }

        let deliveries = self.deliveries.list(ctx.company_id, &filters).await?;
        Ok(deliveries
            .into_iter()
            .map(|v| DeliveryResponse::from_versioned(v.record, v.version))
            .collect())
    }

    pub async fn get_by_id(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
    ) -> AppResult<DeliveryResponse> {
        let delivery = self.deliveries.find_by_id(id, ctx.company_id).await?;
        if !AuthorizationService::can_view_delivery(ctx, &delivery.record) {
            return Err(AppError::NotFound("Entrega não encontrada".to_string()));
        }
        Ok(DeliveryResponse::from_versioned(
            delivery.record,
            delivery.version,
        ))
    }

    /// Atribuir motorista a uma entrega ainda agendada
    pub async fn assign_driver(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
        request: AssignDriverRequest,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        if !AuthorizationService::can_schedule_delivery(ctx) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para atribuir motoristas".to_string(),
            ));
        }
        self.ensure_motorista(ctx, request.motorista_id).await?;

        let current = self.deliveries.find_by_id(id, ctx.company_id).await?;
        if current.record.status != DeliveryStatus::Agendada {
            return Err(AppError::BadRequest(format!(
                "Motorista só pode ser atribuído a entregas agendadas (status atual: '{}')",
                current.record.status.as_str()
            )));
        }

        let updated = self
            .deliveries
            .update_versioned(id, current.version, |d| {
                d.motorista_id = Some(request.motorista_id);
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            DeliveryResponse::from_versioned(updated.record, updated.version),
            "Motorista atribuído com sucesso".to_string(),
        ))
    }

    /// Iniciar viagem (motorista atribuído ou admin)
    pub async fn start_trip(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        let delivery = self.deliveries.find_by_id(id, ctx.company_id).await?;
        if !AuthorizationService::can_operate_delivery(ctx, &delivery.record) {
            return Err(AppError::Forbidden(
                "Apenas o motorista atribuído pode operar esta entrega".to_string(),
            ));
        }

        let updated = self.lifecycle.start_trip(ctx, id).await?;
        Ok(ApiResponse::success_with_message(
            DeliveryResponse::from_versioned(updated.record, updated.version),
            "Viagem iniciada com sucesso! Status atualizado para \"Em Rota\"".to_string(),
        ))
    }

    /// Finalizar com o volume realizado coletado em campo
    pub async fn finalize(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
        request: FinalizeDeliveryRequest,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        let delivery = self.deliveries.find_by_id(id, ctx.company_id).await?;
        if !AuthorizationService::can_operate_delivery(ctx, &delivery.record) {
            return Err(AppError::Forbidden(
                "Apenas o motorista atribuído pode operar esta entrega".to_string(),
            ));
        }

        let updated = self
            .lifecycle
            .finalize(ctx, id, request.actual_volume_m3)
            .await?;
        let volume = updated.record.actual_volume_m3.unwrap_or_default();
        Ok(ApiResponse::success_with_message(
            DeliveryResponse::from_versioned(updated.record, updated.version),
            format!("Entrega finalizada com sucesso! Volume real: {} m³", volume),
        ))
    }

    /// Cancelar (vendedor responsável ou admin, com confirmação)
    pub async fn cancel(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
        request: CancelDeliveryRequest,
    ) -> AppResult<ApiResponse<DeliveryResponse>> {
        let delivery = self.deliveries.find_by_id(id, ctx.company_id).await?;
        if !AuthorizationService::can_cancel_delivery(ctx, &delivery.record) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para cancelar esta entrega".to_string(),
            ));
        }

        let updated = self.lifecycle.cancel(ctx, id, request.confirmed).await?;
        Ok(ApiResponse::success_with_message(
            DeliveryResponse::from_versioned(updated.record, updated.version),
            "Entrega cancelada com sucesso".to_string(),
        ))
    }

    async fn ensure_motorista(&self, ctx: &AuthenticatedUser, motorista_id: Uuid) -> AppResult<()> {
        let valid = self
            .users
            .find_by_id(motorista_id)
            .await
            .map(|v| v.record)
            .map_or(false, |u| {
                u.company_id == ctx.company_id && u.role == UserRole::Motorista
            });
        if !valid {
            return Err(AppError::BadRequest(
                "Motorista informado não encontrado na empresa".to_string(),
            ));
        }
        Ok(())
    }
}
