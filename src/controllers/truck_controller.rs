//! Controller de frota

use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::truck_dto::{CreateTruckRequest, TruckResponse, UpdateTruckRequest};
use crate::models::auth::AuthenticatedUser;
use crate::models::truck::TruckStatus;
use crate::models::user::UserRole;
use crate::repositories::truck_repository::TruckRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::authorization_service::AuthorizationService;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_positive_volume;

pub struct TruckController {
    trucks: TruckRepository,
    users: UserRepository,
}

impl TruckController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            trucks: TruckRepository::new(store),
            users: UserRepository::new(store),
        }
    }

    fn ensure_can_manage(ctx: &AuthenticatedUser) -> AppResult<()> {
        if !AuthorizationService::can_manage_fleet(ctx) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para gerenciar a frota".to_string(),
            ));
        }
        Ok(())
    }

    /// Motorista indicado precisa existir na empresa com o papel certo
    async fn ensure_driver(&self, ctx: &AuthenticatedUser, driver_id: Uuid) -> AppResult<()> {
        let valid = self
            .users
            .find_by_id(driver_id)
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

    pub async fn create(
        &self,
        ctx: &AuthenticatedUser,
        request: CreateTruckRequest,
    ) -> AppResult<ApiResponse<TruckResponse>> {
        Self::ensure_can_manage(ctx)?;
        request.validate()?;

        if validate_positive_volume(request.capacity_m3).is_err() {
            return Err(AppError::ValidationMessage(
                "A capacidade do caminhão deve ser positiva".to_string(),
            ));
        }
        if let Some(driver_id) = request.driver_id {
            self.ensure_driver(ctx, driver_id).await?;
        }

        let truck = self
            .trucks
            .create(
                ctx.company_id,
                request.plate,
                request.model,
                request.capacity_m3,
                request.driver_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            truck.into(),
            "Caminhão cadastrado com sucesso".to_string(),
        ))
    }

    /// Motoristas também podem consultar a frota
    pub async fn list(&self, ctx: &AuthenticatedUser) -> AppResult<Vec<TruckResponse>> {
        let trucks = self.trucks.list_by_company(ctx.company_id).await;
        Ok(trucks.into_iter().map(TruckResponse::from).collect())
    }

    pub async fn get_by_id(&self, ctx: &AuthenticatedUser, id: Uuid) -> AppResult<TruckResponse> {
        let truck = self.trucks.find_by_id(id, ctx.company_id).await?;
        Ok(truck.record.into())
    }

    pub async fn update(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
        request: UpdateTruckRequest,
    ) -> AppResult<ApiResponse<TruckResponse>> {
        Self::ensure_can_manage(ctx)?;
        request.validate()?;

        let status = match request.status.as_deref() {
            Some(s) => Some(TruckStatus::from_str(s).ok_or_else(|| {
                AppError::BadRequest(format!("Status inválido: '{}'", s))
            })?),
            None => None,
        };
        if let Some(capacity) = request.capacity_m3 {
            if validate_positive_volume(capacity).is_err() {
                return Err(AppError::ValidationMessage(
                    "A capacidade do caminhão deve ser positiva".to_string(),
                ));
            }
        }
        if let Some(driver_id) = request.driver_id {
            self.ensure_driver(ctx, driver_id).await?;
        }

        let updated = self
            .trucks
            .update(id, ctx.company_id, |truck| {
                if request.model.is_some() {
                    truck.model = request.model;
                }
                if let Some(capacity) = request.capacity_m3 {
                    truck.capacity_m3 = capacity;
                }
                if let Some(status) = status {
                    truck.status = status;
                }
                if request.driver_id.is_some() {
                    truck.driver_id = request.driver_id;
                }
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            updated.record.into(),
            "Caminhão atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, ctx: &AuthenticatedUser, id: Uuid) -> AppResult<()> {
        Self::ensure_can_manage(ctx)?;
        self.trucks.delete(id, ctx.company_id).await
    }
}
