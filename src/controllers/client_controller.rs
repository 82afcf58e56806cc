//! Controller de clientes

use uuid::Uuid;
use validator::Validate;

use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::common::ApiResponse;
use crate::models::auth::AuthenticatedUser;
use crate::repositories::client_repository::ClientRepository;
use crate::services::authorization_service::AuthorizationService;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};

pub struct ClientController {
    clients: ClientRepository,
}

impl ClientController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            clients: ClientRepository::new(store),
        }
    }

    fn ensure_can_manage(ctx: &AuthenticatedUser) -> AppResult<()> {
        if !AuthorizationService::can_manage_clients(ctx) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para gerenciar clientes".to_string(),
            ));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        ctx: &AuthenticatedUser,
        request: CreateClientRequest,
    ) -> AppResult<ApiResponse<ClientResponse>> {
        Self::ensure_can_manage(ctx)?;
        request.validate()?;

        let client = self
            .clients
            .create(
                ctx.company_id,
                request.name,
                request.email,
                request.phone,
                request.address,
                request.cpf_cnpj,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            client.into(),
            "Cliente cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn list(&self, ctx: &AuthenticatedUser) -> AppResult<Vec<ClientResponse>> {
        Self::ensure_can_manage(ctx)?;
        let clients = self.clients.list_by_company(ctx.company_id).await;
        Ok(clients.into_iter().map(ClientResponse::from).collect())
    }

    pub async fn get_by_id(&self, ctx: &AuthenticatedUser, id: Uuid) -> AppResult<ClientResponse> {
        Self::ensure_can_manage(ctx)?;
        let client = self.clients.find_by_id(id, ctx.company_id).await?;
        Ok(client.record.into())
    }

    pub async fn update(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
        request: UpdateClientRequest,
    ) -> AppResult<ApiResponse<ClientResponse>> {
        Self::ensure_can_manage(ctx)?;
        request.validate()?;

        let updated = self
            .clients
            .update(id, ctx.company_id, |client| {
                if let Some(name) = request.name {
                    client.name = name;
                }
                if request.email.is_some() {
                    client.email = request.email;
                }
                if request.phone.is_some() {
                    client.phone = request.phone;
                }
                if request.address.is_some() {
                    client.address = request.address;
                }
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            updated.record.into(),
            "Cliente atualizado com sucesso".to_string(),
        ))
    }

    pub async fn delete(&self, ctx: &AuthenticatedUser, id: Uuid) -> AppResult<()> {
        Self::ensure_can_manage(ctx)?;
        self.clients.delete(id, ctx.company_id).await
    }
}
