//! Controller de usuários (gestão pelo admin)

use chrono::{Duration, Utc};
use rand::distributions::Alphanumeric;
use rand::Rng;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::user_dto::{
    CreateUserRequest, CreatedUserResponse, UpdateUserStatusRequest, UserResponse,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::user::{UserRole, UserStatus};
use crate::repositories::user_repository::UserRepository;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};

/// Validade do token de ativação enviado ao novo usuário
const ACTIVATION_TOKEN_TTL_DAYS: i64 = 7;

pub struct UserController {
    users: UserRepository,
}

impl UserController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            users: UserRepository::new(store),
        }
    }

    /// Criar usuário pendente com token de ativação. A entrega do
    /// token (e-mail) é colaborador externo; ele retorna na resposta.
    pub async fn create(
        &self,
        ctx: &AuthenticatedUser,
        request: CreateUserRequest,
    ) -> AppResult<ApiResponse<CreatedUserResponse>> {
        request.validate()?;

        let role = UserRole::from_str(&request.role).ok_or_else(|| {
            AppError::BadRequest(format!("Papel inválido: '{}'", request.role))
        })?;

        let activation_token: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();

        let user = self
            .users
            .create_pending(
                ctx.company_id,
                request.name,
                request.email,
                request.phone,
                role,
                activation_token.clone(),
                Utc::now() + Duration::days(ACTIVATION_TOKEN_TTL_DAYS),
            )
            .await?;

        tracing::info!("👤 Usuário {} criado (pendente de ativação)", user.email);
        Ok(ApiResponse::success_with_message(
            CreatedUserResponse {
                user: user.into(),
                activation_token,
            },
            "Usuário criado. Envie o token de ativação para o novo colaborador".to_string(),
        ))
    }

    pub async fn list(&self, ctx: &AuthenticatedUser) -> AppResult<Vec<UserResponse>> {
        let users = self.users.list_by_company(ctx.company_id).await;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_by_id(&self, ctx: &AuthenticatedUser, id: Uuid) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await
            .filter(|v| v.record.company_id == ctx.company_id)
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;
        Ok(user.record.into())
    }

    /// Ativar/desativar conta manualmente. O próprio admin não pode se
    /// desativar.
    pub async fn update_status(
        &self,
        ctx: &AuthenticatedUser,
        id: Uuid,
        request: UpdateUserStatusRequest,
    ) -> AppResult<ApiResponse<UserResponse>> {
        let new_status = match request.status.as_str() {
            "active" => UserStatus::Active,
            "inactive" => UserStatus::Inactive,
            other => {
                return Err(AppError::BadRequest(format!(
                    "Status inválido: '{}'",
                    other
                )))
            }
        };

        if id == ctx.user_id && new_status == UserStatus::Inactive {
            return Err(AppError::BadRequest(
                "Não é possível desativar a própria conta".to_string(),
            ));
        }

        let current = self
            .users
            .find_by_id(id)
            .await
            .filter(|v| v.record.company_id == ctx.company_id)
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;

        if current.record.status == UserStatus::Pending && new_status == UserStatus::Active {
            return Err(AppError::BadRequest(
                "Contas pendentes são ativadas pelo token de ativação".to_string(),
            ));
        }

        let updated = self
            .users
            .update(id, current.version, |user| {
                user.status = new_status;
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            updated.record.into(),
            "Status do usuário atualizado com sucesso".to_string(),
        ))
    }
}
