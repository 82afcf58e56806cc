//! Controller de autenticação
//!
//! Registro de empresa com o primeiro admin, login com bcrypt,
//! refresh de token e ativação de contas pendentes.

use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::Utc;
use validator::Validate;

use crate::config::environment::EnvironmentConfig;
use crate::dto::auth_dto::{
    ActivateAccountRequest, LoginRequest, LoginResponse, RefreshTokenRequest,
    RefreshTokenResponse, RegisterCompanyRequest,
};
use crate::dto::common::ApiResponse;
use crate::dto::user_dto::UserResponse;
use crate::models::auth::AuthenticatedUser;
use crate::models::user::{UserRole, UserStatus};
use crate::repositories::company_repository::CompanyRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::jwt_service::JwtService;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};

pub struct AuthController {
    companies: CompanyRepository,
    users: UserRepository,
    jwt_service: JwtService,
}

impl AuthController {
    pub fn new(store: &MemoryStore, config: &EnvironmentConfig) -> Self {
        Self {
            companies: CompanyRepository::new(store),
            users: UserRepository::new(store),
            jwt_service: JwtService::new(config),
        }
    }

    /// Registrar empresa + admin e já devolver a sessão autenticada
    pub async fn register(&self, request: RegisterCompanyRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let company = self
            .companies
            .create(
                request.company_name,
                request.company_cnpj,
                request.company_address,
            )
            .await?;

        let password_hash = hash(&request.admin_password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar hash de senha: {}", e)))?;

        let admin = self
            .users
            .create_active(
                company.id,
                request.admin_name,
                request.admin_email,
                password_hash,
                UserRole::Admin,
            )
            .await?;

        tracing::info!("🏢 Empresa '{}' registrada (admin {})", company.name, admin.email);
        self.session_response(admin).await
    }

    /// Login com e-mail e senha
    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        request.validate()?;

        let user = self
            .users
            .find_by_email(&request.email)
            .await
            .ok_or_else(|| AppError::Unauthorized("E-mail ou senha inválidos".to_string()))?
            .record;

        match user.status {
            UserStatus::Pending => {
                return Err(AppError::Unauthorized(
                    "Conta pendente de ativação. Utilize o token enviado pelo administrador"
                        .to_string(),
                ))
            }
            UserStatus::Inactive => {
                return Err(AppError::Unauthorized(
                    "Usuário inativo ou suspenso".to_string(),
                ))
            }
            UserStatus::Active => {}
        }

        let stored_hash = user
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::Unauthorized("E-mail ou senha inválidos".to_string()))?;
        let valid = verify(&request.password, stored_hash)
            .map_err(|e| AppError::Internal(format!("Erro ao verificar senha: {}", e)))?;
        if !valid {
            return Err(AppError::Unauthorized(
                "E-mail ou senha inválidos".to_string(),
            ));
        }

        self.users.touch_last_login(user.id).await;
        self.session_response(user).await
    }

    /// Gerar novo token de acesso a partir de um token ainda válido
    pub async fn refresh(&self, request: RefreshTokenRequest) -> AppResult<RefreshTokenResponse> {
        let claims = self.jwt_service.validate_token(&request.token)?;
        let ctx = self.jwt_service.authenticated_user(&claims)?;

        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await
            .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?
            .record;

        if user.status != UserStatus::Active {
            return Err(AppError::Unauthorized(
                "Usuário inativo ou suspenso".to_string(),
            ));
        }

        let (token, expires_at) = self.jwt_service.generate_access_token(&user)?;
        Ok(RefreshTokenResponse {
            success: true,
            token: Some(token),
            expires_at: Some(expires_at),
            message: None,
        })
    }

    /// Ativar conta pendente: valida o token, grava a senha escolhida
    /// e promove a conta para ativa
    pub async fn activate(
        &self,
        request: ActivateAccountRequest,
    ) -> AppResult<ApiResponse<UserResponse>> {
        request.validate()?;

        let pending = self
            .users
            .find_by_activation_token(&request.token)
            .await
            .ok_or_else(|| {
                AppError::NotFound("Token de ativação não encontrado".to_string())
            })?;

        let expired = pending
            .record
            .activation_expires
            .map_or(true, |expires| expires < Utc::now());
        if expired {
            return Err(AppError::BadRequest(
                "Token de ativação expirado. Solicite um novo convite".to_string(),
            ));
        }

        let password_hash = hash(&request.password, DEFAULT_COST)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar hash de senha: {}", e)))?;

        let activated = self
            .users
            .update(pending.record.id, pending.version, |user| {
                user.password_hash = Some(password_hash);
                user.status = UserStatus::Active;
                user.activation_token = None;
                user.activation_expires = None;
            })
            .await?;

        tracing::info!("✅ Conta {} ativada", activated.record.email);
        Ok(ApiResponse::success_with_message(
            activated.record.into(),
            "Conta ativada com sucesso".to_string(),
        ))
    }

    /// Dados do usuário autenticado
    pub async fn me(&self, ctx: &AuthenticatedUser) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(ctx.user_id)
            .await
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".to_string()))?;
        Ok(user.record.into())
    }

    async fn session_response(&self, user: crate::models::user::User) -> AppResult<LoginResponse> {
        let (token, expires_at) = self.jwt_service.generate_access_token(&user)?;
        Ok(LoginResponse {
            success: true,
            token: Some(token),
            user: Some(user.into()),
            message: None,
            expires_at: Some(expires_at),
        })
    }
}
