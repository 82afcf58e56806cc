//! DTOs de autenticação e registro

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::dto::user_dto::UserResponse;

/// Registro de empresa junto com seu primeiro administrador
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterCompanyRequest {
    #[validate(length(min = 2, max = 120))]
    pub company_name: String,

    #[validate(custom = "crate::utils::validation::validate_cpf_cnpj")]
    pub company_cnpj: String,

    pub company_address: Option<String>,

    #[validate(length(min = 2, max = 120))]
    pub admin_name: String,

    #[validate(email)]
    pub admin_email: String,

    #[validate(length(min = 6, max = 72))]
    pub admin_password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub token: Option<String>,
    pub user: Option<UserResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct RefreshTokenRequest {
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct RefreshTokenResponse {
    pub success: bool,
    pub token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Ativação de conta pendente: o usuário define a própria senha
#[derive(Debug, Deserialize, Validate)]
pub struct ActivateAccountRequest {
    #[validate(length(min = 16))]
    pub token: String,

    #[validate(length(min = 6, max = 72))]
    pub password: String,
}
