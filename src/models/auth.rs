//! Tipos de autenticação
//!
//! Claims do JWT e o contexto explícito de identidade/tenant que é
//! injetado em toda operação protegida - nenhuma operação depende de
//! sessão ambiente.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::user::UserRole;

/// Claims do JWT
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// user_id
    pub sub: String,
    pub company_id: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Contexto do usuário autenticado, passado por referência para as
/// operações que precisam de escopo de identidade/empresa
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub company_id: Uuid,
    pub role: UserRole,
}
