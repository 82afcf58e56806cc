//! Middleware de autenticação JWT
//!
//! Extrai o Bearer token, valida os claims e injeta o contexto
//! `AuthenticatedUser` nas extensions da requisição, depois de
//! confirmar que o usuário ainda existe e está ativo.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
    Extension,
};

use crate::models::auth::AuthenticatedUser;
use crate::models::user::{UserRole, UserStatus};
use crate::services::jwt_service::JwtService;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware de autenticação: obrigatório em toda rota protegida
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .ok_or_else(|| AppError::Unauthorized("Token de autorização requerido".to_string()))?;

    let jwt_service = JwtService::new(&state.config);
    let claims = jwt_service.validate_token(token)?;
    let ctx = jwt_service.authenticated_user(&claims)?;

    // O token pode sobreviver ao usuário: confirmar existência e status
    let user = state
        .store
        .users
        .get(ctx.user_id)
        .await
        .ok_or_else(|| AppError::Unauthorized("Usuário não encontrado".to_string()))?;

    if user.record.company_id != ctx.company_id {
        return Err(AppError::Unauthorized("Token inválido".to_string()));
    }
    if user.record.status != UserStatus::Active {
        return Err(AppError::Unauthorized(
            "Usuário inativo ou suspenso".to_string(),
        ));
    }

    request.extensions_mut().insert(ctx);
    Ok(next.run(request).await)
}

/// Middleware para rotas exclusivas de administrador
pub async fn admin_only_middleware(
    Extension(ctx): Extension<AuthenticatedUser>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if ctx.role != UserRole::Admin {
        return Err(AppError::Forbidden(
            "São necessárias permissões de administrador".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
