//! Rotas de autenticação
//!
//! Registro, login, refresh e ativação são públicas; `/me` recebe o
//! middleware de autenticação individualmente.

use axum::{
    extract::State,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::auth_controller::AuthController;
use crate::dto::auth_dto::{
    ActivateAccountRequest, LoginRequest, LoginResponse, RefreshTokenRequest,
    RefreshTokenResponse, RegisterCompanyRequest,
};
use crate::dto::common::ApiResponse;
use crate::dto::user_dto::UserResponse;
use crate::middleware::auth::auth_middleware;
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/me", get(me))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/refresh", post(refresh))
        .route("/activate", post(activate))
        .merge(protected)
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterCompanyRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(&state.store, &state.config);
    Ok(Json(controller.register(request).await?))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(&state.store, &state.config);
    Ok(Json(controller.login(request).await?))
}

async fn refresh(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> Result<Json<RefreshTokenResponse>, AppError> {
    let controller = AuthController::new(&state.store, &state.config);
    Ok(Json(controller.refresh(request).await?))
}

async fn activate(
    State(state): State<AppState>,
    Json(request): Json<ActivateAccountRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = AuthController::new(&state.store, &state.config);
    Ok(Json(controller.activate(request).await?))
}

async fn me(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = AuthController::new(&state.store, &state.config);
    Ok(Json(controller.me(&ctx).await?))
}
