//! Rotas de usuários (admin)

use axum::{
    extract::{Path, State},
    routing::{get, patch, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::user_controller::UserController;
use crate::dto::common::ApiResponse;
use crate::dto::user_dto::{
    CreateUserRequest, CreatedUserResponse, UpdateUserStatusRequest, UserResponse,
};
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(list_users))
        .route("/:id", get(get_user))
        .route("/:id/status", patch(update_user_status))
}

async fn create_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<ApiResponse<CreatedUserResponse>>, AppError> {
    let controller = UserController::new(&state.store);
    Ok(Json(controller.create(&ctx, request).await?))
}

async fn list_users(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let controller = UserController::new(&state.store);
    Ok(Json(controller.list(&ctx).await?))
}

async fn get_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, AppError> {
    let controller = UserController::new(&state.store);
    Ok(Json(controller.get_by_id(&ctx, id).await?))
}

async fn update_user_status(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateUserStatusRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(&state.store);
    Ok(Json(controller.update_status(&ctx, id, request).await?))
}
