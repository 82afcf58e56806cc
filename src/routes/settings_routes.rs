//! Rotas de configurações de valores (admin)

use axum::{
    extract::State,
    routing::{get, put},
    Extension, Json, Router,
};

use crate::controllers::settings_controller::SettingsController;
use crate::dto::common::ApiResponse;
use crate::dto::settings_dto::{SettingsResponse, UpdateSettingsRequest};
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_settings))
        .route("/", put(update_settings))
}

async fn get_settings(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
) -> Result<Json<SettingsResponse>, AppError> {
    let controller = SettingsController::new(&state.store);
    Ok(Json(controller.get(&ctx).await?))
}

async fn update_settings(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<SettingsResponse>>, AppError> {
    let controller = SettingsController::new(&state.store);
    Ok(Json(controller.update(&ctx, request).await?))
}
