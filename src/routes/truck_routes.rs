//! Rotas de frota

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::truck_controller::TruckController;
use crate::dto::common::ApiResponse;
use crate::dto::truck_dto::{CreateTruckRequest, TruckResponse, UpdateTruckRequest};
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_truck_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_truck))
        .route("/", get(list_trucks))
        .route("/:id", get(get_truck))
        .route("/:id", put(update_truck))
        .route("/:id", delete(delete_truck))
}

async fn create_truck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Json(request): Json<CreateTruckRequest>,
) -> Result<Json<ApiResponse<TruckResponse>>, AppError> {
    let controller = TruckController::new(&state.store);
    Ok(Json(controller.create(&ctx, request).await?))
}

async fn list_trucks(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<TruckResponse>>, AppError> {
    let controller = TruckController::new(&state.store);
    Ok(Json(controller.list(&ctx).await?))
}

async fn get_truck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<TruckResponse>, AppError> {
    let controller = TruckController::new(&state.store);
    Ok(Json(controller.get_by_id(&ctx, id).await?))
}

async fn update_truck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTruckRequest>,
) -> Result<Json<ApiResponse<TruckResponse>>, AppError> {
    let controller = TruckController::new(&state.store);
    Ok(Json(controller.update(&ctx, id, request).await?))
}

async fn delete_truck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = TruckController::new(&state.store);
    controller.delete(&ctx, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Caminhão removido com sucesso"
    })))
}
