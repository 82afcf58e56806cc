//! Rotas de entregas

use axum::{
    extract::{Path, Query, State},
    routing::{get, patch, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::delivery_controller::DeliveryController;
use crate::dto::common::ApiResponse;
use crate::dto::delivery_dto::{
    AssignDriverRequest, CancelDeliveryRequest, CreateDeliveryRequest, DeliveryFilters,
    DeliveryResponse, FinalizeDeliveryRequest,
};
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_delivery_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_delivery))
        .route("/", get(list_deliveries))
        .route("/:id", get(get_delivery))
        .route("/:id/assign", patch(assign_driver))
        .route("/:id/start", post(start_trip))
        .route("/:id/finalize", post(finalize_delivery))
        .route("/:id/cancel", post(cancel_delivery))
}

async fn create_delivery(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Json(request): Json<CreateDeliveryRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, AppError> {
    let controller = DeliveryController::new(&state.store);
    Ok(Json(controller.create(&ctx, request).await?))
}

async fn list_deliveries(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Query(filters): Query<DeliveryFilters>,
) -> Result<Json<Vec<DeliveryResponse>>, AppError> {
    let controller = DeliveryController::new(&state.store);
    Ok(Json(controller.list(&ctx, filters).await?))
}

async fn get_delivery(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeliveryResponse>, AppError> {
    let controller = DeliveryController::new(&state.store);
    Ok(Json(controller.get_by_id(&ctx, id).await?))
}

async fn assign_driver(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<AssignDriverRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, AppError> {
    let controller = DeliveryController::new(&state.store);
    Ok(Json(controller.assign_driver(&ctx, id, request).await?))
}

async fn start_trip(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, AppError> {
    let controller = DeliveryController::new(&state.store);
    Ok(Json(controller.start_trip(&ctx, id).await?))
}

async fn finalize_delivery(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<FinalizeDeliveryRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, AppError> {
    let controller = DeliveryController::new(&state.store);
    Ok(Json(controller.finalize(&ctx, id, request).await?))
}

async fn cancel_delivery(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<CancelDeliveryRequest>,
) -> Result<Json<ApiResponse<DeliveryResponse>>, AppError> {
    let controller = DeliveryController::new(&state.store);
    Ok(Json(controller.cancel(&ctx, id, request).await?))
}
