//! Rotas de clientes

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::client_controller::ClientController;
use crate::dto::client_dto::{ClientResponse, CreateClientRequest, UpdateClientRequest};
use crate::dto::common::ApiResponse;
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_client))
        .route("/", get(list_clients))
        .route("/:id", get(get_client))
        .route("/:id", put(update_client))
        .route("/:id", delete(delete_client))
}

async fn create_client(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Json(request): Json<CreateClientRequest>,
) -> Result<Json<ApiResponse<ClientResponse>>, AppError> {
    let controller = ClientController::new(&state.store);
    Ok(Json(controller.create(&ctx, request).await?))
}

async fn list_clients(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let controller = ClientController::new(&state.store);
    Ok(Json(controller.list(&ctx).await?))
}

async fn get_client(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(&state.store);
    Ok(Json(controller.get_by_id(&ctx, id).await?))
}

async fn update_client(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateClientRequest>,
) -> Result<Json<ApiResponse<ClientResponse>>, AppError> {
    let controller = ClientController::new(&state.store);
    Ok(Json(controller.update(&ctx, id, request).await?))
}

async fn delete_client(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ClientController::new(&state.store);
    controller.delete(&ctx, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cliente removido com sucesso"
    })))
}
