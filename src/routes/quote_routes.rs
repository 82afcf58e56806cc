//! Rotas de orçamentos

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::quote_controller::QuoteController;
use crate::dto::common::ApiResponse;
use crate::dto::quote_dto::{CreateQuoteRequest, QuoteFilters, QuoteResponse};
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_quote))
        .route("/", get(list_quotes))
        .route("/:id", get(get_quote))
        .route("/:id/approve", post(approve_quote))
        .route("/:id/reject", post(reject_quote))
}

async fn create_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Json(request): Json<CreateQuoteRequest>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(&state.store);
    Ok(Json(controller.create(&ctx, request).await?))
}

async fn list_quotes(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Query(filters): Query<QuoteFilters>,
) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(&state.store);
    Ok(Json(controller.list(&ctx, filters).await?))
}

async fn get_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<QuoteResponse>, AppError> {
    let controller = QuoteController::new(&state.store);
    Ok(Json(controller.get_by_id(&ctx, id).await?))
}

async fn approve_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(&state.store);
    Ok(Json(controller.approve(&ctx, id).await?))
}

async fn reject_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(&state.store);
    Ok(Json(controller.reject(&ctx, id).await?))
}
