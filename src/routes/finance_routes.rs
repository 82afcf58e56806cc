//! Rotas de movimentações financeiras (admin)

use axum::{
    extract::{Query, State},
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::finance_controller::FinanceController;
use crate::dto::common::ApiResponse;
use crate::dto::finance_dto::{CreateEntryRequest, EntryFilters, EntryResponse};
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_finance_router() -> Router<AppState> {
    Router::new()
        .route("/movement", post(create_entry))
        .route("/movement", get(list_entries))
}

async fn create_entry(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Json(request): Json<CreateEntryRequest>,
) -> Result<Json<ApiResponse<EntryResponse>>, AppError> {
    let controller = FinanceController::new(&state.store);
    Ok(Json(controller.create(&ctx, request).await?))
}

async fn list_entries(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Query(filters): Query<EntryFilters>,
) -> Result<Json<Vec<EntryResponse>>, AppError> {
    let controller = FinanceController::new(&state.store);
    Ok(Json(controller.list(&ctx, filters).await?))
}
