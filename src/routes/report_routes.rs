//! Rotas de relatórios

use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::report_controller::ReportController;
use crate::dto::report_dto::{DashboardResponse, FinancialReportQuery, FinancialReportResponse};
use crate::models::auth::AuthenticatedUser;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_report_router() -> Router<AppState> {
    Router::new()
        .route("/financial", get(financial_report))
        .route("/dashboard", get(dashboard))
}

async fn financial_report(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
    Query(query): Query<FinancialReportQuery>,
) -> Result<Json<FinancialReportResponse>, AppError> {
    let controller = ReportController::new(&state.store);
    Ok(Json(controller.financial(&ctx, query).await?))
}

async fn dashboard(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthenticatedUser>,
) -> Result<Json<DashboardResponse>, AppError> {
    let controller = ReportController::new(&state.store);
    Ok(Json(controller.dashboard(&ctx).await?))
}
