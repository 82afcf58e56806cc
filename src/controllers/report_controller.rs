//! Controller de relatórios

use crate::dto::report_dto::{DashboardResponse, FinancialReportQuery, FinancialReportResponse};
use crate::models::auth::AuthenticatedUser;
use crate::services::authorization_service::AuthorizationService;
use crate::services::report_service::ReportService;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};

pub struct ReportController {
    reports: ReportService,
}

impl ReportController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            reports: ReportService::new(store),
        }
    }

    pub async fn financial(
        &self,
        ctx: &AuthenticatedUser,
        query: FinancialReportQuery,
    ) -> AppResult<FinancialReportResponse> {
        if !AuthorizationService::can_view_financial_reports(ctx) {
            return Err(AppError::Forbidden(
                "Você não tem permissão para acessar o módulo Financeiro".to_string(),
            ));
        }
        self.reports.financial_report(ctx, &query).await
    }

    pub async fn dashboard(&self, ctx: &AuthenticatedUser) -> AppResult<DashboardResponse> {
        self.reports.dashboard(ctx).await
    }
}
