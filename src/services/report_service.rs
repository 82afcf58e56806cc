//! Relatórios financeiros e dashboards por papel
//!
//! Agrega as figuras do motor de derivação sobre o conjunto filtrado
//! de entregas. Sem configuração de taxas o relatório sai vazio com
//! totais zerados - nunca falha por falta de configuração.

use crate::dto::delivery_dto::DeliveryFilters;
use crate::dto::report_dto::{
    DashboardResponse, DeliveryFinancialsResponse, FinancialReportQuery, FinancialReportResponse,
    FinancialTotalsResponse,
};
use crate::models::auth::AuthenticatedUser;
use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::models::quote::QuoteStatus;
use crate::models::truck::TruckStatus;
use crate::models::user::UserRole;
use crate::repositories::delivery_repository::DeliveryRepository;
use crate::repositories::settings_repository::SettingsRepository;
use crate::services::finance_service::{self, FinancialTotals, VolumeBase};
use crate::storage::MemoryStore;
use crate::utils::errors::AppResult;

pub struct ReportService {
    store: MemoryStore,
    deliveries: DeliveryRepository,
    settings: SettingsRepository,
}

impl ReportService {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            store: store.clone(),
            deliveries: DeliveryRepository::new(store),
            settings: SettingsRepository::new(store),
        }
    }

    /// Relatório financeiro detalhado por entrega com totais
    pub async fn financial_report(
        &self,
        ctx: &AuthenticatedUser,
        query: &FinancialReportQuery,
    ) -> AppResult<FinancialReportResponse> {
        // Vendedor só enxerga as próprias vendas, qualquer que seja o
        // filtro pedido
        let vendedor_filter = match ctx.role {
            UserRole::Vendedor => Some(ctx.user_id),
            _ => query.vendedor_id,
        };

        let filters = DeliveryFilters {
            status: query.status.clone(),
            motorista_id: None,
            vendedor_id: vendedor_filter,
            from: query.from,
            to: query.to,
        };

        let records: Vec<Delivery> = self
            .deliveries
            .list(ctx.company_id, &filters)
            .await?
            .into_iter()
            .map(|v| v.record)
            .collect();

        let rates = self.settings.find_by_company(ctx.company_id).await;
        let derived = finance_service::derive_all(&records, rates.as_ref(), query.volume_base);
        let totals = FinancialTotals::from_figures(derived.iter().map(|(_, f)| f));

        Ok(FinancialReportResponse {
            deliveries: derived
                .into_iter()
                .map(|(d, f)| DeliveryFinancialsResponse {
                    delivery_id: d.id,
                    destination: d.destination.clone(),
                    status: d.status.as_str().to_string(),
                    vendedor_id: d.vendedor_id,
                    volume_m3: f.volume_m3,
                    gross_revenue: f.gross_revenue,
                    freight_cost: f.freight_cost,
                    plant_cost: f.plant_cost,
                    total_cost: f.total_cost,
                    net_profit: f.net_profit,
                })
                .collect(),
            totals: FinancialTotalsResponse {
                gross_revenue: totals.gross_revenue,
                freight_cost: totals.freight_cost,
                plant_cost: totals.plant_cost,
                total_cost: totals.total_cost,
                net_profit: totals.net_profit,
            },
            settings_configured: rates.is_some(),
        })
    }

    /// Contadores do dashboard, moldados pelo papel do usuário
    pub async fn dashboard(&self, ctx: &AuthenticatedUser) -> AppResult<DashboardResponse> {
        let deliveries: Vec<Delivery> = self
            .store
            .deliveries
            .filter(|d| {
                d.company_id == ctx.company_id
                    && match ctx.role {
                        UserRole::Admin => true,
                        UserRole::Vendedor => d.vendedor_id == ctx.user_id,
                        UserRole::Motorista => d.motorista_id == Some(ctx.user_id),
                    }
            })
            .await
            .into_iter()
            .map(|v| v.record)
            .collect();

        let count_status =
            |s: DeliveryStatus| deliveries.iter().filter(|d| d.status == s).count();

        let mut response = DashboardResponse {
            role: ctx.role.as_str().to_string(),
            deliveries_agendadas: count_status(DeliveryStatus::Agendada),
            deliveries_em_rota: count_status(DeliveryStatus::EmRota),
            deliveries_finalizadas: count_status(DeliveryStatus::Finalizada),
            deliveries_canceladas: count_status(DeliveryStatus::Cancelada),
            quotes_pendentes: None,
            quotes_aprovados: None,
            clients: None,
            trucks_disponiveis: None,
            net_profit: None,
        };

        if matches!(ctx.role, UserRole::Admin | UserRole::Vendedor) {
            let quotes = self
                .store
                .quotes
                .filter(|q| {
                    q.company_id == ctx.company_id
                        && (ctx.role == UserRole::Admin || q.vendedor_id == ctx.user_id)
                })
                .await;
            response.quotes_pendentes = Some(
                quotes
                    .iter()
                    .filter(|q| q.record.status == QuoteStatus::Pendente)
                    .count(),
            );
            response.quotes_aprovados = Some(
                quotes
                    .iter()
                    .filter(|q| q.record.status == QuoteStatus::Aprovado)
                    .count(),
            );
            response.clients = Some(
                self.store
                    .clients
                    .filter(|c| c.company_id == ctx.company_id)
                    .await
                    .len(),
            );
        }

        if ctx.role == UserRole::Admin {
            response.trucks_disponiveis = Some(
                self.store
                    .trucks
                    .filter(|t| {
                        t.company_id == ctx.company_id && t.status == TruckStatus::Disponivel
                    })
                    .await
                    .len(),
            );

            // Lucro agregado sobre todas as entregas, base padrão
            let rates = self.settings.find_by_company(ctx.company_id).await;
            let derived =
                finance_service::derive_all(&deliveries, rates.as_ref(), VolumeBase::default());
            let totals = FinancialTotals::from_figures(derived.iter().map(|(_, f)| f));
            response.net_profit = Some(totals.net_profit);
        }

        Ok(response)
    }
}
