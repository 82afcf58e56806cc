//! Serviço de autorização
//!
//! Regras de acesso por papel. Todas recebem o contexto autenticado
//! explícito; nenhuma consulta estado ambiente.

use crate::models::auth::AuthenticatedUser;
use crate::models::delivery::Delivery;
use crate::models::user::UserRole;

pub struct AuthorizationService;

impl AuthorizationService {
    /// Gestão de usuários e cadastros pendentes
    pub fn can_manage_users(ctx: &AuthenticatedUser) -> bool {
        ctx.role == UserRole::Admin
    }

    /// Valores mestres (frete e repasse)
    pub fn can_manage_settings(ctx: &AuthenticatedUser) -> bool {
        ctx.role == UserRole::Admin
    }

    /// Cadastro e manutenção de frota
    pub fn can_manage_fleet(ctx: &AuthenticatedUser) -> bool {
        ctx.role == UserRole::Admin
    }

    /// Clientes: admin e vendedores
    pub fn can_manage_clients(ctx: &AuthenticatedUser) -> bool {
        matches!(ctx.role, UserRole::Admin | UserRole::Vendedor)
    }

    /// Criar orçamentos: vendedores (e admin)
    pub fn can_create_quote(ctx: &AuthenticatedUser) -> bool {
        matches!(ctx.role, UserRole::Admin | UserRole::Vendedor)
    }

    /// Aprovar ou recusar orçamentos: apenas admin
    pub fn can_review_quote(ctx: &AuthenticatedUser) -> bool {
        ctx.role == UserRole::Admin
    }

    /// Agendar entregas a partir de orçamentos aprovados
    pub fn can_schedule_delivery(ctx: &AuthenticatedUser) -> bool {
        matches!(ctx.role, UserRole::Admin | UserRole::Vendedor)
    }

    /// Iniciar viagem / finalizar: o motorista atribuído ou o admin
    pub fn can_operate_delivery(ctx: &AuthenticatedUser, delivery: &Delivery) -> bool {
        match ctx.role {
            UserRole::Admin => true,
            UserRole::Motorista => delivery.motorista_id == Some(ctx.user_id),
            UserRole::Vendedor => false,
        }
    }

    /// Cancelar: vendedor responsável ou admin; motorista não cancela
    pub fn can_cancel_delivery(ctx: &AuthenticatedUser, delivery: &Delivery) -> bool {
        match ctx.role {
            UserRole::Admin => true,
            UserRole::Vendedor => delivery.vendedor_id == ctx.user_id,
            UserRole::Motorista => false,
        }
    }

    /// Visualizar uma entrega específica
    pub fn can_view_delivery(ctx: &AuthenticatedUser, delivery: &Delivery) -> bool {
        match ctx.role {
            UserRole::Admin => true,
            UserRole::Vendedor => delivery.vendedor_id == ctx.user_id,
            UserRole::Motorista => delivery.motorista_id == Some(ctx.user_id),
        }
    }

    /// Relatórios financeiros: admin vê tudo, vendedor só as próprias
    /// vendas, motorista não acessa o módulo
    pub fn can_view_financial_reports(ctx: &AuthenticatedUser) -> bool {
        matches!(ctx.role, UserRole::Admin | UserRole::Vendedor)
    }

    /// Lançamentos manuais do financeiro: apenas admin
    pub fn can_manage_finance_entries(ctx: &AuthenticatedUser) -> bool {
        ctx.role == UserRole::Admin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    use crate::models::delivery::DeliveryStatus;

    fn ctx(role: UserRole) -> AuthenticatedUser {
        AuthenticatedUser {
            user_id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            role,
        }
    }

    fn delivery(vendedor_id: Uuid, motorista_id: Option<Uuid>) -> Delivery {
        let now = Utc::now();
        Delivery {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            quote_id: Uuid::new_v4(),
            vendedor_id,
            motorista_id,
            scheduled_date: now,
            destination: "Rua A, 100".to_string(),
            volume_m3: Decimal::from(10),
            actual_volume_m3: None,
            status: DeliveryStatus::Agendada,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_role_gates() {
        assert!(AuthorizationService::can_manage_settings(&ctx(UserRole::Admin)));
        assert!(!AuthorizationService::can_manage_settings(&ctx(UserRole::Vendedor)));
        assert!(!AuthorizationService::can_manage_settings(&ctx(UserRole::Motorista)));

        assert!(AuthorizationService::can_create_quote(&ctx(UserRole::Vendedor)));
        assert!(!AuthorizationService::can_create_quote(&ctx(UserRole::Motorista)));

        assert!(AuthorizationService::can_view_financial_reports(&ctx(UserRole::Vendedor)));
        assert!(!AuthorizationService::can_view_financial_reports(&ctx(UserRole::Motorista)));
    }

    #[test]
    fn test_assigned_driver_operates_own_delivery() {
        let motorista = ctx(UserRole::Motorista);
        let own = delivery(Uuid::new_v4(), Some(motorista.user_id));
        let other = delivery(Uuid::new_v4(), Some(Uuid::new_v4()));

        assert!(AuthorizationService::can_operate_delivery(&motorista, &own));
        assert!(!AuthorizationService::can_operate_delivery(&motorista, &other));
        // Motorista nunca cancela, nem a própria entrega
        assert!(!AuthorizationService::can_cancel_delivery(&motorista, &own));
    }

    #[test]
    fn test_vendedor_cancels_only_own_sales() {
        let vendedor = ctx(UserRole::Vendedor);
        let own = delivery(vendedor.user_id, None);
        let other = delivery(Uuid::new_v4(), None);

        assert!(AuthorizationService::can_cancel_delivery(&vendedor, &own));
        assert!(!AuthorizationService::can_cancel_delivery(&vendedor, &other));
        assert!(!AuthorizationService::can_operate_delivery(&vendedor, &own));
    }
}
