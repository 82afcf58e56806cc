//! Gerenciador do ciclo de vida da entrega
//!
//! Aplica a tabela de transições sobre o registro armazenado. Cada
//! operação lê a entrega, valida a transição e os dados exigidos por
//! ela, e grava com a versão lida; uma escrita concorrente entre a
//! leitura e a gravação vira conflito, nunca "última escrita vence".

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::auth::AuthenticatedUser;
use crate::models::delivery::{Delivery, DeliveryAction, DeliveryStatus};
use crate::repositories::delivery_repository::DeliveryRepository;
use crate::storage::{MemoryStore, Versioned};
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_positive_volume;

pub struct LifecycleService {
    deliveries: DeliveryRepository,
}

impl LifecycleService {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            deliveries: DeliveryRepository::new(store),
        }
    }

    /// Iniciar viagem: agendada -> em_rota, nenhum outro campo muda
    pub async fn start_trip(
        &self,
        ctx: &AuthenticatedUser,
        delivery_id: Uuid,
    ) -> AppResult<Versioned<Delivery>> {
        let current = self.deliveries.find_by_id(delivery_id, ctx.company_id).await?;
        let next = Self::next_status(&current.record, DeliveryAction::StartTrip)?;

        let updated = self
            .deliveries
            .update_versioned(delivery_id, current.version, |d| {
                d.status = next;
            })
            .await?;

        tracing::info!("🚚 Entrega {} em rota", delivery_id);
        Ok(updated)
    }

    /// Finalizar: exige volume realizado positivo; status e volume são
    /// gravados na mesma atualização, preservando a invariante
    /// (volume realizado presente <=> finalizada)
    pub async fn finalize(
        &self,
        ctx: &AuthenticatedUser,
        delivery_id: Uuid,
        actual_volume_m3: Option<Decimal>,
    ) -> AppResult<Versioned<Delivery>> {
        let actual_volume = actual_volume_m3.ok_or_else(|| {
            AppError::ValidationMessage(
                "Por favor, insira um volume real entregue válido".to_string(),
            )
        })?;
        if validate_positive_volume(actual_volume).is_err() {
            return Err(AppError::ValidationMessage(
                "Por favor, insira um volume real entregue válido".to_string(),
            ));
        }

        let current = self.deliveries.find_by_id(delivery_id, ctx.company_id).await?;
        let next = Self::next_status(&current.record, DeliveryAction::Finalize)?;

        let updated = self
            .deliveries
            .update_versioned(delivery_id, current.version, |d| {
                d.status = next;
                d.actual_volume_m3 = Some(actual_volume);
            })
            .await?;

        tracing::info!(
            "✅ Entrega {} finalizada com volume real {} m³",
            delivery_id,
            actual_volume
        );
        debug_assert!(updated.record.volume_invariant_holds());
        Ok(updated)
    }

    /// Cancelar: exige a confirmação explícita do chamador; além da
    /// tabela de transições nenhuma outra checagem é feita
    pub async fn cancel(
        &self,
        ctx: &AuthenticatedUser,
        delivery_id: Uuid,
        confirmed: bool,
    ) -> AppResult<Versioned<Delivery>> {
        if !confirmed {
            return Err(AppError::BadRequest(
                "O cancelamento exige confirmação explícita".to_string(),
            ));
        }

        let current = self.deliveries.find_by_id(delivery_id, ctx.company_id).await?;
        let next = Self::next_status(&current.record, DeliveryAction::Cancel)?;

        let updated = self
            .deliveries
            .update_versioned(delivery_id, current.version, |d| {
                d.status = next;
            })
            .await?;

        tracing::info!("🔴 Entrega {} cancelada", delivery_id);
        Ok(updated)
    }

    fn next_status(delivery: &Delivery, action: DeliveryAction) -> AppResult<DeliveryStatus> {
        delivery
            .status
            .apply(action)
            .map_err(|e| AppError::BadRequest(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::models::user::UserRole;

    async fn setup() -> (MemoryStore, LifecycleService, AuthenticatedUser, Uuid) {
        let store = MemoryStore::new();
        let service = LifecycleService::new(&store);
        let company_id = Uuid::new_v4();
        let ctx = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            company_id,
            role: UserRole::Admin,
        };

        let repo = DeliveryRepository::new(&store);
        let created = repo
            .create(
                company_id,
                Uuid::new_v4(),
                Uuid::new_v4(),
                None,
                Utc::now(),
                "Rua A, 100, Centro, SP".to_string(),
                Decimal::from(10),
                None,
            )
            .await
            .unwrap();

        (store, service, ctx, created.record.id)
    }

    #[tokio::test]
    async fn test_full_happy_path() {
        let (_store, service, ctx, id) = setup().await;

        let in_route = service.start_trip(&ctx, id).await.unwrap();
        assert_eq!(in_route.record.status, DeliveryStatus::EmRota);
        assert!(in_route.record.actual_volume_m3.is_none());

        let finished = service
            .finalize(&ctx, id, Some("9.5".parse().unwrap()))
            .await
            .unwrap();
        assert_eq!(finished.record.status, DeliveryStatus::Finalizada);
        assert_eq!(finished.record.actual_volume_m3, Some("9.5".parse().unwrap()));
        assert!(finished.record.volume_invariant_holds());
    }

    #[tokio::test]
    async fn test_start_trip_twice_is_rejected() {
        let (_store, service, ctx, id) = setup().await;

        service.start_trip(&ctx, id).await.unwrap();
        let err = service.start_trip(&ctx, id).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn test_finalize_rejects_invalid_volume_without_mutation() {
        let (store, service, ctx, id) = setup().await;

        for volume in [None, Some(Decimal::ZERO), Some(Decimal::from(-5))] {
            let err = service.finalize(&ctx, id, volume).await.unwrap_err();
            assert!(matches!(err, AppError::ValidationMessage(_)));
        }

        // Nada mudou: status e versão seguem os originais
        let stored = store.deliveries.get(id).await.unwrap();
        assert_eq!(stored.record.status, DeliveryStatus::Agendada);
        assert!(stored.record.actual_volume_m3.is_none());
        assert_eq!(stored.version, 1);
    }

    #[tokio::test]
    async fn test_cancel_requires_confirmation() {
        let (store, service, ctx, id) = setup().await;

        let err = service.cancel(&ctx, id, false).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(
            store.deliveries.get(id).await.unwrap().record.status,
            DeliveryStatus::Agendada
        );

        let canceled = service.cancel(&ctx, id, true).await.unwrap();
        assert_eq!(canceled.record.status, DeliveryStatus::Cancelada);
    }

    #[tokio::test]
    async fn test_cancel_finished_delivery_is_rejected() {
        let (store, service, ctx, id) = setup().await;

        service
            .finalize(&ctx, id, Some(Decimal::from(10)))
            .await
            .unwrap();
        let err = service.cancel(&ctx, id, true).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(
            store.deliveries.get(id).await.unwrap().record.status,
            DeliveryStatus::Finalizada
        );
    }

    #[tokio::test]
    async fn test_canceled_is_terminal() {
        let (_store, service, ctx, id) = setup().await;

        service.cancel(&ctx, id, true).await.unwrap();
        assert!(service.start_trip(&ctx, id).await.is_err());
        assert!(service
            .finalize(&ctx, id, Some(Decimal::from(10)))
            .await
            .is_err());
        assert!(service.cancel(&ctx, id, true).await.is_err());
    }

    #[tokio::test]
    async fn test_tenant_scope_hides_foreign_delivery() {
        let (_store, service, _ctx, id) = setup().await;
        let outsider = AuthenticatedUser {
            user_id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            role: UserRole::Admin,
        };

        let err = service.start_trip(&outsider, id).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
