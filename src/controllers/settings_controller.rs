//! Controller de configurações de valores

use crate::dto::common::ApiResponse;
use crate::dto::settings_dto::{SettingsResponse, UpdateSettingsRequest};
use crate::models::auth::AuthenticatedUser;
use crate::repositories::settings_repository::SettingsRepository;
use crate::storage::MemoryStore;
use crate::utils::errors::{AppError, AppResult};
use crate::utils::validation::validate_non_negative_amount;

pub struct SettingsController {
    settings: SettingsRepository,
}

impl SettingsController {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            settings: SettingsRepository::new(store),
        }
    }

    pub async fn get(&self, ctx: &AuthenticatedUser) -> AppResult<SettingsResponse> {
        self.settings
            .find_by_company(ctx.company_id)
            .await
            .map(SettingsResponse::from)
            .ok_or_else(|| {
                AppError::NotFound(
                    "Configurações não encontradas. Defina os valores mestres da empresa"
                        .to_string(),
                )
            })
    }

    /// Upsert do registro único de taxas; todas não negativas
    pub async fn update(
        &self,
        ctx: &AuthenticatedUser,
        request: UpdateSettingsRequest,
    ) -> AppResult<ApiResponse<SettingsResponse>> {
        for (label, value) in [
            ("taxa mínima do frete", request.min_freight_fee),
            ("valor do frete por m³", request.freight_rate_m3),
            ("repasse por m³", request.repasse_rate_m3),
        ] {
            if validate_non_negative_amount(value).is_err() {
                return Err(AppError::ValidationMessage(format!(
                    "O valor de {} não pode ser negativo",
                    label
                )));
            }
        }

        let settings = self
            .settings
            .upsert(
                ctx.company_id,
                request.min_freight_fee,
                request.freight_rate_m3,
                request.repasse_rate_m3,
            )
            .await?;

        tracing::info!("💰 Valores mestres atualizados para a empresa {}", ctx.company_id);
        Ok(ApiResponse::success_with_message(
            settings.into(),
            "Configurações mestras salvas com sucesso".to_string(),
        ))
    }
}
