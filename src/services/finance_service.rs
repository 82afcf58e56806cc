//! Motor de derivação financeira
//!
//! Funções puras: (entregas, taxas da empresa) -> figuras derivadas.
//! Nenhum efeito colateral, nenhum I/O; o resultado é recalculado a
//! cada requisição a partir do estado corrente.
//!
//! Fórmulas:
//!   receita bruta = volume × repasse/m³
//!   custo frete   = max(taxa mínima, volume × frete/m³)
//!   custo usina   = volume × custo fixo da usina por m³
//!   lucro líquido = receita bruta − (frete + usina), pode ser negativo

use lazy_static::lazy_static;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::delivery::{Delivery, DeliveryStatus};
use crate::models::settings::RateSettings;

lazy_static! {
    /// Custo de compra do concreto na usina por m³ (R$) - valor fixo,
    /// não configurável
    pub static ref PLANT_COST_PER_M3: Decimal = Decimal::from(80);
}

/// Base de volume usada na derivação. O comportamento observado do
/// sistema é derivar sempre do volume contratado; o volume realizado
/// fica disponível atrás de um parâmetro explícito.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum VolumeBase {
    #[default]
    #[serde(rename = "agendado")]
    Agendado,
    #[serde(rename = "realizado")]
    Realizado,
}

/// Figuras derivadas de uma entrega
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryFinancials {
    /// Volume efetivamente usado no cálculo
    pub volume_m3: Decimal,
    pub gross_revenue: Decimal,
    pub freight_cost: Decimal,
    pub plant_cost: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
}

/// Volume a faturar segundo a base escolhida: o realizado só é usado
/// quando a entrega foi finalizada e ele foi coletado
pub fn billable_volume(delivery: &Delivery, base: VolumeBase) -> Decimal {
    match base {
        VolumeBase::Agendado => delivery.volume_m3,
        VolumeBase::Realizado => {
            if delivery.status == DeliveryStatus::Finalizada {
                delivery.actual_volume_m3.unwrap_or(delivery.volume_m3)
            } else {
                delivery.volume_m3
            }
        }
    }
}

/// Deriva as figuras financeiras para um volume e um conjunto de taxas
pub fn derive(volume_m3: Decimal, rates: &RateSettings) -> DeliveryFinancials {
    let gross_revenue = volume_m3 * rates.repasse_rate_m3;
    let freight_cost = std::cmp::max(rates.min_freight_fee, volume_m3 * rates.freight_rate_m3);
    let plant_cost = volume_m3 * *PLANT_COST_PER_M3;
    let total_cost = freight_cost + plant_cost;
    let net_profit = gross_revenue - total_cost;

    DeliveryFinancials {
        volume_m3,
        gross_revenue,
        freight_cost,
        plant_cost,
        total_cost,
        net_profit,
    }
}

/// Deriva as figuras de um conjunto de entregas. Sem taxas
/// configuradas o resultado degrada para vazio em vez de falhar.
pub fn derive_all<'a>(
    deliveries: &'a [Delivery],
    rates: Option<&RateSettings>,
    base: VolumeBase,
) -> Vec<(&'a Delivery, DeliveryFinancials)> {
    let Some(rates) = rates else {
        return Vec::new();
    };

    deliveries
        .iter()
        .map(|d| (d, derive(billable_volume(d, base), rates)))
        .collect()
}

/// Somatório das figuras derivadas para os totais de dashboard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinancialTotals {
    pub gross_revenue: Decimal,
    pub freight_cost: Decimal,
    pub plant_cost: Decimal,
    pub total_cost: Decimal,
    pub net_profit: Decimal,
}

impl FinancialTotals {
    pub fn accumulate(&mut self, figures: &DeliveryFinancials) {
        self.gross_revenue += figures.gross_revenue;
        self.freight_cost += figures.freight_cost;
        self.plant_cost += figures.plant_cost;
        self.total_cost += figures.total_cost;
        self.net_profit += figures.net_profit;
    }

    pub fn from_figures<'a, I>(figures: I) -> Self
    where
        I: IntoIterator<Item = &'a DeliveryFinancials>,
    {
        let mut totals = Self::default();
        for f in figures {
            totals.accumulate(f);
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn rates(min_fee: i64, freight: i64, repasse: i64) -> RateSettings {
        RateSettings {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            min_freight_fee: Decimal::from(min_fee),
            freight_rate_m3: Decimal::from(freight),
            repasse_rate_m3: Decimal::from(repasse),
            updated_at: Utc::now(),
        }
    }

    fn delivery(volume: i64, status: DeliveryStatus, actual: Option<Decimal>) -> Delivery {
        let now = Utc::now();
        Delivery {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            quote_id: Uuid::new_v4(),
            vendedor_id: Uuid::new_v4(),
            motorista_id: None,
            scheduled_date: now,
            destination: "Rua A, 100".to_string(),
            volume_m3: Decimal::from(volume),
            actual_volume_m3: actual,
            status,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_typical_delivery_figures() {
        // volume 10, repasse 150, frete 10, taxa mínima 80, usina 80
        let figures = derive(Decimal::from(10), &rates(80, 10, 150));

        assert_eq!(figures.gross_revenue, Decimal::from(1500));
        assert_eq!(figures.freight_cost, Decimal::from(100));
        assert_eq!(figures.plant_cost, Decimal::from(800));
        assert_eq!(figures.total_cost, Decimal::from(900));
        assert_eq!(figures.net_profit, Decimal::from(600));
    }

    #[test]
    fn test_minimum_freight_floor_applies_below_break_point() {
        // volume 2 × frete 10 = 20, abaixo do piso de 80
        let figures = derive(Decimal::from(2), &rates(80, 10, 150));
        assert_eq!(figures.freight_cost, Decimal::from(80));
    }

    #[test]
    fn test_zero_volume_keeps_freight_at_floor() {
        let figures = derive(Decimal::ZERO, &rates(80, 10, 150));
        assert_eq!(figures.gross_revenue, Decimal::ZERO);
        assert_eq!(figures.freight_cost, Decimal::from(80));
        assert_eq!(figures.plant_cost, Decimal::ZERO);
        assert_eq!(figures.net_profit, Decimal::from(-160));
    }

    #[test]
    fn test_boundary_volume_one() {
        let figures = derive(Decimal::ONE, &rates(80, 10, 150));
        // frete: max(80, 10) = 80; usina 80; receita 150
        assert_eq!(figures.freight_cost, Decimal::from(80));
        assert_eq!(figures.total_cost, Decimal::from(160));
        assert_eq!(figures.net_profit, Decimal::from(-10));
    }

    #[test]
    fn test_negative_profit_is_not_clamped() {
        // repasse baixo: custo supera a receita
        let figures = derive(Decimal::from(100), &rates(80, 10, 50));
        assert_eq!(figures.gross_revenue, Decimal::from(5000));
        assert_eq!(figures.total_cost, Decimal::from(9000));
        assert_eq!(figures.net_profit, Decimal::from(-4000));
    }

    #[test]
    fn test_missing_settings_degrades_to_empty() {
        let deliveries = vec![delivery(10, DeliveryStatus::Agendada, None)];
        let derived = derive_all(&deliveries, None, VolumeBase::Agendado);
        assert!(derived.is_empty());

        let totals = FinancialTotals::from_figures(derived.iter().map(|(_, f)| f));
        assert_eq!(totals, FinancialTotals::default());
    }

    #[test]
    fn test_volume_base_parameter() {
        let finished = delivery(
            15,
            DeliveryStatus::Finalizada,
            Some("14.8".parse().unwrap()),
        );
        let in_route = delivery(12, DeliveryStatus::EmRota, None);

        // Comportamento padrão: sempre o volume contratado
        assert_eq!(
            billable_volume(&finished, VolumeBase::Agendado),
            Decimal::from(15)
        );
        // Base realizada usa o volume coletado apenas nas finalizadas
        assert_eq!(
            billable_volume(&finished, VolumeBase::Realizado),
            "14.8".parse::<Decimal>().unwrap()
        );
        assert_eq!(
            billable_volume(&in_route, VolumeBase::Realizado),
            Decimal::from(12)
        );
    }

    #[test]
    fn test_totals_accumulate_across_deliveries() {
        let rates = rates(80, 10, 150);
        let deliveries = vec![
            delivery(10, DeliveryStatus::Finalizada, Some(Decimal::from(10))),
            delivery(2, DeliveryStatus::Agendada, None),
        ];
        let derived = derive_all(&deliveries, Some(&rates), VolumeBase::Agendado);
        let totals = FinancialTotals::from_figures(derived.iter().map(|(_, f)| f));

        // 10 m³: 1500 - 900 = 600; 2 m³: 300 - (80 + 160) = 60
        assert_eq!(totals.gross_revenue, Decimal::from(1800));
        assert_eq!(totals.freight_cost, Decimal::from(180));
        assert_eq!(totals.plant_cost, Decimal::from(960));
        assert_eq!(totals.net_profit, Decimal::from(660));
    }
}
