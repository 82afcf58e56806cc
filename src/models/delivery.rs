//! Modelo de Entrega e sua máquina de estados
//!
//! O ciclo de vida é uma tabela explícita `status × ação -> próximo
//! status`; toda transição fora da tabela é rejeitada de forma
//! uniforme. Invariante do registro: `actual_volume_m3` está presente
//! se e somente se o status é `finalizada`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Status da entrega - vocabulário único para todo o sistema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    #[serde(rename = "agendada")]
    Agendada,
    #[serde(rename = "em_rota")]
    EmRota,
    #[serde(rename = "finalizada")]
    Finalizada,
    #[serde(rename = "cancelada")]
    Cancelada,
}

impl DeliveryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryStatus::Agendada => "agendada",
            DeliveryStatus::EmRota => "em_rota",
            DeliveryStatus::Finalizada => "finalizada",
            DeliveryStatus::Cancelada => "cancelada",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "agendada" => Some(DeliveryStatus::Agendada),
            "em_rota" => Some(DeliveryStatus::EmRota),
            "finalizada" => Some(DeliveryStatus::Finalizada),
            "cancelada" => Some(DeliveryStatus::Cancelada),
            _ => None,
        }
    }

    /// Estados terminais não admitem nenhuma ação
    pub fn is_terminal(&self) -> bool {
        matches!(self, DeliveryStatus::Finalizada | DeliveryStatus::Cancelada)
    }

    /// Tabela de transições do ciclo de vida
    pub fn apply(self, action: DeliveryAction) -> Result<DeliveryStatus, InvalidTransition> {
        use DeliveryAction::*;
        use DeliveryStatus::*;

        match (self, action) {
            (Agendada, StartTrip) => Ok(EmRota),
            (Agendada, Finalize) | (EmRota, Finalize) => Ok(Finalizada),
            (Agendada, Cancel) | (EmRota, Cancel) => Ok(Cancelada),
            (from, action) => Err(InvalidTransition { from, action }),
        }
    }
}

impl fmt::Display for DeliveryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ações do operador sobre uma entrega
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryAction {
    StartTrip,
    Finalize,
    Cancel,
}

impl DeliveryAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryAction::StartTrip => "iniciar_viagem",
            DeliveryAction::Finalize => "finalizar",
            DeliveryAction::Cancel => "cancelar",
        }
    }
}

/// Transição rejeitada pela tabela
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: DeliveryStatus,
    pub action: DeliveryAction,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ação '{}' não é permitida para entrega com status '{}'",
            self.action.as_str(),
            self.from.as_str()
        )
    }
}

impl std::error::Error for InvalidTransition {}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Delivery {
    pub id: Uuid,
    pub company_id: Uuid,
    /// Orçamento aprovado que originou a entrega
    pub quote_id: Uuid,
    pub vendedor_id: Uuid,
    /// Nulo até a atribuição de motorista
    pub motorista_id: Option<Uuid>,
    pub scheduled_date: DateTime<Utc>,
    pub destination: String,
    /// Volume contratado (m³)
    pub volume_m3: Decimal,
    /// Volume efetivamente entregue, coletado na finalização
    pub actual_volume_m3: Option<Decimal>,
    pub status: DeliveryStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Delivery {
    /// Invariante: volume realizado presente <=> entrega finalizada
    pub fn volume_invariant_holds(&self) -> bool {
        self.actual_volume_m3.is_some() == (self.status == DeliveryStatus::Finalizada)
    }
}

#[cfg(test)]
mod tests {
    use super::DeliveryAction::*;
    use super::DeliveryStatus::*;
    use super::*;

    #[test]
    fn test_happy_path_transitions() {
        assert_eq!(Agendada.apply(StartTrip), Ok(EmRota));
        assert_eq!(EmRota.apply(Finalize), Ok(Finalizada));
        assert_eq!(Agendada.apply(Finalize), Ok(Finalizada));
        assert_eq!(Agendada.apply(Cancel), Ok(Cancelada));
        assert_eq!(EmRota.apply(Cancel), Ok(Cancelada));
    }

    #[test]
    fn test_start_trip_cannot_reenter_em_rota() {
        assert_eq!(
            EmRota.apply(StartTrip),
            Err(InvalidTransition {
                from: EmRota,
                action: StartTrip
            })
        );
    }

    #[test]
    fn test_terminal_states_reject_every_action() {
        for from in [Finalizada, Cancelada] {
            for action in [StartTrip, Finalize, Cancel] {
                assert_eq!(from.apply(action), Err(InvalidTransition { from, action }));
            }
        }
    }

    #[test]
    fn test_status_serde_vocabulary() {
        assert_eq!(
            serde_json::to_string(&EmRota).unwrap(),
            "\"em_rota\"".to_string()
        );
        let parsed: DeliveryStatus = serde_json::from_str("\"finalizada\"").unwrap();
        assert_eq!(parsed, Finalizada);
        assert_eq!(DeliveryStatus::from_str("concluida"), None);
    }
}
