//! Movimentações financeiras manuais
//!
//! Lançamentos de receitas e despesas fora do cálculo derivado por
//! entrega (aluguéis, manutenção, recebimentos avulsos).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "receita")]
    Receita,
    #[serde(rename = "despesa")]
    Despesa,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Receita => "receita",
            EntryKind::Despesa => "despesa",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "receita" => Some(EntryKind::Receita),
            "despesa" => Some(EntryKind::Despesa),
            _ => None,
        }
    }
}

/// Situação de pagamento do lançamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    #[serde(rename = "pendente")]
    Pendente,
    #[serde(rename = "pago")]
    Pago,
    #[serde(rename = "vencido")]
    Vencido,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pendente => "pendente",
            PaymentStatus::Pago => "pago",
            PaymentStatus::Vencido => "vencido",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pendente" => Some(PaymentStatus::Pendente),
            "pago" => Some(PaymentStatus::Pago),
            "vencido" => Some(PaymentStatus::Vencido),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceEntry {
    pub id: Uuid,
    pub company_id: Uuid,
    pub kind: EntryKind,
    pub category: String,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    /// Orçamento relacionado, quando houver
    pub quote_id: Option<Uuid>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}
