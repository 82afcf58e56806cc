//! Camada de armazenamento em processo
//!
//! O estado do sistema vive em coleções em memória compartilhadas pelo
//! router; um armazenamento externo de documentos é tratado como
//! colaborador e não faz parte deste escopo.

pub mod memory;
pub mod seed;

pub use memory::{Collection, StoreError, Versioned};

use crate::models::client::Client;
use crate::models::company::Company;
use crate::models::delivery::Delivery;
use crate::models::finance::FinanceEntry;
use crate::models::quote::Quote;
use crate::models::settings::RateSettings;
use crate::models::truck::Truck;
use crate::models::user::User;

/// Conjunto de coleções do sistema, uma por agregado
#[derive(Debug, Clone)]
pub struct MemoryStore {
    pub companies: Collection<Company>,
    pub users: Collection<User>,
    pub clients: Collection<Client>,
    pub trucks: Collection<Truck>,
    pub quotes: Collection<Quote>,
    pub deliveries: Collection<Delivery>,
    pub settings: Collection<RateSettings>,
    pub finance_entries: Collection<FinanceEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            companies: Collection::new("companies"),
            users: Collection::new("users"),
            clients: Collection::new("clients"),
            trucks: Collection::new("trucks"),
            quotes: Collection::new("quotes"),
            deliveries: Collection::new("deliveries"),
            settings: Collection::new("settings"),
            finance_entries: Collection::new("finance_entries"),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}
