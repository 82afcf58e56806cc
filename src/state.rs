//! Estado compartilhado da aplicação
//!
//! Este módulo define o estado que é clonado para dentro do router do
//! Axum: as coleções em memória e a configuração do ambiente.

use crate::config::environment::EnvironmentConfig;
use crate::storage::MemoryStore;

#[derive(Clone)]
pub struct AppState {
    pub store: MemoryStore,
    pub config: EnvironmentConfig,
}

impl AppState {
    pub fn new(store: MemoryStore, config: EnvironmentConfig) -> Self {
        Self { store, config }
    }
}
