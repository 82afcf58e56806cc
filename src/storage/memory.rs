//! Armazenamento em memória
//!
//! Coleções de documentos por entidade, guardadas em processo. Cada
//! registro carrega um carimbo de versão; toda atualização compara a
//! versão lida com a versão armazenada e rejeita o conflito em vez de
//! aplicar "última escrita vence".

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::utils::errors::AppError;

/// Erros da camada de armazenamento
#[derive(Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("record not found")]
    NotFound,

    #[error("version conflict: expected {expected}, found {actual}")]
    VersionConflict { expected: u32, actual: u32 },
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("Registro não encontrado".to_string()),
            StoreError::VersionConflict { .. } => AppError::Conflict(
                "O registro foi modificado por outra operação. Recarregue e tente novamente"
                    .to_string(),
            ),
        }
    }
}

/// Registro armazenado com seu carimbo de versão
#[derive(Debug, Clone)]
pub struct Versioned<T> {
    pub record: T,
    pub version: u32,
}

/// Uma coleção de documentos indexada por id
#[derive(Debug)]
pub struct Collection<T> {
    name: &'static str,
    rows: Arc<RwLock<HashMap<Uuid, Versioned<T>>>>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name,
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<T: Clone> Collection<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserir um novo registro com versão inicial 1
    pub async fn insert(&self, id: Uuid, record: T) -> Versioned<T> {
        let versioned = Versioned { record, version: 1 };
        let mut rows = self.rows.write().await;
        rows.insert(id, versioned.clone());
        log::debug!("💾 [{}] registro {} inserido (v1)", self.name, id);
        versioned
    }

    pub async fn get(&self, id: Uuid) -> Option<Versioned<T>> {
        let rows = self.rows.read().await;
        rows.get(&id).cloned()
    }

    /// Ler a coleção inteira filtrando por um predicado
    pub async fn filter<F>(&self, predicate: F) -> Vec<Versioned<T>>
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        rows.values()
            .filter(|v| predicate(&v.record))
            .cloned()
            .collect()
    }

    /// Primeiro registro que satisfaz o predicado
    pub async fn find<F>(&self, predicate: F) -> Option<Versioned<T>>
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        rows.values().find(|v| predicate(&v.record)).cloned()
    }

    pub async fn exists<F>(&self, predicate: F) -> bool
    where
        F: Fn(&T) -> bool,
    {
        let rows = self.rows.read().await;
        rows.values().any(|v| predicate(&v.record))
    }

    pub async fn count(&self) -> usize {
        let rows = self.rows.read().await;
        rows.len()
    }

    /// Atualização com controle otimista de concorrência: a mutação só é
    /// aplicada se a versão armazenada ainda for `expected_version`.
    pub async fn update<F>(
        &self,
        id: Uuid,
        expected_version: u32,
        apply: F,
    ) -> Result<Versioned<T>, StoreError>
    where
        F: FnOnce(&mut T),
    {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&id).ok_or(StoreError::NotFound)?;

        if row.version != expected_version {
            log::warn!(
                "⚠️ [{}] conflito de versão no registro {}: esperada v{}, atual v{}",
                self.name,
                id,
                expected_version,
                row.version
            );
            return Err(StoreError::VersionConflict {
                expected: expected_version,
                actual: row.version,
            });
        }

        apply(&mut row.record);
        row.version += 1;
        log::debug!("💾 [{}] registro {} atualizado (v{})", self.name, id, row.version);
        Ok(row.clone())
    }

    pub async fn remove(&self, id: Uuid) -> Result<(), StoreError> {
        let mut rows = self.rows.write().await;
        rows.remove(&id).map(|_| ()).ok_or(StoreError::NotFound)
    }
}
