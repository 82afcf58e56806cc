//! Repositório de clientes

use chrono::Utc;
use uuid::Uuid;

use crate::models::client::Client;
use crate::storage::{Collection, MemoryStore, Versioned};
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct ClientRepository {
    clients: Collection<Client>,
}

impl ClientRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            clients: store.clients.clone(),
        }
    }

    pub async fn create(
        &self,
        company_id: Uuid,
        name: String,
        email: Option<String>,
        phone: Option<String>,
        address: Option<String>,
        cpf_cnpj: String,
    ) -> AppResult<Client> {
        if self
            .clients
            .exists(|c| c.company_id == company_id && c.cpf_cnpj == cpf_cnpj)
            .await
        {
            return Err(conflict_error("Cliente", "CPF/CNPJ", &cpf_cnpj));
        }

        let now = Utc::now();
        let id = Uuid::new_v4();
        let client = Client {
            id,
            company_id,
            name,
            email,
            phone,
            address,
            cpf_cnpj,
            created_at: now,
            updated_at: now,
        };
        self.clients.insert(id, client.clone()).await;
        Ok(client)
    }

    /// Busca escopada por empresa: id de outro tenant é indistinguível
    /// de inexistente
    pub async fn find_by_id(&self, id: Uuid, company_id: Uuid) -> AppResult<Versioned<Client>> {
        self.clients
            .get(id)
            .await
            .filter(|v| v.record.company_id == company_id)
            .ok_or_else(|| AppError::NotFound("Cliente não encontrado".to_string()))
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Vec<Client> {
        let mut clients: Vec<Client> = self
            .clients
            .filter(|c| c.company_id == company_id)
            .await
            .into_iter()
            .map(|v| v.record)
            .collect();
        clients.sort_by(|a, b| a.name.cmp(&b.name));
        clients
    }

    pub async fn update<F>(
        &self,
        id: Uuid,
        company_id: Uuid,
        apply: F,
    ) -> AppResult<Versioned<Client>>
    where
        F: FnOnce(&mut Client),
    {
        let current = self.find_by_id(id, company_id).await?;
        let updated = self
            .clients
            .update(id, current.version, |client| {
                apply(client);
                client.updated_at = Utc::now();
            })
            .await?;
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid, company_id: Uuid) -> AppResult<()> {
        self.find_by_id(id, company_id).await?;
        self.clients.remove(id).await?;
        Ok(())
    }
}
