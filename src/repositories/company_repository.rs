//! Repositório de empresas

use chrono::Utc;
use uuid::Uuid;

use crate::models::company::Company;
use crate::storage::{Collection, MemoryStore};
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct CompanyRepository {
    companies: Collection<Company>,
}

impl CompanyRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            companies: store.companies.clone(),
        }
    }

    pub async fn create(
        &self,
        name: String,
        cnpj: String,
        address: Option<String>,
    ) -> AppResult<Company> {
        if self.cnpj_exists(&cnpj).await {
            return Err(conflict_error("Empresa", "CNPJ", &cnpj));
        }

        let id = Uuid::new_v4();
        let company = Company {
            id,
            name,
            cnpj,
            address,
            phone: None,
            email: None,
            is_active: true,
            created_at: Utc::now(),
        };
        self.companies.insert(id, company.clone()).await;
        Ok(company)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Company> {
        self.companies
            .get(id)
            .await
            .map(|v| v.record)
            .ok_or_else(|| AppError::NotFound("Empresa não encontrada".to_string()))
    }

    pub async fn cnpj_exists(&self, cnpj: &str) -> bool {
        self.companies.exists(|c| c.cnpj == cnpj).await
    }
}
