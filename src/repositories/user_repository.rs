//! Repositório de usuários

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::user::{User, UserRole, UserStatus};
use crate::storage::{Collection, MemoryStore, Versioned};
use crate::utils::errors::{conflict_error, AppResult};

pub struct UserRepository {
    users: Collection<User>,
}

impl UserRepository {
    pub fn new(store: &MemoryStore) -> Self {
        Self {
            users: store.users.clone(),
        }
    }

    /// Criar usuário ativo (fluxo de registro de empresa)
    pub async fn create_active(
        &self,
        company_id: Uuid,
        name: String,
        email: String,
        password_hash: String,
        role: UserRole,
    ) -> AppResult<User> {
        self.ensure_email_free(&email).await?;

        let now = Utc::now();
        let id = Uuid::new_v4();
        let user = User {
            id,
            company_id,
            name,
            email,
            phone: None,
            password_hash: Some(password_hash),
            role,
            status: UserStatus::Active,
            activation_token: None,
            activation_expires: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(id, user.clone()).await;
        Ok(user)
    }

    /// Criar usuário pendente de ativação (fluxo de convite pelo admin)
    pub async fn create_pending(
        &self,
        company_id: Uuid,
        name: String,
        email: String,
        phone: Option<String>,
        role: UserRole,
        activation_token: String,
        activation_expires: DateTime<Utc>,
    ) -> AppResult<User> {
        self.ensure_email_free(&email).await?;

        let now = Utc::now();
        let id = Uuid::new_v4();
        let user = User {
            id,
            company_id,
            name,
            email,
            phone,
            password_hash: None,
            role,
            status: UserStatus::Pending,
            activation_token: Some(activation_token),
            activation_expires: Some(activation_expires),
            last_login: None,
            created_at: now,
            updated_at: now,
        };
        self.users.insert(id, user.clone()).await;
        Ok(user)
    }

    async fn ensure_email_free(&self, email: &str) -> AppResult<()> {
        if self.users.exists(|u| u.email == email).await {
            return Err(conflict_error("Usuário", "e-mail", email));
        }
        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Option<Versioned<User>> {
        self.users.get(id).await
    }

    /// Busca global por e-mail (login) - e-mails são únicos no sistema
    pub async fn find_by_email(&self, email: &str) -> Option<Versioned<User>> {
        self.users.find(|u| u.email == email).await
    }

    pub async fn find_by_activation_token(&self, token: &str) -> Option<Versioned<User>> {
        self.users
            .find(|u| u.activation_token.as_deref() == Some(token))
            .await
    }

    pub async fn list_by_company(&self, company_id: Uuid) -> Vec<User> {
        let mut users: Vec<User> = self
            .users
            .filter(|u| u.company_id == company_id)
            .await
            .into_iter()
            .map(|v| v.record)
            .collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        users
    }

    pub async fn update<F>(&self, id: Uuid, version: u32, apply: F) -> AppResult<Versioned<User>>
    where
        F: FnOnce(&mut User),
    {
        let updated = self
            .users
            .update(id, version, |user| {
                apply(user);
                user.updated_at = Utc::now();
            })
            .await?;
        Ok(updated)
    }

    /// Registrar o instante do último login (melhor esforço: um
    /// conflito de versão aqui não deve derrubar o login)
    pub async fn touch_last_login(&self, id: Uuid) {
        if let Some(current) = self.users.get(id).await {
            let _ = self
                .users
                .update(id, current.version, |user| {
                    user.last_login = Some(Utc::now());
                })
                .await;
        }
    }
}
