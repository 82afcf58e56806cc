//! Serviço JWT
//!
//! Emissão e validação de tokens HS256 com os claims de identidade e
//! tenant (usuário, empresa, papel).

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::environment::EnvironmentConfig;
use crate::models::auth::{AuthenticatedUser, Claims};
use crate::models::user::{User, UserRole};
use crate::utils::errors::{AppError, AppResult};

pub struct JwtService {
    algorithm: Algorithm,
    access_duration: Duration,
    refresh_duration: Duration,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            algorithm: Algorithm::HS256,
            access_duration: Duration::seconds(config.jwt_expiration as i64),
            refresh_duration: Duration::days(7),
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
        }
    }

    fn build_claims(&self, user: &User, duration: Duration) -> Claims {
        let now = Utc::now();
        Claims {
            sub: user.id.to_string(),
            company_id: user.company_id.to_string(),
            role: user.role.as_str().to_string(),
            exp: (now + duration).timestamp(),
            iat: now.timestamp(),
        }
    }

    /// Gera um token de acesso
    pub fn generate_access_token(&self, user: &User) -> AppResult<(String, DateTime<Utc>)> {
        let claims = self.build_claims(user, self.access_duration);
        let expires_at = DateTime::from_timestamp(claims.exp, 0)
            .ok_or_else(|| AppError::Internal("Timestamp de expiração inválido".to_string()))?;

        let token = encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar token: {}", e)))?;
        Ok((token, expires_at))
    }

    /// Gera um token de refresh (validade mais longa)
    pub fn generate_refresh_token(&self, user: &User) -> AppResult<String> {
        let claims = self.build_claims(user, self.refresh_duration);
        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Erro ao gerar token: {}", e)))
    }

    /// Valida e decodifica um token
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let validation = Validation::new(self.algorithm);
        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::Unauthorized("Token inválido ou expirado".to_string()))
    }

    /// Converte os claims validados no contexto de usuário autenticado
    pub fn authenticated_user(&self, claims: &Claims) -> AppResult<AuthenticatedUser> {
        let user_id = Uuid::parse_str(&claims.sub)
            .map_err(|_| AppError::Unauthorized("ID de usuário inválido no token".to_string()))?;
        let company_id = Uuid::parse_str(&claims.company_id)
            .map_err(|_| AppError::Unauthorized("ID de empresa inválido no token".to_string()))?;
        let role = UserRole::from_str(&claims.role)
            .ok_or_else(|| AppError::Unauthorized("Papel inválido no token".to_string()))?;

        Ok(AuthenticatedUser {
            user_id,
            company_id,
            role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::user::UserStatus;

    fn test_config() -> EnvironmentConfig {
        EnvironmentConfig {
            environment: "test".to_string(),
            port: 0,
            host: "127.0.0.1".to_string(),
            jwt_secret: "segredo-de-teste".to_string(),
            jwt_expiration: 3600,
            cors_origins: vec![],
        }
    }

    fn test_user(role: UserRole) -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            name: "Vendedor Alpha".to_string(),
            email: "vendedor@teste.com.br".to_string(),
            phone: None,
            password_hash: Some("hash".to_string()),
            role,
            status: UserStatus::Active,
            activation_token: None,
            activation_expires: None,
            last_login: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_generate_and_validate_token() {
        let service = JwtService::new(&test_config());
        let user = test_user(UserRole::Vendedor);

        let (token, expires_at) = service.generate_access_token(&user).unwrap();
        assert!(!token.is_empty());
        assert!(expires_at > Utc::now());

        let claims = service.validate_token(&token).unwrap();
        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.role, "vendedor");

        let ctx = service.authenticated_user(&claims).unwrap();
        assert_eq!(ctx.user_id, user.id);
        assert_eq!(ctx.company_id, user.company_id);
        assert_eq!(ctx.role, UserRole::Vendedor);
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let service = JwtService::new(&test_config());
        assert!(service.validate_token("nao-e-um-jwt").is_err());
    }

    #[test]
    fn test_token_signed_with_other_secret_is_rejected() {
        let service_a = JwtService::new(&test_config());
        let mut other = test_config();
        other.jwt_secret = "outro-segredo".to_string();
        let service_b = JwtService::new(&other);

        let (token, _) = service_b
            .generate_access_token(&test_user(UserRole::Admin))
            .unwrap();
        assert!(service_a.validate_token(&token).is_err());
    }
}
