//! Repositórios de acesso às coleções

pub mod client_repository;
pub mod company_repository;
pub mod delivery_repository;
pub mod finance_repository;
pub mod quote_repository;
pub mod settings_repository;
pub mod truck_repository;
pub mod user_repository;
