//! Serviços de domínio e infraestrutura

pub mod authorization_service;
pub mod finance_service;
pub mod jwt_service;
pub mod lifecycle_service;
pub mod report_service;
