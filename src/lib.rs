//! ConcreteFlow - backend de gestão para concreteiras
//!
//! API multi-tenant: orçamentos, agendamento e ciclo de vida de
//! entregas, frota, configurações de valores e relatórios financeiros
//! derivados, com papéis de admin, vendedor e motorista.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod storage;
pub mod utils;
