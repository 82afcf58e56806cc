//! Controllers: orquestração entre rotas, serviços e repositórios

pub mod auth_controller;
pub mod client_controller;
pub mod delivery_controller;
pub mod finance_controller;
pub mod quote_controller;
pub mod report_controller;
pub mod settings_controller;
pub mod truck_controller;
pub mod user_controller;
