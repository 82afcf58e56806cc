use anyhow::Result;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use concreteflow::config::environment::EnvironmentConfig;
use concreteflow::routes::create_app_router;
use concreteflow::state::AppState;
use concreteflow::storage::{seed::seed_demo_data, MemoryStore};

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏗️ ConcreteFlow - Gestão de Concretagem");
    info!("=======================================");

    let config = EnvironmentConfig::default();
    let store = MemoryStore::new();

    // Em desenvolvimento, semear dados de demonstração
    if config.is_development() {
        if let Err(e) = seed_demo_data(&store).await {
            error!("❌ Erro ao semear dados de demonstração: {}", e);
        }
    }

    let state = AppState::new(store, config.clone());
    let app = create_app_router(state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /test - Liveness");
    info!("🔐 Autenticação:");
    info!("   POST /api/auth/register - Registrar empresa + admin");
    info!("   POST /api/auth/login - Login");
    info!("   POST /api/auth/refresh - Renovar token");
    info!("   POST /api/auth/activate - Ativar conta pendente");
    info!("   GET  /api/auth/me - Usuário autenticado");
    info!("👥 Usuários (admin):");
    info!("   POST /api/user | GET /api/user | GET /api/user/:id");
    info!("   PATCH /api/user/:id/status - Ativar/desativar conta");
    info!("🧾 Clientes:");
    info!("   POST/GET /api/client | GET/PUT/DELETE /api/client/:id");
    info!("🚛 Frota:");
    info!("   POST/GET /api/truck | GET/PUT/DELETE /api/truck/:id");
    info!("📋 Orçamentos:");
    info!("   POST/GET /api/quote | GET /api/quote/:id");
    info!("   POST /api/quote/:id/approve | POST /api/quote/:id/reject");
    info!("🚚 Entregas:");
    info!("   POST/GET /api/delivery | GET /api/delivery/:id");
    info!("   PATCH /api/delivery/:id/assign - Atribuir motorista");
    info!("   POST /api/delivery/:id/start - Iniciar viagem");
    info!("   POST /api/delivery/:id/finalize - Finalizar com volume real");
    info!("   POST /api/delivery/:id/cancel - Cancelar (com confirmação)");
    info!("💰 Financeiro:");
    info!("   GET/PUT /api/settings - Valores mestres (frete/repasse)");
    info!("   POST/GET /api/finance/movement - Lançamentos manuais");
    info!("📊 Relatórios:");
    info!("   GET /api/report/financial - Derivação financeira por entrega");
    info!("   GET /api/report/dashboard - Contadores por papel");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Erro do servidor: {}", e);
            e
        })?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Desligamento gracioso em SIGINT/SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, encerrando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, encerrando servidor...");
        },
    }
}
