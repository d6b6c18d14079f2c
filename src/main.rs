use std::{net::SocketAddr, sync::Arc};

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use fleet_manager::{
    config::{EnvironmentConfig, StoreBackend},
    create_app,
    database::DatabaseConnection,
    repositories::{FleetStore, MemoryFleetStore, PgFleetStore},
    AppState,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,fleet_manager=debug")),
        )
        .init();

    info!("🚐 Fleet Manager API");
    info!("===================");

    let config = EnvironmentConfig::from_env().map_err(|e| {
        error!("❌ Configuración inválida: {:#}", e);
        e
    })?;

    let store: Arc<dyn FleetStore> = match (&config.store_backend, &config.database) {
        (StoreBackend::Postgres, Some(database)) => {
            let connection = DatabaseConnection::connect(database).await.map_err(|e| {
                error!("❌ Error conectando a la base de datos: {:#}", e);
                e
            })?;
            info!("✅ PostgreSQL conectado y migrado");
            Arc::new(PgFleetStore::new(connection.pool().clone()))
        }
        (StoreBackend::Postgres, None) => {
            anyhow::bail!("DATABASE_URL must be set when STORE_BACKEND=postgres")
        }
        (StoreBackend::Memory, _) => {
            warn!("⚠️ Almacén en memoria: los datos se pierden al reiniciar");
            Arc::new(MemoryFleetStore::new())
        }
    };

    let addr: SocketAddr = config
        .server_url()
        .parse()
        .with_context(|| format!("Invalid HOST/PORT: {}", config.server_url()))?;

    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor escuchando en http://{}", addr);
    info!("   GET  /health");
    info!("   /api/vehicles, /api/insurance, /api/reminders, /api/records, /api/transactions");
    info!("   GET  /api/dashboard/stats");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Could not bind {}", addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
