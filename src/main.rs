use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};

use taller_api::config::{DatabaseConfig, EnvironmentConfig};
use taller_api::database::DatabaseConnection;
use taller_api::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🔧 Taller API - Reportes, mecánicos y vehículos");
    info!("================================================");

    // Sin conexión no hay servicio: se termina con código distinto de cero
    let db_config = DatabaseConfig::from_env();
    let db_connection = match DatabaseConnection::connect(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let app = create_router(AppState::from_pool(db_connection.pool().clone()));

    let listener = tokio::net::TcpListener::bind(config.server_url()).await?;
    let addr = listener.local_addr()?;

    info!("🚀 Servidor corriendo en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    / - Bienvenida");
    info!("📋 Reportes:");
    info!("   GET    /api/reports - Listar reportes");
    info!("   POST   /api/reports - Crear reporte");
    info!("   PUT    /api/reports/:id - Actualizar reporte");
    info!("🔧 Mecánicos:");
    info!("   GET    /api/users - Listar mecánicos");
    info!("   POST   /api/users - Agregar mecánico");
    info!("   POST   /api/mechanic - Agregar mecánico");
    info!("   PUT    /api/mechanic/:id - Actualizar mecánico");
    info!("   DELETE /api/mechanic/:id - Eliminar mecánico");
    info!("🚗 Vehículos:");
    info!("   GET    /api/vehiculos - Listar vehículos");
    info!("   POST   /api/vehiculos - Registrar vehículo");
    info!("   PUT    /api/vehiculos/:id - Actualizar vehículo");
    info!("   DELETE /api/vehiculos/:id - Eliminar vehículo");
    info!("🔑 Login:");
    info!("   POST   /api/login/mechanic - Login de mecánico");
    info!("   POST   /api/login/admin - Login de administrador");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    db_connection.close().await;

    if let Err(e) = served {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
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
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
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
