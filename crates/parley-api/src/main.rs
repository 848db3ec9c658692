use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parley_api::{app::build_router, config::Config, state::AppState};
use parley_persist::{ChatStore, ChatStoreBuilder};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();
    
    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            tracing_subscriber::fmt().init();
            tracing::error!(error = %e, "Failed to load configuration");
            return Err(anyhow::anyhow!("Failed to load configuration: {}", e));
        }
    };
    
    init_logging(&config);
    
    tracing::info!("Starting Parley chat server");
    
    // Initialize persistence
    tracing::info!(database = %config.mongodb.database, "Connecting to MongoDB");
    let store = ChatStoreBuilder::new()
        .mongodb_uri(&config.mongo_uri)
        .database(&config.mongodb.database)
        .build()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "MongoDB connection failed");
            anyhow::anyhow!("MongoDB connection failed: {}", e)
        })?;
    tracing::info!("MongoDB connected");
    
    let store: Arc<dyn ChatStore> = Arc::new(store);
    let state = Arc::new(AppState::new(config.clone(), store.clone()));
    
    let app = build_router(state);
    
    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    
    tracing::info!("Server running on {}", addr);
    tracing::info!("API docs: http://{}/api/docs", addr);
    
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;
    
    // Release the store whether or not the server exited cleanly
    store.close().await;
    served?;
    
    tracing::info!("Parley chat server stopped");
    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    
    let registry = tracing_subscriber::registry().with(env_filter);
    
    match config.logging.format.as_str() {
        "json" => {
            registry
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            registry
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
    }
}

/// Resolves on SIGINT (Ctrl-C) or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to install Ctrl-C handler");
        }
    };
    
    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut s) => {
                s.recv().await;
            }
            Err(e) => tracing::warn!(error = %e, "Failed to install SIGTERM handler"),
        }
    };
    
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();
    
    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    
    tracing::info!("Shutdown signal received");
}
