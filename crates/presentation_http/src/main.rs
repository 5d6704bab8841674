//! unilist HTTP server
//!
//! Main entry point for the REST API.

use std::{sync::Arc, time::Duration};

use infrastructure::{
    AppConfig, MongoCommentStore, MongoStore, MongoUniversityStore, MongoUserStore,
    PasswordHasher, TokenSigner,
};
use presentation_http::{routes, state::AppState};
use tokio::{net::TcpListener, signal};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "unilist_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("unilist v{} starting...", env!("CARGO_PKG_VERSION"));

    // Load configuration; the token secret is required and has no
    // fallback, so a bare environment fails here rather than at runtime.
    let config = AppConfig::load()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {e}"))?;

    info!(
        host = %config.server.host,
        port = %config.server.port,
        database = %config.database.name,
        "Configuration loaded"
    );

    let token_signer =
        TokenSigner::from_config(&config.security).map_err(|e| anyhow::anyhow!("{e}"))?;

    // One pooled client shared by every collection store
    let store = MongoStore::connect(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to reach the document store: {e}"))?;

    let state = AppState {
        universities: Arc::new(MongoUniversityStore::new(&store)),
        comments: Arc::new(MongoCommentStore::new(&store)),
        users: Arc::new(MongoUserStore::new(&store)),
        password_hasher: PasswordHasher::new(),
        token_signer: Arc::new(token_signer),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = routes::create_router(state);

    // Configure CORS layer
    let app = if config.server.cors_enabled {
        let cors_layer = if config.server.allowed_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use axum::http::{HeaderValue, Method};
            let origins: Vec<HeaderValue> = config
                .server
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse().ok())
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
                .allow_headers(Any)
        };
        app.layer(cors_layer)
    } else {
        app
    };

    let app = app.layer(TraceLayer::new_for_http());

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    info!("Server listening on http://{}", addr);

    // Graceful shutdown configuration
    let shutdown_timeout = Duration::from_secs(config.server.shutdown_timeout_secs.unwrap_or(30));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_timeout))
        .await?;

    info!("Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signals (SIGINT, SIGTERM)
async fn shutdown_signal(timeout: Duration) {
    let ctrl_c = async {
        // Log error but continue waiting - this is a best-effort handler
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            info!("Received Ctrl+C, initiating graceful shutdown...");
        }
        () = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown...");
        }
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    // Connection draining is handled by axum's graceful_shutdown
}
