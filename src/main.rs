use es_autocomplete::config::ServiceConfig;
use es_autocomplete::elastic::client::ElasticClient;
use es_autocomplete::search;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Notify;
use tracing_subscriber::EnvFilter;

/// Time in-flight requests get to finish once a shutdown signal arrives.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = ServiceConfig::load(&args)?;

    // 1. Backend client, shared by every request:
    let client = ElasticClient::new(&config.elastic)?;
    match client.ping().await {
        Ok(()) => tracing::info!("Search backend reachable at {}", client.base_url()),
        Err(e) => tracing::warn!("Search backend not reachable yet at {}: {}", client.base_url(), e),
    }

    // 2. HTTP Router:
    let app = search::router(client);

    // 3. Start HTTP server:
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(port = config.bind_addr.port(), "autocomplete-service server ready.");

    let stopping = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(stopping.clone()))
        .into_future();

    tokio::select! {
        result = server => {
            result?;
            tracing::info!("autocomplete-service exited gracefully");
        }
        _ = async {
            stopping.notified().await;
            tokio::time::sleep(SHUTDOWN_GRACE).await;
        } => {
            tracing::warn!("Requests still in flight after {:?}, exiting", SHUTDOWN_GRACE);
        }
    }

    Ok(())
}

async fn shutdown_signal(stopping: Arc<Notify>) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("autocomplete-service is shutting down...");
    stopping.notify_one();
}
