//! Test helpers shared across modules.

use crate::config::ElasticConfig;
use crate::elastic::client::ElasticClient;
use axum::Router;
use std::time::Duration;

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// Base URL of a port that was bound and then released, so connections are refused.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn client_for(url: &str) -> ElasticClient {
    ElasticClient::new(&ElasticConfig {
        url: url.to_string(),
        timeout: Duration::from_secs(5),
    })
    .unwrap()
}
