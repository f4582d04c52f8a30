mod config;
mod routes;

use config::ServerConfig;
use routes::proxy::ProxyState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    match dotenvy::dotenv() {
        Ok(path) => tracing::info!(path = %path.display(), "loaded environment file"),
        Err(e) if e.not_found() => {}
        Err(e) => tracing::warn!(error = %e, "failed to read .env"),
    }

    let config = ServerConfig::from_env().expect("invalid configuration");
    let state = ProxyState::new(&config).expect("http client init failed");
    tracing::info!(
        backend = state.backend_url(),
        timeout_secs = config.timeouts.request_secs,
        "geometry service forwarding configured"
    );

    let app = routes::app(state).expect("leptos configuration failed");
    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "snowapp listening");
    axum::serve(listener, app).await.expect("server failed");
}
