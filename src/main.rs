mod api;
mod config;
mod routes;
mod session;
mod state;
mod ui;
mod views;

#[cfg(test)]
mod test_helpers;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::PortalConfig::from_env().expect("invalid portal configuration");
    let port = config.port;
    tracing::info!(
        api_origin = %config.api_origin,
        backend_origin = %config.backend_origin,
        "portal configured"
    );

    let http = reqwest::Client::builder()
        .build()
        .expect("http client build failed");
    let state = state::AppState::new(config, http);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
