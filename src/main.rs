use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use adler_tours::api::{AdminClient, PublicClient};
use adler_tours::session::{FileStore, Session};
use adler_tours::{router, AppState, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    let session = Session::open(Arc::new(FileStore::new(config.token_path.clone()))).await;

    let http = reqwest::Client::new();
    let public = PublicClient::new(http.clone(), config.backend_url.clone());
    let admin = AdminClient::new(http, config.backend_url.clone(), session);
    let state = AppState::new(public, admin);

    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!("listening on http://{addr}, backend at {}", config.backend_url);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
