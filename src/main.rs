use anyhow::Result;
use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use courses_api::application::Application;
use courses_api::{http, postgres, read_model};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let pool = postgres::connect().await?;
    read_model::setup(&pool).await?;

    let app = Application::new(read_model::Repository::new(pool));

    let listener = TcpListener::bind("0.0.0.0:3333").await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, http::router(app))
        .with_graceful_shutdown(shutdown())
        .await?;
    Ok(())
}

async fn shutdown() {
    signal::ctrl_c().await.expect("failed to listen for event");
}
