use anyhow::Error as AnyhowError;
use deployment::{Deployment, DeploymentError};
use server::{DeploymentImpl, routes};
use strip_ansi_escapes::strip;
use thiserror::Error;
use tracing_subscriber::{EnvFilter, prelude::*};
use utils::{browser::open_browser, port_file::write_port_file};

#[derive(Debug, Error)]
pub enum CrewBuilderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Deployment(#[from] DeploymentError),
    #[error(transparent)]
    Other(#[from] AnyhowError),
}

#[tokio::main]
async fn main() -> Result<(), CrewBuilderError> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let filter_string = format!(
        "warn,server={level},services={level},deployment={level},local_deployment={level},utils={level}",
        level = log_level
    );
    let env_filter = EnvFilter::try_new(filter_string)
        .map_err(|e| anyhow::anyhow!("Failed to create tracing filter: {e}"))?;
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
        .init();

    let deployment = DeploymentImpl::new().await?;
    deployment.spawn_idle_sweeper();
    let (allowed_origins, should_open_browser) = {
        let config = deployment.config().read().await;
        (config.cors_allowed_origins.clone(), config.open_browser)
    };

    let app_router = routes::router(deployment, &allowed_origins);

    let port = std::env::var("BACKEND_PORT")
        .or_else(|_| std::env::var("PORT"))
        .ok()
        .and_then(|s| {
            // remove any ANSI codes before parsing
            let cleaned = String::from_utf8_lossy(&strip(s.as_bytes())).into_owned();
            cleaned.trim().parse::<u16>().ok()
        })
        .unwrap_or_else(|| {
            tracing::info!("No PORT environment variable set, using port 0 for auto-assignment");
            0
        });

    let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let listener = tokio::net::TcpListener::bind(format!("{host}:{port}")).await?;
    let actual_port = listener.local_addr()?.port();

    if let Err(e) = write_port_file(actual_port).await {
        tracing::warn!("Failed to write port file: {}", e);
    }

    tracing::info!("CrewBuilder running on http://{host}:{actual_port}");

    if !cfg!(debug_assertions) && should_open_browser {
        tracing::info!("Opening browser...");
        tokio::spawn(async move {
            if let Err(e) = open_browser(&format!("http://127.0.0.1:{actual_port}")).await {
                tracing::warn!(
                    "Failed to open browser automatically: {}. Please open http://127.0.0.1:{} manually.",
                    e,
                    actual_port
                );
            }
        });
    }

    axum::serve(listener, app_router).await?;
    Ok(())
}
