use std::sync::Arc;

use anyhow::Context;
use axum::http::HeaderValue;
use burrow_gateway::cli::{StorageBackendArg, CLI};
use burrow_gateway::{telemetry, App, AppState, CorsPolicy};
use burrow_generator::RandomGenerator;
use burrow_shortener::ShortenerService;
use burrow_storage::{InMemoryRepository, Repository, SqliteRepository};
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    config.validate()?;
    telemetry::init(config.log_format)?;

    let allow_origin = HeaderValue::from_str(&config.cors_allow_origin)
        .with_context(|| format!("invalid CORS origin '{}'", config.cors_allow_origin))?;
    let cors_policy = CorsPolicy::builder().allow_origin(allow_origin).build();

    info!(
        listen_addr = %config.listen_addr,
        public_base_url = %config.public_base_url,
        storage_backend = %config.storage,
        "starting burrow"
    );

    match config.storage {
        StorageBackendArg::Sqlite => {
            if let Some(parent) = config.database_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database directory {}", parent.display())
                })?;
            }

            let repository = SqliteRepository::connect(&config.database_path)
                .await
                .with_context(|| {
                    format!("failed to open database {}", config.database_path.display())
                })?;

            if let Some(seed) = &config.seed_sql {
                let script = tokio::fs::read_to_string(seed)
                    .await
                    .with_context(|| format!("failed to read SQL file {}", seed.display()))?;
                let rows = repository
                    .execute_script(&script)
                    .await
                    .with_context(|| format!("failed to execute SQL file {}", seed.display()))?;
                info!(path = %seed.display(), rows_affected = rows, "loaded seed data");
            }

            let served = run_server(&config, repository.clone(), cors_policy).await;
            repository.close().await;
            served?;
        }
        StorageBackendArg::InMemory => {
            warn!("in-memory storage: mappings are lost on exit");
            run_server(&config, InMemoryRepository::new(), cors_policy).await?;
        }
    }

    info!("burrow stopped");
    Ok(())
}

async fn run_server<R: Repository>(
    config: &CLI,
    repository: R,
    cors_policy: CorsPolicy,
) -> anyhow::Result<()> {
    let shortener = ShortenerService::new(repository, RandomGenerator::new());
    let state = AppState::new(Arc::new(shortener), config.public_base_url.clone());

    let listener = TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    info!(listen_addr = %listener.local_addr()?, "listening");

    axum::serve(listener, App::router(state, cors_policy))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to listen for SIGTERM");
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

    info!("shutdown signal received");
}
