use std::future::Future;

use axum::Router;
use configs::AppConfig;
use migration::MigratorTrait;
use service::file::revision_store::RevisionStore;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{routes, state::AppState};

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Open both stores described by `cfg`: connect the pool, bring the `carros`
/// schema up to date and bind the revision document.
pub async fn build_state(cfg: &AppConfig) -> anyhow::Result<AppState> {
    let mut data_files = vec![cfg.storage.revisions_path.as_str()];
    if let Some(db_file) = common::env::sqlite_file_path(&cfg.database.url) {
        data_files.push(db_file);
    }
    common::env::ensure_parent_dirs(data_files.as_slice()).await?;

    let db = models::db::connect_with_config(&cfg.database).await?;
    migration::Migrator::up(&db, None).await?;
    info!("database schema up to date");

    let revisions = RevisionStore::new(&cfg.storage.revisions_path).await?;
    info!(path = %cfg.storage.revisions_path, "revision document bound");

    Ok(AppState::new(db, revisions))
}

pub fn build_app(state: AppState) -> Router {
    routes::build_router(state, build_cors())
}

/// Build the app and serve it until `shutdown` resolves; in-flight requests
/// are allowed to finish.
pub async fn run<F>(cfg: AppConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let state = build_state(&cfg).await?;
    let app = build_app(state);

    let listener = TcpListener::bind(cfg.bind_addr()).await?;
    let addr = listener.local_addr()?;
    info!(%addr, "starting car service");
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    info!("http server drained");
    Ok(())
}
