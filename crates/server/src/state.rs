use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::car::{
    repository::{CarRepository, SeaOrmCarRepository},
    service::CarService,
};
use service::file::revision_store::RevisionStore;

/// Shared handler state: one store per record type, nothing shared between them.
#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<CarService<dyn CarRepository>>,
    pub revisions: Arc<RevisionStore>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, revisions: Arc<RevisionStore>) -> Self {
        let repo: Arc<dyn CarRepository> = Arc::new(SeaOrmCarRepository { db });
        Self { cars: Arc::new(CarService::new(repo)), revisions }
    }
}
