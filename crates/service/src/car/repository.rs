use async_trait::async_trait;
use models::car::{self, CarInput};
use sea_orm::DatabaseConnection;

use crate::{errors::ServiceError, pagination::Pagination};

#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn list(&self, page: Pagination) -> Result<Vec<car::Model>, ServiceError>;
    async fn create(&self, input: CarInput) -> Result<car::Model, ServiceError>;
    async fn get(&self, id: i32) -> Result<Option<car::Model>, ServiceError>;
    async fn update(&self, id: i32, input: CarInput) -> Result<car::Model, ServiceError>;
    async fn delete(&self, id: i32) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCarRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl CarRepository for SeaOrmCarRepository {
    async fn list(&self, page: Pagination) -> Result<Vec<car::Model>, ServiceError> {
        crate::db::car_service::list_cars(&self.db, page).await
    }

    async fn create(&self, input: CarInput) -> Result<car::Model, ServiceError> {
        crate::db::car_service::create_car(&self.db, input).await
    }

    async fn get(&self, id: i32) -> Result<Option<car::Model>, ServiceError> {
        crate::db::car_service::get_car(&self.db, id).await
    }

    async fn update(&self, id: i32, input: CarInput) -> Result<car::Model, ServiceError> {
        crate::db::car_service::update_car(&self.db, id, input).await
    }

    async fn delete(&self, id: i32) -> Result<bool, ServiceError> {
        crate::db::car_service::delete_car(&self.db, id).await
    }
}
