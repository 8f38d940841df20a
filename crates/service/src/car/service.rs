use std::sync::Arc;

use models::car::{self, CarInput};
use tracing::info;

use crate::car::repository::CarRepository;
use crate::errors::{ServiceError, CAR_NOT_FOUND};
use crate::pagination::Pagination;

/// Application service for cars. Absent rows surface as `ServiceError::NotFound`.
pub struct CarService<R: CarRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: CarRepository + ?Sized> CarService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub async fn list(&self, page: Pagination) -> Result<Vec<car::Model>, ServiceError> {
        self.repo.list(page).await
    }

    pub async fn create(&self, input: CarInput) -> Result<car::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(car_id = created.id, "car created");
        Ok(created)
    }

    pub async fn get(&self, id: i32) -> Result<car::Model, ServiceError> {
        self.repo.get(id).await?.ok_or_else(|| ServiceError::not_found(CAR_NOT_FOUND))
    }

    pub async fn update(&self, id: i32, input: CarInput) -> Result<car::Model, ServiceError> {
        let updated = self.repo.update(id, input).await?;
        info!(car_id = id, "car updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? {
            info!(car_id = id, "car deleted");
            Ok(())
        } else {
            Err(ServiceError::not_found(CAR_NOT_FOUND))
        }
    }
}
