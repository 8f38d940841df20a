use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect, TransactionTrait};
use tracing::instrument;
use models::car::{self, CarInput, Entity as CarEntity};
use crate::{errors::{ServiceError, CAR_NOT_FOUND}, pagination::Pagination};

/// List cars in primary-key order within the given window.
pub async fn list_cars(db: &DatabaseConnection, page: Pagination) -> Result<Vec<car::Model>, ServiceError> {
    let rows = CarEntity::find()
        .order_by_asc(car::Column::Id)
        .offset(page.skip)
        .limit(page.limit)
        .all(db)
        .await?;
    Ok(rows)
}

/// Insert a car; the id is assigned by the database.
#[instrument(skip(db, input))]
pub async fn create_car(db: &DatabaseConnection, input: CarInput) -> Result<car::Model, ServiceError> {
    let created = car::create(db, input).await?;
    Ok(created)
}

/// Get a car by id.
pub async fn get_car(db: &DatabaseConnection, id: i32) -> Result<Option<car::Model>, ServiceError> {
    let found = CarEntity::find_by_id(id).one(db).await?;
    Ok(found)
}

/// Replace every field of an existing car inside one transaction.
#[instrument(skip(db, input))]
pub async fn update_car(db: &DatabaseConnection, id: i32, input: CarInput) -> Result<car::Model, ServiceError> {
    let txn = db.begin().await?;
    let current = CarEntity::find_by_id(id).one(&txn).await?;
    let Some(existing) = current else { return Err(ServiceError::not_found(CAR_NOT_FOUND)); };
    let mut am: car::ActiveModel = existing.into();
    input.apply_to(&mut am);
    let updated = am.update(&txn).await?;
    txn.commit().await?;
    Ok(updated)
}

/// Delete a car; returns true if a row was removed.
#[instrument(skip(db))]
pub async fn delete_car(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = CarEntity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
