use super::setup_test_db;
use crate::car::{self, CarInput};
use anyhow::Result;
use sea_orm::{EntityTrait, TransactionTrait};

fn input() -> CarInput {
    CarInput { marca: "Chevrolet".into(), modelo: "Onix".into(), ano: 2021, preco: 70_000.0 }
}

#[tokio::test]
async fn committed_insert_is_visible() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = car::create(&txn, input()).await?;
    txn.commit().await?;

    assert!(car::Entity::find_by_id(created.id).one(&db).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn rolled_back_insert_is_discarded() -> Result<()> {
    let db = setup_test_db().await?;

    let txn = db.begin().await?;
    let created = car::create(&txn, input()).await?;
    txn.rollback().await?;

    assert!(car::Entity::find_by_id(created.id).one(&db).await?.is_none());
    Ok(())
}
