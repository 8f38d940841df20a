//! Create `carros` table.
//!
//! One row per car; `id` is assigned by the database and never reused by updates.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Carros::Table)
                    .if_not_exists()
                    .col(pk_auto(Carros::Id))
                    .col(string(Carros::Marca))
                    .col(string(Carros::Modelo))
                    .col(integer(Carros::Ano))
                    .col(double(Carros::Preco))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Carros::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Carros { Table, Id, Marca, Modelo, Ano, Preco }
