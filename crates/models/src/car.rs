//! `carros` table: one row per car, keyed by a database-assigned integer id.
use sea_orm::{entity::prelude::*, ActiveValue::NotSet, ConnectionTrait, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "carros")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub preco: f64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Request body for create and full-replace update. Every field is required.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CarInput {
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub preco: f64,
}

impl CarInput {
    /// Overwrite all business fields of `am`; the id is left untouched.
    pub fn apply_to(self, am: &mut ActiveModel) {
        am.marca = Set(self.marca);
        am.modelo = Set(self.modelo);
        am.ano = Set(self.ano);
        am.preco = Set(self.preco);
    }
}

impl From<CarInput> for ActiveModel {
    fn from(input: CarInput) -> Self {
        ActiveModel {
            id: NotSet,
            marca: Set(input.marca),
            modelo: Set(input.modelo),
            ano: Set(input.ano),
            preco: Set(input.preco),
        }
    }
}

pub async fn create<C: ConnectionTrait>(db: &C, input: CarInput) -> Result<Model, errors::ModelError> {
    let am: ActiveModel = input.into();
    am.insert(db).await.map_err(errors::ModelError::from)
}
