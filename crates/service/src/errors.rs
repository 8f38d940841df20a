use thiserror::Error;

pub const CAR_NOT_FOUND: &str = "carro não encontrado";
pub const NO_REVISIONS_FOUND: &str = "nenhuma revisão encontrada para este carro";
pub const REVISION_NOT_FOUND: &str = "revisão não encontrada";

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("model error: {0}")]
    Model(#[from] models::errors::ModelError),
}

impl ServiceError {
    pub fn not_found(detail: &str) -> Self { Self::NotFound(detail.to_string()) }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}
