//! Service layer providing business-oriented CRUD operations on top of models.
//! - Cars live in the relational store (`db`, `car`).
//! - Revisions live in a whole-file JSON document (`file`, `storage`).
//! - Both report failures through `errors::ServiceError`.

pub mod errors;
pub mod pagination;
pub mod storage;
pub mod db;
pub mod car;
pub mod file;
#[cfg(test)]
pub mod test_support;
