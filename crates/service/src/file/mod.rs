//! File-backed stores built on `storage::json_document_store`.

pub mod revision_store;
