//! Storage abstractions for service layer
//!
//! Whole-file JSON documents, reloaded and rewritten on every access.

pub mod json_document_store;
