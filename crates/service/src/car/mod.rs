//! Car store seam: repository trait plus the service enforcing not-found policy.

pub mod repository;
pub mod service;
