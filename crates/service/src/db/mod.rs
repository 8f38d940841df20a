//! Database-backed operations over SeaORM entities.

pub mod car_service;
