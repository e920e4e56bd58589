//! Database module: models and schema for persistent storage.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows and insert payloads
//! - `schema.rs`: SQL DDL for initializing the database (MySQL)
//! - `store.rs`: typed query wrapper over the shared pool

pub mod models;
pub mod schema;
pub mod store;

pub use models::{Center, NewCenter, NewUser, NewVaccination, User, Vaccination};
pub use schema::MYSQL_INIT;
pub use store::{MySqlPool, VaccineStore};
