/// Comment Service Library
///
/// A GraphQL microservice that stores and retrieves comment records.
/// Every operation is a direct pass-through from the API layer to the
/// persistence layer; the only rule above storage is the creation-timestamp
/// default applied in the service layer.
///
/// # Modules
///
/// - `schema`: GraphQL query and mutation objects
/// - `services`: delegation layer holding the injected storage adapter
/// - `repository`: storage adapter trait and PostgreSQL implementation
/// - `models`: comment entity types
/// - `error`: error types and handling
/// - `config`: configuration management
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;

pub use config::Config;
pub use error::{ServiceError, ServiceResult};
