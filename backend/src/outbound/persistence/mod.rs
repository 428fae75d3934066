//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! This module provides concrete implementations of domain repository ports
//! backed by PostgreSQL via the Diesel ORM with async support through
//! `diesel-async` and `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   Diesel models and domain types, with one exception: the admission
//!   transaction, whose row lock is the serialisation point the capacity
//!   invariant depends on.
//! - **Internal models**: Diesel row structs (`models.rs`) and schema
//!   definitions (`schema.rs`) are implementation details, never exposed to
//!   the domain layer.
//! - **Strongly typed errors**: database errors are mapped to the domain
//!   port error types.

mod diesel_event_repository;
mod diesel_identity_service;
mod diesel_registration_repository;
mod diesel_user_repository;
mod error_mapping;
mod models;
mod password;
mod pool;
mod schema;

pub use diesel_event_repository::DieselEventRepository;
pub use diesel_identity_service::DieselIdentityService;
pub use diesel_registration_repository::DieselRegistrationRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
