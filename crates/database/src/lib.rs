//! # Libris Database Crate
//!
//! This crate is the application's single gateway to PostgreSQL. It owns the
//! connection pool, the embedded schema migrations, the row models for the
//! two entities (people and books), and the repository through which every
//! read and write passes.
//!
//! ## Architectural Principles
//!
//! - **One shared handle:** the `PgPool` is created once at startup and
//!   injected into `DbRepository`; no ambient global state.
//! - **Asynchronous & Pooled:** all operations are async and go through the
//!   internally-synchronized pool, so handlers need no extra locking.
//! - **Soft deletes:** deletes stamp `deleted_at`; reads filter on it.
//!
//! ## Public API
//!
//! - `connect`: the async function to establish the connection pool.
//! - `run_migrations`: applies the embedded migrations at startup.
//! - `DbRepository`: holds the pool and provides all data access methods.
//! - `DbError`: the specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod models;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use models::{Book, NewBook, NewPerson, Person};
pub use repository::DbRepository;
