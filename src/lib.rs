//! Nieuwe Vloer backend - HTTP API for the Nieuwe Vloer website.
//!
//! This library provides a small backend exposing a handful of read-only
//! informational endpoints and a single write path that validates a
//! contact-form submission and persists it to a document store.
//!
//! # Architecture
//!
//! - **models**: ContactMessage (validated at construction) and the static service catalog
//! - **domain**: value objects for email addresses and phone numbers
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables
//! - **store**: the document store gateway trait and its MongoDB implementation
//! - **services**: the contact submission service (validate, then persist once)
//! - **server**: axum router, CORS middleware, and HTTP handlers

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod store;

pub use config::Config;
pub use domain::{EmailAddress, PhoneNumber, ValidationError};
pub use error::{ConfigError, PersistenceError, SubmitError};
pub use models::{service_catalog, ContactMessage, ServiceItem};
pub use server::{build_router, run_server, AppState};
pub use services::{ContactService, ContactServiceImpl, CONTACT_COLLECTION};
pub use store::{DocumentStore, MongoStore};
