//! Application service layer.
//!
//! Services contain the write-path business logic and sit between the HTTP
//! handlers and the store gateway, so the whole validate-then-persist flow
//! is testable without any transport involved.

mod contact_service;

pub use contact_service::{ContactService, ContactServiceImpl, CONTACT_COLLECTION};
