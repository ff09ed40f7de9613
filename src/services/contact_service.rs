//! Contact submission service.
//!
//! Validates an inbound payload against the message schema and hands the
//! validated record to the persistence gateway, exactly once per call.

use crate::error::{PersistenceError, SubmitError, SubmitResult};
use crate::models::ContactMessage;
use crate::store::DocumentStore;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};

/// Logical collection that contact submissions are written to.
pub const CONTACT_COLLECTION: &str = "contactmessage";

/// Service for handling contact-form submissions.
#[async_trait]
pub trait ContactService: Send + Sync {
    /// Validate `payload` and persist it as a contact message.
    ///
    /// Returns the store-generated identifier. Validation runs first and a
    /// payload that fails it never reaches the store; a store failure
    /// propagates unrecovered. Submissions are not deduplicated: the same
    /// payload submitted twice produces two independent records.
    async fn submit(&self, payload: Value) -> SubmitResult<String>;
}

/// Default implementation of ContactService.
pub struct ContactServiceImpl {
    store: Option<Arc<dyn DocumentStore>>,
}

impl ContactServiceImpl {
    /// Create a new contact service.
    ///
    /// `store` is `None` when no connection string was configured; every
    /// submission then fails as a server fault, while validation behaves
    /// normally.
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ContactService for ContactServiceImpl {
    async fn submit(&self, payload: Value) -> SubmitResult<String> {
        let message = ContactMessage::from_payload(&payload)?;

        let store = self
            .store
            .as_ref()
            .ok_or(SubmitError::Persistence(PersistenceError::NotConfigured))?;

        let record = serde_json::to_value(&message)
            .map_err(|e| PersistenceError::InvalidDocument(e.to_string()))?;

        match store.insert_document(CONTACT_COLLECTION, record).await {
            Ok(id) => {
                info!(collection = CONTACT_COLLECTION, id = %id, "contact message persisted");
                Ok(id)
            }
            Err(e) => {
                warn!(collection = CONTACT_COLLECTION, error = %e, "contact message insert failed");
                Err(e.into())
            }
        }
    }
}
