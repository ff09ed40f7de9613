use crate::error::PersistenceResult;
use async_trait::async_trait;
use serde_json::Value;

/// Gateway to a document store.
///
/// Provides abstraction over record persistence, enabling different
/// implementations (MongoDB, in-memory stub for tests). A gateway call
/// performs at most one insert attempt: no retry, batching, transaction,
/// or idempotency guarantee, and no read-after-write verification.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert one record into the named logical collection.
    ///
    /// `document` must be a JSON object. Returns the store-generated
    /// identifier of the inserted document; success is defined solely by
    /// the store acknowledging the write.
    async fn insert_document(&self, collection: &str, document: Value) -> PersistenceResult<String>;

    /// List collection names, best-effort. Used only by diagnostics.
    async fn list_collections(&self) -> PersistenceResult<Vec<String>>;

    /// The logical database name this store writes to.
    fn database_name(&self) -> &str;
}
