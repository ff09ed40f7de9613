use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vloer_api::error::{PersistenceError, PersistenceResult};
use vloer_api::store::DocumentStore;

/// Mock document store for testing.
///
/// Provides an in-memory implementation of DocumentStore that records every
/// inserted (collection, document) pair, tracks method calls for
/// verification, and can be switched into a failing mode to exercise the
/// server-fault path.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDocumentStore {
    inserted: Arc<Mutex<Vec<(String, Value)>>>,
    collections: Arc<Mutex<Vec<String>>>,
    fail_with: Arc<Mutex<Option<String>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl MockDocumentStore {
    /// Create a new empty MockDocumentStore.
    pub fn new() -> Self {
        Self {
            inserted: Arc::new(Mutex::new(Vec::new())),
            collections: Arc::new(Mutex::new(Vec::new())),
            fail_with: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a MockDocumentStore that reports the given collection names.
    pub fn with_collections(names: &[&str]) -> Self {
        let store = Self::new();
        {
            let mut collections = store.collections.lock().unwrap();
            *collections = names.iter().map(|n| n.to_string()).collect();
        }
        store
    }

    /// Make every subsequent store operation fail with the given message.
    pub fn set_failure(&self, message: &str) {
        let mut fail_with = self.fail_with.lock().unwrap();
        *fail_with = Some(message.to_string());
    }

    /// Return to normal operation.
    pub fn clear_failure(&self) {
        let mut fail_with = self.fail_with.lock().unwrap();
        *fail_with = None;
    }

    /// All (collection, document) pairs inserted so far, in order.
    pub fn inserted_documents(&self) -> Vec<(String, Value)> {
        self.inserted.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_failure(&self) -> PersistenceResult<()> {
        let fail_with = self.fail_with.lock().unwrap();
        match fail_with.as_ref() {
            Some(message) => Err(PersistenceError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn insert_document(&self, collection: &str, document: Value) -> PersistenceResult<String> {
        self.track_call("insert_document");
        self.check_failure()?;

        if !document.is_object() {
            return Err(PersistenceError::InvalidDocument(
                "document must be a JSON object".to_string(),
            ));
        }

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            format!("mock-id-{}", next_id)
        };

        let mut inserted = self.inserted.lock().unwrap();
        inserted.push((collection.to_string(), document));

        Ok(id)
    }

    async fn list_collections(&self) -> PersistenceResult<Vec<String>> {
        self.track_call("list_collections");
        self.check_failure()?;

        Ok(self.collections.lock().unwrap().clone())
    }

    fn database_name(&self) -> &str {
        "mockdb"
    }
}
