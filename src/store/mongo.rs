use crate::error::{PersistenceError, PersistenceResult};
use crate::store::traits::DocumentStore;
use async_trait::async_trait;
use mongodb::bson::{self, Bson};
use mongodb::{Client, Database};
use serde_json::Value;

/// Document store gateway backed by MongoDB.
///
/// Wraps a `Database` handle created once at startup; the driver manages its
/// own connection pool, so the handle is cheap to clone and safe to share.
/// Connection setup is lazy: an unreachable server surfaces per-operation as
/// a [`PersistenceError`], with the driver's default timeout behavior.
pub struct MongoStore {
    database: Database,
    database_name: String,
}

impl MongoStore {
    /// Create a MongoStore from a connection string and database name.
    pub async fn connect(uri: &str, database_name: &str) -> PersistenceResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self {
            database: client.database(database_name),
            database_name: database_name.to_string(),
        })
    }

    /// Create a MongoStore from an existing database handle (useful for tests).
    #[doc(hidden)]
    pub fn with_database(database: Database) -> Self {
        let database_name = database.name().to_string();
        Self {
            database,
            database_name,
        }
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_document(&self, collection: &str, document: Value) -> PersistenceResult<String> {
        let document = bson::to_document(&document)
            .map_err(|e| PersistenceError::InvalidDocument(e.to_string()))?;

        let result = self
            .database
            .collection::<bson::Document>(collection)
            .insert_one(document)
            .await?;

        match result.inserted_id {
            Bson::ObjectId(oid) => Ok(oid.to_hex()),
            other => Ok(other.to_string()),
        }
    }

    async fn list_collections(&self) -> PersistenceResult<Vec<String>> {
        Ok(self.database.list_collection_names().await?)
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }
}
