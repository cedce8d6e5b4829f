use anyhow::Result;
use serde_json::Value;

use crate::model::Id;

/// A stored document: the store-assigned id plus the raw field data.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Id,
    pub data: Value,
}

/// Generic document CRUD over named collections. Services depend only on
/// this contract, not on any specific store.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Store a new document and return its generated id.
    async fn create_document(&self, collection: &str, data: Value) -> Result<Id>;
    /// List every document in a collection.
    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>>;
    /// Fetch a single document, `None` if the id does not resolve.
    async fn get_document_by_id(&self, collection: &str, id: &Id) -> Result<Option<Document>>;
    /// Replace the field data of an existing document.
    async fn update_document(&self, collection: &str, id: &Id, data: Value) -> Result<()>;
    /// Remove a document.
    async fn delete_document(&self, collection: &str, id: &Id) -> Result<()>;
}
