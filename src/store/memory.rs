use std::collections::{BTreeMap, HashMap};

use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use serde_json::Value;

use crate::model::{generate_id, Id};
use crate::store::traits::{Document, DocumentStore};

/// In-memory document store. Used by the test suite and for local runs
/// without a database; state is owned by the instance, never module-level.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, BTreeMap<Id, Value>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl DocumentStore for MemoryStore {
    async fn create_document(&self, collection: &str, data: Value) -> Result<Id> {
        let id = generate_id();
        let mut collections = self.collections.write();
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), data);
        Ok(id)
    }

    async fn get_documents(&self, collection: &str) -> Result<Vec<Document>> {
        let collections = self.collections.read();
        let docs = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, data)| Document {
                        id: id.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(docs)
    }

    async fn get_document_by_id(&self, collection: &str, id: &Id) -> Result<Option<Document>> {
        let collections = self.collections.read();
        let doc = collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|data| Document {
                id: id.clone(),
                data: data.clone(),
            });
        Ok(doc)
    }

    async fn update_document(&self, collection: &str, id: &Id, data: Value) -> Result<()> {
        let mut collections = self.collections.write();
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| anyhow!("collection '{}' does not exist", collection))?;
        let slot = docs
            .get_mut(id)
            .ok_or_else(|| anyhow!("document '{}' does not exist in '{}'", id, collection))?;
        *slot = data;
        Ok(())
    }

    async fn delete_document(&self, collection: &str, id: &Id) -> Result<()> {
        let mut collections = self.collections.write();
        let docs = collections
            .get_mut(collection)
            .ok_or_else(|| anyhow!("collection '{}' does not exist", collection))?;
        docs.remove(id)
            .ok_or_else(|| anyhow!("document '{}' does not exist in '{}'", id, collection))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn create_then_fetch_round_trips() {
        let store = MemoryStore::new();
        let id = store
            .create_document("branches", json!({"name": "Downtown"}))
            .await
            .unwrap();

        let doc = store
            .get_document_by_id("branches", &id)
            .await
            .unwrap()
            .expect("document should exist");
        assert_eq!(doc.id, id);
        assert_eq!(doc.data["name"], "Downtown");
    }

    #[tokio::test]
    async fn missing_document_resolves_to_none() {
        let store = MemoryStore::new();
        let doc = store
            .get_document_by_id("branches", &"nope".to_string())
            .await
            .unwrap();
        assert!(doc.is_none());
    }

    #[tokio::test]
    async fn update_replaces_field_data() {
        let store = MemoryStore::new();
        let id = store
            .create_document("branches", json!({"name": "Old"}))
            .await
            .unwrap();
        store
            .update_document("branches", &id, json!({"name": "New"}))
            .await
            .unwrap();

        let doc = store
            .get_document_by_id("branches", &id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(doc.data, json!({"name": "New"}));
    }

    #[tokio::test]
    async fn delete_removes_only_the_target() {
        let store = MemoryStore::new();
        let first = store.create_document("employees", json!({"n": 1})).await.unwrap();
        let second = store.create_document("employees", json!({"n": 2})).await.unwrap();

        store.delete_document("employees", &first).await.unwrap();

        let remaining = store.get_documents("employees").await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }

    #[tokio::test]
    async fn delete_of_unknown_document_fails() {
        let store = MemoryStore::new();
        assert!(store
            .delete_document("employees", &"ghost".to_string())
            .await
            .is_err());
    }
}
