use anyhow::Context;

use crate::error::ApiError;
use crate::model::{Branch, BranchUpdate, Id, NewBranch};
use crate::store::DocumentStore;

const COLLECTION: &str = "branches";

pub struct BranchOperations;

impl BranchOperations {
    /// Retrieve all branches.
    pub async fn get_all<S: DocumentStore>(store: &S) -> Result<Vec<Branch>, ApiError> {
        let docs = store.get_documents(COLLECTION).await?;
        let branches = docs
            .into_iter()
            .map(Branch::from_document)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(branches)
    }

    /// Create a new branch and return it with its generated id.
    pub async fn create<S: DocumentStore>(
        store: &S,
        data: NewBranch,
    ) -> Result<Branch, ApiError> {
        let fields =
            serde_json::to_value(&data).context("failed to serialize branch fields")?;
        let id = store.create_document(COLLECTION, fields).await?;
        Ok(Branch {
            id,
            name: data.name,
            address: data.address,
            phone: data.phone,
        })
    }

    /// Get a single branch by id.
    pub async fn get_by_id<S: DocumentStore>(store: &S, id: &Id) -> Result<Branch, ApiError> {
        let doc = store
            .get_document_by_id(COLLECTION, id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Branch with ID {} does not exist", id))
            })?;
        Ok(Branch::from_document(doc)?)
    }

    /// Merge the supplied fields into the existing branch and write the full
    /// record back. Fields absent from the update keep their current value.
    pub async fn update<S: DocumentStore>(
        store: &S,
        id: &Id,
        update: BranchUpdate,
    ) -> Result<Branch, ApiError> {
        let mut branch = Self::get_by_id(store, id).await?;
        branch.apply_update(update);
        store
            .update_document(COLLECTION, id, branch.document_data())
            .await?;
        Ok(branch)
    }

    /// Delete a branch by id.
    pub async fn delete<S: DocumentStore>(store: &S, id: &Id) -> Result<(), ApiError> {
        Self::get_by_id(store, id).await?;
        store.delete_document(COLLECTION, id).await?;
        Ok(())
    }
}
