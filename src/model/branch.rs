use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Id;
use crate::store::Document;

/// A branch office record. The `id` is assigned by the document store and
/// lives outside the stored field data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Create payload for a branch. Doubles as the stored document shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBranch {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// Partial update payload. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BranchUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl Branch {
    pub fn from_document(doc: Document) -> anyhow::Result<Self> {
        let fields: NewBranch =
            serde_json::from_value(doc.data).context("malformed branch document")?;
        Ok(Self {
            id: doc.id,
            name: fields.name,
            address: fields.address,
            phone: fields.phone,
        })
    }

    /// The stored field data, without the id.
    pub fn document_data(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "address": self.address,
            "phone": self.phone,
        })
    }

    /// Overwrite each field that is present in the update, keep the rest.
    pub fn apply_update(&mut self, update: BranchUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}
