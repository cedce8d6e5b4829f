use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Id;
use crate::store::Document;

/// An employee record. `branch_id` references a branch but existence is not
/// enforced at write time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: Id,
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "branchId")]
    pub branch_id: String,
}

/// Create payload for an employee. Doubles as the stored document shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub position: String,
    pub department: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "branchId")]
    pub branch_id: String,
}

/// Partial update payload. Absent fields keep their current value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub position: Option<String>,
    pub department: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "branchId")]
    pub branch_id: Option<String>,
}

impl Employee {
    pub fn from_document(doc: Document) -> anyhow::Result<Self> {
        let fields: NewEmployee =
            serde_json::from_value(doc.data).context("malformed employee document")?;
        Ok(Self {
            id: doc.id,
            name: fields.name,
            position: fields.position,
            department: fields.department,
            email: fields.email,
            phone: fields.phone,
            branch_id: fields.branch_id,
        })
    }

    /// The stored field data, without the id.
    pub fn document_data(&self) -> Value {
        serde_json::json!({
            "name": self.name,
            "position": self.position,
            "department": self.department,
            "email": self.email,
            "phone": self.phone,
            "branchId": self.branch_id,
        })
    }

    /// Overwrite each field that is present in the update, keep the rest.
    pub fn apply_update(&mut self, update: EmployeeUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(department) = update.department {
            self.department = department;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = phone;
        }
        if let Some(branch_id) = update.branch_id {
            self.branch_id = branch_id;
        }
    }
}
