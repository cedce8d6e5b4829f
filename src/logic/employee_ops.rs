use anyhow::Context;

use crate::error::ApiError;
use crate::model::{Employee, EmployeeUpdate, Id, NewEmployee};
use crate::store::DocumentStore;

const COLLECTION: &str = "employees";

pub struct EmployeeOperations;

impl EmployeeOperations {
    /// Retrieve all employees.
    pub async fn get_all<S: DocumentStore>(store: &S) -> Result<Vec<Employee>, ApiError> {
        let docs = store.get_documents(COLLECTION).await?;
        let employees = docs
            .into_iter()
            .map(Employee::from_document)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(employees)
    }

    /// Create a new employee and return it with its generated id.
    pub async fn create<S: DocumentStore>(
        store: &S,
        data: NewEmployee,
    ) -> Result<Employee, ApiError> {
        let fields =
            serde_json::to_value(&data).context("failed to serialize employee fields")?;
        let id = store.create_document(COLLECTION, fields).await?;
        Ok(Employee {
            id,
            name: data.name,
            position: data.position,
            department: data.department,
            email: data.email,
            phone: data.phone,
            branch_id: data.branch_id,
        })
    }

    /// Get a single employee by id.
    pub async fn get_by_id<S: DocumentStore>(store: &S, id: &Id) -> Result<Employee, ApiError> {
        let doc = store
            .get_document_by_id(COLLECTION, id)
            .await?
            .ok_or_else(|| {
                ApiError::NotFound(format!("Employee with ID {} does not exist", id))
            })?;
        Ok(Employee::from_document(doc)?)
    }

    /// Merge the supplied fields into the existing employee and write the
    /// full record back. Fields absent from the update keep their value.
    pub async fn update<S: DocumentStore>(
        store: &S,
        id: &Id,
        update: EmployeeUpdate,
    ) -> Result<Employee, ApiError> {
        let mut employee = Self::get_by_id(store, id).await?;
        employee.apply_update(update);
        store
            .update_document(COLLECTION, id, employee.document_data())
            .await?;
        Ok(employee)
    }

    /// Delete an employee by id.
    pub async fn delete<S: DocumentStore>(store: &S, id: &Id) -> Result<(), ApiError> {
        Self::get_by_id(store, id).await?;
        store.delete_document(COLLECTION, id).await?;
        Ok(())
    }

    /// All employees assigned to a branch, matched exactly on the branch id.
    /// Zero matches is a not-found failure, not an empty list.
    pub async fn for_branch<S: DocumentStore>(
        store: &S,
        branch_id: &str,
    ) -> Result<Vec<Employee>, ApiError> {
        let found: Vec<Employee> = Self::get_all(store)
            .await?
            .into_iter()
            .filter(|employee| employee.branch_id == branch_id)
            .collect();

        if found.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No employees found for branch ID {}.",
                branch_id
            )));
        }
        Ok(found)
    }

    /// All employees in a department, matched case-insensitively. Zero
    /// matches is a not-found failure, not an empty list.
    pub async fn by_department<S: DocumentStore>(
        store: &S,
        department: &str,
    ) -> Result<Vec<Employee>, ApiError> {
        let wanted = department.to_lowercase();
        let found: Vec<Employee> = Self::get_all(store)
            .await?
            .into_iter()
            .filter(|employee| employee.department.to_lowercase() == wanted)
            .collect();

        if found.is_empty() {
            return Err(ApiError::NotFound(format!(
                "No employees found in department '{}'.",
                department
            )));
        }
        Ok(found)
    }
}
