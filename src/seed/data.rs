use anyhow::Result;

use crate::logic::{BranchOperations, EmployeeOperations};
use crate::model::{NewBranch, NewEmployee};
use crate::store::DocumentStore;

/// Load a small demonstration dataset: two branches with a handful of
/// employees spread across them.
pub async fn load_seed_data<S: DocumentStore>(store: &S) -> Result<()> {
    let winnipeg = BranchOperations::create(
        store,
        NewBranch {
            name: "Winnipeg Branch".to_string(),
            address: "1300 Joe St, Winnipeg, MB, R2X 4M5".to_string(),
            phone: "204-456-0022".to_string(),
        },
    )
    .await?;

    let downtown = BranchOperations::create(
        store,
        NewBranch {
            name: "Downtown Branch".to_string(),
            address: "123 Main St, Winnipeg, MB".to_string(),
            phone: "204-555-0100".to_string(),
        },
    )
    .await?;

    let employees = [
        NewEmployee {
            name: "Pablito Salazar".to_string(),
            position: "Back End Developer".to_string(),
            department: "Development".to_string(),
            email: "pablito.salazar@example.com".to_string(),
            phone: "123-542-4594".to_string(),
            branch_id: winnipeg.id.clone(),
        },
        NewEmployee {
            name: "Ana Reyes".to_string(),
            position: "Branch Manager".to_string(),
            department: "Management".to_string(),
            email: "ana.reyes@example.com".to_string(),
            phone: "204-555-0133".to_string(),
            branch_id: winnipeg.id.clone(),
        },
        NewEmployee {
            name: "Joe Smith".to_string(),
            position: "Loan Officer".to_string(),
            department: "Loans".to_string(),
            email: "joe.smith@example.com".to_string(),
            phone: "204-555-0187".to_string(),
            branch_id: downtown.id.clone(),
        },
    ];

    for employee in employees {
        EmployeeOperations::create(store, employee).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seed_populates_both_collections() {
        let store = MemoryStore::new();
        load_seed_data(&store).await.unwrap();

        let branches = BranchOperations::get_all(&store).await.unwrap();
        let employees = EmployeeOperations::get_all(&store).await.unwrap();
        assert_eq!(branches.len(), 2);
        assert_eq!(employees.len(), 3);

        // Every seeded employee points at a seeded branch.
        for employee in employees {
            assert!(branches.iter().any(|branch| branch.id == employee.branch_id));
        }
    }
}
