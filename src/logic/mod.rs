pub mod branch_ops;
pub mod employee_ops;
pub mod schemas;
pub mod validate;

pub use branch_ops::BranchOperations;
pub use employee_ops::EmployeeOperations;
pub use validate::{validate_request, FieldRule, PartRules, RequestPart, RequestSchema};
