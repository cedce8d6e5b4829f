use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::api::handlers::AppState;
use crate::api::response::ApiResponse;
use crate::error::ApiError;
use crate::logic::EmployeeOperations;
use crate::model::{Employee, EmployeeUpdate, Id, NewEmployee};
use crate::store::DocumentStore;

pub async fn get_all_employees<S: DocumentStore>(
    State(store): State<AppState<S>>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ApiError> {
    let employees = EmployeeOperations::get_all(&*store).await?;
    Ok(Json(ApiResponse::success(
        "Employee list returned successfully.",
        employees,
    )))
}

pub async fn get_employee_by_id<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = EmployeeOperations::get_by_id(&*store, &id).await?;
    Ok(Json(ApiResponse::success(
        "Employee retrieved successfully.",
        employee,
    )))
}

pub async fn create_employee<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Json(payload): Json<NewEmployee>,
) -> Result<(StatusCode, Json<ApiResponse<Employee>>), ApiError> {
    let employee = EmployeeOperations::create(&*store, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Employee has been created successfully",
            employee,
        )),
    ))
}

pub async fn update_employee<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    Json(payload): Json<EmployeeUpdate>,
) -> Result<Json<ApiResponse<Employee>>, ApiError> {
    let employee = EmployeeOperations::update(&*store, &id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Employee information updated successfully.",
        employee,
    )))
}

pub async fn delete_employee<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    EmployeeOperations::delete(&*store, &id).await?;
    Ok(Json(ApiResponse::message("Employee deleted successfully")))
}

pub async fn get_all_employees_for_a_branch<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(branch_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ApiError> {
    let employees = EmployeeOperations::for_branch(&*store, &branch_id).await?;
    Ok(Json(ApiResponse::success(
        "Employees for branch retrieved successfully.",
        employees,
    )))
}

pub async fn get_employees_by_department<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(department_name): Path<String>,
) -> Result<Json<ApiResponse<Vec<Employee>>>, ApiError> {
    let employees = EmployeeOperations::by_department(&*store, &department_name).await?;
    Ok(Json(ApiResponse::success(
        "Employees in department retrieved successfully.",
        employees,
    )))
}
