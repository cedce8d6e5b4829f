use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;

use crate::api::handlers::AppState;
use crate::api::response::ApiResponse;
use crate::error::ApiError;
use crate::logic::BranchOperations;
use crate::model::{Branch, BranchUpdate, Id, NewBranch};
use crate::store::DocumentStore;

pub async fn get_all_branches<S: DocumentStore>(
    State(store): State<AppState<S>>,
) -> Result<Json<ApiResponse<Vec<Branch>>>, ApiError> {
    let branches = BranchOperations::get_all(&*store).await?;
    Ok(Json(ApiResponse::success(
        "Branches successfully retrieved",
        branches,
    )))
}

pub async fn get_branch_by_id<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<Branch>>, ApiError> {
    let branch = BranchOperations::get_by_id(&*store, &id).await?;
    Ok(Json(ApiResponse::success(
        "Branch retrieved successfully",
        branch,
    )))
}

pub async fn create_branch<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Json(payload): Json<NewBranch>,
) -> Result<(StatusCode, Json<ApiResponse<Branch>>), ApiError> {
    let branch = BranchOperations::create(&*store, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            "Branch has been created successfully",
            branch,
        )),
    ))
}

pub async fn update_branch<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
    Json(payload): Json<BranchUpdate>,
) -> Result<Json<ApiResponse<Branch>>, ApiError> {
    let branch = BranchOperations::update(&*store, &id, payload).await?;
    Ok(Json(ApiResponse::success(
        "Branch information updated successfully",
        branch,
    )))
}

pub async fn delete_branch<S: DocumentStore>(
    State(store): State<AppState<S>>,
    Path(id): Path<Id>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    BranchOperations::delete(&*store, &id).await?;
    Ok(Json(ApiResponse::message("Branch deleted successfully")))
}
