use axum::extract::Request;
use axum::handler::Handler;
use axum::middleware::{from_fn, Next};
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

use crate::api::{branch_handlers, employee_handlers, handlers, middleware};
use crate::config::CorsConfig;
use crate::logic::schemas::{branches, employee};
use crate::logic::validate::validate_request;
use crate::store::DocumentStore;

pub fn create_router<S: DocumentStore + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/", get(handlers::welcome))
        // Health check
        .route("/health", get(handlers::health_check))
        // API Documentation
        .route("/docs", get(handlers::get_api_docs))
        .route("/docs/openapi.json", get(handlers::get_openapi_spec))
        // Branch management
        .route(
            "/branches",
            get(branch_handlers::get_all_branches::<S>).post(
                branch_handlers::create_branch::<S>.layer(from_fn(
                    |req: Request, next: Next| validate_request(&branches::CREATE, req, next),
                )),
            ),
        )
        .route(
            "/branches/:id",
            get(branch_handlers::get_branch_by_id::<S>.layer(from_fn(
                |req: Request, next: Next| validate_request(&branches::GET_BY_ID, req, next),
            )))
            .put(branch_handlers::update_branch::<S>.layer(from_fn(
                |req: Request, next: Next| validate_request(&branches::UPDATE, req, next),
            )))
            .delete(branch_handlers::delete_branch::<S>.layer(from_fn(
                |req: Request, next: Next| validate_request(&branches::DELETE, req, next),
            ))),
        )
        // Employee management
        .route(
            "/employee",
            get(employee_handlers::get_all_employees::<S>).post(
                employee_handlers::create_employee::<S>.layer(from_fn(
                    |req: Request, next: Next| validate_request(&employee::CREATE, req, next),
                )),
            ),
        )
        .route(
            "/employee/branch/:branchId",
            get(employee_handlers::get_all_employees_for_a_branch::<S>.layer(from_fn(
                |req: Request, next: Next| validate_request(&employee::GET_BY_BRANCH, req, next),
            ))),
        )
        .route(
            "/employee/department/:departmentName",
            get(employee_handlers::get_employees_by_department::<S>.layer(from_fn(
                |req: Request, next: Next| {
                    validate_request(&employee::GET_BY_DEPARTMENT, req, next)
                },
            ))),
        )
        .route(
            "/employee/:id",
            get(employee_handlers::get_employee_by_id::<S>.layer(from_fn(
                |req: Request, next: Next| validate_request(&employee::GET_BY_ID, req, next),
            )))
            .put(employee_handlers::update_employee::<S>.layer(from_fn(
                |req: Request, next: Next| validate_request(&employee::UPDATE, req, next),
            )))
            .delete(employee_handlers::delete_employee::<S>.layer(from_fn(
                |req: Request, next: Next| validate_request(&employee::DELETE, req, next),
            ))),
        )
}

/// The fully assembled application: routes plus the standard middleware
/// stack. Used by the server and by the integration tests.
pub fn create_app<S: DocumentStore + 'static>(cors: &CorsConfig) -> Router<Arc<S>> {
    middleware::apply_middleware(create_router::<S>(), cors)
}
