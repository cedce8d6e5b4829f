pub mod branch_handlers;
pub mod employee_handlers;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;

pub use handlers::*;
pub use response::*;
pub use routes::*;
