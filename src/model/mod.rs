pub mod branch;
pub mod common;
pub mod employee;

pub use branch::*;
pub use common::*;
pub use employee::*;
