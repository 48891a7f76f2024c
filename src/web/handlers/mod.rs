//! API handlers for the Web API.

pub mod auth;
pub mod recipe;

pub use auth::*;
pub use recipe::*;
