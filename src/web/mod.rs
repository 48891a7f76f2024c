//! Web API module for Ladle.
//!
//! This module provides the REST API: routing, DTOs, error translation,
//! session cookie handling, and the HTTP server.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
