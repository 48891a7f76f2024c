//! Ladle - a small recipe box API.
//!
//! A session-authenticated web API for user accounts and per-user
//! recipe records, implemented in Rust.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod recipe;
pub mod web;

pub use auth::{
    hash_password, register, validate_password, verify_password, PasswordError, RegistrationError,
    RegistrationRequest, Session, SessionError, SessionManager,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{LadleError, Result};
pub use recipe::{NewRecipe, Recipe, RecipeRepository, RecipeService};
pub use web::WebServer;
