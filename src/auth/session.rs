//! Authentication session management for Ladle.
//!
//! This module provides opaque session tokens and login/logout
//! functionality. Sessions live for the process lifetime; there is
//! no expiry policy.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::db::User;

/// Session-related errors.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Invalid credentials (wrong username or password).
    #[error("invalid credentials")]
    InvalidCredentials,
}

/// Authentication session representing a logged-in user.
#[derive(Debug, Clone)]
pub struct Session {
    /// Unique session token (UUID v4).
    pub token: String,
    /// User ID associated with this session.
    pub user_id: i64,
}

impl Session {
    /// Create a new authentication session for a user.
    pub fn new(user_id: i64) -> Self {
        Self {
            token: Uuid::new_v4().to_string(),
            user_id,
        }
    }
}

/// Session manager for tracking active sessions.
///
/// Callers share a manager across requests behind a lock; every
/// operation on a token happens under that lock, so per-token reads
/// and writes are atomic.
#[derive(Debug, Default)]
pub struct SessionManager {
    /// Active sessions by token.
    sessions: HashMap<String, Session>,
}

impl SessionManager {
    /// Create a new session manager.
    pub fn new() -> Self {
        Self {
            sessions: HashMap::new(),
        }
    }

    /// Create a session for a user and return it.
    pub fn create(&mut self, user_id: i64) -> Session {
        let session = Session::new(user_id);
        self.sessions
            .insert(session.token.clone(), session.clone());
        session
    }

    /// Attempt to log in a user.
    ///
    /// Returns a `Session` on success, or an error on failure. A missing
    /// user and a wrong password both map to `InvalidCredentials`.
    pub fn login(
        &mut self,
        username: &str,
        password: &str,
        user: Option<&User>,
    ) -> Result<Session, SessionError> {
        // Check if user exists
        let user = match user {
            Some(u) => u,
            None => {
                warn!(username = %username, "Login failed: user not found");
                return Err(SessionError::InvalidCredentials);
            }
        };

        // Verify password
        match crate::auth::verify_password(password, &user.password) {
            Ok(()) => {
                let session = self.create(user.id);

                info!(
                    username = %username,
                    user_id = user.id,
                    "Login successful"
                );

                Ok(session)
            }
            Err(_) => {
                warn!(username = %username, "Login failed: wrong password");
                Err(SessionError::InvalidCredentials)
            }
        }
    }

    /// Resolve a session token to the associated user ID.
    pub fn resolve(&self, token: &str) -> Option<i64> {
        self.sessions.get(token).map(|s| s.user_id)
    }

    /// Destroy a session by token.
    ///
    /// Destroying an absent session is not an error; returns whether a
    /// session was actually removed.
    pub fn destroy(&mut self, token: &str) -> bool {
        if let Some(session) = self.sessions.remove(token) {
            info!(user_id = session.user_id, "Session destroyed");
            true
        } else {
            debug!("Destroy: session not found");
            false
        }
    }

    /// Get the number of active sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Get the number of sessions for a specific user.
    pub fn user_session_count(&self, user_id: i64) -> usize {
        self.sessions
            .values()
            .filter(|s| s.user_id == user_id)
            .count()
    }
}
