//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::auth::{register, PasswordError, RegistrationError, RegistrationRequest, SessionManager};
use crate::db::{Database, User, UserRepository};
use crate::web::dto::{
    LoginRequest, LoginResponse, MessageResponse, SessionResponse, SignupRequest,
};
use crate::web::error::ApiError;

/// Name of the session cookie issued at login.
pub const SESSION_COOKIE: &str = "session_id";

/// Application state shared across handlers.
pub struct AppState {
    /// Database handle.
    pub db: Arc<Database>,
    /// Active sessions (opaque token -> user id).
    pub sessions: RwLock<SessionManager>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            sessions: RwLock::new(SessionManager::new()),
        }
    }
}

/// Resolve the authenticated user from the session cookie.
///
/// Fails with 401 if there is no cookie, the token resolves to no
/// session, or the referenced user no longer exists.
pub(crate) async fn current_user(state: &AppState, jar: &CookieJar) -> Result<User, ApiError> {
    let token = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .ok_or_else(|| ApiError::unauthorized("Unauthorized."))?;

    let user_id = state
        .sessions
        .read()
        .await
        .resolve(&token)
        .ok_or_else(|| ApiError::unauthorized("Unauthorized."))?;

    let repo = UserRepository::new(state.db.pool());
    repo.get_by_id(user_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to load session user: {}", e);
            ApiError::internal("Database error")
        })?
        .ok_or_else(|| ApiError::unauthorized("Unauthorized."))
}

/// POST /signup - Create a new account.
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignupRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    // Validate input
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(ApiError::unprocessable(
                "Username and password are required.",
            ))
        }
    };

    let mut request = RegistrationRequest::new(username, password);
    if let Some(bio) = req.bio {
        request = request.with_bio(bio);
    }
    if let Some(image_url) = req.image_url {
        request = request.with_image_url(image_url);
    }

    let repo = UserRepository::new(state.db.pool());
    register(&repo, request).await.map_err(|e| match e {
        RegistrationError::MissingCredentials => {
            ApiError::unprocessable("Username and password are required.")
        }
        RegistrationError::UsernameExists => ApiError::conflict("Username already exists."),
        RegistrationError::Password(PasswordError::HashError(msg)) => {
            tracing::error!("Password hashing failed: {}", msg);
            ApiError::internal("Failed to create user")
        }
        RegistrationError::Password(e) => ApiError::unprocessable(format!("Password error: {e}")),
        RegistrationError::Database(msg) => {
            tracing::error!("User creation failed: {}", msg);
            ApiError::internal("Failed to create user")
        }
    })?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User created successfully.")),
    ))
}

/// POST /login - User login.
///
/// On success, establishes a session and delivers its token via the
/// session cookie.
pub async fn login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(req): Json<LoginRequest>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    // Validate input
    let (username, password) = match (req.username, req.password) {
        (Some(u), Some(p)) if !u.is_empty() && !p.is_empty() => (u, p),
        _ => {
            return Err(ApiError::unprocessable(
                "Username and password are required.",
            ))
        }
    };

    // Get user from database
    let repo = UserRepository::new(state.db.pool());
    let user = repo.get_by_username(&username).await.map_err(|e| {
        tracing::error!("Failed to look up user: {}", e);
        ApiError::internal("Database error")
    })?;

    // Verify credentials and establish the session
    let session = state
        .sessions
        .write()
        .await
        .login(&username, &password, user.as_ref())
        .map_err(|_| ApiError::unauthorized("Invalid username or password."))?;

    let cookie = Cookie::build((SESSION_COOKIE, session.token))
        .path("/")
        .http_only(true)
        .build();
    let jar = jar.add(cookie);

    Ok((jar, Json(LoginResponse { username })))
}

/// GET /check_session - Resolve the current session to a user.
pub async fn check_session(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> Result<Json<SessionResponse>, ApiError> {
    let user = current_user(&state, &jar).await?;

    Ok(Json(SessionResponse {
        id: user.id,
        username: user.username,
    }))
}

/// DELETE /logout - Destroy the current session.
///
/// Idempotent: logging out without a session still succeeds.
pub async fn logout(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.write().await.destroy(cookie.value());
    }

    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));

    (jar, Json(MessageResponse::new("Logged out successfully.")))
}
