use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("invalid token: {0}")]
    InvalidToken(String),

    #[error("admin role required")]
    AdminRequired,

    #[error("admin session expired")]
    SessionExpired,

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}
