use jiff::{SignedDuration, Timestamp};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AuthError;
use crate::jwt::{TokenVerifier, ADMIN_ROLE};

/// Admin sessions expire after this long regardless of token lifetime.
pub const ADMIN_SESSION_TTL: SignedDuration = SignedDuration::from_hours(8);

/// The three-way role split route guards key off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Actor {
    Public,
    Contributor { uid: String },
    Admin { uid: String },
}

impl Actor {
    pub fn is_public(&self) -> bool {
        matches!(self, Actor::Public)
    }

    pub fn is_contributor(&self) -> bool {
        matches!(self, Actor::Contributor { .. })
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Actor::Admin { .. })
    }

    /// Resolve a request to an actor. No token means public; a valid token
    /// with the admin role claim means admin; any other valid token means
    /// contributor. Invalid tokens are an error, not a silent downgrade.
    pub fn resolve(verifier: &TokenVerifier, token: Option<&str>) -> Result<Actor, AuthError> {
        let Some(token) = token else {
            return Ok(Actor::Public);
        };
        let claims = verifier.verify(token)?;
        if claims.role.as_deref() == Some(ADMIN_ROLE) {
            Ok(Actor::Admin { uid: claims.sub })
        } else {
            Ok(Actor::Contributor { uid: claims.sub })
        }
    }
}

/// An explicit, expiring admin session minted from a verified admin token.
/// Passed through request context — never a module-global flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminSession {
    pub uid: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
}

impl AdminSession {
    /// Mint a session for a token carrying the admin role claim.
    pub fn open(verifier: &TokenVerifier, token: &str) -> Result<AdminSession, AuthError> {
        let claims = verifier.verify(token)?;
        if claims.role.as_deref() != Some(ADMIN_ROLE) {
            return Err(AuthError::AdminRequired);
        }
        let issued_at = Timestamp::now();
        info!(uid = %claims.sub, "admin session opened");
        Ok(AdminSession {
            uid: claims.sub,
            issued_at,
            expires_at: issued_at
                .saturating_add(ADMIN_SESSION_TTL)
                .expect("saturating_add with a SignedDuration cannot fail"),
        })
    }

    pub fn is_expired(&self) -> bool {
        Timestamp::now() > self.expires_at
    }

    /// Guard helper for admin routes.
    pub fn require_active(&self) -> Result<(), AuthError> {
        if self.is_expired() {
            Err(AuthError::SessionExpired)
        } else {
            Ok(())
        }
    }
}
