//! forge-auth
//!
//! Role resolution for route guards. Identity comes from the OAuth
//! provider's JWT; the admin role is a server-verified claim on that same
//! token — there is no shared admin password and no client-side session
//! flag anywhere in this crate.

pub mod error;
pub mod gate;
pub mod jwt;

pub use error::AuthError;
pub use gate::{Actor, AdminSession};
pub use jwt::{Claims, TokenVerifier, ADMIN_ROLE};
