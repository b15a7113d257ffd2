use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// The role claim value that grants admin access.
pub const ADMIN_ROLE: &str = "admin";

/// Claims extracted from the identity provider's JWT.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iss: String,
    pub exp: u64,
    pub iat: u64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// Server-assigned role claim; absent for ordinary contributors.
    #[serde(default)]
    pub role: Option<String>,
}

/// Validates provider tokens against a pre-fetched public key.
///
/// In production the key comes from the provider's JWKS endpoint; tests
/// use a symmetric secret with HS256.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(decoding_key: DecodingKey, algorithm: Algorithm, issuer: &str) -> Self {
        let mut validation = Validation::new(algorithm);
        validation.set_issuer(&[issuer]);
        validation.validate_exp = true;
        Self {
            decoding_key,
            validation,
        }
    }

    /// Validate signature, issuer, and expiry, and return the claims.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        if token_data.claims.sub.is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }
        Ok(token_data.claims)
    }
}
