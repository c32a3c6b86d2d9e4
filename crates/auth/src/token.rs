use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};

use pressgate_core::PrincipalId;

use crate::{Claims, Principal, TokenError, validate_claims};

/// Verifies a bearer credential and yields the request principal.
///
/// Object-safe so the HTTP layer can hold it as `Arc<dyn TokenValidator>`
/// and tests can substitute their own.
pub trait TokenValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, TokenError>;
}

/// HS256 validator backed by a shared secret.
pub struct Hs256Validator {
    key: DecodingKey,
    validation: Validation,
}

impl Hs256Validator {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Time-window checks run deterministically in validate_claims with
        // the injected clock, not against the library's system clock.
        validation.validate_exp = false;
        validation.required_spec_claims.clear();
        Self {
            key: DecodingKey::from_secret(secret),
            validation,
        }
    }
}

impl TokenValidator for Hs256Validator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<Principal, TokenError> {
        let decoded = jsonwebtoken::decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| TokenError::Malformed(e.to_string()))?;

        validate_claims(&decoded.claims, now)?;

        Ok(Principal {
            id: PrincipalId::new(decoded.claims.sub),
            role: decoded.claims.role,
        })
    }
}
