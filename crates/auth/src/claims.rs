use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Role;

/// Token claims the gateway expects once a credential has been decoded.
///
/// `iat`/`exp` are seconds since the Unix epoch, the JWT convention. The
/// single `role` claim is the whole of a principal's grant; there is no
/// role list and no per-claim permission set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject / principal identifier.
    pub sub: String,

    /// The principal's single assigned role.
    pub role: Role,

    /// Issued-at, seconds since epoch.
    pub iat: i64,

    /// Expiration, seconds since epoch.
    pub exp: i64,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,

    #[error("malformed token: {0}")]
    Malformed(String),
}

/// Deterministically validate token claims against an injected clock.
///
/// Signature verification and decoding happen in [`crate::token`]; this
/// checks the time window only, so tests can pin `now`.
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenError> {
    let now = now.timestamp();
    if claims.exp <= claims.iat {
        return Err(TokenError::InvalidTimeWindow);
    }
    if now < claims.iat {
        return Err(TokenError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn claims(iat: i64, exp: i64) -> Claims {
        Claims {
            sub: "writer-123".to_string(),
            role: Role::Writer,
            iat,
            exp,
        }
    }

    #[test]
    fn valid_window_passes() {
        assert!(validate_claims(&claims(100, 700), at(400)).is_ok());
    }

    #[test]
    fn expired_token_rejected() {
        assert_eq!(
            validate_claims(&claims(100, 700), at(700)),
            Err(TokenError::Expired)
        );
    }

    #[test]
    fn future_token_rejected() {
        assert_eq!(
            validate_claims(&claims(500, 700), at(400)),
            Err(TokenError::NotYetValid)
        );
    }

    #[test]
    fn inverted_window_rejected() {
        assert_eq!(
            validate_claims(&claims(700, 700), at(700)),
            Err(TokenError::InvalidTimeWindow)
        );
    }
}
