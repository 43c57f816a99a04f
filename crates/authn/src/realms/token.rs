//! Bearer-token realm over pre-verified token claims.
//!
//! Token decoding and signature verification are intentionally out of scope;
//! this realm maps opaque token strings to already-trusted [`TokenClaims`]
//! and enforces the time window.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use trustgate_core::{Claims, RealmError, SubjectId};

use crate::credential::{Credential, CredentialKind};
use crate::outcome::ValidationOutcome;
use crate::realm::Realm;

/// Claims carried by an issued token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// Subject / principal identifier.
    pub subject: SubjectId,

    /// Issued-at timestamp.
    pub issued_at: DateTime<Utc>,

    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,

    /// Additional claims attached at issuance.
    pub claims: Claims,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid token time window (expires_at <= issued_at)")]
    InvalidTimeWindow,
}

/// Deterministically validate a token's time window.
///
/// Note: this validates the *claims* only; whatever produced them is trusted
/// to have verified the token itself.
pub fn validate_time_window(
    claims: &TokenClaims,
    now: DateTime<Utc>,
) -> Result<(), TokenValidationError> {
    if claims.expires_at <= claims.issued_at {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.issued_at {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.expires_at {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

/// Bearer-token realm backed by a fixed token → claims table.
///
/// Gates on [`CredentialKind::BearerToken`]. An unknown token is
/// non-conclusive; a known token outside its time window is an authoritative
/// `Invalid` carrying the rejection reason as a diagnostic claim.
pub struct BearerTokenRealm {
    name: String,
    priority: i32,
    tokens: HashMap<String, TokenClaims>,
}

impl BearerTokenRealm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            tokens: HashMap::new(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_token(mut self, token: impl Into<String>, claims: TokenClaims) -> Self {
        self.tokens.insert(token.into(), claims);
        self
    }
}

impl Realm for BearerTokenRealm {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn can_validate(&self, credential: &Credential) -> Result<bool, RealmError> {
        Ok(credential.kind() == CredentialKind::BearerToken)
    }

    fn validate(&self, credential: &Credential) -> Result<ValidationOutcome, RealmError> {
        let Credential::BearerToken(bearer) = credential else {
            return Ok(ValidationOutcome::not_validated());
        };

        let Some(token) = self.tokens.get(bearer.token.expose()) else {
            return Ok(ValidationOutcome::not_validated());
        };

        match validate_time_window(token, Utc::now()) {
            Ok(()) => {
                let mut outcome = ValidationOutcome::valid(&self.name)
                    .with_claim("sub", token.subject.as_str());
                for (key, value) in token.claims.iter() {
                    outcome = outcome.with_claim(key, value.clone());
                }
                Ok(outcome)
            }
            Err(reason) => Ok(ValidationOutcome::invalid(&self.name)
                .with_claim("reason", reason.to_string())),
        }
    }
}
