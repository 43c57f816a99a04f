//! Credential model: opaque, kind-tagged authentication input.

use trustgate_core::SubjectId;

/// Secret material (a password, a raw bearer token).
///
/// `Debug` is redacted so secrets never reach logs. Deliberately not
/// serializable: credentials are never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Expose the raw secret for verification. Callers must not log this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Debug for Secret {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Secret(****)")
    }
}

/// Discriminates credential kinds so a realm can cheaply reject inputs it
/// does not understand (e.g. a password-only realm rejects a bearer token)
/// without attempting validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CredentialKind {
    Password,
    BearerToken,
}

impl core::fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CredentialKind::Password => f.write_str("password"),
            CredentialKind::BearerToken => f.write_str("bearer_token"),
        }
    }
}

/// Subject + password secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordCredential {
    pub subject: SubjectId,
    pub secret: Secret,
}

/// Opaque bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenCredential {
    pub token: Secret,
}

/// A credential submitted for one authentication attempt.
///
/// Immutable once constructed; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    Password(PasswordCredential),
    BearerToken(TokenCredential),
}

impl Credential {
    pub fn password(subject: impl Into<SubjectId>, secret: impl Into<String>) -> Self {
        Self::Password(PasswordCredential {
            subject: subject.into(),
            secret: Secret::new(secret),
        })
    }

    pub fn bearer_token(token: impl Into<String>) -> Self {
        Self::BearerToken(TokenCredential {
            token: Secret::new(token),
        })
    }

    pub fn kind(&self) -> CredentialKind {
        match self {
            Credential::Password(_) => CredentialKind::Password,
            Credential::BearerToken(_) => CredentialKind::BearerToken,
        }
    }
}
