//! Error model for credential resolution.
//!
//! Authentication failures are *not* errors here — they travel as ordinary
//! outcomes. Only configuration mistakes and misbehaving providers surface
//! through these types.

use thiserror::Error;

/// Fail-fast configuration error.
///
/// Surfaced to the caller of `register` and never swallowed. Keep this
/// focused on programmer/wiring mistakes; "no realm matched" is an outcome,
/// not an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A realm was registered with an empty name.
    #[error("realm name cannot be empty")]
    EmptyRealmName,
}

/// Unexpected failure raised by a realm's `can_validate`/`validate`.
///
/// The engine recovers from these locally: the observer is notified with the
/// realm's name and the realm counts as non-conclusive for that attempt.
/// Realm implementations can wrap any error source here.
#[derive(Debug, Error)]
#[error("realm failure: {0}")]
pub struct RealmError(#[from] anyhow::Error);

impl RealmError {
    /// Build a realm error from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        Self(anyhow::Error::msg(message.into()))
    }
}
