use trustgate_core::RealmError;

use crate::credential::Credential;
use crate::outcome::ValidationOutcome;

/// A pluggable credential validator ("identity store").
///
/// Realms are consulted by the engine in descending [`priority`] order, from
/// one immutable registry snapshot per attempt. A realm is fully responsible
/// for the correctness of a `Valid` verdict and its claims — the engine does
/// no independent verification.
///
/// Implementations are expected to be fast, synchronous, in-process checks.
/// An `Err` from either method marks the realm non-conclusive for that
/// attempt; it never aborts the whole resolution.
///
/// [`priority`]: Realm::priority
pub trait Realm: Send + Sync {
    /// Diagnostic name. Must be non-empty; need not be unique across realms.
    fn name(&self) -> &str;

    /// Evaluation rank: higher runs earlier. Read once at registration time.
    fn priority(&self) -> i32 {
        0
    }

    /// Cheap applicability gate, typically keyed on [`Credential::kind`].
    ///
    /// Returning `Ok(false)` skips this realm without counting it as a
    /// failure. Defaults to accepting everything.
    fn can_validate(&self, credential: &Credential) -> Result<bool, RealmError> {
        let _ = credential;
        Ok(true)
    }

    /// Validate the credential and produce a verdict plus claims.
    fn validate(&self, credential: &Credential) -> Result<ValidationOutcome, RealmError>;
}
