//! Observer hooks around realm calls.
//!
//! Logging policy is injected rather than baked into the resolution
//! algorithm: the engine reports what happened, the observer decides what to
//! do about it.

use trustgate_core::RealmError;

use crate::outcome::ValidationOutcome;

/// Hooks invoked by the engine during one resolution.
///
/// All methods default to no-ops so implementations only override what they
/// care about.
pub trait AuthObserver: Send + Sync {
    /// A realm's applicability gate declined the credential.
    fn on_realm_skipped(&self, realm: &str) {
        let _ = realm;
    }

    /// A realm raised an unexpected error from `can_validate`/`validate`;
    /// the engine treats it as non-conclusive and continues.
    fn on_realm_error(&self, realm: &str, error: &RealmError) {
        let _ = (realm, error);
    }

    /// The final outcome of the resolution.
    fn on_outcome(&self, outcome: &ValidationOutcome) {
        let _ = outcome;
    }
}

/// Default observer: structured logging via `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl AuthObserver for TracingObserver {
    fn on_realm_skipped(&self, realm: &str) {
        tracing::debug!(realm, "realm declined credential");
    }

    fn on_realm_error(&self, realm: &str, error: &RealmError) {
        tracing::warn!(realm, %error, "realm failed; treated as non-conclusive");
    }

    fn on_outcome(&self, outcome: &ValidationOutcome) {
        tracing::debug!(
            state = ?outcome.state(),
            realm = outcome.realm(),
            "resolution finished"
        );
    }
}

/// Observer that records nothing (tests, embedding).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl AuthObserver for NoopObserver {}
