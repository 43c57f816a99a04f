//! Resolution engine: ordered evaluation with short-circuit aggregation.

use std::sync::Arc;

use uuid::Uuid;

use crate::credential::Credential;
use crate::observer::{AuthObserver, TracingObserver};
use crate::outcome::ValidationOutcome;
use crate::registry::RealmRegistry;

/// Orchestrates a single authentication attempt over the registered realms.
///
/// Engines are plain, explicitly constructed values — no hidden globals.
/// Multiple independent engines can coexist (tests run them side by side);
/// registries are shared via `Arc`. The engine never owns realm instances,
/// it only borrows one immutable snapshot per attempt.
pub struct AuthenticationEngine {
    registry: Arc<RealmRegistry>,
    observer: Arc<dyn AuthObserver>,
}

impl AuthenticationEngine {
    pub fn new(registry: Arc<RealmRegistry>) -> Self {
        Self {
            registry,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the observer (logging policy).
    pub fn with_observer(mut self, observer: Arc<dyn AuthObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn registry(&self) -> &Arc<RealmRegistry> {
        &self.registry
    }

    /// Resolve `credential` against a priority-ordered snapshot of the
    /// registered realms.
    ///
    /// Walks one immutable snapshot, highest priority first (registration
    /// order on ties):
    ///
    /// - a realm whose gate declines the credential is skipped;
    /// - a `Valid` result wins immediately — no lower-priority realm is
    ///   consulted once a realm vouches for the credential;
    /// - the first `Invalid` result is remembered as the authoritative
    ///   failure and is never overwritten by later `Invalid` results;
    /// - a realm error is reported to the observer and the realm counts as
    ///   non-conclusive; evaluation continues.
    ///
    /// Each realm is consulted at most once; there is no retry. "No realm
    /// matched" and "all realms declined" are ordinary outcomes
    /// (`NotValidated`), never errors — the caller decides what a failed
    /// resolution means for the request.
    pub fn authenticate(&self, credential: &Credential) -> ValidationOutcome {
        let attempt = Uuid::now_v7();
        let span =
            tracing::debug_span!("authenticate", %attempt, kind = %credential.kind());
        let _guard = span.enter();

        let ordered = self.registry.snapshot();
        let mut best_failure = ValidationOutcome::not_validated();

        for realm in ordered.iter() {
            match realm.can_validate(credential) {
                Ok(true) => {}
                Ok(false) => {
                    self.observer.on_realm_skipped(realm.name());
                    continue;
                }
                Err(error) => {
                    // Same handling as a validate error: log and skip.
                    self.observer.on_realm_error(realm.name(), &error);
                    continue;
                }
            }

            match realm.validate(credential) {
                Ok(outcome) if outcome.is_valid() => {
                    self.observer.on_outcome(&outcome);
                    return outcome;
                }
                Ok(outcome) => {
                    if outcome.is_invalid() && best_failure.is_not_validated() {
                        best_failure = outcome;
                    }
                }
                Err(error) => {
                    self.observer.on_realm_error(realm.name(), &error);
                }
            }
        }

        self.observer.on_outcome(&best_failure);
        best_failure
    }
}
