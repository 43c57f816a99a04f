//! Tri-state validation outcome with attached claims.

use serde::Serialize;

use trustgate_core::{ClaimValue, Claims};

/// State of one validation attempt.
///
/// `NotValidated` is the only permissible state before any realm has run.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ValidationState {
    #[default]
    NotValidated,
    Invalid,
    Valid,
}

/// Result of one validator's attempt, or of a whole resolution.
///
/// Created once per realm invocation. The engine returns either the single
/// winning `Valid` outcome or the first remembered `Invalid` one — claims are
/// never merged across realms, so every claim originates from exactly one
/// authoritative realm. Consumed by the caller and discarded; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    state: ValidationState,
    realm: Option<String>,
    claims: Claims,
}

impl ValidationOutcome {
    /// The pre-resolution outcome: no realm has produced a verdict.
    pub fn not_validated() -> Self {
        Self {
            state: ValidationState::NotValidated,
            realm: None,
            claims: Claims::new(),
        }
    }

    /// The named realm examined the credential and rejected it.
    pub fn invalid(realm: impl Into<String>) -> Self {
        Self {
            state: ValidationState::Invalid,
            realm: Some(realm.into()),
            claims: Claims::new(),
        }
    }

    /// The named realm vouches for the credential.
    pub fn valid(realm: impl Into<String>) -> Self {
        Self {
            state: ValidationState::Valid,
            realm: Some(realm.into()),
            claims: Claims::new(),
        }
    }

    /// Attach a claim, replacing any existing value under the same key.
    ///
    /// Realms typically chain this while building their outcome. Claims on
    /// `Invalid` outcomes are permitted and carry diagnostic detail for the
    /// authoritative failure.
    pub fn with_claim(mut self, key: impl Into<String>, value: impl Into<ClaimValue>) -> Self {
        self.claims.insert(key, value);
        self
    }

    pub fn state(&self) -> ValidationState {
        self.state
    }

    /// Name of the realm that produced this outcome, if any ran.
    pub fn realm(&self) -> Option<&str> {
        self.realm.as_deref()
    }

    pub fn claims(&self) -> &Claims {
        &self.claims
    }

    pub fn is_valid(&self) -> bool {
        self.state == ValidationState::Valid
    }

    pub fn is_invalid(&self) -> bool {
        self.state == ValidationState::Invalid
    }

    pub fn is_not_validated(&self) -> bool {
        self.state == ValidationState::NotValidated
    }
}
