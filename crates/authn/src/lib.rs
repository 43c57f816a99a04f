//! `trustgate-authn` — pluggable credential resolution.
//!
//! A submitted [`Credential`] is resolved against a priority-ordered,
//! runtime-mutable set of validators ([`Realm`]s) into a single trust
//! decision plus claims ([`ValidationOutcome`]).
//!
//! This crate is intentionally decoupled from HTTP and storage: a
//! request-handling layer extracts the credential and decides what the
//! returned outcome means for the request; realm implementations decide how
//! a credential is actually checked.

pub mod credential;
pub mod engine;
pub mod observer;
pub mod outcome;
pub mod realm;
pub mod realms;
pub mod registry;

pub use credential::{Credential, CredentialKind, PasswordCredential, Secret, TokenCredential};
pub use engine::AuthenticationEngine;
pub use observer::{AuthObserver, NoopObserver, TracingObserver};
pub use outcome::{ValidationOutcome, ValidationState};
pub use realm::Realm;
pub use registry::{RealmRegistry, RealmSnapshot};
