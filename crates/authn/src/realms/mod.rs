//! Built-in reference realms.
//!
//! Small, in-process validators that exercise the [`Realm`](crate::Realm)
//! surface (kind gating, claims emission) and are useful for tests and
//! development wiring. Production deployments typically register their own
//! realm implementations instead.

pub mod memory;
pub mod token;

pub use memory::MemoryPasswordRealm;
pub use token::{BearerTokenRealm, TokenClaims, TokenValidationError};
