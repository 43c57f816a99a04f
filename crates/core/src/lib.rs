//! `trustgate-core` — foundation primitives for credential resolution.
//!
//! This crate contains **pure domain** types (no infrastructure concerns).

pub mod claims;
pub mod error;
pub mod subject;

pub use claims::{ClaimValue, Claims};
pub use error::{ConfigError, RealmError};
pub use subject::SubjectId;
