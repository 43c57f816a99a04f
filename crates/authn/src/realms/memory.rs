//! In-memory password realm (argon2-hashed secrets).

use std::collections::HashMap;

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use password_hash::rand_core::OsRng;
use password_hash::{PasswordHash, SaltString};

use trustgate_core::RealmError;

use crate::credential::{Credential, CredentialKind};
use crate::outcome::ValidationOutcome;
use crate::realm::Realm;

fn hash_password(password: &str) -> Result<String, RealmError> {
    let salt = SaltString::generate(&mut OsRng);
    let phc = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| RealmError::msg(e.to_string()))?
        .to_string();
    Ok(phc)
}

/// Password realm backed by a fixed in-process user table.
///
/// Secrets are stored as argon2 PHC hash strings; nothing is persisted.
/// Gates on [`CredentialKind::Password`]. An unknown subject is
/// non-conclusive (`NotValidated`) so lower-priority realms still get a
/// chance; a wrong password for a known subject is an authoritative
/// `Invalid`.
pub struct MemoryPasswordRealm {
    name: String,
    priority: i32,
    users: HashMap<String, String>,
}

impl MemoryPasswordRealm {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            priority: 0,
            users: HashMap::new(),
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Add a user whose password hash was computed elsewhere (PHC string).
    pub fn with_user_hash(
        mut self,
        subject: impl Into<String>,
        phc_hash: impl Into<String>,
    ) -> Self {
        self.users.insert(subject.into(), phc_hash.into());
        self
    }

    /// Hash `password` and add the user (dev/test convenience).
    pub fn with_user(
        self,
        subject: impl Into<String>,
        password: &str,
    ) -> Result<Self, RealmError> {
        let phc = hash_password(password)?;
        Ok(self.with_user_hash(subject, phc))
    }
}

impl Realm for MemoryPasswordRealm {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn can_validate(&self, credential: &Credential) -> Result<bool, RealmError> {
        Ok(credential.kind() == CredentialKind::Password)
    }

    fn validate(&self, credential: &Credential) -> Result<ValidationOutcome, RealmError> {
        let Credential::Password(password) = credential else {
            return Ok(ValidationOutcome::not_validated());
        };

        let subject = password.subject.as_str();
        let Some(stored) = self.users.get(subject) else {
            // Unknown subject: let another realm have a go.
            return Ok(ValidationOutcome::not_validated());
        };

        let parsed = PasswordHash::new(stored).map_err(|e| {
            RealmError::msg(format!("stored hash for '{subject}' is malformed: {e}"))
        })?;

        if Argon2::default()
            .verify_password(password.secret.expose().as_bytes(), &parsed)
            .is_ok()
        {
            Ok(ValidationOutcome::valid(&self.name).with_claim("sub", subject))
        } else {
            Ok(ValidationOutcome::invalid(&self.name))
        }
    }
}
