//! End-to-end resolution flows across registry, engine, and built-in realms.

use std::sync::Arc;
use std::thread;

use chrono::{Duration, Utc};

use trustgate_authn::realms::{BearerTokenRealm, MemoryPasswordRealm, TokenClaims};
use trustgate_authn::{
    AuthenticationEngine, Credential, NoopObserver, Realm, RealmRegistry, ValidationOutcome,
    ValidationState,
};
use trustgate_core::{RealmError, SubjectId};

fn engine(registry: &Arc<RealmRegistry>) -> AuthenticationEngine {
    AuthenticationEngine::new(Arc::clone(registry)).with_observer(Arc::new(NoopObserver))
}

#[test]
fn password_and_token_credentials_route_to_their_realms() {
    let registry = Arc::new(RealmRegistry::new());

    let users = MemoryPasswordRealm::new("users")
        .with_priority(10)
        .with_user("alice", "correct horse")
        .unwrap();
    registry.register(Arc::new(users)).unwrap();

    let now = Utc::now();
    let tokens = BearerTokenRealm::new("tokens").with_priority(5).with_token(
        "tok-1",
        TokenClaims {
            subject: SubjectId::new("bob"),
            issued_at: now - Duration::minutes(1),
            expires_at: now + Duration::minutes(10),
            claims: [("dept", "ops")].into_iter().collect(),
        },
    );
    registry.register(Arc::new(tokens)).unwrap();

    let engine = engine(&registry);

    let by_password = engine.authenticate(&Credential::password("alice", "correct horse"));
    assert!(by_password.is_valid());
    assert_eq!(by_password.realm(), Some("users"));

    // The password realm gates out; the token realm answers.
    let by_token = engine.authenticate(&Credential::bearer_token("tok-1"));
    assert!(by_token.is_valid());
    assert_eq!(by_token.realm(), Some("tokens"));
    assert_eq!(
        by_token.claims().get("dept"),
        Some(&trustgate_core::ClaimValue::from("ops"))
    );

    let nobody = engine.authenticate(&Credential::password("nobody", "pw"));
    assert_eq!(nobody.state(), ValidationState::NotValidated);
}

#[test]
fn wrong_password_is_the_remembered_failure() {
    let registry = Arc::new(RealmRegistry::new());
    let users = MemoryPasswordRealm::new("users")
        .with_priority(10)
        .with_user("alice", "correct horse")
        .unwrap();
    registry.register(Arc::new(users)).unwrap();

    let outcome = engine(&registry).authenticate(&Credential::password("alice", "wrong"));

    assert!(outcome.is_invalid());
    assert_eq!(outcome.realm(), Some("users"));
}

/// Realm that registers a higher-priority `Valid` realm mid-validate, then
/// rejects. Proves the in-flight call keeps working off its own snapshot.
struct SelfUpgradingRealm {
    registry: Arc<RealmRegistry>,
}

struct AlwaysValidRealm {
    name: String,
    priority: i32,
}

impl Realm for AlwaysValidRealm {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn validate(&self, _: &Credential) -> Result<ValidationOutcome, RealmError> {
        Ok(ValidationOutcome::valid(&self.name))
    }
}

impl Realm for SelfUpgradingRealm {
    fn name(&self) -> &str {
        "self-upgrading"
    }

    fn priority(&self) -> i32 {
        1
    }

    fn validate(&self, _: &Credential) -> Result<ValidationOutcome, RealmError> {
        self.registry
            .register(Arc::new(AlwaysValidRealm {
                name: "late-arrival".to_string(),
                priority: 100,
            }))
            .map_err(|e| RealmError::msg(e.to_string()))?;
        Ok(ValidationOutcome::invalid(self.name()))
    }
}

#[test]
fn in_flight_resolution_is_isolated_from_registration() {
    let registry = Arc::new(RealmRegistry::new());
    registry
        .register(Arc::new(SelfUpgradingRealm {
            registry: Arc::clone(&registry),
        }))
        .unwrap();

    let engine = engine(&registry);
    let credential = Credential::password("alice", "pw");

    // First call: the late realm is registered mid-flight but must not be
    // consulted by this call.
    let first = engine.authenticate(&credential);
    assert!(first.is_invalid());
    assert_eq!(first.realm(), Some("self-upgrading"));

    // Second call: the new highest-priority realm wins.
    let second = engine.authenticate(&credential);
    assert!(second.is_valid());
    assert_eq!(second.realm(), Some("late-arrival"));
}

#[test]
fn concurrent_registration_never_tears_a_resolution() {
    let registry = Arc::new(RealmRegistry::new());
    registry
        .register(Arc::new(AlwaysValidRealm {
            name: "baseline".to_string(),
            priority: 0,
        }))
        .unwrap();

    let writer_registry = Arc::clone(&registry);
    let writer = thread::spawn(move || {
        for i in 0..100 {
            let realm = Arc::new(AlwaysValidRealm {
                name: format!("extra-{i}"),
                priority: i,
            });
            writer_registry.register(realm).unwrap();
        }
    });

    let reader_registry = Arc::clone(&registry);
    let reader = thread::spawn(move || {
        let engine = AuthenticationEngine::new(reader_registry)
            .with_observer(Arc::new(NoopObserver));
        let credential = Credential::password("alice", "pw");
        for _ in 0..100 {
            // Every snapshot contains at least the baseline realm, so every
            // resolution must conclude Valid.
            let outcome = engine.authenticate(&credential);
            assert!(outcome.is_valid());
        }
    });

    writer.join().unwrap();
    reader.join().unwrap();

    assert_eq!(registry.len(), 101);
}
