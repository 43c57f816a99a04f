use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Identifier of the principal a credential claims to be.
///
/// Subjects are intentionally opaque strings at this layer; each realm
/// decides which subjects it recognizes. No uniqueness or format is imposed
/// here — a directory realm may treat subjects as DNs while a token realm
/// treats them as `sub` claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(Cow<'static, str>);

impl SubjectId {
    pub fn new(subject: impl Into<Cow<'static, str>>) -> Self {
        Self(subject.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0.into_owned()
    }
}

impl From<&'static str> for SubjectId {
    fn from(subject: &'static str) -> Self {
        Self(Cow::Borrowed(subject))
    }
}

impl From<String> for SubjectId {
    fn from(subject: String) -> Self {
        Self(Cow::Owned(subject))
    }
}

impl core::fmt::Display for SubjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_from_static_and_owned_strings() {
        let from_static = SubjectId::from("alice");
        let from_owned = SubjectId::from("alice".to_string());

        assert_eq!(from_static, from_owned);
        assert_eq!(from_static.as_str(), "alice");
    }

    #[test]
    fn into_string_round_trips() {
        let subject = SubjectId::new("cn=alice,ou=people");

        assert_eq!(subject.into_string(), "cn=alice,ou=people");
    }
}
