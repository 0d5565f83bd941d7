//! Newtype wrappers for domain identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A user's login name.
///
/// Usernames are compared exactly (case-sensitive), matching how the mock
/// store keys its accounts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(pub String);

impl Username {
    pub fn new(s: impl Into<String>) -> Self {
        Username(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Username {
    fn from(s: String) -> Self {
        Username(s)
    }
}

impl From<&str> for Username {
    fn from(s: &str) -> Self {
        Username(s.to_string())
    }
}

impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn display_is_the_bare_name() {
        assert_eq!(Username::new("demo").to_string(), "demo");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&Username::new("testuser")).unwrap();
        assert_eq!(json, "\"testuser\"");

        let parsed: Username = serde_json::from_str("\"demo\"").unwrap();
        assert_eq!(parsed, Username::from("demo"));
    }

    #[test]
    fn map_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(Username::new("demo"), 1);
        assert_eq!(map.get("demo"), Some(&1));
        assert_eq!(map.get("Demo"), None);
    }
}
