//! Email address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An email address, kept exactly as the client sent it.
///
/// No format is enforced. Equality is byte-for-byte, so `Ann@example.com`
/// and `ann@example.com` are two different accounts.
///
/// ## Examples
///
/// ```
/// use mercato_core::Email;
///
/// assert_eq!(Email::new("user@example.com").as_str(), "user@example.com");
/// assert_ne!(Email::new("Ann@example.com"), Email::new("ann@example.com"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Wrap an address.
    #[must_use]
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the email address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Email {
    fn from(address: String) -> Self {
        Self(address)
    }
}

impl From<&str> for Email {
    fn from(address: &str) -> Self {
        Self(address.to_owned())
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(Email::new("ann@example.com"), Email::new("ANN@example.com"));
        assert_eq!(Email::new("ann@example.com"), Email::from("ann@example.com"));
    }

    #[test]
    fn test_deserialize_accepts_any_string() {
        for raw in ["user@example.com", "bob", "", "@", "  spaced  "] {
            let json = serde_json::to_string(raw).unwrap();
            let email: Email = serde_json::from_str(&json).unwrap();
            assert_eq!(email.as_str(), raw);
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&Email::new("user@example.com")).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }

    #[test]
    fn test_rejects_non_string() {
        assert!(serde_json::from_str::<Email>("42").is_err());
    }
}
