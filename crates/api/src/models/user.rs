//! User account types.

use chrono::{DateTime, Utc};
use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

use mercato_core::{Email, UserId};

/// A registered user, as returned by the API.
///
/// Has no password field; only the account store sees the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for registering a user.
#[derive(Debug, Deserialize)]
pub struct UserInput {
    pub email: Email,
    pub name: String,
    /// Plaintext password; redacted in `Debug` output.
    #[serde(deserialize_with = "deserialize_secret")]
    pub password: SecretString,
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(SecretString::from)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::ExposeSecret;

    use super::*;

    #[test]
    fn test_input_debug_redacts_password() {
        let input: UserInput = serde_json::from_str(
            r#"{"email": "ann@example.com", "name": "Ann", "password": "hunter2-but-longer"}"#,
        )
        .unwrap();

        assert_eq!(input.password.expose_secret(), "hunter2-but-longer");
        assert!(!format!("{input:?}").contains("hunter2"));
    }

    #[test]
    fn test_input_accepts_any_email_string() {
        let input: UserInput = serde_json::from_str(
            r#"{"email": "nope", "name": "Ann", "password": "pw"}"#,
        )
        .unwrap();
        assert_eq!(input.email.as_str(), "nope");
    }

    #[test]
    fn test_user_json_has_no_password() {
        let user = User {
            id: UserId::new("u1"),
            email: Email::new("ann@example.com"),
            name: "Ann".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "ann@example.com");
    }
}
