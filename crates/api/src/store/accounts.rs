//! Account store: registered users.

use std::sync::RwLock;

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::{info, instrument, warn};

use mercato_core::UserId;

use super::{StoreError, read_lock, write_lock};
use crate::models::{User, UserInput};

const STORE: &str = "account";

/// A stored user: the public record plus the password hash.
struct UserRecord {
    user: User,
    password_hash: String,
}

/// Registered users, unique by email.
#[derive(Default)]
pub struct AccountStore {
    users: RwLock<Vec<UserRecord>>,
}

impl AccountStore {
    /// Create an empty account store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    /// Register a new user.
    ///
    /// Emails are compared exactly (case-sensitive). The password is hashed
    /// with Argon2id before the store lock is taken; only the hash is kept.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if the email is already registered.
    /// Returns `StoreError::PasswordHash` if hashing fails.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub fn create(&self, input: UserInput) -> Result<User, StoreError> {
        let password_hash = hash_password(&input.password)?;

        let mut users = write_lock(&self.users, STORE)?;
        if users.iter().any(|r| r.user.email == input.email) {
            warn!("Registration rejected: email already registered");
            return Err(StoreError::Conflict("Email already registered".to_owned()));
        }

        let user = User {
            id: UserId::generate(),
            email: input.email,
            name: input.name,
            created_at: Utc::now(),
        };
        users.push(UserRecord {
            user: user.clone(),
            password_hash,
        });
        drop(users);

        info!(user_id = %user.id, "Registered user");
        Ok(user)
    }

    /// Get a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no user has this ID.
    pub fn get(&self, id: &UserId) -> Result<User, StoreError> {
        read_lock(&self.users, STORE)?
            .iter()
            .find(|r| &r.user.id == id)
            .map(|r| r.user.clone())
            .ok_or_else(|| StoreError::NotFound("User not found".to_owned()))
    }

    /// Number of registered users.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn len(&self) -> Result<usize, StoreError> {
        Ok(read_lock(&self.users, STORE)?.len())
    }

    /// Whether no users are registered.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::LockPoisoned` if the store lock is poisoned.
    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// Hash a password using Argon2id.
fn hash_password(password: &SecretString) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.expose_secret().as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| StoreError::PasswordHash)
}
