//! In-memory stores backing the API.
//!
//! Each store owns one collection behind its own `RwLock`. Reads share the
//! lock; every check-then-insert sequence (id assignment, email uniqueness)
//! runs under a single write guard. Nothing is persisted: state lives for
//! the life of the process.
//!
//! # Stores
//!
//! - [`CatalogStore`] - products, seeded with the demo catalog at startup
//! - [`AccountStore`] - users, unique by exact email
//! - [`OrderStore`] - orders, priced from the catalog at creation time

pub mod accounts;
pub mod catalog;
pub mod orders;
mod seed;

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

pub use accounts::AccountStore;
pub use catalog::{CatalogStore, CatalogView};
pub use orders::OrderStore;

/// Errors returned by store operations.
///
/// `NotFound`, `Conflict` and `Invalid` carry client-facing messages.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested entity was not found.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation (e.g., duplicate email).
    #[error("{0}")]
    Conflict(String),

    /// Well-formed input that cannot be processed (e.g., order total overflow).
    #[error("{0}")]
    Invalid(String),

    /// A writer panicked while holding the store lock.
    #[error("{0} store lock poisoned")]
    LockPoisoned(&'static str),

    /// Password hashing failed.
    #[error("password hashing failed")]
    PasswordHash,
}

fn read_lock<'a, T>(
    lock: &'a RwLock<T>,
    store: &'static str,
) -> Result<RwLockReadGuard<'a, T>, StoreError> {
    lock.read().map_err(|_| StoreError::LockPoisoned(store))
}

fn write_lock<'a, T>(
    lock: &'a RwLock<T>,
    store: &'static str,
) -> Result<RwLockWriteGuard<'a, T>, StoreError> {
    lock.write().map_err(|_| StoreError::LockPoisoned(store))
}
