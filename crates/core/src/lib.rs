//! Mercato Core - Shared domain types.
//!
//! This crate provides the types used by the Mercato API service:
//! - `api` - In-memory catalog, account and order stores behind an HTTP façade
//!
//! # Architecture
//!
//! The core crate contains only types and validation rules - no I/O, no
//! storage, no HTTP. Every constraint enforced here is enforced on
//! deserialization, so a value of one of these types is always valid.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, quantities, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
