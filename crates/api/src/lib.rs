//! Mercato API library.
//!
//! This crate provides the API service as a library, allowing it to be
//! tested in-process and reused. The `mercato-api` binary only adds
//! configuration, logging, and the listener.
//!
//! # Example
//!
//! ```rust,no_run
//! use mercato_api::{config::ApiConfig, routes, state::AppState};
//!
//! # async fn run() -> std::io::Result<()> {
//! let config = ApiConfig::default();
//! let app = routes::app(AppState::new());
//! let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
//! axum::serve(listener, app).await
//! # }
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
