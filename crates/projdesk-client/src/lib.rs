//! # projdesk-client
//!
//! HTTP client for the projects REST service.
//!
//! This crate provides:
//! - [`ProjdeskClient`], the reqwest implementation of
//!   [`ProjectsBackend`](projdesk_core::ProjectsBackend)
//! - [`HttpSessionVerifier`], which resolves the session through a token
//!   verification endpoint
//! - [`ClientConfig`], base URL and timeout settings

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod client;
pub mod config;
pub mod error;
pub mod paths;
pub mod session;

pub use client::ProjdeskClient;
pub use config::ClientConfig;
pub use session::HttpSessionVerifier;
