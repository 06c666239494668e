//! # Service Kit - Runtime Helpers for HTTP-Triggered Functions
//!
//! `service_kit` collects the plumbing every function service in this
//! workspace needs so that the service crates only carry their own handlers
//! and DTOs.
//!
//! ## Core Features:
//!
//! - **`ServerConfig`**: listen address resolution from the environment,
//!   including the port handed out by a Functions host
//!   (`FUNCTIONS_CUSTOMHANDLER_PORT`).
//!
//! - **`bootstrap`**: `tracing` subscriber installation, the default CORS and
//!   request-trace layers, and `serve` with graceful shutdown.
//!
//! - **`openapi_utils`**: serving and printing a `utoipa` OpenAPI document.
//!
//! - **`#[api_dto]`**: derives `Serialize`, `Deserialize`, `utoipa::ToSchema`
//!   and friends for wire DTOs, with a configurable `rename_all` casing.
//!

pub mod bootstrap;
pub mod error;
pub mod openapi_utils;
pub mod server_config;

pub use error::{Error, Result};
pub use server_config::ServerConfig;

pub use service_kit_macros::api_dto;
