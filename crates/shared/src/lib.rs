//! Shared types, errors, and configuration for Tip Time.
//!
//! This crate provides common types used across all other crates:
//! - Money types with decimal precision
//! - Locales and their currency conventions
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
