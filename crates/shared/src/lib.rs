//! Shared leaf types, errors, and configuration for Coinage.
//!
//! This crate provides the pieces every other crate builds on:
//! - Currency codes and minor-unit policies
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use types::{CurrencyCode, MinorUnit};
