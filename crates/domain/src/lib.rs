//! # Daakia Domain
//!
//! Business domain types and models for the Daakia SSO core.
//!
//! This crate contains:
//! - Domain data types (`User`, `Config`, `SsoSettings`)
//! - Domain error types and Result definitions
//! - Domain constants (service identifiers, claim names)
//!
//! ## Architecture
//! - No dependencies on other Daakia crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
