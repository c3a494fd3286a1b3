//! # courier-core
//!
//! Core crate for Courier. Contains configuration schemas, logging
//! setup, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Courier crates.

pub mod config;
pub mod error;
pub mod result;

pub use error::AppError;
pub use result::AppResult;
