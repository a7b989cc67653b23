//! Shared types and models for the Oyster Status API
//!
//! This crate contains the response shapes served by the backend and
//! consumed by the dashboard client.

pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
