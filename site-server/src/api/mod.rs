//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`products`] - catalog listing, lookup and comparison
//! - [`contact`] - contact form submission

pub mod contact;
pub mod health;
pub mod products;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
