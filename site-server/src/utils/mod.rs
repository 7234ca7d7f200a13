//! Utility module - error types and logging
//!
//! # Contents
//!
//! - [`AppError`] - application error type used by all handlers
//! - [`AppResponse`] - API error envelope
//! - logging setup

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
