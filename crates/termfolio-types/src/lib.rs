//! Foundation types for termfolio.
//!
//! Shared by every termfolio crate: the error type, the shell configuration,
//! and the platform-agnostic input directions used for history recall.

pub mod config;
pub mod error;
pub mod input;
