//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for interpolation and solver operations
//!
//! # Re-exports
//!
//! For convenience, [`InterpolationError`] and [`SolverError`] are re-exported
//! at this module level.

pub mod error;

pub use error::{InterpolationError, SolverError};
