//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod check;
pub mod eval;
pub mod fit;
pub mod slopes;
