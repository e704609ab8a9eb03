//! Shared domain types, the outcome taxonomy, and input validation
//! helpers used by the rest of the workspace.

pub mod error;
pub mod types;
pub mod validate;
