//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` struct matching the table row
//! - A `Deserialize` create DTO
//! - A `Deserialize` update DTO (all fields `Option`)
//!
//! DTO fields stay `Option` even when required so that a missing key is
//! reported as a validation outcome rather than rejected during
//! deserialization.

pub mod list;
pub mod snapshot;
pub mod task;
