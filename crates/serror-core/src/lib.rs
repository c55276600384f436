//! # serror-core
//!
//! Platform-agnostic building blocks for the `serror` error taxonomy.
//!
//! Nothing in here knows about error kinds or registries; those live in
//! the `serror` crate. This crate only holds the fixed tables and value
//! plumbing the kinds are built from.
//!
//! ## Modules
//!
//! - `status` - HTTP status code → human-readable name table
//! - `value` - Field values carried by errors and their message rendering
//! - `codes` - OS error-code names and the code families the classifier uses
//! - `env` - Environment variable utilities

pub mod codes;
pub mod env;
pub mod status;
pub mod value;

// Re-exports for convenience
pub use env::{env_get_bool, env_get_list, env_get_opt};
pub use status::{status_name, UNASSIGNED};
pub use value::{translate_value, Value};
