//! Backplane configuration: schema, loading, and credential resolution.
//!
//! # Module layout
//!
//! - **types**: `BackplaneConfig` and its accessors, plus `BackplaneType` and
//!   `QueueDefinition`.
//! - **raw**: raw TOML deserialization types with the file's camelCase keys
//!   and the deployed defaults. Kept private.
//! - **load**: `load`, `load_from`, `parse`, `expand_home`.
//! - **credentials**: username/password resolution and URI masking.

mod credentials;
mod load;
mod raw;
mod types;

pub use credentials::{REDACTION_MARKER, uri_password};
pub use load::{DEFAULT_CONFIG_PATH, REDIS_URI_ENV, expand_home, load, load_from, parse};
pub use types::*;
