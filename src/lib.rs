//! Backplane configuration for a remote build-execution cluster.
//!
//! [`config::BackplaneConfig`] describes how the cluster reaches its shared
//! Redis coordination store: connection and pool settings, key-space names,
//! expirations and queue definitions. It also resolves the effective
//! credentials and renders a password-free URI for logs.
//!
//! Load it once at startup and pass it by reference to every consumer.

pub mod config;
pub mod error;
pub mod logger;
