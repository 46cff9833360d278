//! Loading logic: TOML file or string in, [`BackplaneConfig`] out.
//!
//! Reads `config/backplane.toml` by default, then applies the
//! `BACKPLANE_REDIS_URI` env override.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::BackplaneError;

use super::raw::{RawBackplane, RawConfig};
use super::types::BackplaneConfig;

/// Config file used when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config/backplane.toml";

/// Env var that replaces `redisUri`, typically rendered by a secrets manager.
pub const REDIS_URI_ENV: &str = "BACKPLANE_REDIS_URI";

/// Load config from the given path, or `config/backplane.toml`, then apply the
/// env override. If no path is given and the default file does not exist,
/// built-in defaults are used.
pub fn load(config_path: Option<&str>) -> Result<BackplaneConfig, BackplaneError> {
    let uri_override = env::var(REDIS_URI_ENV).ok();

    if let Some(path) = config_path {
        return load_from(Path::new(path), uri_override.as_deref());
    }

    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        load_from(default_path, uri_override.as_deref())
    } else {
        debug!(path = DEFAULT_CONFIG_PATH, "no config file, using built-in defaults");
        Ok(resolve(RawBackplane::default(), uri_override.as_deref()))
    }
}

/// Internal loader: accepts an explicit path and an optional URI override.
/// Tests pass the override directly instead of mutating env vars.
pub fn load_from(
    path: &Path,
    redis_uri_override: Option<&str>,
) -> Result<BackplaneConfig, BackplaneError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| BackplaneError::Config(format!("cannot read {}: {e}", path.display())))?;

    let parsed: RawConfig = toml::from_str(&raw)
        .map_err(|e| BackplaneError::Config(format!("parse error in {}: {e}", path.display())))?;

    debug!(path = %path.display(), "backplane config parsed");
    Ok(resolve(parsed.backplane, redis_uri_override))
}

/// Parse a TOML document holding a `[backplane]` table. No env overrides.
pub fn parse(toml_str: &str) -> Result<BackplaneConfig, BackplaneError> {
    let parsed: RawConfig = toml::from_str(toml_str)
        .map_err(|e| BackplaneError::Config(format!("parse error: {e}")))?;
    Ok(resolve(parsed.backplane, None))
}

/// Turn the raw shape into the public value.
pub(super) fn resolve(raw: RawBackplane, redis_uri_override: Option<&str>) -> BackplaneConfig {
    if raw.subscribe_to_backplane.is_some() {
        warn!("`subscribeToBackplane` is deprecated and has no effect");
    }
    if raw.run_failsafe_operation.is_some() {
        warn!("`runFailsafeOperation` is deprecated and has no effect");
    }

    let redis_uri = match redis_uri_override.filter(|uri| !uri.is_empty()) {
        Some(uri) => {
            debug!(env = REDIS_URI_ENV, "redis uri taken from environment");
            Some(uri.to_string())
        }
        None => raw.redis_uri,
    };

    BackplaneConfig {
        kind: raw.kind,
        redis_uri,
        redis_nodes: raw.redis_nodes,
        redis_certificate_authority_file: raw
            .redis_certificate_authority_file
            .as_deref()
            .map(expand_home),
        jedis_pool_max_total: raw.jedis_pool_max_total,
        timeout_millis: raw.timeout,
        max_attempts: raw.max_attempts,
        redis_username: raw.redis_username,
        redis_password: raw.redis_password,
        redis_credential_file: raw.redis_credential_file.as_deref().map(expand_home),
        workers_hash_name: raw.workers_hash_name,
        worker_channel: raw.worker_channel,
        action_cache_prefix: raw.action_cache_prefix,
        action_cache_expire: raw.action_cache_expire,
        action_blacklist_prefix: raw.action_blacklist_prefix,
        action_blacklist_expire: raw.action_blacklist_expire,
        invocation_blacklist_prefix: raw.invocation_blacklist_prefix,
        operation_prefix: raw.operation_prefix,
        operation_expire: raw.operation_expire,
        pre_queued_operations_list_name: raw.pre_queued_operations_list_name,
        processing_list_name: raw.processing_list_name,
        processing_prefix: raw.processing_prefix,
        processing_timeout_millis: raw.processing_timeout_millis,
        queued_operations_list_name: raw.queued_operations_list_name,
        dispatching_prefix: raw.dispatching_prefix,
        dispatching_timeout_millis: raw.dispatching_timeout_millis,
        dispatched_operations_hash_name: raw.dispatched_operations_hash_name,
        operation_channel_prefix: raw.operation_channel_prefix,
        cas_prefix: raw.cas_prefix,
        cas_expire: raw.cas_expire,
        correlated_invocations_index_prefix: raw.correlated_invocations_index_prefix,
        max_correlated_invocations_index_timeout: raw.max_correlated_invocations_index_timeout,
        correlated_invocations_prefix: raw.correlated_invocations_prefix,
        max_correlated_invocations_timeout: raw.max_correlated_invocations_timeout,
        tool_invocations_prefix: raw.tool_invocations_prefix,
        max_tool_invocation_timeout: raw.max_tool_invocation_timeout,
        max_queue_depth: raw.max_queue_depth,
        max_pre_queue_depth: raw.max_pre_queue_depth,
        priority_queue: raw.priority_queue,
        queues: raw.queues,
        priority_poll_interval_millis: raw.priority_poll_interval_millis,
        subscribe_to_backplane: raw.subscribe_to_backplane.unwrap_or(true),
        run_failsafe_operation: raw.run_failsafe_operation.unwrap_or(true),
        cache_cas: raw.cache_cas,
    }
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
