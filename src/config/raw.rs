//! Raw TOML deserialization types.
//!
//! These structs mirror the file shape. Keys are camelCase so existing
//! backplane configs keep loading unchanged. The `load` module converts
//! them into [`BackplaneConfig`](super::BackplaneConfig).

use serde::Deserialize;

use super::types::{BackplaneType, QueueDefinition};

/// Raw TOML shape: serde target before resolution.
#[derive(Deserialize, Default)]
pub(super) struct RawConfig {
    #[serde(default)]
    pub backplane: RawBackplane,
}

/// The `[backplane]` table. Every key is optional; absent keys take the
/// values from [`RawBackplane::default`].
#[derive(Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(super) struct RawBackplane {
    #[serde(rename = "type")]
    pub kind: BackplaneType,
    pub redis_uri: Option<String>,
    pub jedis_pool_max_total: u32,
    pub workers_hash_name: String,
    pub worker_channel: String,
    pub action_cache_prefix: String,
    pub action_cache_expire: u64,
    pub action_blacklist_prefix: String,
    pub action_blacklist_expire: u64,
    pub invocation_blacklist_prefix: String,
    pub operation_prefix: String,
    pub operation_expire: u64,
    pub pre_queued_operations_list_name: String,
    pub processing_list_name: String,
    pub processing_prefix: String,
    pub processing_timeout_millis: u64,
    pub queued_operations_list_name: String,
    pub dispatching_prefix: String,
    pub dispatching_timeout_millis: u64,
    pub dispatched_operations_hash_name: String,
    pub operation_channel_prefix: String,
    pub cas_prefix: String,
    pub cas_expire: u64,
    pub correlated_invocations_index_prefix: String,
    pub max_correlated_invocations_index_timeout: u64,
    pub correlated_invocations_prefix: String,
    pub max_correlated_invocations_timeout: u64,
    pub tool_invocations_prefix: String,
    pub max_tool_invocation_timeout: u64,
    /// Deprecated. Kept as `Option` so the loader can tell whether it was set.
    pub subscribe_to_backplane: Option<bool>,
    /// Deprecated. Kept as `Option` so the loader can tell whether it was set.
    pub run_failsafe_operation: Option<bool>,
    pub max_queue_depth: u64,
    pub max_pre_queue_depth: u64,
    pub priority_queue: bool,
    pub queues: Vec<QueueDefinition>,
    pub redis_credential_file: Option<String>,
    pub redis_username: Option<String>,
    pub redis_password: Option<String>,
    pub redis_certificate_authority_file: Option<String>,
    pub timeout: u64,
    pub redis_nodes: Vec<String>,
    pub max_attempts: u32,
    pub cache_cas: bool,
    pub priority_poll_interval_millis: u64,
}

const DAY_SECS: u64 = 24 * 60 * 60;
const WEEK_SECS: u64 = 7 * DAY_SECS;

impl Default for RawBackplane {
    fn default() -> Self {
        Self {
            kind: BackplaneType::Shard,
            redis_uri: None,
            jedis_pool_max_total: 4000,
            workers_hash_name: "Workers".into(),
            worker_channel: "WorkerChannel".into(),
            action_cache_prefix: "ActionCache".into(),
            action_cache_expire: 4 * WEEK_SECS,
            action_blacklist_prefix: "ActionBlacklist".into(),
            action_blacklist_expire: 60 * 60,
            invocation_blacklist_prefix: "InvocationBlacklist".into(),
            operation_prefix: "Operation".into(),
            operation_expire: WEEK_SECS,
            pre_queued_operations_list_name: "{Arrival}:PreQueuedOperations".into(),
            processing_list_name: "{Arrival}:ProcessingOperations".into(),
            processing_prefix: "Processing".into(),
            processing_timeout_millis: 20_000,
            queued_operations_list_name: "{Execution}:QueuedOperations".into(),
            dispatching_prefix: "Dispatching".into(),
            dispatching_timeout_millis: 10_000,
            dispatched_operations_hash_name: "DispatchedOperations".into(),
            operation_channel_prefix: "OperationChannel".into(),
            cas_prefix: "ContentAddressableStorage".into(),
            cas_expire: WEEK_SECS,
            correlated_invocations_index_prefix: "CorrelatedInvocationsIndex".into(),
            max_correlated_invocations_index_timeout: 3 * DAY_SECS,
            correlated_invocations_prefix: "CorrelatedInvocation".into(),
            max_correlated_invocations_timeout: WEEK_SECS,
            tool_invocations_prefix: "ToolInvocation".into(),
            max_tool_invocation_timeout: WEEK_SECS,
            subscribe_to_backplane: None,
            run_failsafe_operation: None,
            max_queue_depth: 100_000,
            max_pre_queue_depth: 1_000_000,
            priority_queue: false,
            queues: Vec::new(),
            redis_credential_file: None,
            redis_username: None,
            redis_password: None,
            redis_certificate_authority_file: None,
            timeout: 10_000,
            redis_nodes: Vec::new(),
            max_attempts: 20,
            cache_cas: false,
            priority_poll_interval_millis: 100,
        }
    }
}
