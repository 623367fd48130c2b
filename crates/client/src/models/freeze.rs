//! Freeze and unfreeze request models.
//!
//! Frozen indices stay searchable but drop their transient memory
//! structures; both operations return a shards-acknowledged response.

use std::time::Duration;

use crate::models::common::{ActiveShardCount, IndicesOptions};

/// Request to freeze one or more indices.
#[derive(Debug, Clone, Default)]
pub struct FreezeIndexRequest {
    pub indices: Vec<String>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub wait_for_active_shards: Option<ActiveShardCount>,
    pub options: IndicesOptions,
}

impl FreezeIndexRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}

/// Request to unfreeze one or more indices.
#[derive(Debug, Clone, Default)]
pub struct UnfreezeIndexRequest {
    pub indices: Vec<String>,
    pub timeout: Option<Duration>,
    pub master_timeout: Option<Duration>,
    pub wait_for_active_shards: Option<ActiveShardCount>,
    pub options: IndicesOptions,
}

impl UnfreezeIndexRequest {
    pub fn new(indices: Vec<String>) -> Self {
        Self {
            indices,
            ..Self::default()
        }
    }
}
