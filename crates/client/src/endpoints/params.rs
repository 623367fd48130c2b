//! Query-parameter helpers shared by the endpoint modules.

use std::time::Duration;

use crate::endpoints::url::duration_param;
use crate::models::ActiveShardCount;

/// Append `timeout` and `master_timeout` parameters when set.
pub(crate) fn append_timeouts(
    params: &mut Vec<(String, String)>,
    timeout: Option<Duration>,
    master_timeout: Option<Duration>,
) {
    if let Some(timeout) = timeout {
        params.push(("timeout".to_string(), duration_param(timeout)));
    }
    if let Some(master_timeout) = master_timeout {
        params.push(("master_timeout".to_string(), duration_param(master_timeout)));
    }
}

/// Append the `wait_for_active_shards` parameter when set.
pub(crate) fn append_wait_for_active_shards(
    params: &mut Vec<(String, String)>,
    wait: Option<ActiveShardCount>,
) {
    if let Some(wait) = wait {
        params.push(("wait_for_active_shards".to_string(), wait.as_param()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_timeouts() {
        let mut params = Vec::new();
        append_timeouts(
            &mut params,
            Some(Duration::from_secs(30)),
            Some(Duration::from_secs(10)),
        );
        assert_eq!(
            params,
            vec![
                ("timeout".to_string(), "30000ms".to_string()),
                ("master_timeout".to_string(), "10000ms".to_string()),
            ]
        );
    }

    #[test]
    fn test_append_nothing_when_unset() {
        let mut params = Vec::new();
        append_timeouts(&mut params, None, None);
        append_wait_for_active_shards(&mut params, None);
        assert!(params.is_empty());
    }

    #[test]
    fn test_append_wait_for_active_shards() {
        let mut params = Vec::new();
        append_wait_for_active_shards(&mut params, Some(ActiveShardCount::All));
        assert_eq!(
            params,
            vec![("wait_for_active_shards".to_string(), "all".to_string())]
        );
    }
}
