//! Acknowledgment policy for write operations.
//!
//! A 2xx status only says the request was accepted. Whether the change took
//! effect is in the body, and where depends on the kind of operation:
//!
//! - structural writes report `acknowledged: true` (servers before 1.0 report
//!   `ok: true` instead);
//! - data-plane operations report a `_shards` block, and succeed only when
//!   `_shards.failed == 0`.
//!
//! A partial shard failure is returned as a [`Verdict::PartialFailure`],
//! never as an error. Missing fields are [`ClientError::MalformedResponse`].

use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::models::{AckResponse, ShardReport, ShardsResponse};

/// Outcome of a write operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Success,
    /// The server accepted the request but did not confirm it cluster-wide.
    NotAcknowledged,
    /// Some shards did not complete the operation.
    PartialFailure { failed: u64 },
}

impl Verdict {
    pub fn is_success(self) -> bool {
        self == Verdict::Success
    }
}

/// Anything a [`Verdict`] can be computed from.
pub trait Acknowledged {
    fn verdict(&self) -> Verdict;
}

impl Acknowledged for AckResponse {
    fn verdict(&self) -> Verdict {
        if self.acknowledged {
            Verdict::Success
        } else {
            Verdict::NotAcknowledged
        }
    }
}

impl Acknowledged for ShardsResponse {
    fn verdict(&self) -> Verdict {
        match self.shards.failed {
            0 => Verdict::Success,
            failed => Verdict::PartialFailure { failed },
        }
    }
}

/// Read a structural write result.
pub fn acknowledgment(body: Value) -> Result<AckResponse> {
    let acknowledged = match (body.get("acknowledged"), body.get("ok")) {
        (Some(Value::Bool(ack)), _) => *ack,
        (None | Some(Value::Null), Some(Value::Bool(ok))) => *ok,
        _ => {
            return Err(ClientError::MalformedResponse(format!(
                "write response carries neither 'acknowledged' nor 'ok': {}",
                body
            )));
        }
    };
    Ok(AckResponse {
        acknowledged,
        raw: body,
    })
}

/// Read a data-plane result from its `_shards` block.
pub fn shard_outcome(body: Value) -> Result<ShardsResponse> {
    let shards = body.get("_shards").ok_or_else(|| {
        ClientError::MalformedResponse(format!("response has no '_shards' block: {}", body))
    })?;
    let shards: ShardReport = serde_json::from_value(shards.clone())
        .map_err(|e| ClientError::MalformedResponse(format!("'_shards' block: {}", e)))?;
    Ok(ShardsResponse { shards, raw: body })
}

/// An acknowledged result synthesized for an idempotent no-op, such as
/// deleting a mapping that is already gone.
pub(crate) fn synthesized_ack() -> AckResponse {
    AckResponse {
        acknowledged: true,
        raw: serde_json::json!({"acknowledged": true}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_acknowledged_true() {
        let ack = acknowledgment(json!({"acknowledged": true})).unwrap();
        assert!(ack.acknowledged);
        assert_eq!(ack.verdict(), Verdict::Success);
    }

    #[test]
    fn test_acknowledged_false() {
        let ack = acknowledgment(json!({"acknowledged": false})).unwrap();
        assert_eq!(ack.verdict(), Verdict::NotAcknowledged);
        assert!(!ack.verdict().is_success());
    }

    #[test]
    fn test_legacy_ok_flag() {
        let ack = acknowledgment(json!({"ok": true})).unwrap();
        assert!(ack.acknowledged);
    }

    #[test]
    fn test_acknowledged_takes_precedence_over_ok() {
        let ack = acknowledgment(json!({"ok": true, "acknowledged": false})).unwrap();
        assert!(!ack.acknowledged);
    }

    #[test]
    fn test_missing_flags_is_malformed() {
        assert!(matches!(
            acknowledgment(json!({"index": "idx"})),
            Err(ClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            acknowledgment(json!({"acknowledged": "yes"})),
            Err(ClientError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_shards_success() {
        let outcome =
            shard_outcome(json!({"_shards": {"total": 10, "successful": 5, "failed": 0}}))
                .unwrap();
        assert_eq!(outcome.verdict(), Verdict::Success);
        assert_eq!(outcome.shards.total, 10);
        assert!(outcome.is_complete());
    }

    #[test]
    fn test_shards_partial_failure_is_data() {
        let outcome = shard_outcome(json!({
            "_shards": {
                "total": 2, "successful": 1, "failed": 1,
                "failures": [{"shard": 0, "reason": "boom"}]
            }
        }))
        .unwrap();
        assert_eq!(outcome.verdict(), Verdict::PartialFailure { failed: 1 });
        assert_eq!(outcome.shards.failures.len(), 1);
    }

    #[test]
    fn test_missing_shards_is_malformed() {
        assert!(matches!(
            shard_outcome(json!({"acknowledged": true})),
            Err(ClientError::MalformedResponse(_))
        ));
        assert!(matches!(
            shard_outcome(json!({"_shards": {"total": 1}})),
            Err(ClientError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_synthesized_ack() {
        assert_eq!(synthesized_ack().verdict(), Verdict::Success);
    }
}
