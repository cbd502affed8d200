//! Interpretation of non-2xx responses.
//!
//! The server reports errors in two shapes: a bare string
//! (`{"error": "IndexMissingException[[idx] missing]", "status": 404}`) and a
//! structured object (`{"error": {"type": "index_not_found_exception",
//! "reason": "..."}}`). Exception names also changed spelling between
//! releases. [`ServerFailure::kind`] folds all of them into one
//! [`FailureKind`]; the index operations decide what each kind means for
//! them.

use serde_json::Value;

use crate::error::ClientError;
use crate::transport::TransportResponse;

/// What a failed request complained about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    IndexMissing,
    AlreadyExists,
    TypeMissing,
    NonDynamicSetting,
    /// The endpoint does not exist on this server.
    NoHandler,
    Other,
}

/// A non-2xx response with its message extracted.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerFailure {
    pub status: u16,
    pub path: String,
    pub message: String,
}

impl ServerFailure {
    pub fn from_response(path: &str, response: &TransportResponse) -> Self {
        Self {
            status: response.status,
            path: path.to_string(),
            message: error_message(response.body.as_ref()),
        }
    }

    pub fn kind(&self) -> FailureKind {
        let folded: String = self
            .message
            .chars()
            .filter(|c| !matches!(c, '_' | ' ' | '-'))
            .flat_map(char::to_lowercase)
            .collect();

        if folded.contains("alreadyexists") {
            FailureKind::AlreadyExists
        } else if folded.contains("indexmissing") || folded.contains("indexnotfound") {
            FailureKind::IndexMissing
        } else if folded.contains("typemissing") {
            FailureKind::TypeMissing
        } else if folded.contains("nondynamic") {
            FailureKind::NonDynamicSetting
        } else if self.status == 405
            || folded.contains("nohandlerfound")
            || folded.contains("incorrecthttpmethod")
            || folded.contains("invalidtypename")
        {
            FailureKind::NoHandler
        } else {
            FailureKind::Other
        }
    }

    /// The generic error for a failure no operation-specific rule claimed.
    pub fn into_error(self) -> ClientError {
        ClientError::RequestFailed {
            status: self.status,
            path: self.path,
            message: self.message,
        }
    }
}

/// Pull a human-readable message out of an error body.
pub fn error_message(body: Option<&Value>) -> String {
    match body {
        None => "no response body".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(body) => match body.get("error") {
            Some(Value::String(text)) => text.clone(),
            Some(Value::Object(error)) => {
                let kind = error.get("type").and_then(Value::as_str);
                let reason = error.get("reason").and_then(Value::as_str);
                match (kind, reason) {
                    (Some(kind), Some(reason)) => format!("{}: {}", kind, reason),
                    (Some(only), None) | (None, Some(only)) => only.to_string(),
                    (None, None) => body.to_string(),
                }
            }
            _ => body.to_string(),
        },
    }
}
