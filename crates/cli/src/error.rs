//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ClientError` variants and CLI-level failures to those codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - A partial shard failure prints its result before exiting with code 8.

use esadmin_client::ClientError;
use thiserror::Error;

/// Structured exit codes for esadmin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Connection error - the server could not be reached in time.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// The index, alias target or requested setting does not exist.
    NotFound = 4,

    /// Invalid input such as a blank index name or malformed JSON.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// The index already exists.
    AlreadyExists = 6,

    /// The server does not offer the requested operation.
    Unsupported = 7,

    /// The operation completed on some shards only.
    PartialShardFailure = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Failures raised by the CLI itself rather than the client library.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No index given; pass --index or set ESADMIN_INDEX")]
    MissingIndex,

    #[error("Invalid JSON for {arg}: {source}")]
    InvalidJson {
        arg: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{arg} must be a JSON object")]
    NotAnObject { arg: &'static str },

    #[error("Setting '{path}' is not set on this index")]
    MissingSetting { path: String },

    #[error("{operation} failed on {failed} of {total} shards")]
    PartialShardFailure {
        operation: &'static str,
        failed: u64,
        total: u64,
    },
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Network(_) | ClientError::Timeout(_) | ClientError::InvalidUrl(_) => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }

            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::RequestFailed { status: 404, .. } => ExitCode::NotFound,

            ClientError::InvalidArgument(_) | ClientError::InvalidSetting { .. } => {
                ExitCode::ValidationError
            }
            ClientError::RequestFailed { status: 400, .. } => ExitCode::ValidationError,

            ClientError::AlreadyExists(_) => ExitCode::AlreadyExists,
            ClientError::Unsupported(_) => ExitCode::Unsupported,

            ClientError::RequestFailed { .. }
            | ClientError::MalformedResponse(_)
            | ClientError::HttpError(_)
            | ClientError::Serialization(_) => ExitCode::GeneralError,
        }
    }
}

impl From<&CliError> for ExitCode {
    fn from(err: &CliError) -> Self {
        match err {
            CliError::MissingIndex | CliError::InvalidJson { .. } | CliError::NotAnObject { .. } => {
                ExitCode::ValidationError
            }
            CliError::MissingSetting { .. } => ExitCode::NotFound,
            CliError::PartialShardFailure { .. } => ExitCode::PartialShardFailure,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(cli_err) = cause.downcast_ref::<CliError>() {
                return ExitCode::from(cli_err);
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::PartialShardFailure.as_i32(), 8);
    }

    #[test]
    fn test_client_error_mapping() {
        let cases = [
            (ClientError::Network("refused".into()), ExitCode::ConnectionError),
            (ClientError::Timeout(Duration::from_secs(1)), ExitCode::ConnectionError),
            (ClientError::NotFound("idx".into()), ExitCode::NotFound),
            (ClientError::InvalidArgument("blank".into()), ExitCode::ValidationError),
            (
                ClientError::InvalidSetting {
                    index: "idx".into(),
                    message: "non dynamic".into(),
                },
                ExitCode::ValidationError,
            ),
            (ClientError::AlreadyExists("idx".into()), ExitCode::AlreadyExists),
            (ClientError::Unsupported("snapshot".into()), ExitCode::Unsupported),
            (ClientError::MalformedResponse("x".into()), ExitCode::GeneralError),
        ];
        for (err, expected) in cases {
            assert_eq!(ExitCode::from(&err), expected, "{err}");
        }
    }

    #[test]
    fn test_request_failed_by_status() {
        let failed = |status| ClientError::RequestFailed {
            status,
            path: "/idx".into(),
            message: "boom".into(),
        };
        assert_eq!(ExitCode::from(&failed(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&failed(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&failed(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_anyhow_chain_lookup() {
        let err = anyhow::Error::new(ClientError::AlreadyExists("idx".into()))
            .context("Failed to create index");
        assert_eq!(err.exit_code(), ExitCode::AlreadyExists);

        let err = anyhow::Error::new(CliError::PartialShardFailure {
            operation: "flush",
            failed: 1,
            total: 2,
        });
        assert_eq!(err.exit_code(), ExitCode::PartialShardFailure);

        assert_eq!(anyhow::anyhow!("other").exit_code(), ExitCode::GeneralError);
    }
}
