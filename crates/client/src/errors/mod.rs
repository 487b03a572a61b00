//! Error types and fault classification for reference-data operations.
//!
//! This module provides:
//! - [`RefDataError`]: The main error enum for all client operations
//! - [`FaultClass`]: Classification for determining where a failure originated

mod fault;

pub use fault::FaultClass;

use thiserror::Error;

use crate::session::SessionError;

/// Errors that can occur during reference-data operations.
///
/// Each variant is classified into a [`FaultClass`] via the
/// [`fault_class`](Self::fault_class) method. No variant is retried
/// internally; every failure surfaces to the caller.
#[derive(Error, Debug)]
pub enum RefDataError {
    /// The session to the reference-data service could not be established,
    /// or the transport failed mid-request.
    #[error("Connection failed: {message}")]
    Connection {
        /// What the session layer reported
        message: String,
    },

    /// A request method was called after `close()`.
    /// The client never silently returns stale data in this state.
    #[error("Client is closed")]
    InvalidState,

    /// The caller supplied arguments that violate the request contract,
    /// e.g. an empty ticker or a half-specified override pair.
    /// Detected before anything is sent.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the contract violation
        message: String,
    },

    /// The service answered with an error status instead of a response.
    #[error("Request rejected by service: {message}")]
    Request {
        /// The error message from the service
        message: String,
    },

    /// The requested field is absent from the returned payload.
    /// Distinct from a present-but-not-available value, which is
    /// normalized to a missing-value marker, not an error.
    #[error("Field not found in response: {field}")]
    FieldNotFound {
        /// The field mnemonic that was requested
        field: String,
    },

    /// A historical response contained zero dated records.
    /// Distinct from records whose cells are all missing.
    #[error("Historical response contained no records")]
    EmptyResult,

    /// No response event arrived within the configured wait budget.
    #[error("Timed out waiting for response")]
    Timeout,

    /// The response payload was structurally valid but its contents could
    /// not be mapped, e.g. a non-finite numeric cell.
    #[error("Malformed response data: {message}")]
    Data {
        /// Description of the mapping failure
        message: String,
    },
}

impl RefDataError {
    /// Returns the fault classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use refdata_client::{FaultClass, RefDataError};
    ///
    /// let error = RefDataError::InvalidState;
    /// assert_eq!(error.fault_class(), FaultClass::Caller);
    ///
    /// let error = RefDataError::Timeout;
    /// assert_eq!(error.fault_class(), FaultClass::Transport);
    /// ```
    pub fn fault_class(&self) -> FaultClass {
        match self {
            Self::InvalidState | Self::InvalidArgument { .. } => FaultClass::Caller,

            Self::Connection { .. } | Self::Timeout => FaultClass::Transport,

            Self::Request { .. } => FaultClass::Service,

            Self::FieldNotFound { .. } | Self::EmptyResult | Self::Data { .. } => FaultClass::Data,
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub(crate) fn data(message: impl Into<String>) -> Self {
        Self::Data {
            message: message.into(),
        }
    }
}

impl From<SessionError> for RefDataError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Transport(message) => Self::Connection { message },
            SessionError::Timeout => Self::Timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_state_is_caller_fault() {
        assert_eq!(RefDataError::InvalidState.fault_class(), FaultClass::Caller);
    }

    #[test]
    fn test_invalid_argument_is_caller_fault() {
        let error = RefDataError::invalid_argument("ticker must not be empty");
        assert_eq!(error.fault_class(), FaultClass::Caller);
    }

    #[test]
    fn test_connection_is_transport_fault() {
        let error = RefDataError::Connection {
            message: "service unreachable".to_string(),
        };
        assert_eq!(error.fault_class(), FaultClass::Transport);
    }

    #[test]
    fn test_timeout_is_transport_fault() {
        assert_eq!(RefDataError::Timeout.fault_class(), FaultClass::Transport);
    }

    #[test]
    fn test_request_is_service_fault() {
        let error = RefDataError::Request {
            message: "invalid security".to_string(),
        };
        assert_eq!(error.fault_class(), FaultClass::Service);
    }

    #[test]
    fn test_field_not_found_is_data_fault() {
        let error = RefDataError::FieldNotFound {
            field: "PX_LAST".to_string(),
        };
        assert_eq!(error.fault_class(), FaultClass::Data);
    }

    #[test]
    fn test_empty_result_is_data_fault() {
        assert_eq!(RefDataError::EmptyResult.fault_class(), FaultClass::Data);
    }

    #[test]
    fn test_session_transport_maps_to_connection() {
        let error: RefDataError = SessionError::Transport("broken pipe".to_string()).into();
        assert!(matches!(error, RefDataError::Connection { .. }));
    }

    #[test]
    fn test_session_timeout_maps_to_timeout() {
        let error: RefDataError = SessionError::Timeout.into();
        assert!(matches!(error, RefDataError::Timeout));
    }

    #[test]
    fn test_error_display() {
        let error = RefDataError::FieldNotFound {
            field: "PX_LAST".to_string(),
        };
        assert_eq!(format!("{}", error), "Field not found in response: PX_LAST");

        let error = RefDataError::Request {
            message: "invalid security".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Request rejected by service: invalid security"
        );

        assert_eq!(format!("{}", RefDataError::InvalidState), "Client is closed");
    }
}
