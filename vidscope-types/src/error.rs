use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the vidscope workspace.
///
/// Covers request validation (missing identifiers, empty fetch plans),
/// capability mismatches, and connector-tagged upstream failures.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum VidscopeError {
    /// None of `video_id`, `channel_id` or `search_query` was supplied.
    #[error("an 'id', 'channel', or 'search' parameter is required")]
    MissingIdentifier,

    /// Identifiers were supplied but no requested field maps to an upstream call.
    #[error("no valid fields or parameters provided")]
    NoTasksPlanned,

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// No registered connector implements the requested capability.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// Capability label, e.g. "details" or "transcript".
        capability: String,
    },

    /// The upstream reported that the resource does not exist.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "video dQw4w9WgXcQ".
        what: String,
    },

    /// An individual connector returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Issues with the returned or expected data (missing fields, bad shape).
    #[error("data issue: {0}")]
    Data(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl VidscopeError {
    /// Helper: build an `Unsupported` error for a capability label.
    #[must_use]
    pub fn unsupported(capability: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: capability.into(),
        }
    }

    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Returns true if the error stems from a malformed or underspecified request
    /// rather than from an upstream failure.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingIdentifier | Self::NoTasksPlanned | Self::InvalidArg(_)
        )
    }
}
