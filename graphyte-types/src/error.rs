use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the graphyte workspace.
///
/// Covers malformed input series, frequency reconciliation failures, option
/// validation, undecodable backend payloads, and fetch failures surfaced by
/// render connectors.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphyteError {
    /// A raw series carries an invalid step or values list.
    #[error("malformed series {name}: {reason}")]
    MalformedSeries {
        /// Name of the offending series.
        name: String,
        /// Human-readable description of the defect.
        reason: String,
    },

    /// No series were supplied where at least one is required.
    #[error("empty series set")]
    EmptySeriesSet,

    /// No sane common step could be derived for the supplied series.
    #[error("incompatible frequencies: {0}")]
    IncompatibleFrequencies(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned or expected data (undecodable payloads, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// A connector could not obtain data from its backend.
    #[error("{connector} fetch failed: {msg}")]
    FetchFailed {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A connector call exceeded the configured fetch timeout.
    #[error("fetch timed out via {connector}")]
    FetchTimeout {
        /// Connector name that timed out.
        connector: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl GraphyteError {
    /// Helper: build a `MalformedSeries` error for a series name and reason.
    pub fn malformed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedSeries {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Helper: build a `FetchFailed` error with the connector name and message.
    pub fn fetch_failed(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::FetchFailed {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `FetchTimeout` error.
    pub fn fetch_timeout(connector: impl Into<String>) -> Self {
        Self::FetchTimeout {
            connector: connector.into(),
        }
    }

    /// Returns true if the error originated at the fetch boundary rather than
    /// inside the reshaping pipeline.
    #[must_use]
    pub const fn is_fetch_error(&self) -> bool {
        matches!(self, Self::FetchFailed { .. } | Self::FetchTimeout { .. })
    }
}
