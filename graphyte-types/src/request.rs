//! Render request accepted by connectors.

use serde::{Deserialize, Serialize};

use crate::error::GraphyteError;

/// Targets and time range for one render call.
///
/// `from`/`until` are passed through verbatim, so both absolute epochs
/// (`1700000000`) and Graphite relative specs (`-1d`, `now`) are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    /// Target expressions, in the order their series should appear.
    pub targets: Vec<String>,
    /// Optional range start.
    pub from: Option<String>,
    /// Optional range end.
    pub until: Option<String>,
}

impl RenderRequest {
    /// Build a request for one or more targets.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no non-blank target is given.
    pub fn new<I, S>(targets: I) -> Result<Self, GraphyteError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let targets: Vec<String> = targets
            .into_iter()
            .map(Into::into)
            .filter(|t| !t.trim().is_empty())
            .collect();
        if targets.is_empty() {
            return Err(GraphyteError::InvalidArg(
                "render request needs at least one target".to_string(),
            ));
        }
        Ok(Self {
            targets,
            from: None,
            until: None,
        })
    }

    /// Set the range start.
    #[must_use]
    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = Some(from.into());
        self
    }

    /// Set the range end.
    #[must_use]
    pub fn until(mut self, until: impl Into<String>) -> Self {
        self.until = Some(until.into());
        self
    }
}
