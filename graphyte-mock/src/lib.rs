//! graphyte-mock
//!
//! Connectors for tests and demos: `MockConnector` serves static fixtures and
//! `DynamicMockConnector` is scripted per target at runtime.
#![warn(missing_docs)]

use std::time::Duration;

use async_trait::async_trait;
use graphyte_core::{GraphyteError, RawSeries, RenderConnector, RenderRequest};

mod dynamic;
mod fixtures;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};
pub use fixtures::START as FIXTURE_START;

/// Mock connector for CI-safe demos. Provides deterministic series from static fixtures.
///
/// Known metric paths: `cpu.load`, `cpu.user` (60s), `net.bytes` (120s, with
/// a gap), `disk.free` (1h) and `empty` (all missing). Function-wrapped
/// targets resolve through their metric name. Unknown targets yield no series.
/// The `FAIL` target forces a fetch failure and `TIMEOUT` stalls briefly.
pub struct MockConnector {
    delay: Duration,
}

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Stall used for the `TIMEOUT` target.
    pub const TIMEOUT_DELAY: Duration = Duration::from_millis(200);

    /// Connector whose `TIMEOUT` target stalls for [`Self::TIMEOUT_DELAY`].
    ///
    /// ```
    /// use graphyte_core::RenderConnector;
    /// use graphyte_mock::MockConnector;
    /// assert_eq!(MockConnector::new().name(), "graphyte-mock");
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            delay: Self::TIMEOUT_DELAY,
        }
    }

    /// Override how long the `TIMEOUT` target stalls.
    #[must_use]
    pub const fn with_timeout_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    async fn maybe_fail_or_timeout(&self, target: &str) -> Result<(), GraphyteError> {
        match target {
            "FAIL" => Err(GraphyteError::fetch_failed(
                "graphyte-mock",
                "forced failure: render",
            )),
            "TIMEOUT" => {
                tokio::time::sleep(self.delay).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RenderConnector for MockConnector {
    fn name(&self) -> &'static str {
        "graphyte-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn render(&self, req: &RenderRequest) -> Result<Vec<RawSeries>, GraphyteError> {
        let mut out = Vec::with_capacity(req.targets.len());
        for target in &req.targets {
            self.maybe_fail_or_timeout(target).await?;
            if let Some(s) = fixtures::series_for(target) {
                out.push(s);
            }
        }
        Ok(out)
    }
}
