use async_trait::async_trait;

use crate::GraphyteError;
use crate::series::RawSeries;
pub use graphyte_types::ConnectorKey;
use graphyte_types::RenderRequest;

/// A backend that can answer a render request with raw series.
#[async_trait]
pub trait RenderConnector: Send + Sync {
    /// A stable identifier, e.g. "graphyte-graphite".
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch the series for every target in `req`, in backend order.
    ///
    /// An empty result is not an error at this layer.
    async fn render(&self, req: &RenderRequest) -> Result<Vec<RawSeries>, GraphyteError>;
}
