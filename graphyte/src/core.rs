use std::sync::Arc;
use std::time::Duration;

use graphyte_core::pipeline::{Analysis, analyze};
use graphyte_core::{
    AnalysisOptions, GraphyteConfig, GraphyteError, RawSeries, RenderConnector, RenderRequest,
    Table,
};

use crate::report::RenderReport;

/// Orchestrator that fetches series through one connector and runs the
/// reshaping pipeline over them.
///
/// Holds only immutable configuration, so one instance can serve concurrent
/// requests.
pub struct Graphyte {
    pub(crate) connector: Arc<dyn RenderConnector>,
    pub(crate) cfg: GraphyteConfig,
}

/// Builder for constructing a `Graphyte` orchestrator with custom configuration.
pub struct GraphyteBuilder {
    connector: Option<Arc<dyn RenderConnector>>,
    cfg: GraphyteConfig,
}

impl Default for GraphyteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphyteBuilder {
    /// Create a new builder with default configuration and no connector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            connector: None,
            cfg: GraphyteConfig::default(),
        }
    }

    /// Set the render connector. A later call replaces an earlier one.
    #[must_use]
    pub fn with_connector(mut self, connector: Arc<dyn RenderConnector>) -> Self {
        self.connector = Some(connector);
        self
    }

    /// Upper bound for a single connector fetch.
    #[must_use]
    pub const fn fetch_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.fetch_timeout = timeout;
        self
    }

    /// Options used by the `*_default` methods.
    #[must_use]
    pub const fn default_options(mut self, options: AnalysisOptions) -> Self {
        self.cfg.default_options = options;
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: GraphyteConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Validate and build the orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connector was registered, the timeout is
    /// zero, or the default day window is invalid.
    pub fn build(self) -> Result<Graphyte, GraphyteError> {
        let Some(connector) = self.connector else {
            return Err(GraphyteError::InvalidArg(
                "no connector registered; add one via with_connector(...)".to_string(),
            ));
        };
        if self.cfg.fetch_timeout.is_zero() {
            return Err(GraphyteError::InvalidArg(
                "fetch timeout must be non-zero".to_string(),
            ));
        }
        self.cfg.default_options.day_window.validate()?;

        Ok(Graphyte {
            connector,
            cfg: self.cfg,
        })
    }
}

/// Attach the connector name to errors that do not already carry fetch context.
pub fn tag_err(connector: &str, e: GraphyteError) -> GraphyteError {
    match e {
        GraphyteError::Other(msg) => GraphyteError::fetch_failed(connector, msg),
        other => other,
    }
}

impl Graphyte {
    /// Start building a new `Graphyte` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use graphyte::Graphyte;
    ///
    /// let g = Graphyte::builder()
    ///     .with_connector(Arc::new(graphyte_mock::MockConnector::new()))
    ///     .fetch_timeout(std::time::Duration::from_secs(2))
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> GraphyteBuilder {
        GraphyteBuilder::new()
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &GraphyteConfig {
        &self.cfg
    }

    /// Name of the registered connector.
    #[must_use]
    pub fn connector_name(&self) -> &'static str {
        self.connector.name()
    }

    /// Wrap a connector future with a timeout and standardized timeout error mapping.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "graphyte::core::call_with_timeout",
            skip(fut),
            fields(
                connector = connector_name,
                timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
            ),
        )
    )]
    pub(crate) async fn call_with_timeout<T, Fut>(
        connector_name: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, GraphyteError>
    where
        Fut: core::future::Future<Output = Result<T, GraphyteError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(GraphyteError::fetch_timeout(connector_name)))
    }

    /// Fetch raw series for a request.
    ///
    /// An empty result is returned as-is; the pipeline methods turn it into
    /// `EmptySeriesSet`.
    ///
    /// # Errors
    /// Returns `FetchTimeout` when the connector exceeds the configured
    /// timeout and propagates connector errors otherwise.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "graphyte::fetch",
            skip(self, req),
            fields(connector = self.connector.name(), targets = req.targets.len()),
        )
    )]
    pub async fn fetch(&self, req: &RenderRequest) -> Result<Vec<RawSeries>, GraphyteError> {
        let name = self.connector.name();
        let out = Self::call_with_timeout(name, self.cfg.fetch_timeout, self.connector.render(req))
            .await
            .map_err(|e| tag_err(name, e))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(series = out.len(), "fetched");
        Ok(out)
    }

    /// Fetch and run the pipeline, keeping every intermediate artifact.
    ///
    /// # Errors
    /// Fetch errors, `EmptySeriesSet` for an empty fetch, and pipeline errors.
    pub async fn analyze(
        &self,
        req: &RenderRequest,
        options: &AnalysisOptions,
    ) -> Result<Analysis, GraphyteError> {
        options.day_window.validate()?;
        let raw = self.fetch(req).await?;
        analyze(raw, options)
    }

    /// Fetch and build the reconciled, windowed table.
    ///
    /// # Errors
    /// Same as [`Graphyte::analyze`].
    pub async fn table(
        &self,
        req: &RenderRequest,
        options: &AnalysisOptions,
    ) -> Result<Table, GraphyteError> {
        self.analyze(req, options).await.map(|a| a.table)
    }

    /// Fetch, run the pipeline, and build the plot payload.
    ///
    /// # Errors
    /// Same as [`Graphyte::analyze`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "graphyte::render", skip(self, req, options), fields(targets = req.targets.len()))
    )]
    pub async fn render(
        &self,
        req: &RenderRequest,
        options: &AnalysisOptions,
    ) -> Result<RenderReport, GraphyteError> {
        self.analyze(req, options).await.map(RenderReport::from)
    }

    /// [`Graphyte::render`] with the configured default options.
    ///
    /// # Errors
    /// Same as [`Graphyte::render`].
    pub async fn render_default(
        &self,
        req: &RenderRequest,
    ) -> Result<RenderReport, GraphyteError> {
        let options = self.cfg.default_options;
        self.render(req, &options).await
    }
}
