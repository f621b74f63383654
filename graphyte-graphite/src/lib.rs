//! graphyte-graphite
//!
//! Public connector that implements `RenderConnector` on top of the Graphite
//! render API. Requests `format=raw` (declared steps) or `format=json`
//! (inferred steps) and decodes the body into raw series.
#![warn(missing_docs)]

/// Payload decoders for the `raw` and `json` render formats.
pub mod decode;

use async_trait::async_trait;
use graphyte_core::{
    ConnectorKey, GraphiteConfig, GraphyteError, RawSeries, RenderConnector, RenderFormat,
    RenderRequest,
};
use url::Url;

/// Connector for one Graphite render endpoint.
#[derive(Debug, Clone)]
pub struct GraphiteConnector {
    http: reqwest::Client,
    endpoint: Url,
    format: RenderFormat,
}

impl GraphiteConnector {
    /// Static connector key.
    pub const KEY: ConnectorKey = ConnectorKey::new("graphyte-graphite");

    /// Build a connector with its own HTTP client.
    ///
    /// The client presents `config.client_cert` when set and skips server
    /// certificate verification only if `config.accept_invalid_certs` is true.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable host or unreadable/invalid
    /// certificate files, and `Other` if the HTTP client cannot be built.
    pub fn new(config: &GraphiteConfig) -> Result<Self, GraphyteError> {
        let mut builder =
            reqwest::Client::builder().danger_accept_invalid_certs(config.accept_invalid_certs);
        if let Some(cert) = &config.client_cert {
            let read = |path: &std::path::Path| {
                std::fs::read(path).map_err(|e| {
                    GraphyteError::InvalidArg(format!("cannot read {}: {e}", path.display()))
                })
            };
            let pem = read(cert.cert_pem.as_path())?;
            let key = read(cert.key_pem.as_path())?;
            let identity = reqwest::Identity::from_pkcs8_pem(&pem, &key).map_err(|e| {
                GraphyteError::InvalidArg(format!("invalid client certificate: {e}"))
            })?;
            builder = builder.identity(identity);
        }
        let http = builder
            .build()
            .map_err(|e| GraphyteError::Other(e.to_string()))?;
        Self::with_client(http, config)
    }

    /// Build a connector around an existing `reqwest::Client`.
    ///
    /// TLS settings in `config` are ignored; the client is used as given.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an unparsable host.
    pub fn with_client(
        http: reqwest::Client,
        config: &GraphiteConfig,
    ) -> Result<Self, GraphyteError> {
        let endpoint = Url::parse(&config.host).map_err(|e| {
            GraphyteError::InvalidArg(format!("invalid host {}: {e}", config.host))
        })?;
        Ok(Self {
            http,
            endpoint,
            format: config.format,
        })
    }

    /// Render endpoint this connector talks to.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Full request URL for a render request.
    #[must_use]
    pub fn request_url(&self, req: &RenderRequest) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut q = url.query_pairs_mut();
            for t in &req.targets {
                q.append_pair("target", t);
            }
            if let Some(from) = &req.from {
                q.append_pair("from", from);
            }
            if let Some(until) = &req.until {
                q.append_pair("until", until);
            }
            q.append_pair("format", self.format.as_str());
        }
        url
    }

    fn fetch_failed(msg: impl Into<String>) -> GraphyteError {
        GraphyteError::fetch_failed(Self::KEY.as_str(), msg)
    }
}

#[async_trait]
impl RenderConnector for GraphiteConnector {
    fn name(&self) -> &'static str {
        Self::KEY.as_str()
    }

    fn vendor(&self) -> &'static str {
        "Graphite"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "graphyte_graphite::render",
            skip(self, req),
            fields(targets = req.targets.len(), format = self.format.as_str()),
        )
    )]
    async fn render(&self, req: &RenderRequest) -> Result<Vec<RawSeries>, GraphyteError> {
        let url = self.request_url(req);
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| Self::fetch_failed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::fetch_failed(format!("HTTP {status}")));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| Self::fetch_failed(e.to_string()))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(bytes = body.len(), "render body received");

        match self.format {
            RenderFormat::Json => decode::decode_json(&body),
            _ => decode::decode_raw(&body),
        }
    }
}
