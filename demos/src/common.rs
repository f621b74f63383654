use std::sync::Arc;

use graphyte_core::{ClientCert, GraphiteConfig, GraphyteError, RenderConnector, RenderFormat};

/// Return a connector for demos.
///
/// Uses the mock connector when `GRAPHYTE_DEMOS_USE_MOCK` is set. Otherwise
/// talks to Graphite, configured from the environment:
/// `GRAPHYTE_HOST`, `GRAPHYTE_FORMAT` (`raw`/`json`), `GRAPHYTE_CERT` plus
/// `GRAPHYTE_KEY`, and `GRAPHYTE_INSECURE`.
///
/// # Errors
/// Returns the connector construction error for an invalid configuration.
pub fn get_connector() -> Result<Arc<dyn RenderConnector>, GraphyteError> {
    if std::env::var("GRAPHYTE_DEMOS_USE_MOCK").is_ok() {
        println!("--- (Using Mock Connector for CI) ---");
        return Ok(Arc::new(graphyte_mock::MockConnector::new()));
    }
    let connector = graphyte_graphite::GraphiteConnector::new(&graphite_config_from_env())?;
    Ok(Arc::new(connector))
}

fn graphite_config_from_env() -> GraphiteConfig {
    let mut cfg = GraphiteConfig::default();
    if let Ok(host) = std::env::var("GRAPHYTE_HOST") {
        cfg.host = host;
    }
    if std::env::var("GRAPHYTE_FORMAT").is_ok_and(|f| f.eq_ignore_ascii_case("json")) {
        cfg.format = RenderFormat::Json;
    }
    if let (Ok(cert), Ok(key)) = (std::env::var("GRAPHYTE_CERT"), std::env::var("GRAPHYTE_KEY")) {
        cfg.client_cert = Some(ClientCert {
            cert_pem: cert.into(),
            key_pem: key.into(),
        });
    }
    cfg.accept_invalid_certs = std::env::var("GRAPHYTE_INSECURE").is_ok();
    cfg
}
