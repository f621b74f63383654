//! Graphyte-specific error, configuration, and request types.
#![warn(missing_docs)]

mod config;
mod connector;
mod error;
mod request;

pub use config::{
    Aggregation, AnalysisOptions, ClientCert, DayWindow, GraphiteConfig, GraphyteConfig,
    RenderFormat,
};
pub use connector::ConnectorKey;
pub use error::GraphyteError;
pub use request::RenderRequest;
