//! Graphyte fetches series from a metrics backend's render API and reshapes
//! them for plotting and statistics.
//!
//! Overview
//! - One `RenderConnector` supplies raw series (`graphyte-graphite` for a real
//!   Graphite endpoint, `graphyte-mock` for tests and demos).
//! - Every fetch is bounded by the configured timeout.
//! - The pipeline normalizes series, reconciles their steps, outer-joins them
//!   into one table, applies the day window, and derives statistics,
//!   correlations, and a plot payload.
//! - Nothing is cached; every call recomputes from a fresh fetch.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use graphyte::{Graphyte, AnalysisOptions, DayWindow, RenderRequest};
//!
//! let g = Graphyte::builder()
//!     .with_connector(Arc::new(graphyte_graphite::GraphiteConnector::new(&cfg)?))
//!     .build()?;
//! let req = RenderRequest::new(["servers.web1.cpu"])?.from("-1d");
//! let opts = AnalysisOptions::interactive().day_window(DayWindow::new(9, 17)?);
//! let report = g.render(&req, &opts).await?;
//! println!("{}", report.payload.to_json()?);
//! ```
#![warn(missing_docs)]

pub(crate) mod core;
mod report;

pub use core::{Graphyte, GraphyteBuilder, tag_err};
pub use report::RenderReport;

// Re-export core types for convenience
pub use graphyte_core::{
    Aggregation, Analysis, AnalysisOptions, ClientCert, Column, CorrelationMatrix, DayWindow,
    GraphiteConfig, GraphyteConfig, GraphyteError, PlotPayload, PlotPoint, PlotSeries, RawSeries,
    RenderConnector, RenderFormat, RenderRequest, Sample, SeriesSummary, StatSummary, Table,
    metric_name,
};
