//! graphyte-core
//!
//! Data model, connector trait, and the reshaping pipeline that turns raw
//! render-API series into aligned tables, statistics, and plot payloads.
//!
//! - `series`: raw and normalized series, the `Sample` model, metric names.
//! - `timeseries`: normalization, step inference, reconciliation, resampling.
//! - `table`: outer-join of reconciled series into one time-indexed table.
//! - `window`: daily time-of-day masking.
//! - `analysis`: statistics, correlations, plot payloads.
//! - `pipeline`: the stages above composed over one batch.
//!
//! The pipeline is synchronous; only `RenderConnector::render` is async and
//! expects a Tokio 1.x runtime in practice.
#![warn(missing_docs)]

/// Statistics, correlations, and plot payloads.
pub mod analysis;
/// The `RenderConnector` trait.
pub mod connector;
/// Pipeline entry points.
pub mod pipeline;
/// Series types and the sample model.
pub mod series;
/// Time-indexed table.
pub mod table;
/// Time-series reshaping stages.
pub mod timeseries;
/// Day-window filter.
pub mod window;

pub use analysis::correlation::CorrelationMatrix;
pub use analysis::plot::{PlotPayload, PlotPoint, PlotSeries, SeriesSummary};
pub use analysis::stats::{StatSummary, frequency_label};
pub use connector::RenderConnector;
pub use graphyte_types::{
    Aggregation, AnalysisOptions, ClientCert, ConnectorKey, DayWindow, GraphiteConfig,
    GraphyteConfig, GraphyteError, RenderFormat, RenderRequest,
};
pub use pipeline::{Analysis, analyze};
pub use series::{Point, RawSeries, Sample, Series, metric_name};
#[cfg(feature = "dataframe")]
pub use table::ToDataFrame;
pub use table::{Column, Table};
pub use timeseries::infer::estimate_step_seconds;
pub use timeseries::normalize::{normalize, normalize_all};
pub use timeseries::reconcile::{Reconciliation, ResamplePlan, common_step};
pub use timeseries::resample::resample;
pub use window::apply_day_window;
