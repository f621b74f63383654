//! The reshaping pipeline run over one batch of raw series.

use serde::Serialize;

use crate::analysis::plot::PlotPayload;
use crate::series::RawSeries;
use crate::table::Table;
use crate::timeseries::normalize::normalize_all;
use crate::timeseries::reconcile::{Reconciliation, reconcile};
use crate::window::apply_day_window;
use crate::{AnalysisOptions, GraphyteError};

/// The table produced for one batch plus what happened along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Reconciled, windowed table.
    pub table: Table,
    /// Step reconciliation outcome.
    pub reconciliation: Reconciliation,
    /// Rows masked by the day window.
    pub masked_rows: usize,
    /// Non-fatal observations, e.g. series without any value.
    pub warnings: Vec<String>,
}

impl Analysis {
    /// Plot payload for the table.
    #[must_use]
    pub fn payload(&self) -> PlotPayload {
        PlotPayload::from_table(&self.table)
    }
}

/// Normalize, reconcile, assemble, and window a batch of raw series.
///
/// # Errors
/// - `InvalidArg` for an invalid day window (checked before any work).
/// - `EmptySeriesSet` when `raw` is empty.
/// - `MalformedSeries` / `IncompatibleFrequencies` from the stages.
///
/// ```
/// use graphyte_core::{AnalysisOptions, RawSeries, pipeline::analyze};
/// let raw = vec![
///     RawSeries::new("fast", 0, 60, [1.0; 10]),
///     RawSeries::new("slow", 0, 120, [5.0; 5]),
/// ];
/// let a = analyze(raw, &AnalysisOptions::raw()).unwrap();
/// assert_eq!(a.table.step(), 120);
/// assert_eq!(a.table.len(), 5);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "graphyte_core::analyze", skip(raw, options), fields(series = raw.len()))
)]
pub fn analyze(raw: Vec<RawSeries>, options: &AnalysisOptions) -> Result<Analysis, GraphyteError> {
    options.day_window.validate()?;
    if raw.is_empty() {
        return Err(GraphyteError::EmptySeriesSet);
    }

    let series = normalize_all(raw)?;
    let (series, reconciliation) =
        reconcile(series, options.resample_seconds, options.aggregation)?;

    let mut warnings: Vec<String> = Vec::new();
    if let Some(freq) = options.resample_seconds {
        if freq < reconciliation.common_step {
            warnings.push(format!(
                "requested frequency {freq}s is finer than the common step {}s; using {}s",
                reconciliation.common_step,
                reconciliation.plan.step()
            ));
        }
    }
    warnings.extend(
        series
            .iter()
            .filter(|s| s.present_count() == 0)
            .map(|s| format!("series {} has no values", s.name)),
    );
    #[cfg(feature = "tracing")]
    for w in &warnings {
        tracing::warn!("{w}");
    }

    let mut table = Table::assemble(series)?;
    let masked_rows = apply_day_window(&mut table, &options.day_window)?;

    Ok(Analysis {
        table,
        reconciliation,
        masked_rows,
        warnings,
    })
}

/// Run [`analyze`] and build the plot payload.
///
/// # Errors
/// Same as [`analyze`].
pub fn plot(raw: Vec<RawSeries>, options: &AnalysisOptions) -> Result<PlotPayload, GraphyteError> {
    analyze(raw, options).map(|a| a.payload())
}
