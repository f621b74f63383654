use serde::Serialize;

use crate::GraphyteError;
use crate::analysis::correlation::CorrelationMatrix;
use crate::analysis::stats::StatSummary;
use crate::table::Table;

/// One `[timestamp_ms, value|null]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotPoint(pub i64, pub Option<f64>);

/// Plot-ready points of one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotSeries {
    /// Series name.
    pub label: String,
    /// Points with the leading run of nulls removed.
    pub points: Vec<PlotPoint>,
}

/// Statistics attached to one plotted series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSummary {
    /// Series name.
    pub label: String,
    /// Summary statistics.
    pub stats: StatSummary,
    /// Correlation with every series, in table order.
    pub correlations: Vec<(String, f64)>,
}

/// Everything a chart needs: points per series plus a parallel list of summaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPayload {
    /// One entry per table column, in table order.
    pub series: Vec<PlotSeries>,
    /// One entry per table column, in table order.
    pub summaries: Vec<SeriesSummary>,
}

impl PlotPayload {
    /// Build the payload for a table, computing statistics and correlations.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "graphyte_core::plot_payload", skip(table), fields(columns = table.width(), rows = table.len()))
    )]
    #[must_use]
    pub fn from_table(table: &Table) -> Self {
        let matrix = CorrelationMatrix::compute(table);
        let index = table.index();
        let mut series = Vec::with_capacity(table.width());
        let mut summaries = Vec::with_capacity(table.width());

        for column in table.columns() {
            let points = index
                .iter()
                .zip(&column.values)
                .map(|(ts, v)| PlotPoint(ts.timestamp() * 1000, v.value()))
                .collect();
            series.push(PlotSeries {
                label: column.name.clone(),
                points: trim_leading_nulls(points),
            });
            summaries.push(SeriesSummary {
                label: column.name.clone(),
                stats: StatSummary::from_column(column, table.step()),
                correlations: matrix.row(&column.name).unwrap_or_default(),
            });
        }

        Self { series, summaries }
    }

    /// Serialize to a JSON string.
    ///
    /// # Errors
    /// Returns `Data` if serialization fails.
    pub fn to_json(&self) -> Result<String, GraphyteError> {
        serde_json::to_string(self).map_err(|e| GraphyteError::Data(e.to_string()))
    }
}

/// Drop the leading run of null points; interior and trailing nulls stay.
///
/// ```
/// use graphyte_core::analysis::plot::{PlotPoint, trim_leading_nulls};
/// let pts = vec![
///     PlotPoint(0, None),
///     PlotPoint(1000, None),
///     PlotPoint(2000, Some(1.0)),
///     PlotPoint(3000, None),
///     PlotPoint(4000, Some(2.0)),
/// ];
/// let kept = trim_leading_nulls(pts);
/// assert_eq!(kept.len(), 3);
/// assert_eq!(kept[1], PlotPoint(3000, None));
/// ```
#[must_use]
pub fn trim_leading_nulls(mut points: Vec<PlotPoint>) -> Vec<PlotPoint> {
    let first = points
        .iter()
        .position(|p| p.1.is_some())
        .unwrap_or(points.len());
    points.drain(..first);
    points
}
