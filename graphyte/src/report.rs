use graphyte_core::pipeline::Analysis;
use graphyte_core::timeseries::reconcile::Reconciliation;
use graphyte_core::{PlotPayload, Table};
use serde::Serialize;

/// Result of one `render` call.
///
/// Carries the plot payload, the table it was built from, and any non-fatal
/// warnings encountered while building it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderReport {
    /// Plot-ready series plus summaries.
    pub payload: PlotPayload,
    /// Reconciled, windowed table.
    pub table: Table,
    /// How the input steps were reconciled.
    pub reconciliation: Reconciliation,
    /// Rows masked by the day window.
    pub masked_rows: usize,
    /// Non-fatal issues encountered while building the report.
    pub warnings: Vec<String>,
}

impl From<Analysis> for RenderReport {
    fn from(a: Analysis) -> Self {
        let payload = a.payload();
        Self {
            payload,
            table: a.table,
            reconciliation: a.reconciliation,
            masked_rows: a.masked_rows,
            warnings: a.warnings,
        }
    }
}
