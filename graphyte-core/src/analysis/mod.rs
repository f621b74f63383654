//! Statistics, correlations, and plot payloads computed from a [`Table`](crate::Table).

/// Pairwise Pearson correlation.
pub mod correlation;
/// Plot-ready payload construction.
pub mod plot;
/// Per-series summary statistics.
pub mod stats;
