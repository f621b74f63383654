use serde::{Deserialize, Serialize};

use crate::table::Column;

/// Percentiles reported in [`StatSummary::quantiles`].
pub const QUANTILES: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// Per-series summary statistics.
///
/// `variance` is the population variance. A series without present values
/// yields the all-zero form while still reporting its frequency label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatSummary {
    /// Number of present samples.
    pub count: usize,
    /// Sum of present samples.
    pub sum: f64,
    /// 0/25/50/75/100th percentiles.
    pub quantiles: [f64; 5],
    /// Arithmetic mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Compact step label, e.g. `"2min"`.
    pub frequency: String,
}

impl StatSummary {
    /// The summary of a series with no numeric values.
    #[must_use]
    pub fn degenerate(step: i64) -> Self {
        Self {
            count: 0,
            sum: 0.0,
            quantiles: [0.0; 5],
            mean: 0.0,
            variance: 0.0,
            frequency: frequency_label(step),
        }
    }

    /// Summarize the present values of a column sampled every `step` seconds.
    ///
    /// ```
    /// use graphyte_core::analysis::stats::StatSummary;
    /// let s = StatSummary::from_values([1.0, 2.0, 3.0, 4.0], 60);
    /// assert_eq!(s.sum, 10.0);
    /// assert_eq!(s.quantiles, [1.0, 1.75, 2.5, 3.25, 4.0]);
    /// assert_eq!(s.variance, 1.25);
    /// assert_eq!(s.frequency, "1min");
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I, step: i64) -> Self
    where
        I: IntoIterator<Item = f64>,
    {
        let mut sorted: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if sorted.is_empty() {
            return Self::degenerate(step);
        }
        sorted.sort_unstable_by(f64::total_cmp);

        #[allow(clippy::cast_precision_loss)]
        let n = sorted.len() as f64;
        let sum: f64 = sorted.iter().sum();
        let mean = sum / n;
        let variance = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

        Self {
            count: sorted.len(),
            sum: finite_or_zero(sum),
            quantiles: QUANTILES.map(|q| finite_or_zero(percentile(&sorted, q))),
            mean: finite_or_zero(mean),
            variance: finite_or_zero(variance),
            frequency: frequency_label(step),
        }
    }

    /// Summarize a table column.
    #[must_use]
    pub fn from_column(column: &Column, step: i64) -> Self {
        Self::from_values(column.present(), step)
    }
}

const fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

/// Linear interpolation between closest ranks; `sorted` must be ascending
/// and non-empty.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    #[allow(clippy::cast_precision_loss)]
    let rank = (sorted.len() - 1) as f64 * q;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let k = rank.floor() as usize;
    if k + 1 >= sorted.len() {
        return sorted[sorted.len() - 1];
    }
    #[allow(clippy::cast_precision_loss)]
    let d = rank - k as f64;
    (1.0 - d).mul_add(sorted[k], d * sorted[k + 1])
}

/// Compact label for a step in seconds.
///
/// ```
/// use graphyte_core::analysis::stats::frequency_label;
/// assert_eq!(frequency_label(86_400), "1d");
/// assert_eq!(frequency_label(7_200), "2h");
/// assert_eq!(frequency_label(120), "2min");
/// assert_eq!(frequency_label(90), "90s");
/// ```
#[must_use]
pub fn frequency_label(step: i64) -> String {
    match step {
        s if s > 0 && s % 86_400 == 0 => format!("{}d", s / 86_400),
        s if s > 0 && s % 3_600 == 0 => format!("{}h", s / 3_600),
        s if s > 0 && s % 60 == 0 => format!("{}min", s / 60),
        s => format!("{s}s"),
    }
}
