//! Raw and normalized series, and the two-state sample model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One cell of a series: either a numeric value or an explicit gap.
///
/// Non-finite floats never enter the model; they are converted to `Missing`
/// on construction. A sample is only collapsed to a concrete sentinel (JSON
/// `null`) at the plot payload boundary.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Sample {
    /// A finite numeric value.
    Present(f64),
    /// No value was recorded for this position.
    #[default]
    Missing,
}

impl Sample {
    /// Wrap a float, mapping NaN and infinities to `Missing`.
    #[must_use]
    pub const fn from_f64(v: f64) -> Self {
        if v.is_finite() {
            Self::Present(v)
        } else {
            Self::Missing
        }
    }

    /// The numeric value, if present.
    #[must_use]
    pub const fn value(self) -> Option<f64> {
        match self {
            Self::Present(v) => Some(v),
            Self::Missing => None,
        }
    }

    /// True when no value is recorded.
    #[must_use]
    pub const fn is_missing(self) -> bool {
        matches!(self, Self::Missing)
    }
}

impl From<f64> for Sample {
    fn from(v: f64) -> Self {
        Self::from_f64(v)
    }
}

impl From<Option<f64>> for Sample {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Self::Missing, Self::from_f64)
    }
}

impl Serialize for Sample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Sample {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<f64>::deserialize(deserializer).map(Self::from)
    }
}

/// A series exactly as delivered by a render connector.
///
/// Values are laid out at `start + i * step` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    /// Target name reported by the backend.
    pub name: String,
    /// Epoch seconds of the first value.
    pub start: i64,
    /// Spacing between values in seconds.
    pub step: i64,
    /// Ordered values; gaps are `Missing`.
    pub values: Vec<Sample>,
}

impl RawSeries {
    /// Build a raw series from anything convertible into samples.
    pub fn new<I, V>(name: impl Into<String>, start: i64, step: i64, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Sample>,
    {
        Self {
            name: name.into(),
            start,
            step,
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Exclusive end of the covered range in epoch seconds.
    #[must_use]
    pub fn end(&self) -> i64 {
        let len = i64::try_from(self.values.len()).unwrap_or(i64::MAX);
        self.start.saturating_add(len.saturating_mul(self.step))
    }

    /// Bare metric path of this series' target expression.
    #[must_use]
    pub fn metric_name(&self) -> &str {
        metric_name(&self.name)
    }
}

/// A timestamped sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Sample time (UTC).
    pub ts: DateTime<Utc>,
    /// Sample value.
    pub value: Sample,
}

/// A series with explicit timestamps, produced by the normalizer or a resample.
///
/// Timestamps are strictly increasing and spaced by `step` (resampled series
/// are dense over their bucket range).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Series name.
    pub name: String,
    /// Spacing between points in seconds.
    pub step: i64,
    /// Ordered points.
    pub points: Vec<Point>,
}

impl Series {
    /// Number of present samples.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.points.iter().filter(|p| !p.value.is_missing()).count()
    }
}

/// Extract the bare metric path from a Graphite target expression.
///
/// Everything up to the last `(` is skipped, then characters are taken up to
/// the first `,`, `(`, `)` or `}`.
///
/// ```
/// use graphyte_core::metric_name;
/// assert_eq!(metric_name("servers.web1.cpu"), "servers.web1.cpu");
/// assert_eq!(metric_name("sumSeries(servers.*.cpu)"), "servers.*.cpu");
/// assert_eq!(metric_name("alias(scale(app.hits,10),'hits')"), "app.hits");
/// ```
#[must_use]
pub fn metric_name(target: &str) -> &str {
    let tail = target.rfind('(').map_or(target, |i| &target[i + 1..]);
    let end = tail.find([',', '(', ')', '}']).unwrap_or(tail.len());
    &tail[..end]
}
