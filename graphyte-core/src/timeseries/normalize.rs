use chrono::DateTime;

use crate::GraphyteError;
use crate::series::{Point, RawSeries, Series};

/// Lay out a raw series on its own time index.
///
/// Point `i` is stamped at `start + i * step`; the output has exactly one point
/// per input value.
///
/// # Errors
/// Returns `Err(GraphyteError::MalformedSeries)` if `step <= 0`, if the series
/// carries no values, or if a timestamp overflows the representable range.
///
/// ```
/// use graphyte_core::{RawSeries, Sample, timeseries::normalize::normalize};
/// let raw = RawSeries::new("a", 600, 60, [Some(1.0), None, Some(3.0)]);
/// let s = normalize(raw).unwrap();
/// let ts: Vec<i64> = s.points.iter().map(|p| p.ts.timestamp()).collect();
/// assert_eq!(ts, vec![600, 660, 720]);
/// assert_eq!(s.points[1].value, Sample::Missing);
/// ```
pub fn normalize(raw: RawSeries) -> Result<Series, GraphyteError> {
    let RawSeries {
        name,
        start,
        step,
        values,
    } = raw;

    if step <= 0 {
        return Err(GraphyteError::malformed(
            name,
            format!("step must be positive, got {step}"),
        ));
    }
    if values.is_empty() {
        return Err(GraphyteError::malformed(name, "series has no values"));
    }

    let mut points = Vec::with_capacity(values.len());
    let mut ts = start;
    for (i, value) in values.into_iter().enumerate() {
        if i > 0 {
            ts = match ts.checked_add(step) {
                Some(t) => t,
                None => {
                    return Err(GraphyteError::malformed(name, "timestamp overflow"));
                }
            };
        }
        let Some(at) = DateTime::from_timestamp(ts, 0) else {
            return Err(GraphyteError::malformed(
                name,
                format!("timestamp {ts} out of range"),
            ));
        };
        points.push(Point { ts: at, value });
    }

    Ok(Series { name, step, points })
}

/// Normalize a batch, preserving input order and stopping at the first malformed series.
///
/// # Errors
/// Propagates the first `MalformedSeries` encountered.
pub fn normalize_all<I>(raw: I) -> Result<Vec<Series>, GraphyteError>
where
    I: IntoIterator<Item = RawSeries>,
{
    raw.into_iter().map(normalize).collect()
}
