use chrono::DateTime;

use crate::series::{Point, Sample, Series};
use crate::{Aggregation, GraphyteError};

/// Epoch-aligned bucket start for a timestamp.
const fn bucket_of(ts: i64, step: i64) -> i64 {
    ts - ts.rem_euclid(step)
}

/// Collapse the present values of one bucket.
///
/// Empty buckets are `Missing`, except for `Count`, which reports zero.
fn aggregate(aggregation: Aggregation, values: &mut [f64]) -> Sample {
    if values.is_empty() {
        return match aggregation {
            Aggregation::Count => Sample::Present(0.0),
            _ => Sample::Missing,
        };
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let v = match aggregation {
        Aggregation::Sum => values.iter().sum(),
        Aggregation::Mean => values.iter().sum::<f64>() / n,
        Aggregation::Median => {
            values.sort_unstable_by(f64::total_cmp);
            let mid = values.len() / 2;
            if values.len() % 2 == 1 {
                values[mid]
            } else {
                f64::midpoint(values[mid - 1], values[mid])
            }
        }
        Aggregation::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        Aggregation::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        Aggregation::First => values[0],
        Aggregation::Last => values[values.len() - 1],
        Aggregation::Count => n,
    };
    Sample::from_f64(v)
}

/// Resample a series onto an epoch-aligned grid of `step` seconds.
///
/// - Each point goes to bucket `ts - ts mod step`.
/// - The output is dense from the first to the last bucket; buckets that
///   received no present sample are `Missing` (`Count` reports `0`).
/// - Present samples in a bucket are collapsed with `aggregation`; missing
///   samples are ignored.
/// - Resampling a series to its own step keeps every value unchanged.
///
/// # Errors
/// Returns `Err(GraphyteError::IncompatibleFrequencies)` if `step <= 0`, and
/// `Err(GraphyteError::MalformedSeries)` if the input timestamps are not
/// strictly increasing.
///
/// ```
/// use graphyte_core::{Aggregation, RawSeries, Sample};
/// use graphyte_core::timeseries::{normalize::normalize, resample::resample};
/// let s = normalize(RawSeries::new("a", 0, 60, [1.0, 2.0, 3.0, 4.0])).unwrap();
/// let r = resample(s, 120, Aggregation::Sum).unwrap();
/// let vals: Vec<Sample> = r.points.iter().map(|p| p.value).collect();
/// assert_eq!(vals, vec![Sample::Present(3.0), Sample::Present(7.0)]);
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "graphyte_core::resample",
        skip(series),
        fields(series = %series.name, from_step = series.step, to_step = step, aggregation = %aggregation),
    )
)]
pub fn resample(
    series: Series,
    step: i64,
    aggregation: Aggregation,
) -> Result<Series, GraphyteError> {
    if step <= 0 {
        return Err(GraphyteError::IncompatibleFrequencies(format!(
            "resample step must be positive, got {step}"
        )));
    }
    let Series { name, points, .. } = series;
    if points.windows(2).any(|w| w[1].ts <= w[0].ts) {
        return Err(GraphyteError::malformed(
            name,
            "timestamps are not strictly increasing",
        ));
    }
    if points.is_empty() {
        return Ok(Series {
            name,
            step,
            points,
        });
    }

    let first_bucket = bucket_of(points[0].ts.timestamp(), step);
    let last_bucket = bucket_of(points[points.len() - 1].ts.timestamp(), step);
    let n_buckets = usize::try_from((last_bucket - first_bucket) / step + 1)
        .map_err(|_| GraphyteError::IncompatibleFrequencies("bucket range overflow".into()))?;

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); n_buckets];
    for p in &points {
        let Some(v) = p.value.value() else {
            continue;
        };
        let b = bucket_of(p.ts.timestamp(), step);
        // In range by construction: first_bucket <= b <= last_bucket.
        let idx = usize::try_from((b - first_bucket) / step).unwrap_or(0);
        buckets[idx].push(v);
    }

    let mut out = Vec::with_capacity(n_buckets);
    let mut bucket_ts = first_bucket;
    for mut values in buckets {
        let Some(ts) = DateTime::from_timestamp(bucket_ts, 0) else {
            return Err(GraphyteError::malformed(
                name,
                format!("bucket timestamp {bucket_ts} out of range"),
            ));
        };
        out.push(Point {
            ts,
            value: aggregate(aggregation, &mut values),
        });
        bucket_ts += step;
    }

    Ok(Series {
        name,
        step,
        points: out,
    })
}
