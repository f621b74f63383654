//! Decoders for the Graphite render payload formats.

use graphyte_core::{GraphyteError, RawSeries, Sample, estimate_step_seconds};
use serde::Deserialize;

/// Step assumed for a `json` series with a single datapoint.
pub const FALLBACK_STEP: i64 = 60;

/// Most grid slots a `json` series may expand to per received datapoint.
pub const MAX_FILL_RATIO: usize = 1024;

/// Decode a `format=raw` body.
///
/// Each non-blank line is `name,start,end,step|v1,v2,...` with `None` for a
/// missing value. The name may itself contain commas, so the header is split
/// from the right. Series without values are dropped.
///
/// # Errors
/// Returns `Data` for a malformed line, an unparsable value, or a header
/// whose `end` disagrees with `start + count * step`.
///
/// ```
/// use graphyte_graphite::decode::decode_raw;
/// let body = "sumSeries(a,b),60,240,60|1.0,None,3.5\n";
/// let s = decode_raw(body).unwrap();
/// assert_eq!(s[0].name, "sumSeries(a,b)");
/// assert_eq!(s[0].values.len(), 3);
/// ```
pub fn decode_raw(body: &str) -> Result<Vec<RawSeries>, GraphyteError> {
    body.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter_map(|line| decode_raw_line(line).transpose())
        .collect()
}

fn decode_raw_line(line: &str) -> Result<Option<RawSeries>, GraphyteError> {
    let (header, data) = line
        .split_once('|')
        .ok_or_else(|| GraphyteError::Data(format!("raw line without '|': {line}")))?;

    let mut parts = header.rsplitn(4, ',');
    let (Some(step), Some(end), Some(start), Some(name)) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(GraphyteError::Data(format!("raw header too short: {header}")));
    };
    let start = parse_int(start, "start")?;
    let end = parse_int(end, "end")?;
    let step = parse_int(step, "step")?;

    let values = if data.trim().is_empty() {
        Vec::new()
    } else {
        data.split(',')
            .map(parse_value)
            .collect::<Result<Vec<_>, _>>()?
    };

    let count = i64::try_from(values.len())
        .map_err(|_| GraphyteError::Data(format!("series {name} is too long")))?;
    let expected = count
        .checked_mul(step)
        .and_then(|span| start.checked_add(span));
    if expected != Some(end) {
        return Err(GraphyteError::Data(format!(
            "series {name}: end {end} does not match start {start} + {count} * {step}"
        )));
    }

    if values.is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!(series = name, "dropping raw series without values");
        return Ok(None);
    }
    Ok(Some(RawSeries {
        name: name.to_string(),
        start,
        step,
        values,
    }))
}

fn parse_int(s: &str, what: &str) -> Result<i64, GraphyteError> {
    s.trim()
        .parse()
        .map_err(|_| GraphyteError::Data(format!("invalid {what} in raw header: {s:?}")))
}

fn parse_value(s: &str) -> Result<Sample, GraphyteError> {
    match s.trim() {
        "None" | "" => Ok(Sample::Missing),
        v => v
            .parse::<f64>()
            .map(Sample::from_f64)
            .map_err(|_| GraphyteError::Data(format!("invalid raw value: {v:?}"))),
    }
}

#[derive(Deserialize)]
struct JsonSeries {
    target: String,
    datapoints: Vec<(Option<f64>, i64)>,
}

/// Decode a `format=json` body.
///
/// The step of each series is inferred from its timestamps (falling back to
/// [`FALLBACK_STEP`] for a single datapoint) and gaps in the timestamps are
/// filled with `Missing`. Series without datapoints are dropped.
///
/// # Errors
/// Returns `Data` for invalid JSON, a datapoint that is not on the inferred
/// grid, or a time range that would expand to more than
/// [`MAX_FILL_RATIO`] slots per datapoint.
pub fn decode_json(body: &str) -> Result<Vec<RawSeries>, GraphyteError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let parsed: Vec<JsonSeries> =
        serde_json::from_str(body).map_err(|e| GraphyteError::Data(e.to_string()))?;
    parsed
        .into_iter()
        .filter_map(|s| json_to_raw(s).transpose())
        .collect()
}

fn json_to_raw(series: JsonSeries) -> Result<Option<RawSeries>, GraphyteError> {
    let JsonSeries {
        target,
        mut datapoints,
    } = series;
    if datapoints.is_empty() {
        return Ok(None);
    }
    datapoints.sort_by_key(|&(_, ts)| ts);

    let timestamps: Vec<i64> = datapoints.iter().map(|&(_, ts)| ts).collect();
    let step = estimate_step_seconds(&timestamps).unwrap_or(FALLBACK_STEP);
    let start = timestamps[0];
    let last = timestamps[timestamps.len() - 1];

    let len = last
        .checked_sub(start)
        .and_then(|span| usize::try_from(span / step).ok())
        .and_then(|slots| slots.checked_add(1))
        .ok_or_else(|| GraphyteError::Data(format!("series {target}: bad time range")))?;
    if len > datapoints.len().saturating_mul(MAX_FILL_RATIO) {
        return Err(GraphyteError::Data(format!(
            "series {target}: {} datapoints would span {len} slots of {step}s",
            datapoints.len()
        )));
    }
    let mut values = vec![Sample::Missing; len];
    for (v, ts) in datapoints {
        let offset = ts.saturating_sub(start);
        if offset % step != 0 {
            return Err(GraphyteError::Data(format!(
                "series {target}: datapoint at {ts} is off the {step}s grid"
            )));
        }
        let idx = usize::try_from(offset / step)
            .map_err(|_| GraphyteError::Data(format!("series {target}: bad offset")))?;
        values[idx] = Sample::from(v);
    }

    Ok(Some(RawSeries {
        name: target,
        start,
        step,
        values,
    }))
}
