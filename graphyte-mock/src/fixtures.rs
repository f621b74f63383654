use graphyte_core::{RawSeries, Sample};

/// 2024-01-01T00:00:00Z, a Monday.
pub const START: i64 = 1_704_067_200;

/// One day of samples for a known metric path.
pub fn by_metric(metric: &str) -> Option<(i64, Vec<Sample>)> {
    match metric {
        // Per-minute load with a daily hump.
        "cpu.load" => Some((60, wave(1440, |i| 0.5 + f64::from(i % 60) / 100.0))),
        "cpu.user" => Some((60, wave(1440, |i| 20.0 + f64::from(i / 60)))),
        // Coarser counter with a hole in the afternoon.
        "net.bytes" => Some((
            120,
            (0..720)
                .map(|i| {
                    if (420..450).contains(&i) {
                        Sample::Missing
                    } else {
                        Sample::Present(1000.0 + f64::from(i) * 2.0)
                    }
                })
                .collect(),
        )),
        "disk.free" => Some((3600, wave(24, |i| 500.0 - f64::from(i)))),
        "empty" => Some((60, vec![Sample::Missing; 60])),
        _ => None,
    }
}

fn wave(n: u32, f: impl Fn(u32) -> f64) -> Vec<Sample> {
    (0..n).map(|i| Sample::from_f64(f(i))).collect()
}

/// Build the series for a target expression, keeping the expression as its name.
pub fn series_for(target: &str) -> Option<RawSeries> {
    let (step, values) = by_metric(graphyte_core::metric_name(target))?;
    Some(RawSeries {
        name: target.to_string(),
        start: START,
        step,
        values,
    })
}
