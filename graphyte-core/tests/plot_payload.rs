use graphyte_core::{PlotPayload, PlotPoint, RawSeries, Table, normalize};

fn payload(series: Vec<RawSeries>) -> PlotPayload {
    let t = Table::assemble(series.into_iter().map(|r| normalize(r).unwrap()).collect()).unwrap();
    PlotPayload::from_table(&t)
}

#[test]
fn only_leading_nulls_are_trimmed() {
    let p = payload(vec![RawSeries::new(
        "a",
        10,
        10,
        [None, None, Some(1.0), None, Some(2.0)],
    )]);
    let pts = &p.series[0].points;
    assert_eq!(
        pts,
        &vec![
            PlotPoint(30_000, Some(1.0)),
            PlotPoint(40_000, None),
            PlotPoint(50_000, Some(2.0)),
        ]
    );
}

#[test]
fn all_null_series_has_no_points_but_keeps_its_summary() {
    let p = payload(vec![
        RawSeries::new("a", 0, 60, [1.0, 2.0]),
        RawSeries::new("b", 0, 60, [None::<f64>, None]),
    ]);
    assert!(p.series[1].points.is_empty());
    assert_eq!(p.summaries[1].label, "b");
    assert_eq!(p.summaries[1].stats.count, 0);
    assert_eq!(p.summaries[1].correlations.len(), 2);
}

#[test]
fn json_shape() {
    let p = payload(vec![RawSeries::new("cpu", 60, 60, [Some(1.5), None])]);
    let v: serde_json::Value = serde_json::from_str(&p.to_json().unwrap()).unwrap();
    assert_eq!(v["series"][0]["label"], "cpu");
    assert_eq!(
        v["series"][0]["points"],
        serde_json::json!([[60_000, 1.5], [120_000, null]])
    );
    assert_eq!(v["summaries"][0]["stats"]["frequency"], "1min");
    assert_eq!(v["summaries"][0]["correlations"], serde_json::json!([["cpu", 1.0]]));
}
