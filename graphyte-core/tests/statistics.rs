use graphyte_core::analysis::correlation::pearson;
use graphyte_core::{
    CorrelationMatrix, RawSeries, Sample, StatSummary, Table, frequency_label, normalize,
};

fn table(series: Vec<RawSeries>) -> Table {
    Table::assemble(series.into_iter().map(|r| normalize(r).unwrap()).collect()).unwrap()
}

#[test]
fn all_missing_series_is_degenerate() {
    let t = table(vec![RawSeries::new("empty", 0, 120, [None::<f64>, None, None])]);
    let s = StatSummary::from_column(&t.columns()[0], t.step());
    assert_eq!(s.count, 0);
    assert_eq!(s.sum, 0.0);
    assert_eq!(s.quantiles, [0.0; 5]);
    assert_eq!(s.mean, 0.0);
    assert_eq!(s.variance, 0.0);
    assert_eq!(s.frequency, "2min");
}

#[test]
fn summary_skips_missing() {
    let s = StatSummary::from_values(
        [Some(2.0), None, Some(4.0), Some(6.0)]
            .into_iter()
            .flatten(),
        3600,
    );
    assert_eq!(s.count, 3);
    assert_eq!(s.sum, 12.0);
    assert_eq!(s.mean, 4.0);
    assert_eq!(s.quantiles, [2.0, 3.0, 4.0, 5.0, 6.0]);
    assert!((s.variance - 8.0 / 3.0).abs() < 1e-12);
    assert_eq!(s.frequency, "1h");
}

#[test]
fn single_value_summary() {
    let s = StatSummary::from_values([7.5], 1);
    assert_eq!(s.quantiles, [7.5; 5]);
    assert_eq!(s.variance, 0.0);
    assert_eq!(s.frequency, "1s");
}

#[test]
fn labels() {
    assert_eq!(frequency_label(172_800), "2d");
    assert_eq!(frequency_label(300), "5min");
    assert_eq!(frequency_label(45), "45s");
}

#[test]
fn diagonal_is_one_even_for_constant_series() {
    let t = table(vec![
        RawSeries::new("flat", 0, 60, [3.0, 3.0, 3.0, 3.0]),
        RawSeries::new("up", 0, 60, [1.0, 2.0, 3.0, 4.0]),
        RawSeries::new("gone", 0, 60, [None::<f64>, None, None, None]),
    ]);
    let m = CorrelationMatrix::compute(&t);
    for n in ["flat", "up", "gone"] {
        assert_eq!(m.get(n, n), Some(1.0));
    }
    assert_eq!(m.get("flat", "up"), Some(0.0));
    assert_eq!(m.get("up", "gone"), Some(0.0));
    assert_eq!(m.get("up", "missing"), None);
}

#[test]
fn correlation_is_symmetric_and_bounded() {
    let t = table(vec![
        RawSeries::new("a", 0, 60, [1.0, 2.0, 3.0, 5.0, 8.0]),
        RawSeries::new("b", 0, 60, [10.0, 8.0, 6.0, 4.0, 2.0]),
        RawSeries::new("c", 0, 60, [2.0, 4.0, 6.0, 10.0, 16.0]),
    ]);
    let m = CorrelationMatrix::compute(&t);
    let ab = m.get("a", "b").unwrap();
    assert_eq!(Some(ab), m.get("b", "a"));
    assert!((-1.0..=1.0).contains(&ab));
    assert!(ab < 0.0);
    assert!((m.get("a", "c").unwrap() - 1.0).abs() < 1e-12);

    let row = m.row("a").unwrap();
    assert_eq!(row.len(), 3);
    assert_eq!(row[0], ("a".to_string(), 1.0));
}

#[test]
fn pearson_uses_pairwise_complete_rows() {
    let xs = [
        Sample::Present(1.0),
        Sample::Missing,
        Sample::Present(2.0),
        Sample::Present(3.0),
    ];
    let ys = [
        Sample::Present(2.0),
        Sample::Present(100.0),
        Sample::Present(4.0),
        Sample::Present(6.0),
    ];
    let r = pearson(&xs, &ys).unwrap();
    assert!((r - 1.0).abs() < 1e-12);
    assert_eq!(pearson(&xs[..1], &ys[..1]), None);
}

#[test]
fn inexact_constant_series_does_not_correlate() {
    let t = table(vec![
        RawSeries::new("flat", 0, 60, [0.1; 10]),
        RawSeries::new("up", 0, 60, (0..10).map(f64::from)),
        RawSeries::new("big", 0, 60, [1.0e9 + 0.3; 10]),
    ]);
    let m = CorrelationMatrix::compute(&t);
    assert_eq!(m.get("flat", "up"), Some(0.0));
    assert_eq!(m.get("up", "flat"), Some(0.0));
    assert_eq!(m.get("big", "up"), Some(0.0));
    assert_eq!(m.get("flat", "flat"), Some(1.0));
}

#[test]
fn pearson_survives_a_large_offset() {
    let xs: Vec<Sample> = (0..10).map(|i| Sample::Present(1.0e8 + f64::from(i))).collect();
    let ys: Vec<Sample> = (0..10).map(|i| Sample::Present(f64::from(i) * 2.0)).collect();
    let r = pearson(&xs, &ys).unwrap();
    assert!((r - 1.0).abs() < 1e-9);
}
