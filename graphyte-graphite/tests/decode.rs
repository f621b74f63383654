use graphyte_core::{GraphyteError, Sample};
use graphyte_graphite::decode::{FALLBACK_STEP, MAX_FILL_RATIO, decode_json, decode_raw};

#[test]
fn raw_lines_decode_with_missing_values() {
    let body = "cpu.load,600,780,60|1.5,None,2.0\nnet.bytes,600,840,120|10,20\n";
    let s = decode_raw(body).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s[0].name, "cpu.load");
    assert_eq!((s[0].start, s[0].step), (600, 60));
    assert_eq!(
        s[0].values,
        vec![Sample::Present(1.5), Sample::Missing, Sample::Present(2.0)]
    );
    assert_eq!(s[1].end(), 840);
}

#[test]
fn raw_header_must_agree_with_values() {
    let err = decode_raw("a,0,300,60|1,2,3\n").unwrap_err();
    assert!(matches!(err, GraphyteError::Data(_)));
}

#[test]
fn raw_rejects_garbage() {
    assert!(matches!(decode_raw("no pipe here"), Err(GraphyteError::Data(_))));
    assert!(matches!(decode_raw("a,0|1"), Err(GraphyteError::Data(_))));
    assert!(matches!(decode_raw("a,x,60,60|1"), Err(GraphyteError::Data(_))));
    assert!(matches!(decode_raw("a,0,60,60|one"), Err(GraphyteError::Data(_))));
}

#[test]
fn raw_empty_body_and_empty_series() {
    assert!(decode_raw("").unwrap().is_empty());
    assert!(decode_raw("\n  \n").unwrap().is_empty());
    assert!(decode_raw("a,60,60,60|\n").unwrap().is_empty());
}

#[test]
fn json_infers_step_and_fills_gaps() {
    let body = r#"[
        {"target": "cpu.load", "datapoints": [[1.0, 600], [2.0, 660], [null, 720], [4.0, 840]]},
        {"target": "one", "datapoints": [[7.0, 600]]},
        {"target": "none", "datapoints": []}
    ]"#;
    let s = decode_json(body).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!((s[0].start, s[0].step), (600, 60));
    assert_eq!(
        s[0].values,
        vec![
            Sample::Present(1.0),
            Sample::Present(2.0),
            Sample::Missing,
            Sample::Missing,
            Sample::Present(4.0)
        ]
    );
    assert_eq!(s[1].step, FALLBACK_STEP);
    assert_eq!(s[1].values, vec![Sample::Present(7.0)]);
}

#[test]
fn json_errors() {
    assert!(matches!(decode_json("{not json"), Err(GraphyteError::Data(_))));
    let off_grid = r#"[{"target": "a", "datapoints": [[1, 0], [1, 60], [1, 120], [1, 150]]}]"#;
    assert!(matches!(decode_json(off_grid), Err(GraphyteError::Data(_))));
    assert!(decode_json("  ").unwrap().is_empty());
}

#[test]
fn json_refuses_runaway_gap_fill() {
    let sparse = r#"[{"target": "a", "datapoints": [[1, 0], [2, 1], [3, 1000000000000000]]}]"#;
    assert!(matches!(decode_json(sparse), Err(GraphyteError::Data(_))));

    let extreme = format!(
        r#"[{{"target": "b", "datapoints": [[1, {}], [2, {}]]}}]"#,
        i64::MIN,
        i64::MAX
    );
    assert!(matches!(decode_json(&extreme), Err(GraphyteError::Data(_))));
}

#[test]
fn json_gap_fill_up_to_the_ratio_is_accepted() {
    let last = 60 * (2 * MAX_FILL_RATIO as i64 - 1);
    let body = format!(r#"[{{"target": "a", "datapoints": [[1, 0], [2, 60], [3, {last}]]}}]"#);
    let s = decode_json(&body).unwrap();
    assert_eq!(s[0].step, 60);
    assert_eq!(s[0].values.len(), 2 * MAX_FILL_RATIO);
}
