use graphyte_core::{DayWindow, GraphyteError, RawSeries, Sample, Table, apply_day_window, normalize};

/// 24 hourly rows starting at 2024-01-01T00:00Z (a Monday).
fn hourly_day(start: i64) -> Table {
    let raw = RawSeries::new("h", start, 3600, (0..24).map(f64::from));
    Table::assemble(vec![normalize(raw).unwrap()]).unwrap()
}

const MONDAY: i64 = 1_704_067_200;

fn kept_hours(t: &Table) -> Vec<usize> {
    t.columns()[0]
        .values
        .iter()
        .enumerate()
        .filter(|(_, v)| !v.is_missing())
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn disabled_window_is_a_no_op() {
    let mut t = hourly_day(MONDAY);
    let before = t.clone();
    let masked = apply_day_window(&mut t, &DayWindow::DISABLED).unwrap();
    assert_eq!(masked, 0);
    assert_eq!(t, before);
}

#[test]
fn office_hours_keep_eight_rows() {
    let mut t = hourly_day(MONDAY);
    let masked = apply_day_window(&mut t, &DayWindow::new(9, 17).unwrap()).unwrap();
    assert_eq!(masked, 16);
    assert_eq!(t.len(), 24);
    assert_eq!(kept_hours(&t), (9..17).collect::<Vec<_>>());
}

#[test]
fn wrap_around_window() {
    let mut t = hourly_day(MONDAY);
    apply_day_window(&mut t, &DayWindow::new(22, 6).unwrap()).unwrap();
    assert_eq!(kept_hours(&t), vec![0, 1, 2, 3, 4, 5, 22, 23]);
}

#[test]
fn timezone_shifts_the_window() {
    let mut t = hourly_day(MONDAY);
    let w = DayWindow::new(9, 17)
        .unwrap()
        .with_timezone(chrono_tz::Europe::Berlin);
    apply_day_window(&mut t, &w).unwrap();
    // Berlin is UTC+1 in January.
    assert_eq!(kept_hours(&t), (8..16).collect::<Vec<_>>());
}

#[test]
fn weekdays_only_masks_weekends() {
    // Saturday 2024-01-06.
    let saturday = MONDAY + 5 * 86_400;
    let mut t = hourly_day(saturday);
    let masked = apply_day_window(&mut t, &DayWindow::DISABLED.weekdays_only(true)).unwrap();
    assert_eq!(masked, 24);
    assert!(t.columns()[0].values.iter().all(|v| *v == Sample::Missing));

    let mut t = hourly_day(MONDAY);
    let masked = apply_day_window(&mut t, &DayWindow::DISABLED.weekdays_only(true)).unwrap();
    assert_eq!(masked, 0);
}

#[test]
fn invalid_windows_are_rejected() {
    let mut t = hourly_day(MONDAY);
    let w = DayWindow {
        start_hour: 5,
        end_hour: 5,
        ..DayWindow::DISABLED
    };
    assert!(matches!(
        apply_day_window(&mut t, &w),
        Err(GraphyteError::InvalidArg(_))
    ));
    let w = DayWindow {
        start_hour: 24,
        end_hour: 2,
        ..DayWindow::DISABLED
    };
    assert!(matches!(
        apply_day_window(&mut t, &w),
        Err(GraphyteError::InvalidArg(_))
    ));
}
