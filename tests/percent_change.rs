use circadiff::error::SeriesError;
use circadiff::math::change::percent_change;
use circadiff::series::Series;

fn series(pairs: &[(u16, f64)]) -> Series {
    Series::from_pairs(pairs).unwrap()
}

#[test]
fn change_between_exact_minutes() {
    let s = series(&[(100, 50.0), (150, 60.0), (200, 75.0)]);
    let pc = percent_change(&s, 100.0, 200.0).unwrap();
    assert!((pc - 50.0).abs() < 1e-9);
}

#[test]
fn endpoints_are_floored() {
    let s = series(&[(100, 50.0), (200, 25.0)]);
    let pc = percent_change(&s, 100.9, 200.2).unwrap();
    assert!((pc + 50.0).abs() < 1e-9);
}

#[test]
fn same_endpoint_is_zero() {
    let s = series(&[(10, 3.0)]);
    assert_eq!(percent_change(&s, 10.0, 10.0).unwrap(), 0.0);
}

#[test]
fn missing_minute_not_found() {
    let s = series(&[(100, 50.0), (200, 75.0)]);
    match percent_change(&s, 100.0, 150.0) {
        Err(SeriesError::NotFound { minute }) => assert_eq!(minute, 150),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn out_of_day_endpoints_not_found() {
    let s = series(&[(0, 1.0), (1439, 2.0)]);
    assert!(matches!(
        percent_change(&s, -1.0, 1439.0),
        Err(SeriesError::NotFound { .. })
    ));
    assert!(matches!(
        percent_change(&s, 0.0, 1440.0),
        Err(SeriesError::NotFound { .. })
    ));
    assert!(matches!(
        percent_change(&s, f64::NAN, 0.0),
        Err(SeriesError::NotFound { .. })
    ));
}

#[test]
fn zero_baseline_is_reported() {
    let s = series(&[(0, 0.0), (1, 5.0)]);
    match percent_change(&s, 0.0, 1.0) {
        Err(SeriesError::ZeroBaseline { minute }) => assert_eq!(minute, 0),
        other => panic!("unexpected {:?}", other),
    }
}
