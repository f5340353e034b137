use circadiff::compare::compare;
use circadiff::config::{Align, ChartConfig};
use circadiff::error::SeriesError;
use circadiff::series::Series;

fn series(pairs: &[(u16, f64)]) -> Series {
    Series::from_pairs(pairs).unwrap()
}

#[test]
fn smooths_and_derives_difference() {
    let a = series(&[(0, 10.0), (1, 20.0), (2, 30.0)]);
    let b = series(&[(0, 10.0), (1, 10.0), (2, 10.0)]);
    let config = ChartConfig {
        window_size: 2,
        ..ChartConfig::default()
    };
    let c = compare(&a, &b, &config).unwrap();
    assert_eq!(c.smoothed_a.values(), vec![10.0, 15.0, 25.0]);
    assert_eq!(c.smoothed_b.values(), vec![10.0, 10.0, 10.0]);
    assert_eq!(c.difference.unwrap().values(), vec![0.0, 5.0, 15.0]);
    assert!(c.warnings.is_empty());
}

#[test]
fn difference_can_be_disabled() {
    let a = series(&[(0, 1.0)]);
    let config = ChartConfig {
        include_difference: false,
        ..ChartConfig::default()
    };
    let c = compare(&a, &a, &config).unwrap();
    assert!(c.difference.is_none());
}

#[test]
fn positional_mismatch_fails() {
    let a = series(&[(0, 1.0), (1, 1.0)]);
    let b = series(&[(0, 1.0)]);
    assert!(matches!(
        compare(&a, &b, &ChartConfig::default()),
        Err(SeriesError::InvalidArgument(_))
    ));
}

#[test]
fn positional_minute_drift_warns() {
    let a = series(&[(0, 1.0), (1, 1.0)]);
    let b = series(&[(0, 1.0), (2, 1.0)]);
    let c = compare(&a, &b, &ChartConfig::default()).unwrap();
    assert_eq!(c.warnings.len(), 1);
}

#[test]
fn keyed_alignment_rejects_drift() {
    let a = series(&[(0, 1.0), (1, 1.0)]);
    let b = series(&[(0, 1.0), (2, 1.0)]);
    let config = ChartConfig {
        align: Align::Keyed,
        ..ChartConfig::default()
    };
    assert!(matches!(
        compare(&a, &b, &config),
        Err(SeriesError::NotFound { .. })
    ));
}

#[test]
fn zero_window_fails() {
    let a = series(&[(0, 1.0)]);
    let config = ChartConfig {
        window_size: 0,
        ..ChartConfig::default()
    };
    assert!(compare(&a, &a, &config).is_err());
}

#[test]
fn minute_mismatch_warns_without_difference() {
    let a = series(&[(0, 10.0), (2, 20.0)]);
    let b = series(&[(1, 100.0), (3, 200.0)]);
    let config = ChartConfig {
        window_size: 1,
        include_difference: false,
        ..ChartConfig::default()
    };
    let c = compare(&a, &b, &config).unwrap();
    assert!(c.difference.is_none());
    assert_eq!(c.warnings.len(), 1);
    assert!(c.warnings[0].contains("minute sequences differ"));
}

#[test]
fn minute_mismatch_warns_with_positional_difference() {
    let a = series(&[(0, 10.0), (2, 20.0)]);
    let b = series(&[(1, 100.0), (3, 200.0)]);
    let config = ChartConfig {
        window_size: 1,
        ..ChartConfig::default()
    };
    let c = compare(&a, &b, &config).unwrap();
    assert!(c.difference.is_some());
    assert!(c.warnings[0].contains("--align keyed"));
}
