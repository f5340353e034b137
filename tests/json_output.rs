use std::path::PathBuf;

use circadiff::compare::compare;
use circadiff::config::ChartConfig;
use circadiff::ctx::{CohortInput, Ctx};
use circadiff::io::json_writer::build_report;
use circadiff::render::brush::BrushState;
use circadiff::series::Series;

fn make_ctx(config: ChartConfig) -> Ctx {
    let a = Series::from_pairs(&[(100, 50.0), (200, 75.0)]).unwrap();
    let b = Series::from_pairs(&[(100, 40.0), (200, 20.0)]).unwrap();
    let mut ctx = Ctx::new(
        CohortInput {
            label: "Male".into(),
            path: PathBuf::from("a.csv"),
        },
        CohortInput {
            label: "Female".into(),
            path: PathBuf::from("b.csv"),
        },
        PathBuf::from("out"),
        config,
        true,
        false,
        false,
        "0.0.0-test",
    );
    let comparison = compare(&a, &b, &ctx.config).unwrap();
    let mut brush = BrushState::new(&comparison.smoothed_a, &comparison.smoothed_b);
    brush.select(100.0, 200.0);
    ctx.interval_stats = Some(brush.into_stats());
    ctx.comparison = Some(comparison);
    ctx.warnings.push("example warning".to_string());
    ctx
}

#[test]
fn json_report_populated() {
    let ctx = make_ctx(ChartConfig {
        window_size: 1,
        ..ChartConfig::default()
    });
    let report = build_report(&ctx).unwrap();
    let json = serde_json::to_value(report).unwrap();

    assert_eq!(json["tool"], "circadiff");
    assert_eq!(json["schema_version"], "v1");
    assert_eq!(json["config"]["window_size"], 1);
    assert_eq!(json["config"]["align"], "positional");
    assert_eq!(json["config"]["visibility"], "all");
    assert_eq!(json["series"]["cohort_a"]["label"], "Male");
    assert_eq!(json["series"]["cohort_a"]["samples"][1]["minute"], 200);
    assert_eq!(json["series"]["difference"]["samples"][0]["value"], 10.0);
    assert_eq!(json["series"]["difference"]["summary"]["peak_minute"], 200);
    assert_eq!(json["interval"]["cohort_a"]["percent"], 50.0);
    assert_eq!(json["interval"]["cohort_b"]["percent"], -50.0);
    assert_eq!(json["warnings"][0], "example warning");
}

#[test]
fn brush_stats_can_be_hidden() {
    let ctx = make_ctx(ChartConfig {
        include_brush_stats: false,
        ..ChartConfig::default()
    });
    let json = serde_json::to_value(build_report(&ctx).unwrap()).unwrap();
    assert!(json["interval"].is_null());
}
