use circadiff::compare::compare;
use circadiff::config::{ChartConfig, Visibility};
use circadiff::render::brush::BrushState;
use circadiff::render::svg::SvgRenderer;
use circadiff::render::{ChartRenderer, build_model};
use circadiff::series::Series;

fn cohorts() -> (Series, Series) {
    let a = Series::from_pairs(&[(0, 10.0), (720, 30.0), (1439, 20.0)]).unwrap();
    let b = Series::from_pairs(&[(0, 5.0), (720, 40.0), (1439, 25.0)]).unwrap();
    (a, b)
}

#[test]
fn renders_all_series_and_decorations() {
    let (a, b) = cohorts();
    let config = ChartConfig::default();
    let comparison = compare(&a, &b, &config).unwrap();
    let model = build_model(&comparison, &config, "Male", "Female", None);
    let svg = SvgRenderer::new().render(&model).unwrap();

    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert!(svg.contains("#1f77b4"));
    assert!(svg.contains("#ff7f0e"));
    assert!(svg.contains("#2ca02c"));
    assert!(svg.contains("class=\"shaded-area\""));
    assert!(svg.contains("Lights Off"));
    assert!(svg.contains("Lights On"));
    assert!(svg.contains(">0:00<"));
    assert!(svg.contains(">24:00<"));
    assert!(svg.contains("Male Activity"));
    assert!(svg.contains("Activity Difference"));
    assert!(!svg.contains("display=\"none\""));
    assert!(!svg.contains("mini-legend"));
}

#[test]
fn visibility_hides_other_series() {
    let (a, b) = cohorts();
    let config = ChartConfig {
        visibility: Visibility::CohortB,
        ..ChartConfig::default()
    };
    let comparison = compare(&a, &b, &config).unwrap();
    let model = build_model(&comparison, &config, "Male", "Female", None);
    assert!(!model.series[0].visible);
    assert!(model.series[1].visible);
    assert!(!model.series[2].visible);

    let svg = SvgRenderer::new().render(&model).unwrap();
    // cohort A line, difference line and difference area
    assert_eq!(svg.matches("display=\"none\"").count(), 3);
}

#[test]
fn y_domain_spans_min_to_configured_max() {
    let (a, b) = cohorts();
    let config = ChartConfig {
        window_size: 1,
        ..ChartConfig::default()
    };
    let comparison = compare(&a, &b, &config).unwrap();
    let model = build_model(&comparison, &config, "Male", "Female", None);
    assert_eq!(model.y.domain(), (5.0, 60.0));
    assert_eq!(model.x.domain(), (0.0, 1440.0));
}

#[test]
fn interval_adds_mini_legend() {
    let (a, b) = cohorts();
    let config = ChartConfig {
        window_size: 1,
        ..ChartConfig::default()
    };
    let comparison = compare(&a, &b, &config).unwrap();
    let mut brush = BrushState::new(&comparison.smoothed_a, &comparison.smoothed_b);
    brush.select(0.0, 720.0);
    let stats = brush.into_stats();
    let model = build_model(&comparison, &config, "Male", "Female", Some(&stats));
    let svg = SvgRenderer::new().render(&model).unwrap();

    assert!(svg.contains("Percent Change"));
    assert!(svg.contains("Male: 200.00%"));
    assert!(svg.contains("Female: 700.00%"));
    assert!(svg.contains("brush-selection"));
}

#[test]
fn labels_are_escaped() {
    let (a, b) = cohorts();
    let config = ChartConfig::default();
    let comparison = compare(&a, &b, &config).unwrap();
    let model = build_model(&comparison, &config, "A<B", "C&D", None);
    let svg = SvgRenderer::new().render(&model).unwrap();
    assert!(svg.contains("A&lt;B Activity"));
    assert!(svg.contains("C&amp;D Activity"));
}
