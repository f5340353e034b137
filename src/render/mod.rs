use anyhow::Result;

use crate::compare::Comparison;
use crate::config::ChartConfig;
use crate::math::stats;
use crate::series::{MINUTES_PER_DAY, Series};

pub mod brush;
pub mod scale;
pub mod svg;

use brush::IntervalStats;
use scale::LinearScale;

pub const COLOR_COHORT_A: &str = "#1f77b4";
pub const COLOR_COHORT_B: &str = "#ff7f0e";
pub const COLOR_DIFFERENCE: &str = "#2ca02c";

/// Minute at which the light phase begins; the first half of the day is dark.
pub const LIGHTS_ON_MINUTE: f64 = 720.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

pub const DEFAULT_MARGIN: Margin = Margin {
    top: 50.0,
    right: 200.0,
    bottom: 70.0,
    left: 80.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    CohortA,
    CohortB,
    Difference,
}

#[derive(Debug, Clone)]
pub struct ChartSeries<'a> {
    pub kind: SeriesKind,
    pub label: String,
    pub color: &'static str,
    pub visible: bool,
    pub area: bool,
    pub series: &'a Series,
}

#[derive(Debug, Clone)]
pub struct ChartModel<'a> {
    pub width: f64,
    pub height: f64,
    pub margin: Margin,
    pub x: LinearScale,
    pub y: LinearScale,
    pub series: Vec<ChartSeries<'a>>,
    pub interval: Option<&'a IntervalStats>,
    pub label_a: String,
    pub label_b: String,
}

impl ChartModel<'_> {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }
}

pub trait ChartRenderer {
    fn name(&self) -> &'static str;
    fn render(&self, model: &ChartModel<'_>) -> Result<String>;
}

pub fn build_model<'a>(
    comparison: &'a Comparison,
    config: &ChartConfig,
    label_a: &str,
    label_b: &str,
    interval: Option<&'a IntervalStats>,
) -> ChartModel<'a> {
    let width = 1200.0;
    let height = 600.0;
    let margin = DEFAULT_MARGIN;
    let plot_width = width - margin.left - margin.right;
    let plot_height = height - margin.top - margin.bottom;

    let mut values = comparison.smoothed_a.values();
    values.extend(comparison.smoothed_b.values());
    let y_min = stats::min(&values).unwrap_or(0.0);
    let y_max = if config.y_max > y_min {
        config.y_max
    } else {
        y_min + 1.0
    };

    let x = LinearScale::new((0.0, MINUTES_PER_DAY as f64), (0.0, plot_width));
    let y = LinearScale::new((y_min, y_max), (plot_height, 0.0));

    let visibility = config.visibility;
    let mut series = vec![
        ChartSeries {
            kind: SeriesKind::CohortA,
            label: format!("{} Activity", label_a),
            color: COLOR_COHORT_A,
            visible: visibility.shows_cohort_a(),
            area: false,
            series: &comparison.smoothed_a,
        },
        ChartSeries {
            kind: SeriesKind::CohortB,
            label: format!("{} Activity", label_b),
            color: COLOR_COHORT_B,
            visible: visibility.shows_cohort_b(),
            area: false,
            series: &comparison.smoothed_b,
        },
    ];
    if let Some(diff) = &comparison.difference {
        series.push(ChartSeries {
            kind: SeriesKind::Difference,
            label: "Activity Difference".to_string(),
            color: COLOR_DIFFERENCE,
            visible: visibility.shows_difference(),
            area: true,
            series: diff,
        });
    }

    ChartModel {
        width,
        height,
        margin,
        x,
        y,
        series,
        interval: if config.include_brush_stats {
            interval.filter(|s| !s.is_empty())
        } else {
            None
        },
        label_a: label_a.to_string(),
        label_b: label_b.to_string(),
    }
}
