use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::render::brush::IntervalStats;
use crate::series::TimeSample;

pub const TOOL_NAME: &str = "circadiff";
pub const SCHEMA_VERSION: &str = "v1";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortMeta {
    pub label: String,
    pub path: String,
    pub rows: Option<u64>,
    pub first_minute: Option<u16>,
    pub last_minute: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputMeta {
    pub cohort_a: CohortMeta,
    pub cohort_b: CohortMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub mean: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub peak_minute: Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesBlock {
    pub label: String,
    pub summary: SeriesSummary,
    pub samples: Vec<TimeSample>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesSet {
    pub cohort_a: Option<SeriesBlock>,
    pub cohort_b: Option<SeriesBlock>,
    pub difference: Option<SeriesBlock>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircadiffV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub config: ChartConfig,
    pub input_meta: InputMeta,
    pub series: SeriesSet,
    pub interval: Option<IntervalStats>,
    pub warnings: Vec<String>,
}

impl CircadiffV1 {
    pub fn empty(tool_version: &str, config: &ChartConfig, label_a: &str, label_b: &str) -> Self {
        let cohort = |label: &str| CohortMeta {
            label: label.to_string(),
            path: String::new(),
            rows: None,
            first_minute: None,
            last_minute: None,
        };
        Self {
            tool: TOOL_NAME.to_string(),
            version: tool_version.to_string(),
            schema_version: SCHEMA_VERSION.to_string(),
            config: config.clone(),
            input_meta: InputMeta {
                cohort_a: cohort(label_a),
                cohort_b: cohort(label_b),
            },
            series: SeriesSet {
                cohort_a: None,
                cohort_b: None,
                difference: None,
            },
            interval: None,
            warnings: Vec::new(),
        }
    }
}
