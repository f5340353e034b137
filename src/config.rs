use serde::{Deserialize, Serialize};

pub const DEFAULT_WINDOW_SIZE: usize = 10;
pub const DEFAULT_Y_MAX: f64 = 60.0;
pub const DEFAULT_TIME_COLUMN: &str = "time";
pub const DEFAULT_VALUE_COLUMN: &str = "median_activity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    Positional,
    Keyed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    All,
    CohortA,
    CohortB,
    Difference,
}

impl Visibility {
    pub fn shows_cohort_a(self) -> bool {
        matches!(self, Self::All | Self::CohortA)
    }

    pub fn shows_cohort_b(self) -> bool {
        matches!(self, Self::All | Self::CohortB)
    }

    pub fn shows_difference(self) -> bool {
        matches!(self, Self::All | Self::Difference)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub window_size: usize,
    pub align: Align,
    pub include_difference: bool,
    pub include_brush_stats: bool,
    pub visibility: Visibility,
    pub y_max: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            align: Align::Positional,
            include_difference: true,
            include_brush_stats: true,
            visibility: Visibility::All,
            y_max: DEFAULT_Y_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnNames {
    pub time: String,
    pub value: String,
}

impl Default for ColumnNames {
    fn default() -> Self {
        Self {
            time: DEFAULT_TIME_COLUMN.to_string(),
            value: DEFAULT_VALUE_COLUMN.to_string(),
        }
    }
}
