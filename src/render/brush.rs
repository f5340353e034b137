use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SeriesError;
use crate::math::change::percent_change;
use crate::render::scale::LinearScale;
use crate::series::Series;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cohort {
    A,
    B,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeChange {
    pub start_minute: f64,
    pub end_minute: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalStats {
    pub cohort_a: Option<RangeChange>,
    pub cohort_b: Option<RangeChange>,
}

impl IntervalStats {
    pub fn is_empty(&self) -> bool {
        self.cohort_a.is_none() && self.cohort_b.is_none()
    }

    pub fn span(&self) -> Option<(f64, f64)> {
        self.cohort_a
            .as_ref()
            .or(self.cohort_b.as_ref())
            .map(|c| (c.start_minute, c.end_minute))
    }
}

#[derive(Debug)]
pub struct SelectionError {
    pub cohort: Cohort,
    pub error: SeriesError,
}

#[derive(Debug)]
pub struct BrushState<'a> {
    cohort_a: &'a Series,
    cohort_b: &'a Series,
    stats: IntervalStats,
}

impl<'a> BrushState<'a> {
    pub fn new(cohort_a: &'a Series, cohort_b: &'a Series) -> Self {
        Self {
            cohort_a,
            cohort_b,
            stats: IntervalStats::default(),
        }
    }

    pub fn stats(&self) -> &IntervalStats {
        &self.stats
    }

    pub fn into_stats(self) -> IntervalStats {
        self.stats
    }

    pub fn select(&mut self, start_minute: f64, end_minute: f64) -> Vec<SelectionError> {
        let mut errors = Vec::new();
        for (cohort, series) in [(Cohort::A, self.cohort_a), (Cohort::B, self.cohort_b)] {
            match percent_change(series, start_minute, end_minute) {
                Ok(percent) => {
                    let change = RangeChange {
                        start_minute,
                        end_minute,
                        percent,
                    };
                    match cohort {
                        Cohort::A => self.stats.cohort_a = Some(change),
                        Cohort::B => self.stats.cohort_b = Some(change),
                    }
                }
                Err(error) => {
                    debug!(?cohort, %error, "selection_suppressed");
                    errors.push(SelectionError { cohort, error });
                }
            }
        }
        errors
    }

    pub fn select_pixels(&mut self, x: &LinearScale, x0: f64, x1: f64) -> Vec<SelectionError> {
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        self.select(x.invert(lo), x.invert(hi))
    }
}
