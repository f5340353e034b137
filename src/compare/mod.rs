use tracing::warn;

use crate::config::{Align, ChartConfig};
use crate::error::SeriesResult;
use crate::math::difference::{difference, difference_keyed};
use crate::math::rolling::smooth;
use crate::series::Series;

#[derive(Debug, Clone)]
pub struct Comparison {
    pub smoothed_a: Series,
    pub smoothed_b: Series,
    pub difference: Option<Series>,
    pub warnings: Vec<String>,
}

pub fn compare(a: &Series, b: &Series, config: &ChartConfig) -> SeriesResult<Comparison> {
    let smoothed_a = smooth(a, config.window_size)?;
    let smoothed_b = smooth(b, config.window_size)?;
    let mut warnings = Vec::new();

    let paired_by_position = config.include_difference && config.align == Align::Positional;
    if smoothed_a.len() == smoothed_b.len() && !smoothed_a.same_minutes(&smoothed_b) {
        warn!("cohort minute sequences differ");
        warnings.push(if paired_by_position {
            "cohort minute sequences differ; difference paired by position (use --align keyed to join on minute)"
                .to_string()
        } else {
            "cohort minute sequences differ; rows are joined on minute".to_string()
        });
    }

    let difference = if config.include_difference {
        let diff = match config.align {
            Align::Positional => difference(&smoothed_a, &smoothed_b)?,
            Align::Keyed => difference_keyed(&smoothed_a, &smoothed_b)?,
        };
        Some(diff)
    } else {
        None
    };

    Ok(Comparison {
        smoothed_a,
        smoothed_b,
        difference,
        warnings,
    })
}
