use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::math::stats;
use crate::schema::v1::{
    CircadiffV1, SCHEMA_VERSION, SeriesBlock, SeriesSet, SeriesSummary, TOOL_NAME,
};
use crate::series::Series;

pub fn build_report(ctx: &Ctx) -> Result<CircadiffV1> {
    let comparison = ctx.comparison()?;

    let series = SeriesSet {
        cohort_a: Some(series_block(&ctx.cohort_a.label, &comparison.smoothed_a)),
        cohort_b: Some(series_block(&ctx.cohort_b.label, &comparison.smoothed_b)),
        difference: comparison
            .difference
            .as_ref()
            .map(|d| series_block("difference", d)),
    };

    let interval = if ctx.config.include_brush_stats {
        ctx.interval_stats.clone()
    } else {
        None
    };

    Ok(CircadiffV1 {
        tool: TOOL_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        schema_version: SCHEMA_VERSION.to_string(),
        config: ctx.config.clone(),
        input_meta: ctx.report.input_meta.clone(),
        series,
        interval,
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, report: &CircadiffV1) -> Result<()> {
    super::write_json(path, report)
        .with_context(|| format!("failed to write report {}", path.display()))
}

fn series_block(label: &str, series: &Series) -> SeriesBlock {
    let values = series.values();
    SeriesBlock {
        label: label.to_string(),
        summary: SeriesSummary {
            mean: stats::mean(&values),
            min: stats::min(&values),
            max: stats::max(&values),
            peak_minute: stats::peak(series).map(|s| s.minute),
        },
        samples: series.samples().to_vec(),
    }
}
