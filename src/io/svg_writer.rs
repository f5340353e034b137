use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::ctx::Ctx;
use crate::render::{ChartRenderer, build_model};

pub fn write_svg(path: &Path, ctx: &Ctx, renderer: &dyn ChartRenderer) -> Result<()> {
    let comparison = ctx.comparison()?;
    let model = build_model(
        comparison,
        &ctx.config,
        &ctx.cohort_a.label,
        &ctx.cohort_b.label,
        ctx.interval_stats.as_ref(),
    );
    let doc = renderer.render(&model)?;
    std::fs::write(path, doc).with_context(|| format!("failed to write {}", path.display()))?;
    debug!(renderer = renderer.name(), path = %path.display(), "chart_written");
    Ok(())
}
