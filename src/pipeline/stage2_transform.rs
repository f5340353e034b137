use anyhow::{Context, Result};
use tracing::info;

use crate::compare::compare;
use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage2Transform;

impl Stage2Transform {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Transform {
    fn name(&self) -> &'static str {
        "stage2_transform"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let a = ctx.raw_a.as_ref().context("cohort A not loaded")?;
        let b = ctx.raw_b.as_ref().context("cohort B not loaded")?;

        let comparison = compare(a, b, &ctx.config).context("failed to transform cohorts")?;
        info!(
            window_size = ctx.config.window_size,
            samples = comparison.smoothed_a.len(),
            difference = comparison.difference.is_some(),
            "transform_ready"
        );

        ctx.warnings.extend(comparison.warnings.iter().cloned());
        ctx.comparison = Some(comparison);
        Ok(())
    }
}
