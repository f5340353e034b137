use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::render::brush::{BrushState, Cohort};

pub struct Stage3Interval;

impl Stage3Interval {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Interval {
    fn name(&self) -> &'static str {
        "stage3_interval"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        if !ctx.config.include_brush_stats {
            return Ok(());
        }
        let Some(interval) = ctx.interval else {
            return Ok(());
        };

        let comparison = ctx.comparison()?;
        let mut brush = BrushState::new(&comparison.smoothed_a, &comparison.smoothed_b);
        let errors = brush.select(interval.start_minute, interval.end_minute);
        let stats = brush.into_stats();

        for e in errors {
            let label = match e.cohort {
                Cohort::A => &ctx.cohort_a.label,
                Cohort::B => &ctx.cohort_b.label,
            };
            warn!(cohort = %label, error = %e.error, "percent change suppressed");
            ctx.warnings
                .push(format!("percent change for {} suppressed: {}", label, e.error));
        }

        info!(
            start_minute = interval.start_minute,
            end_minute = interval.end_minute,
            "interval_ready"
        );
        ctx.interval_stats = Some(stats);
        Ok(())
    }
}
