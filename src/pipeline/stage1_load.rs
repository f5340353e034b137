use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::ctx::{CohortInput, Ctx};
use crate::io::csv_reader;
use crate::pipeline::Stage;
use crate::schema::v1::CohortMeta;
use crate::series::Series;

pub struct Stage1Load;

impl Stage1Load {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Load {
    fn name(&self) -> &'static str {
        "stage1_load"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let a = load_cohort(&ctx.cohort_a, ctx)?;
        let b = load_cohort(&ctx.cohort_b, ctx)?;

        if a.is_empty() || b.is_empty() {
            warn!(rows_a = a.len(), rows_b = b.len(), "empty cohort series");
            ctx.warnings.push(format!(
                "empty cohort series ({}: {} rows, {}: {} rows)",
                ctx.cohort_a.label,
                a.len(),
                ctx.cohort_b.label,
                b.len()
            ));
        }
        if a.len() != b.len() {
            warn!(rows_a = a.len(), rows_b = b.len(), "cohort row counts differ");
            ctx.warnings.push(format!(
                "cohort row counts differ ({}: {}, {}: {})",
                ctx.cohort_a.label,
                a.len(),
                ctx.cohort_b.label,
                b.len()
            ));
        }

        ctx.report.input_meta.cohort_a = cohort_meta(&ctx.cohort_a, &a);
        ctx.report.input_meta.cohort_b = cohort_meta(&ctx.cohort_b, &b);
        ctx.raw_a = Some(a);
        ctx.raw_b = Some(b);
        Ok(())
    }
}

fn load_cohort(input: &CohortInput, ctx: &Ctx) -> Result<Series> {
    let series = csv_reader::read_series(&input.path, &ctx.columns)
        .with_context(|| format!("failed to load cohort '{}'", input.label))?;
    info!(
        cohort = %input.label,
        path = %input.path.display(),
        rows = series.len(),
        "cohort_loaded"
    );
    Ok(series)
}

fn cohort_meta(input: &CohortInput, series: &Series) -> CohortMeta {
    CohortMeta {
        label: input.label.clone(),
        path: input.path.display().to_string(),
        rows: Some(series.len() as u64),
        first_minute: series.first_minute(),
        last_minute: series.last_minute(),
    }
}
