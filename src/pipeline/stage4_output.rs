use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, svg_writer, tsv_writer};
use crate::pipeline::Stage;
use crate::render::svg::SvgRenderer;

pub struct Stage4Output;

impl Stage4Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Output {
    fn name(&self) -> &'static str {
        "stage4_output"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let report = json_writer::build_report(ctx)?;
        ctx.report = report;

        if ctx.write_json {
            json_writer::write_json(&ctx.output.json_path, &ctx.report)?;
        }
        if ctx.write_tsv {
            tsv_writer::write_tsv(&ctx.output.tsv_path, ctx)?;
        }
        if ctx.write_svg {
            svg_writer::write_svg(&ctx.output.svg_path, ctx, &SvgRenderer::new())?;
        }

        info!("stage4_output_ready");
        Ok(())
    }
}
