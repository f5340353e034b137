use std::path::PathBuf;

use crate::compare::Comparison;
use crate::config::{ChartConfig, ColumnNames};
use crate::render::brush::IntervalStats;
use crate::schema::v1::CircadiffV1;
use crate::series::Series;

#[derive(Debug, Clone)]
pub struct CohortInput {
    pub label: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub json_path: PathBuf,
    pub tsv_path: PathBuf,
    pub svg_path: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub start_minute: f64,
    pub end_minute: f64,
}

#[derive(Debug)]
pub struct Ctx {
    pub cohort_a: CohortInput,
    pub cohort_b: CohortInput,
    pub columns: ColumnNames,
    pub config: ChartConfig,
    pub interval: Option<Interval>,
    pub write_json: bool,
    pub write_tsv: bool,
    pub write_svg: bool,
    pub raw_a: Option<Series>,
    pub raw_b: Option<Series>,
    pub comparison: Option<Comparison>,
    pub interval_stats: Option<IntervalStats>,
    pub warnings: Vec<String>,
    pub output: OutputPaths,
    pub report: CircadiffV1,
}

impl Ctx {
    pub fn new(
        cohort_a: CohortInput,
        cohort_b: CohortInput,
        out_dir: PathBuf,
        config: ChartConfig,
        write_json: bool,
        write_tsv: bool,
        write_svg: bool,
        tool_version: &str,
    ) -> Self {
        let json_path = out_dir.join("circadiff.json");
        let tsv_path = out_dir.join("circadiff.tsv");
        let svg_path = out_dir.join("circadiff.svg");
        let report = CircadiffV1::empty(tool_version, &config, &cohort_a.label, &cohort_b.label);
        Self {
            cohort_a,
            cohort_b,
            columns: ColumnNames::default(),
            config,
            interval: None,
            write_json,
            write_tsv,
            write_svg,
            raw_a: None,
            raw_b: None,
            comparison: None,
            interval_stats: None,
            warnings: Vec::new(),
            output: OutputPaths {
                out_dir,
                json_path,
                tsv_path,
                svg_path,
            },
            report,
        }
    }

    pub fn comparison(&self) -> anyhow::Result<&Comparison> {
        self.comparison
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("comparison missing"))
    }
}
