use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::{
    Align, ChartConfig, ColumnNames, DEFAULT_TIME_COLUMN, DEFAULT_VALUE_COLUMN, DEFAULT_WINDOW_SIZE,
    DEFAULT_Y_MAX, Visibility,
};

#[derive(Debug, Parser)]
#[command(
    name = "circadiff",
    version,
    about = "Compare smoothed daily activity of two cohorts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Smooth both cohorts, derive their difference and write outputs.
    Run(RunArgs),
    /// Percent change of both smoothed cohorts over an interval.
    Stats(StatsArgs),
    /// Load both cohorts and report their shape.
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct CohortArgs {
    #[arg(long, help = "CSV for the first cohort (.csv or .csv.gz)")]
    pub cohort_a: PathBuf,

    #[arg(long, help = "CSV for the second cohort (.csv or .csv.gz)")]
    pub cohort_b: PathBuf,

    #[arg(long, default_value = "Male")]
    pub label_a: String,

    #[arg(long, default_value = "Female")]
    pub label_b: String,

    #[arg(long, default_value = DEFAULT_TIME_COLUMN, help = "Header of the minute column")]
    pub time_column: String,

    #[arg(long, default_value = DEFAULT_VALUE_COLUMN, help = "Header of the value column")]
    pub value_column: String,
}

impl CohortArgs {
    pub fn columns(&self) -> ColumnNames {
        ColumnNames {
            time: self.time_column.clone(),
            value: self.value_column.clone(),
        }
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub cohorts: CohortArgs,

    #[arg(long)]
    pub out: PathBuf,

    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE, help = "Rolling average window (samples)")]
    pub window: usize,

    #[arg(long, value_enum, default_value_t = AlignArg::Positional)]
    pub align: AlignArg,

    #[arg(long, default_value_t = false)]
    pub no_difference: bool,

    #[arg(long, default_value_t = false)]
    pub no_brush_stats: bool,

    #[arg(long, value_enum, default_value_t = ShowArg::All)]
    pub show: ShowArg,

    #[arg(
        long,
        num_args = 2,
        value_names = ["START", "END"],
        allow_negative_numbers = true,
        help = "Interval in minutes for percent change"
    )]
    pub interval: Option<Vec<f64>>,

    #[arg(long, default_value_t = DEFAULT_Y_MAX, help = "Upper bound of the value axis")]
    pub y_max: f64,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false)]
    pub tsv: bool,

    #[arg(long, default_value_t = false)]
    pub svg: bool,
}

impl RunArgs {
    pub fn chart_config(&self) -> ChartConfig {
        ChartConfig {
            window_size: self.window,
            align: self.align.into(),
            include_difference: !self.no_difference,
            include_brush_stats: !self.no_brush_stats,
            visibility: self.show.into(),
            y_max: self.y_max,
        }
    }
}

#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub cohorts: CohortArgs,

    #[arg(long, allow_negative_numbers = true)]
    pub start: f64,

    #[arg(long, allow_negative_numbers = true)]
    pub end: f64,

    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window: usize,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub cohorts: CohortArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlignArg {
    Positional,
    Keyed,
}

impl From<AlignArg> for Align {
    fn from(a: AlignArg) -> Self {
        match a {
            AlignArg::Positional => Align::Positional,
            AlignArg::Keyed => Align::Keyed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShowArg {
    All,
    CohortA,
    CohortB,
    Difference,
}

impl From<ShowArg> for Visibility {
    fn from(s: ShowArg) -> Self {
        match s {
            ShowArg::All => Visibility::All,
            ShowArg::CohortA => Visibility::CohortA,
            ShowArg::CohortB => Visibility::CohortB,
            ShowArg::Difference => Visibility::Difference,
        }
    }
}
