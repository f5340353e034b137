use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use circadiff::cli::{Cli, CohortArgs, Commands, RunArgs, StatsArgs, ValidateArgs};
use circadiff::config::ChartConfig;
use circadiff::ctx::{CohortInput, Ctx, Interval};
use circadiff::io;
use circadiff::io::summary::clock;
use circadiff::math::change::percent_change;
use circadiff::pipeline::Pipeline;
use circadiff::pipeline::stage1_load::Stage1Load;
use circadiff::pipeline::stage2_transform::Stage2Transform;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => handle_run(args)?,
        Commands::Stats(args) => handle_stats(args)?,
        Commands::Validate(args) => handle_validate(args)?,
    }

    Ok(())
}

fn handle_run(args: RunArgs) -> Result<()> {
    let config = args.chart_config();
    if config.window_size == 0 {
        bail!("--window must be greater than zero");
    }
    if !args.json && !args.tsv && !args.svg {
        tracing::warn!("no output format selected; only the summary is printed");
    }

    let mut ctx = new_ctx(
        &args.cohorts,
        args.out.clone(),
        config,
        (args.json, args.tsv, args.svg),
    );
    ctx.interval = match args.interval.as_deref() {
        Some([start, end]) => Some(Interval {
            start_minute: *start,
            end_minute: *end,
        }),
        Some(other) => bail!("--interval takes START END, got {} values", other.len()),
        None => None,
    };

    Pipeline::full().run(&mut ctx)?;
    print_summary(&ctx)
}

fn handle_stats(args: StatsArgs) -> Result<()> {
    let config = ChartConfig {
        window_size: args.window,
        include_difference: false,
        ..ChartConfig::default()
    };
    if config.window_size == 0 {
        bail!("--window must be greater than zero");
    }
    let mut ctx = new_ctx(&args.cohorts, PathBuf::from("."), config, (false, false, false));
    let pipeline = Pipeline::new(vec![
        Box::new(Stage1Load::new()),
        Box::new(Stage2Transform::new()),
    ]);
    pipeline.run(&mut ctx)?;

    let comparison = ctx.comparison()?;
    let a = percent_change(&comparison.smoothed_a, args.start, args.end)
        .with_context(|| format!("percent change for {}", ctx.cohort_a.label))?;
    let b = percent_change(&comparison.smoothed_b, args.start, args.end)
        .with_context(|| format!("percent change for {}", ctx.cohort_b.label))?;

    println!(
        "Interval: {} - {}",
        clock(args.start.floor() as u16),
        clock(args.end.floor() as u16)
    );
    println!("{}: {:.2}%", ctx.cohort_a.label, a);
    println!("{}: {:.2}%", ctx.cohort_b.label, b);
    Ok(())
}

fn handle_validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = new_ctx(
        &args.cohorts,
        PathBuf::from("."),
        ChartConfig::default(),
        (false, false, false),
    );
    let pipeline = Pipeline::new(vec![Box::new(Stage1Load::new())]);
    pipeline.run(&mut ctx)?;

    println!("circadiff validate ok");
    for (input, series) in [(&ctx.cohort_a, &ctx.raw_a), (&ctx.cohort_b, &ctx.raw_b)] {
        let series = series.as_ref().context("cohort not loaded")?;
        let range = match (series.first_minute(), series.last_minute()) {
            (Some(first), Some(last)) => format!("{}-{}", clock(first), clock(last)),
            _ => "empty".to_string(),
        };
        println!("{}: {} samples, {}", input.label, series.len(), range);
    }
    if let (Some(a), Some(b)) = (&ctx.raw_a, &ctx.raw_b) {
        if a.len() == b.len() && !a.same_minutes(b) {
            ctx.warnings
                .push("cohort minute sequences differ at equal length".to_string());
        }
    }
    print_warnings(&ctx);
    Ok(())
}

fn new_ctx(
    cohorts: &CohortArgs,
    out: PathBuf,
    config: ChartConfig,
    (json, tsv, svg): (bool, bool, bool),
) -> Ctx {
    let mut ctx = Ctx::new(
        CohortInput {
            label: cohorts.label_a.clone(),
            path: cohorts.cohort_a.clone(),
        },
        CohortInput {
            label: cohorts.label_b.clone(),
            path: cohorts.cohort_b.clone(),
        },
        out,
        config,
        json,
        tsv,
        svg,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.columns = cohorts.columns();
    ctx
}

fn print_summary(ctx: &Ctx) -> Result<()> {
    let summary = io::summary::format_summary(ctx)?;
    print!("{}", summary);
    print_warnings(ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
