use anyhow::Result;

use crate::ctx::Ctx;
use crate::math::stats;
use crate::render::brush::RangeChange;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let comparison = ctx.comparison()?;

    let mut out = String::new();
    out.push_str(&format!("circadiff v{}\n", version));
    out.push_str(&format!(
        "Input: {} {} samples, {} {} samples, window={}\n",
        ctx.cohort_a.label,
        ctx.raw_a.as_ref().map(|s| s.len()).unwrap_or(0),
        ctx.cohort_b.label,
        ctx.raw_b.as_ref().map(|s| s.len()).unwrap_or(0),
        ctx.config.window_size
    ));
    out.push_str(&format!(
        "Mean: {} {:.2}, {} {:.2}\n",
        ctx.cohort_a.label,
        stats::mean(&comparison.smoothed_a.values()),
        ctx.cohort_b.label,
        stats::mean(&comparison.smoothed_b.values())
    ));

    if let Some(diff) = &comparison.difference {
        match stats::peak(diff) {
            Some(p) => out.push_str(&format!(
                "Peak difference: {:.2} at {}\n",
                p.value,
                clock(p.minute)
            )),
            None => out.push_str("Peak difference: n/a\n"),
        }
    }

    if let Some(interval) = &ctx.interval_stats {
        out.push_str(&format!(
            "Percent change: {} {}, {} {}\n",
            ctx.cohort_a.label,
            percent(interval.cohort_a.as_ref()),
            ctx.cohort_b.label,
            percent(interval.cohort_b.as_ref())
        ));
    }

    Ok(out)
}

pub fn clock(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

fn percent(change: Option<&RangeChange>) -> String {
    match change {
        Some(c) => format!("{:+.2}%", c.percent),
        None => "n/a".to_string(),
    }
}
