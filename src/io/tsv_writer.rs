use std::collections::BTreeSet;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::series::Series;

pub fn write_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let comparison = ctx.comparison()?;
    let a = &comparison.smoothed_a;
    let b = &comparison.smoothed_b;
    let diff = comparison.difference.as_ref();

    let minutes: BTreeSet<u16> = a.minutes().into_iter().chain(b.minutes()).collect();

    write!(
        w,
        "minute\t{}\t{}",
        sanitize(&ctx.cohort_a.label),
        sanitize(&ctx.cohort_b.label)
    )?;
    if diff.is_some() {
        write!(w, "\tdifference")?;
    }
    writeln!(w)?;

    for minute in minutes {
        write!(
            w,
            "{}\t{}\t{}",
            minute,
            cell(a, minute),
            cell(b, minute)
        )?;
        if let Some(d) = diff {
            write!(w, "\t{}", cell(d, minute))?;
        }
        writeln!(w)?;
    }

    w.flush()?;
    Ok(())
}

fn cell(series: &Series, minute: u16) -> String {
    match series.at_minute(minute) {
        Some(s) => format!("{:.6}", s.value),
        None => String::new(),
    }
}

fn sanitize(label: &str) -> String {
    label.replace(['\t', '\n', '\r'], " ")
}
