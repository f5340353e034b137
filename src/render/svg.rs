use std::fmt::Write;

use anyhow::Result;

use crate::render::{ChartModel, ChartRenderer, ChartSeries, LIGHTS_ON_MINUTE, SeriesKind};
use crate::series::MINUTES_PER_DAY;

const X_TICK_STEP: usize = 120;
const Y_TICK_COUNT: usize = 10;

#[derive(Debug, Default, Clone, Copy)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl ChartRenderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, model: &ChartModel<'_>) -> Result<String> {
        let mut out = String::new();
        let w = model.plot_width();
        let h = model.plot_height();

        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" font-family="sans-serif">"#,
            model.width, model.height, model.width, model.height
        )?;
        writeln!(
            out,
            r#"<g transform="translate({},{})">"#,
            model.margin.left, model.margin.top
        )?;

        write_light_phases(&mut out, model, h)?;
        write_axes(&mut out, model, w, h)?;

        for s in &model.series {
            if s.area {
                write_area(&mut out, model, s, h)?;
            }
            write_line(&mut out, model, s)?;
        }

        write_captions(&mut out, model, w, h)?;
        write_legend(&mut out, model, w)?;
        write_interval(&mut out, model, h)?;

        writeln!(out, "</g>")?;
        writeln!(out, "</svg>")?;
        Ok(out)
    }
}

fn write_light_phases(out: &mut String, model: &ChartModel<'_>, h: f64) -> Result<()> {
    let x0 = model.x.apply(0.0);
    let x_on = model.x.apply(LIGHTS_ON_MINUTE);
    writeln!(
        out,
        r#"<rect class="lights-off" x="{:.2}" y="0" width="{:.2}" height="{:.2}" fill="lightgrey" opacity="0.6"/>"#,
        x0,
        x_on - x0,
        h
    )?;
    writeln!(
        out,
        r#"<line class="lights-divider" x1="{:.2}" x2="{:.2}" y1="0" y2="{:.2}" stroke="black" stroke-width="2" stroke-dasharray="5,5"/>"#,
        x_on, x_on, h
    )?;
    Ok(())
}

fn write_axes(out: &mut String, model: &ChartModel<'_>, w: f64, h: f64) -> Result<()> {
    let y_ticks = model.y.ticks(Y_TICK_COUNT);

    writeln!(out, r#"<g class="gridlines">"#)?;
    for t in &y_ticks {
        let y = model.y.apply(*t);
        writeln!(
            out,
            r##"<line x1="0" x2="{:.2}" y1="{:.2}" y2="{:.2}" stroke="#ccc" stroke-opacity="0.8"/>"##,
            w, y, y
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="x-axis" transform="translate(0,{:.2})">"#, h)?;
    writeln!(
        out,
        r#"<line x1="0" x2="{:.2}" y1="0" y2="0" stroke="black"/>"#,
        w
    )?;
    for minute in (0..=MINUTES_PER_DAY as usize).step_by(X_TICK_STEP) {
        let x = model.x.apply(minute as f64);
        writeln!(
            out,
            r#"<line x1="{:.2}" x2="{:.2}" y1="0" y2="6" stroke="black"/><text x="{:.2}" y="20" text-anchor="middle" font-size="10">{}</text>"#,
            x,
            x,
            x,
            hour_label(minute)
        )?;
    }
    writeln!(out, "</g>")?;

    writeln!(out, r#"<g class="y-axis">"#)?;
    writeln!(
        out,
        r#"<line x1="0" x2="0" y1="0" y2="{:.2}" stroke="black"/>"#,
        h
    )?;
    for t in &y_ticks {
        let y = model.y.apply(*t);
        writeln!(
            out,
            r#"<line x1="-6" x2="0" y1="{:.2}" y2="{:.2}" stroke="black"/><text x="-9" y="{:.2}" text-anchor="end" dominant-baseline="middle" font-size="10">{}</text>"#,
            y,
            y,
            y,
            format_tick(*t)
        )?;
    }
    writeln!(out, "</g>")?;
    Ok(())
}

fn write_line(out: &mut String, model: &ChartModel<'_>, s: &ChartSeries<'_>) -> Result<()> {
    let d = line_path(model, s)?;
    writeln!(
        out,
        r#"<path class="line {}" d="{}" fill="none" stroke="{}" stroke-width="2.5"{}/>"#,
        kind_class(s),
        d,
        s.color,
        display_attr(s.visible)
    )?;
    Ok(())
}

fn write_area(out: &mut String, model: &ChartModel<'_>, s: &ChartSeries<'_>, h: f64) -> Result<()> {
    let samples = s.series.samples();
    let (Some(first), Some(last)) = (samples.first(), samples.last()) else {
        return Ok(());
    };
    let mut d = line_path(model, s)?;
    write!(
        d,
        " L{:.2},{:.2} L{:.2},{:.2} Z",
        model.x.apply(last.minute as f64),
        h,
        model.x.apply(first.minute as f64),
        h
    )?;
    writeln!(
        out,
        r#"<path class="shaded-area" d="{}" fill="{}" fill-opacity="0.3" stroke="none"{}/>"#,
        d,
        s.color,
        display_attr(s.visible)
    )?;
    Ok(())
}

fn write_captions(out: &mut String, model: &ChartModel<'_>, w: f64, h: f64) -> Result<()> {
    let caption_y = -model.margin.top / 4.0;
    writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="16">Lights Off</text>"#,
        w / 4.5,
        caption_y
    )?;
    writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="16">Lights On</text>"#,
        w / 1.35,
        caption_y
    )?;
    writeln!(
        out,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" font-size="14">Time (Hours)</text>"#,
        w / 2.0,
        h + 40.0
    )?;
    writeln!(
        out,
        r#"<text transform="rotate(-90)" x="{:.2}" y="{:.2}" text-anchor="middle" font-size="14">Median Activity</text>"#,
        -h / 2.0,
        -model.margin.left + 20.0
    )?;
    Ok(())
}

fn write_legend(out: &mut String, model: &ChartModel<'_>, w: f64) -> Result<()> {
    writeln!(
        out,
        r#"<g class="legend" transform="translate({:.2},150)">"#,
        w + 20.0
    )?;
    for (i, s) in model.series.iter().enumerate() {
        let y = i as f64 * 22.0;
        writeln!(
            out,
            r#"<rect x="0" y="{:.2}" width="12" height="12" fill="{}"/><text x="18" y="{:.2}" font-size="12"{}>{}</text>"#,
            y,
            s.color,
            y + 10.0,
            if s.visible { "" } else { r#" opacity="0.4""# },
            escape_xml(&s.label)
        )?;
    }
    writeln!(out, "</g>")?;
    Ok(())
}

fn write_interval(out: &mut String, model: &ChartModel<'_>, h: f64) -> Result<()> {
    let Some(stats) = model.interval else {
        return Ok(());
    };
    let Some((start, end)) = stats.span() else {
        return Ok(());
    };
    let x0 = model.x.apply(start);
    let x1 = model.x.apply(end);
    writeln!(
        out,
        r##"<rect class="brush-selection" x="{:.2}" y="0" width="{:.2}" height="{:.2}" fill="#777" fill-opacity="0.2" stroke="#555"/>"##,
        x0.min(x1),
        (x1 - x0).abs(),
        h
    )?;

    writeln!(
        out,
        r#"<g class="mini-legend" transform="translate({:.2},{:.2})">"#,
        x0.min(x1) + 15.0,
        30.0
    )?;
    writeln!(
        out,
        r#"<text font-size="12" font-weight="bold">Percent Change</text>"#
    )?;
    let rows = [
        (&model.label_a, stats.cohort_a.as_ref()),
        (&model.label_b, stats.cohort_b.as_ref()),
    ];
    for (i, (label, change)) in rows.iter().enumerate() {
        let text = match change {
            Some(c) => format!("{}: {:.2}%", escape_xml(label), c.percent),
            None => format!("{}: n/a", escape_xml(label)),
        };
        writeln!(
            out,
            r#"<text font-size="12" y="{:.2}">{}</text>"#,
            (i + 1) as f64 * 15.0,
            text
        )?;
    }
    writeln!(out, "</g>")?;
    Ok(())
}

fn line_path(model: &ChartModel<'_>, s: &ChartSeries<'_>) -> Result<String> {
    let mut d = String::new();
    for (i, sample) in s.series.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        write!(
            d,
            "{}{:.2},{:.2}",
            cmd,
            model.x.apply(sample.minute as f64),
            model.y.apply(sample.value)
        )?;
    }
    Ok(d)
}

fn kind_class(s: &ChartSeries<'_>) -> &'static str {
    match s.kind {
        SeriesKind::CohortA => "cohort-a",
        SeriesKind::CohortB => "cohort-b",
        SeriesKind::Difference => "difference",
    }
}

fn display_attr(visible: bool) -> &'static str {
    if visible { "" } else { r#" display="none""# }
}

fn hour_label(minute: usize) -> String {
    format!("{}:00", minute / 60)
}

fn format_tick(v: f64) -> String {
    let s = format!("{:.6}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
