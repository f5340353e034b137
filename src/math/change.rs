use crate::error::{SeriesError, SeriesResult};
use crate::series::{MINUTES_PER_DAY, Series};

/// Percent change between the samples at `floor(start)` and `floor(end)`.
pub fn percent_change(series: &Series, start_minute: f64, end_minute: f64) -> SeriesResult<f64> {
    let (start_at, start_value) = value_at(series, start_minute)?;
    let (_, end_value) = value_at(series, end_minute)?;
    if start_value == 0.0 {
        return Err(SeriesError::ZeroBaseline {
            minute: i64::from(start_at),
        });
    }
    Ok((end_value - start_value) / start_value * 100.0)
}

fn value_at(series: &Series, minute: f64) -> SeriesResult<(u16, f64)> {
    let floored = minute.floor();
    if !floored.is_finite() || floored < 0.0 || floored >= MINUTES_PER_DAY as f64 {
        return Err(SeriesError::NotFound {
            minute: if floored.is_finite() { floored as i64 } else { -1 },
        });
    }
    let m = floored as u16;
    series
        .at_minute(m)
        .map(|s| (m, s.value))
        .ok_or(SeriesError::NotFound {
            minute: i64::from(m),
        })
}
