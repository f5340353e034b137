use crate::error::{SeriesError, SeriesResult};
use crate::series::{Series, TimeSample};

/// Per-index `|a - b|`, keeping the minutes of `a`.
pub fn difference(a: &Series, b: &Series) -> SeriesResult<Series> {
    if a.len() != b.len() {
        return Err(SeriesError::InvalidArgument(format!(
            "series length mismatch: {} != {}",
            a.len(),
            b.len()
        )));
    }

    let out = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| TimeSample::new(x.minute, (x.value - y.value).abs()))
        .collect();
    Ok(Series::from_ordered(out))
}

pub fn difference_keyed(a: &Series, b: &Series) -> SeriesResult<Series> {
    let b_by_minute = b.by_minute();
    let mut out = Vec::with_capacity(a.len());
    for x in a {
        let y = b_by_minute
            .get(&x.minute)
            .ok_or(SeriesError::NotFound {
                minute: i64::from(x.minute),
            })?;
        out.push(TimeSample::new(x.minute, (x.value - y).abs()));
    }

    if out.len() != b.len() {
        let a_by_minute = a.by_minute();
        if let Some(extra) = b.iter().find(|s| !a_by_minute.contains_key(&s.minute)) {
            return Err(SeriesError::NotFound {
                minute: i64::from(extra.minute),
            });
        }
    }

    Ok(Series::from_ordered(out))
}
