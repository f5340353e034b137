use crate::error::{SeriesError, SeriesResult};
use crate::series::{Series, TimeSample};

/// Trailing-window mean. Output `i` averages inputs `max(0, i + 1 - window)..=i`,
/// so the window grows from one sample up to `window_size` and never looks ahead.
pub fn smooth(series: &Series, window_size: usize) -> SeriesResult<Series> {
    if window_size == 0 {
        return Err(SeriesError::InvalidArgument(
            "window size must be greater than zero".to_string(),
        ));
    }

    let samples = series.samples();
    let out = samples
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let start = (i + 1).saturating_sub(window_size);
            let window = &samples[start..=i];
            let sum: f64 = window.iter().map(|w| w.value).sum();
            TimeSample::new(s.minute, sum / window.len() as f64)
        })
        .collect();

    Ok(Series::from_ordered(out))
}
