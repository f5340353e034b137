use crate::series::{Series, TimeSample};

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

pub fn min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.min(v))))
}

pub fn max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| Some(acc.map_or(v, |a: f64| a.max(v))))
}

pub fn peak(series: &Series) -> Option<TimeSample> {
    let mut best: Option<TimeSample> = None;
    for s in series {
        if s.value.is_nan() {
            continue;
        }
        match best {
            Some(b) if b.value >= s.value => {}
            _ => best = Some(*s),
        }
    }
    best
}
