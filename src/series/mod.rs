use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{SeriesError, SeriesResult};

pub const MINUTES_PER_DAY: u16 = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    pub minute: u16,
    pub value: f64,
}

impl TimeSample {
    pub fn new(minute: u16, value: f64) -> Self {
        Self { minute, value }
    }
}

/// Ordered samples with unique, strictly increasing minutes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    samples: Vec<TimeSample>,
}

impl Series {
    pub fn new(samples: Vec<TimeSample>) -> SeriesResult<Self> {
        validate_minutes(&samples)?;
        Ok(Self { samples })
    }

    pub(crate) fn from_ordered(samples: Vec<TimeSample>) -> Self {
        debug_assert!(validate_minutes(&samples).is_ok());
        Self { samples }
    }

    pub fn from_pairs(pairs: &[(u16, f64)]) -> SeriesResult<Self> {
        Self::new(
            pairs
                .iter()
                .map(|&(minute, value)| TimeSample::new(minute, value))
                .collect(),
        )
    }

    pub fn samples(&self) -> &[TimeSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TimeSample> {
        self.samples.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.value).collect()
    }

    pub fn minutes(&self) -> Vec<u16> {
        self.samples.iter().map(|s| s.minute).collect()
    }

    pub fn first_minute(&self) -> Option<u16> {
        self.samples.first().map(|s| s.minute)
    }

    pub fn last_minute(&self) -> Option<u16> {
        self.samples.last().map(|s| s.minute)
    }

    pub fn at_minute(&self, minute: u16) -> Option<&TimeSample> {
        self.samples
            .binary_search_by_key(&minute, |s| s.minute)
            .ok()
            .map(|idx| &self.samples[idx])
    }

    pub fn by_minute(&self) -> BTreeMap<u16, f64> {
        self.samples.iter().map(|s| (s.minute, s.value)).collect()
    }

    pub fn same_minutes(&self, other: &Series) -> bool {
        self.len() == other.len()
            && self
                .samples
                .iter()
                .zip(other.samples.iter())
                .all(|(a, b)| a.minute == b.minute)
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a TimeSample;
    type IntoIter = std::slice::Iter<'a, TimeSample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

fn validate_minutes(samples: &[TimeSample]) -> SeriesResult<()> {
    let mut prev: Option<u16> = None;
    for (idx, s) in samples.iter().enumerate() {
        if s.minute >= MINUTES_PER_DAY {
            return Err(SeriesError::InvalidArgument(format!(
                "sample {} has minute {} outside 0..{}",
                idx, s.minute, MINUTES_PER_DAY
            )));
        }
        if let Some(p) = prev {
            if s.minute <= p {
                return Err(SeriesError::InvalidArgument(format!(
                    "sample {} has minute {} not after previous minute {}",
                    idx, s.minute, p
                )));
            }
        }
        prev = Some(s.minute);
    }
    Ok(())
}
