#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn apply(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    pub fn invert(&self, pixel: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if r1 == r0 {
            return (d0 + d1) / 2.0;
        }
        d0 + (pixel - r0) / (r1 - r0) * (d1 - d0)
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if count == 0 || !(hi > lo) || !lo.is_finite() || !hi.is_finite() {
            return vec![lo];
        }
        let step = nice_step((hi - lo) / count as f64);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|k| k as f64 * step).collect()
    }
}

fn nice_step(raw: f64) -> f64 {
    let power = 10f64.powf(raw.log10().floor());
    let err = raw / power;
    let factor = if err >= 50f64.sqrt() {
        10.0
    } else if err >= 10f64.sqrt() {
        5.0
    } else if err >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_and_invert_agree() {
        let x = LinearScale::new((0.0, 1440.0), (0.0, 920.0));
        assert!((x.apply(720.0) - 460.0).abs() < 1e-9);
        assert!((x.invert(460.0) - 720.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_range_for_y_axis() {
        let y = LinearScale::new((0.0, 60.0), (480.0, 0.0));
        assert!((y.apply(60.0)).abs() < 1e-9);
        assert!((y.apply(0.0) - 480.0).abs() < 1e-9);
    }

    #[test]
    fn ticks_are_round() {
        let y = LinearScale::new((0.0, 60.0), (480.0, 0.0));
        assert_eq!(
            y.ticks(10),
            vec![
                0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0, 50.0, 55.0, 60.0
            ]
        );
    }
}
