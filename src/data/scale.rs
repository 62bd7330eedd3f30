//! Coordinate scales for the fan chart.
//!
//! [`LinearScale`] maps a value domain onto a pixel range. [`ScaleManager`]
//! owns the horizontal (time step) and vertical (value) scales of one chart
//! and animates their axis domains when they are rescaled.
//!
//! Geometry is always computed against the *target* domain; only the axis
//! labels follow the animated domain. This mirrors how the band paths
//! themselves transition from their old to their new shape.

use crate::data::transition::Transition;

/// A linear map from `domain` to `range`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub domain: [f64; 2],
    pub range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to the range. A collapsed domain maps everything to
    /// the middle of the range.
    pub fn map(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Map a range value back to the domain.
    pub fn invert(&self, px: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        if r1 == r0 {
            return d0;
        }
        d0 + (px - r0) / (r1 - r0) * (d1 - d0)
    }

    /// Roughly `count` evenly spaced, human-friendly tick values inside the
    /// domain (steps of 1, 2 or 5 times a power of ten).
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let lo = self.domain[0].min(self.domain[1]);
        let hi = self.domain[0].max(self.domain[1]);
        if count == 0 || !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }
        let step = tick_step(lo, hi, count);
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| i as f64 * step).collect()
    }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = 10f64.powf(raw.log10().floor());
    let error = raw / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

/// Horizontal and vertical scales of one chart, with animated axes.
#[derive(Debug, Clone)]
pub struct ScaleManager {
    width: f64,
    height: f64,
    duration: f64,
    x_domain: Transition<[f64; 2]>,
    y_domain: Transition<[f64; 2]>,
    transitions_started: usize,
}

impl ScaleManager {
    /// Scales for a chart of `width` × `height` pixels showing `series_len`
    /// time steps over the value domain `[y_min, y_max]`.
    pub fn new(
        width: f64,
        height: f64,
        series_len: usize,
        y_min: f64,
        y_max: f64,
        duration: f64,
    ) -> Self {
        Self {
            width,
            height,
            duration,
            x_domain: Transition::settled([0.0, series_len as f64]),
            y_domain: Transition::settled([y_min, y_max]),
            transitions_started: 0,
        }
    }

    /// Target horizontal scale: time step → pixel x.
    pub fn x(&self) -> LinearScale {
        LinearScale::new(*self.x_domain.target(), [0.0, self.width])
    }

    /// Target vertical scale: value → pixel y (inverted).
    pub fn y(&self) -> LinearScale {
        LinearScale::new(*self.y_domain.target(), [self.height, 0.0])
    }

    /// Horizontal scale as currently displayed by the animated axis.
    pub fn displayed_x(&self, now: f64) -> LinearScale {
        LinearScale::new(self.x_domain.value_at(now), [0.0, self.width])
    }

    /// Vertical scale as currently displayed by the animated axis.
    pub fn displayed_y(&self, now: f64) -> LinearScale {
        LinearScale::new(self.y_domain.value_at(now), [self.height, 0.0])
    }

    /// Animate the x axis to `[0, new_len]`. Returns `false` without starting
    /// a transition when that is already the target domain.
    pub fn rescale_x(&mut self, new_len: usize, now: f64) -> bool {
        let domain = [0.0, new_len as f64];
        if *self.x_domain.target() == domain {
            return false;
        }
        log::debug!("rescale x to {:?}", domain);
        self.x_domain.retarget(domain, now, self.duration);
        self.transitions_started += 1;
        true
    }

    /// Animate the y axis to `[min, max]`. Returns `false` without starting a
    /// transition when that is already the target domain.
    pub fn rescale_y(&mut self, min: f64, max: f64, now: f64) -> bool {
        let domain = [min, max];
        if *self.y_domain.target() == domain {
            return false;
        }
        log::debug!("rescale y to {:?}", domain);
        self.y_domain.retarget(domain, now, self.duration);
        self.transitions_started += 1;
        true
    }

    /// Resize the pixel ranges. Resizing is not animated.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn x_domain(&self) -> [f64; 2] {
        *self.x_domain.target()
    }

    pub fn y_domain(&self) -> [f64; 2] {
        *self.y_domain.target()
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.x_domain.is_animating(now) || self.y_domain.is_animating(now)
    }

    /// Number of axis transitions started since construction.
    pub fn transitions_started(&self) -> usize {
        self.transitions_started
    }
}

/// Default value domain for a series: `[floor(min p0), ceil(max p100)]`.
pub fn default_y_domain(extent: Option<(f64, f64)>) -> (f64, f64) {
    match extent {
        Some((min, max)) => (min.floor(), max.ceil()),
        None => (0.0, 1.0),
    }
}
