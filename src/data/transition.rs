//! Time-based transitions that retarget instead of stacking.
//!
//! A [`Transition`] holds the value a visual property is animating away from,
//! the value it is animating towards, and the clock time the animation
//! started. Asking for a new target while an animation is in flight starts a
//! fresh animation from the currently displayed value, so contradictory
//! animations never queue up.

/// Values that can be blended between two endpoints.
pub trait Interpolate: Clone {
    /// Blend from `self` (t = 0) to `other` (t = 1).
    fn interpolate(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

impl Interpolate for f64 {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * f64::from(t)
    }
}

impl Interpolate for [f64; 2] {
    fn interpolate(&self, other: &Self, t: f32) -> Self {
        [
            self[0].interpolate(&other[0], t),
            self[1].interpolate(&other[1], t),
        ]
    }
}

/// Cubic in-out easing on `t` in `[0, 1]`.
pub fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// An animated value driven by an external clock (seconds).
#[derive(Debug, Clone)]
pub struct Transition<T> {
    from: T,
    to: T,
    start: f64,
    duration: f64,
}

impl<T: Interpolate + PartialEq> Transition<T> {
    /// A value at rest.
    pub fn settled(value: T) -> Self {
        Self {
            from: value.clone(),
            to: value,
            start: 0.0,
            duration: 0.0,
        }
    }

    /// The value the property is heading to.
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: f64) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (((now - self.start) / self.duration) as f32).clamp(0.0, 1.0)
    }

    /// The displayed value at `now`.
    pub fn value_at(&self, now: f64) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to.clone();
        }
        self.from.interpolate(&self.to, ease_cubic_in_out(p))
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.progress(now) < 1.0
    }

    /// Animate towards `to`, starting from whatever is displayed at `now`.
    pub fn retarget(&mut self, to: T, now: f64, duration: f64) {
        self.from = self.value_at(now);
        self.to = to;
        self.start = now;
        self.duration = duration.max(0.0);
    }

    /// Jump to `value` without animating.
    pub fn snap(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
        self.duration = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!((ease_cubic_in_out(0.5) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn retarget_starts_from_displayed_value() {
        let mut t = Transition::settled(0.0_f64);
        t.retarget(10.0, 0.0, 1.0);
        let mid = t.value_at(0.5);
        t.retarget(-10.0, 0.5, 1.0);
        assert!((t.value_at(0.5) - mid).abs() < 1e-9);
        assert_eq!(t.value_at(1.5), -10.0);
        assert!(!t.is_animating(1.5));
    }
}
