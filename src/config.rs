//! Configuration types shared by the fan chart and the context panel.

use crate::data::bands::DEGENERATE_NUDGE_PX;
use crate::data::trace_look::FanLook;

// ─────────────────────────────────────────────────────────────────────────────
// Margins
// ─────────────────────────────────────────────────────────────────────────────

/// Space around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 30.0,
            right: 90.0,
            bottom: 30.0,
            left: 10.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Display-mode limits
// ─────────────────────────────────────────────────────────────────────────────

/// Trajectory counts that drive the bands/lines display mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayLimits {
    /// A new chart starts in line mode when at most this many trajectories
    /// are eligible. Default: `10`.
    pub lines_by_default: usize,
    /// Updates with more filtered trajectories than this force band mode.
    /// Default: `30`.
    pub max_lines: usize,
}

impl Default for DisplayLimits {
    fn default() -> Self {
        Self {
            lines_by_default: 10,
            max_lines: 30,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// FanChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration of one fan chart.
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `height`         | Total widget height including margins |
/// | `margin`         | Space reserved for axes |
/// | `transition_secs`| Duration of axis, band and baseline transitions |
/// | `degenerate_nudge_px` | Offset keeping zero-spread bands visible |
/// | `limits`         | Bands/lines switching thresholds |
/// | `look`           | Colors and stroke widths |
#[derive(Clone, Debug)]
pub struct FanChartConfig {
    /// Initial total width in pixels; replaced by the available width when
    /// the chart is laid out.
    pub width: f32,
    pub height: f32,
    pub margin: Margin,
    pub transition_secs: f64,
    pub degenerate_nudge_px: f64,
    pub limits: DisplayLimits,
    /// Approximate number of ticks per axis.
    pub tick_count: usize,
    /// Pointer distance (pixels) within which a trajectory line or filter
    /// mark counts as hit.
    pub hit_tolerance_px: f32,
    pub look: FanLook,
}

impl FanChartConfig {
    /// Width of the plot area (without margins).
    pub fn inner_width(&self) -> f64 {
        f64::from((self.width - self.margin.left - self.margin.right).max(1.0))
    }

    /// Height of the plot area (without margins).
    pub fn inner_height(&self) -> f64 {
        f64::from((self.height - self.margin.top - self.margin.bottom).max(1.0))
    }
}

impl Default for FanChartConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 250.0,
            margin: Margin::default(),
            transition_secs: 1.0,
            degenerate_nudge_px: DEGENERATE_NUDGE_PX,
            limits: DisplayLimits::default(),
            tick_count: 10,
            hit_tolerance_px: 4.0,
            look: FanLook::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ContextPanelConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration of the floating panel that hosts slice detail views.
#[derive(Clone, Debug, PartialEq)]
pub struct ContextPanelConfig {
    /// Width of the minimized panel in pixels. Default: `40.0`.
    pub minimized_width: f32,
    /// Duration of the width animation when minimizing/maximizing. Default: `1.2` s.
    pub resize_secs: f64,
    /// Duration of the content fade. Default: `0.8` s.
    pub fade_secs: f64,
    /// Height of the panel content area. Default: `260.0`.
    pub height: f32,
}

impl Default for ContextPanelConfig {
    fn default() -> Self {
        Self {
            minimized_width: 40.0,
            resize_secs: 1.2,
            fade_secs: 0.8,
            height: 260.0,
        }
    }
}
