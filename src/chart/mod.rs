//! The fan chart: percentile bands, trajectory lines, comparison mode, slice
//! selectors and filter annotations for one variable.
//!
//! A [`FanChart`] owns all of its rendered handles (bands, lines, slice
//! regions, filter marks, the comparison baseline) in indexed collections
//! and rebuilds them wholesale whenever their count or keying changes. It
//! never reads ambient state: every operation receives the collaborators it
//! needs through a [`ChartContext`].
//!
//! Geometry is kept in pixels relative to the plot area's top-left corner.
//! Transitions are driven by the clock passed to [`FanChart::advance`].

pub mod annotations;
pub mod display_mode;
pub mod slices;

use crate::config::FanChartConfig;
use crate::context_panel::ContextPanel;
use crate::controllers::{DetailViewFactory, StateInspector, StateQuery};
use crate::data::bands::{fan_geometry, BandPoint};
use crate::data::comparison::{comparison_domain, diff_series};
use crate::data::filters::FilterRegistry;
use crate::data::percentiles::{
    value_extent, PercentilePair, PercentileRecord, PercentileSeries, Statistics,
};
use crate::data::scale::{default_y_domain, ScaleManager};
use crate::data::trajectories::{Trajectory, TrajectorySets};
use crate::data::transition::Transition;
use crate::error::FanPlotError;

pub use annotations::{Boundary, FilterMark};
pub use display_mode::{DisplayMode, LineHandle};
pub use slices::SliceRegion;

/// Collaborators and shared data handed to chart operations.
pub struct ChartContext<'a> {
    pub trajectories: &'a TrajectorySets,
    pub filters: &'a mut FilterRegistry,
    pub detail_views: &'a mut dyn DetailViewFactory,
    pub panel: &'a mut ContextPanel,
    pub inspector: &'a mut dyn StateInspector,
    /// Screen rectangle of the chart, used to anchor the context panel.
    pub anchor: egui::Rect,
    /// Set by the chart when every chart should be refreshed (after a filter
    /// was removed). Consumed by the owner of the chart set.
    pub request_refresh_all: bool,
}

/// One percentile band, owned by the chart.
#[derive(Debug, Clone)]
pub struct BandHandle {
    pub pair: PercentilePair,
    geometry: Transition<Vec<BandPoint>>,
}

impl BandHandle {
    /// Outline displayed at `now`.
    pub fn points_at(&self, now: f64) -> Vec<BandPoint> {
        self.geometry.value_at(now)
    }

    /// Outline the band is heading to.
    pub fn target_points(&self) -> &[BandPoint] {
        self.geometry.target()
    }
}

/// Dashed zero line shown only in comparison mode.
#[derive(Debug, Clone)]
pub struct Baseline {
    pub visible: bool,
    y: Transition<f64>,
}

impl Baseline {
    pub fn y_at(&self, now: f64) -> f64 {
        self.y.value_at(now)
    }

    pub fn target_y(&self) -> f64 {
        *self.y.target()
    }
}

/// What a pointer position lands on, in stacking order.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartHit {
    FilterMark { name: String, time_period: usize },
    Line { index: usize, query: Option<StateQuery> },
    Slice(usize),
}

pub struct FanChart {
    name: String,
    config: FanChartConfig,
    scales: ScaleManager,
    /// Primary series from the last data update.
    series: PercentileSeries,
    /// Series the bands currently show: the primary series, or the
    /// differences while comparing.
    displayed: PercentileSeries,
    intersected: bool,
    mode: DisplayMode,
    bands: Vec<BandHandle>,
    bands_visible: bool,
    lines: Vec<LineHandle>,
    slices: Vec<SliceRegion>,
    marks: Vec<FilterMark>,
    baseline: Baseline,
    clock: f64,
}

impl FanChart {
    /// Build a chart for `name` from the initial statistics.
    ///
    /// The chart starts in line mode when at most
    /// `config.limits.lines_by_default` trajectories are eligible.
    pub fn new(
        name: impl Into<String>,
        statistics: &Statistics,
        trajectories: &TrajectorySets,
        config: FanChartConfig,
    ) -> Result<Self, FanPlotError> {
        let name = name.into();
        let series = statistics.series(&name)?.to_vec();
        let (y_min, y_max) = default_y_domain(value_extent(&series));
        let scales = ScaleManager::new(
            config.inner_width(),
            config.inner_height(),
            series.len(),
            y_min,
            y_max,
            config.transition_secs,
        );
        let bands = fan_geometry(&series, &scales.x(), &scales.y(), config.degenerate_nudge_px)
            .into_iter()
            .map(|g| BandHandle {
                pair: g.pair,
                geometry: Transition::settled(g.points),
            })
            .collect();
        let baseline = Baseline {
            visible: false,
            y: Transition::settled(scales.y().map(0.0)),
        };
        let mode = DisplayMode::initial(
            trajectories.eligible_primary.len(),
            config.limits.lines_by_default,
        );
        let mut chart = Self {
            name,
            config,
            scales,
            displayed: series.clone(),
            series,
            intersected: false,
            mode,
            bands,
            bands_visible: mode == DisplayMode::Bands,
            lines: Vec::new(),
            slices: Vec::new(),
            marks: Vec::new(),
            baseline,
            clock: 0.0,
        };
        chart.plot_slice_selectors();
        if mode == DisplayMode::Lines {
            chart.render_lines(&trajectories.filtered_primary);
        }
        log::debug!("chart '{}' created in {} mode", chart.name, mode);
        Ok(chart)
    }

    // ── Accessors ───────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config(&self) -> &FanChartConfig {
        &self.config
    }

    pub fn scales(&self) -> &ScaleManager {
        &self.scales
    }

    pub fn is_intersected(&self) -> bool {
        self.intersected
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn lines_are_displayed(&self) -> bool {
        self.mode == DisplayMode::Lines
    }

    /// The chart-type toggle is offered only outside comparison mode.
    pub fn can_change_chart_type(&self) -> bool {
        !self.intersected
    }

    pub fn bands(&self) -> &[BandHandle] {
        &self.bands
    }

    pub fn bands_visible(&self) -> bool {
        self.bands_visible
    }

    pub fn lines(&self) -> &[LineHandle] {
        &self.lines
    }

    pub fn slice_regions(&self) -> &[SliceRegion] {
        &self.slices
    }

    pub fn filter_marks(&self) -> &[FilterMark] {
        &self.marks
    }

    pub fn baseline(&self) -> &Baseline {
        &self.baseline
    }

    pub fn series(&self) -> &[PercentileRecord] {
        &self.series
    }

    /// Records the bands are drawn from: the primary series, or the
    /// differences while comparing.
    pub fn displayed_series(&self) -> &[PercentileRecord] {
        &self.displayed
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Advance the chart clock (seconds). Transitions started afterwards begin
    /// at this time.
    pub fn advance(&mut self, now: f64) {
        self.clock = now;
    }

    /// Whether any axis, band or baseline transition is still running.
    pub fn is_animating(&self) -> bool {
        let now = self.clock;
        self.scales.is_animating(now)
            || self.baseline.y.is_animating(now)
            || self.bands.iter().any(|b| b.geometry.is_animating(now))
    }

    // ── Public operations ───────────────────────────────────────────────

    /// Replace the primary statistics.
    ///
    /// Leaves comparison mode, hides the baseline and rescales both axes when
    /// the series length changed, the data is new, or the chart was
    /// comparing. More than `limits.max_lines` filtered trajectories force
    /// band mode.
    pub fn update_data(
        &mut self,
        statistics: &Statistics,
        is_new_data: bool,
        ctx: &mut ChartContext<'_>,
    ) -> Result<(), FanPlotError> {
        let series = statistics.series(&self.name)?.to_vec();
        self.baseline.visible = false;

        let rescale = self.scales.x_domain()[1] != series.len() as f64;
        if rescale || self.intersected || is_new_data {
            self.intersected = false;
            let (y_min, y_max) = default_y_domain(value_extent(&series));
            self.scales.rescale_y(y_min, y_max, self.clock);
            self.scales.rescale_x(series.len(), self.clock);
        }

        let filtered = &ctx.trajectories.filtered_primary;
        if filtered.len() > self.config.limits.max_lines && self.mode == DisplayMode::Lines {
            log::debug!(
                "chart '{}': {} trajectories exceed the line limit, switching to bands",
                self.name,
                filtered.len()
            );
            self.mode = DisplayMode::Bands;
        }

        self.series = series;
        self.displayed = self.series.clone();
        self.retarget_displayed();
        self.plot_slice_selectors();

        match self.mode {
            DisplayMode::Lines => {
                self.bands_visible = false;
                self.render_lines(filtered);
            }
            DisplayMode::Bands => {
                self.lines.clear();
                self.bands_visible = true;
            }
        }
        self.relayout_marks();
        Ok(())
    }

    /// Show the pointwise difference between the current series and the
    /// comparator's series for this variable.
    pub fn intersect_with_second_trajectory_set(
        &mut self,
        comparator_statistics: &Statistics,
    ) -> Result<(), FanPlotError> {
        let comparator = comparator_statistics.series(&self.name)?;
        self.intersected = true;

        self.lines.clear();
        self.bands_visible = true;

        let domain = comparison_domain(&self.series, comparator);
        self.scales.rescale_x(domain.x_len, self.clock);
        self.scales.rescale_y(domain.y[0], domain.y[1], self.clock);

        self.displayed = diff_series(&self.series, comparator);
        self.retarget_displayed();

        self.baseline.visible = true;
        let zero = self.scales.y().map(0.0);
        self.baseline
            .y
            .retarget(zero, self.clock, self.config.transition_secs);

        self.plot_slice_selectors();
        self.relayout_marks();
        log::debug!(
            "chart '{}' comparing {} against {} steps, max distance {}",
            self.name,
            self.series.len(),
            comparator.len(),
            domain.y[1]
        );
        Ok(())
    }

    /// Toggle between band and line rendering. Ignored while comparing.
    pub fn change_chart_type(&mut self, ctx: &mut ChartContext<'_>) -> DisplayMode {
        if self.intersected {
            log::debug!("chart '{}': chart type is fixed while comparing", self.name);
            return self.mode;
        }
        self.mode = self.mode.toggled();
        match self.mode {
            DisplayMode::Bands => self.lines.clear(),
            DisplayMode::Lines => self.render_lines(&ctx.trajectories.filtered_primary),
        }
        self.bands_visible = self.mode == DisplayMode::Bands;
        log::debug!("chart '{}' switched to {}", self.name, self.mode);
        self.mode
    }

    /// Redraw the boundary marks of every filter on this chart's variable.
    pub fn update_brushes(&mut self, filters: &FilterRegistry) {
        let (x, y) = (self.scales.x(), self.scales.y());
        self.marks = annotations::filter_marks(filters, &self.name, &x, &y);
    }

    /// Open the detail view for one time step in the context panel.
    pub fn show_slice(&mut self, time_step: usize, ctx: &mut ChartContext<'_>) {
        let mut view =
            ctx.detail_views
                .create(&self.name, &ctx.trajectories.eligible_primary, time_step);
        view.brush_counts();
        if let Some(filter) = ctx.filters.find(&self.name, time_step) {
            view.update_brush(filter.extent);
        }
        if self.intersected {
            view.intersect_with_second_trajectory_set(&ctx.trajectories.eligible_secondary);
        }
        ctx.panel.set_content(&self.name, time_step, view);
        ctx.panel.show_panel(&self.name, ctx.anchor);
    }

    // ── Interaction ─────────────────────────────────────────────────────

    /// What lies under `pos` (plot-area pixels): filter marks first, then
    /// trajectory lines, then slice regions.
    pub fn hit_test(&self, pos: [f64; 2]) -> Option<ChartHit> {
        let tolerance = f64::from(self.config.hit_tolerance_px);
        let mark_tolerance = tolerance.max(f64::from(self.config.look.filter_mark_width) / 2.0);
        if let Some(mark) = self.marks.iter().find(|m| m.hit(pos, mark_tolerance)) {
            return Some(ChartHit::FilterMark {
                name: mark.name.clone(),
                time_period: mark.time_period,
            });
        }
        let nearest_line = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, l)| (i, l.distance_to(pos)))
            .filter(|(_, d)| *d <= tolerance)
            .min_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((index, _)) = nearest_line {
            return Some(ChartHit::Line {
                index,
                query: self.lines[index].nearest_query(pos),
            });
        }
        self.slices
            .iter()
            .find(|s| s.contains(pos))
            .map(|s| ChartHit::Slice(s.time_step))
    }

    /// Handle a click at `pos` (plot-area pixels) and return what was hit.
    pub fn click(&mut self, pos: [f64; 2], ctx: &mut ChartContext<'_>) -> Option<ChartHit> {
        let hit = self.hit_test(pos)?;
        match &hit {
            ChartHit::FilterMark { name, time_period } => {
                if ctx.filters.remove_filter(name, *time_period) {
                    log::debug!("removed filter on '{name}' at step {time_period}");
                }
                ctx.request_refresh_all = true;
            }
            ChartHit::Line { query, .. } => match query {
                Some(q) => ctx.inspector.request_state(*q),
                None => log::warn!("clicked line on '{}' has no samples", self.name),
            },
            ChartHit::Slice(step) => self.show_slice(*step, ctx),
        }
        Some(hit)
    }

    /// Resize the plot area. Everything is laid out again without animating.
    pub fn set_size(&mut self, width: f32, height: f32) {
        if self.config.width == width && self.config.height == height {
            return;
        }
        self.config.width = width;
        self.config.height = height;
        self.scales
            .set_size(self.config.inner_width(), self.config.inner_height());
        let (x, y) = (self.scales.x(), self.scales.y());
        self.snap_displayed();
        self.baseline.y.snap(y.map(0.0));
        for line in &mut self.lines {
            line.layout(&x, &y);
        }
        self.plot_slice_selectors();
        self.relayout_marks();
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn render_lines(&mut self, trajectories: &[Trajectory]) {
        let (x, y) = (self.scales.x(), self.scales.y());
        self.lines = trajectories
            .iter()
            .map(|t| LineHandle::new(t, &self.name, &x, &y))
            .collect();
    }

    fn retarget_displayed(&mut self) {
        let geometry = fan_geometry(
            &self.displayed,
            &self.scales.x(),
            &self.scales.y(),
            self.config.degenerate_nudge_px,
        );
        for (band, g) in self.bands.iter_mut().zip(geometry) {
            band.geometry
                .retarget(g.points, self.clock, self.config.transition_secs);
        }
    }

    fn snap_displayed(&mut self) {
        let geometry = fan_geometry(
            &self.displayed,
            &self.scales.x(),
            &self.scales.y(),
            self.config.degenerate_nudge_px,
        );
        for (band, g) in self.bands.iter_mut().zip(geometry) {
            band.geometry.snap(g.points);
        }
    }

    /// Rebuild the slice regions from scratch for the current series length.
    fn plot_slice_selectors(&mut self) {
        self.slices = slices::slice_regions(
            self.series.len(),
            &self.scales.x(),
            self.scales.width(),
            self.scales.height(),
        );
    }

    fn relayout_marks(&mut self) {
        let (x, y) = (self.scales.x(), self.scales.y());
        for mark in &mut self.marks {
            mark.layout(&x, &y);
        }
    }
}
