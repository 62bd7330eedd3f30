#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use fanplot::chart::ChartContext;
use fanplot::{
    ContextPanel, DetailView, FanChart, FanChartConfig, FilterRegistry, Percentile,
    PercentileRecord, PercentileSeries, StateInspector, StateQuery, StateSnapshot, Statistics,
    Trajectory, TrajectorySets,
};

pub const VAR: &str = "Timber Harvest";

/// Plot area of the default config: 1000x250 minus margins.
pub const INNER_W: f64 = 900.0;
pub const INNER_H: f64 = 190.0;

pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Detail view that writes every call it receives into a shared log.
pub struct RecordingView {
    name: String,
    log: EventLog,
}

impl DetailView for RecordingView {
    fn title(&self) -> String {
        self.name.clone()
    }

    fn brush_counts(&mut self) {
        self.log.borrow_mut().push("brush_counts".into());
    }

    fn update_brush(&mut self, extent: [f64; 2]) {
        self.log
            .borrow_mut()
            .push(format!("update_brush {} {}", extent[0], extent[1]));
    }

    fn clear_brush(&mut self) {
        self.log.borrow_mut().push("clear_brush".into());
    }

    fn intersect_with_second_trajectory_set(&mut self, secondary: &[Trajectory]) {
        self.log
            .borrow_mut()
            .push(format!("intersect {}", secondary.len()));
    }

    fn ui(&mut self, _ui: &mut egui::Ui) {}

    fn destroy(&mut self) {
        self.log.borrow_mut().push(format!("destroy {}", self.name));
    }
}

#[derive(Default)]
pub struct RecordingInspector {
    pub requests: Vec<StateQuery>,
}

impl StateInspector for RecordingInspector {
    fn request_state(&mut self, query: StateQuery) {
        self.requests.push(query);
    }
}

/// Owns everything a [`ChartContext`] borrows.
pub struct Harness {
    pub sets: TrajectorySets,
    pub filters: FilterRegistry,
    pub panel: ContextPanel,
    pub inspector: RecordingInspector,
    pub log: EventLog,
    pub anchor: egui::Rect,
}

impl Harness {
    pub fn new(sets: TrajectorySets) -> Self {
        Self {
            sets,
            filters: FilterRegistry::new(),
            panel: ContextPanel::default(),
            inspector: RecordingInspector::default(),
            log: EventLog::default(),
            anchor: egui::Rect::from_min_size(egui::pos2(0.0, 300.0), egui::vec2(1000.0, 250.0)),
        }
    }

    /// Run `f` with a fresh context. Returns whether a full refresh was
    /// requested.
    pub fn with_ctx<R>(&mut self, f: impl FnOnce(&mut ChartContext<'_>) -> R) -> (R, bool) {
        let log = self.log.clone();
        let mut factory = move |name: &str, trajectories: &[Trajectory], step: usize| -> Box<dyn DetailView> {
            log.borrow_mut()
                .push(format!("create {name} {} {step}", trajectories.len()));
            Box::new(RecordingView {
                name: format!("{name}@{step}"),
                log: log.clone(),
            })
        };
        let mut ctx = ChartContext {
            trajectories: &self.sets,
            filters: &mut self.filters,
            detail_views: &mut factory,
            panel: &mut self.panel,
            inspector: &mut self.inspector,
            anchor: self.anchor,
            request_refresh_all: false,
        };
        let out = f(&mut ctx);
        (out, ctx.request_refresh_all)
    }

    pub fn events(&self) -> Vec<String> {
        self.log.borrow().clone()
    }
}

/// Record whose percentiles spread linearly from `lo` (p0) to `hi` (p100).
pub fn spread_record(step: u32, lo: f64, hi: f64) -> PercentileRecord {
    let mut record = PercentileRecord::new(step);
    for p in Percentile::ALL {
        record.set(p, Some(lo + (hi - lo) * f64::from(p.value()) / 100.0));
    }
    record
}

/// `len` steps widening from `[10, 10]` by one unit each side per step.
pub fn widening_series(len: usize) -> PercentileSeries {
    (0..len)
        .map(|i| spread_record(i as u32, 10.0 - i as f64, 10.0 + i as f64))
        .collect()
}

pub fn stats_with(series: PercentileSeries) -> Statistics {
    let mut stats = Statistics::default();
    stats.insert(VAR, series);
    stats
}

/// `count` trajectories of `len` steps; trajectory `i` holds `i + step`.
pub fn trajectories(count: usize, len: usize) -> Vec<Trajectory> {
    (0..count)
        .map(|i| {
            Trajectory::new(
                (0..len)
                    .map(|step| {
                        StateSnapshot::new(i as i64, step as u32)
                            .with_value(VAR, i as f64 + step as f64)
                    })
                    .collect(),
            )
        })
        .collect()
}

pub fn chart(series: PercentileSeries, sets: &TrajectorySets) -> FanChart {
    FanChart::new(VAR, &stats_with(series), sets, FanChartConfig::default())
        .expect("variable present")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
